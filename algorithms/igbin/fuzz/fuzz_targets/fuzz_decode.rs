#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Force a valid header half of the time so the body parser gets exercised
    let framed;
    let input = if data.first().is_some_and(|b| b & 1 == 0) {
        framed = [&[0u8, 0, 0, 2][..], &data[1..]].concat();
        &framed[..]
    } else {
        data
    };

    let Ok(value) = igbin::from_slice(input) else {
        return;
    };

    // Whatever decodes must encode canonically
    let bytes = igbin::to_vec(&value).expect("decoded value must encode");
    let again = igbin::from_slice(&bytes).expect("canonical output must decode");
    assert_eq!(igbin::to_vec(&again).ok(), Some(bytes), "re-encoding is not stable");
});
