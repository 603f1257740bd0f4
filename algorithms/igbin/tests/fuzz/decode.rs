use bolero::check;
use igbin::{from_slice, to_vec};

#[test]
fn fuzz_decode_never_panics() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let mut framed = vec![0, 0, 0, 2];
        framed.extend_from_slice(data);

        // Anything that decodes must re-encode canonically. Bytes are compared
        // rather than values so NaN payloads count as equal.
        if let Ok(value) = from_slice(&framed) {
            let bytes = to_vec(&value).expect("decoded value must encode");
            let again = from_slice(&bytes).expect("own output must decode");
            assert_eq!(to_vec(&again).ok(), Some(bytes));
        }
        let _ = from_slice(data);
    });
}
