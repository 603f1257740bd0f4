#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into two candidate signature strings.
    let text = String::from_utf8_lossy(data);
    let (a, b) = text.split_once('\n').unwrap_or((&*text, "3::"));

    if let Ok(score) = spamsum::compare(a, b) {
        assert!(score <= 100, "score out of range: {score}");
        assert_eq!(spamsum::compare(b, a).ok(), Some(score), "compare is not symmetric");
    }
});
