#![no_main]

use libfuzzer_sys::fuzz_target;
use spamsum::Hasher;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Calculate one-shot signature as reference
    let Ok(reference) = spamsum::hash(data) else {
        return;
    };

    // Chunk size is derived from the first byte (1 to 255)
    let chunk_size = (data[0] as usize % 255) + 1;

    let mut hasher = Hasher::new();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }

    let streaming = hasher.finalize().map(|sig| sig.to_string());

    // They must be identical
    assert_eq!(
        streaming.as_ref(),
        Ok(&reference),
        "Streaming and One-Shot approaches differ!"
    );
});
