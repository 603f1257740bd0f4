use bolero::check;
use spamsum::{hash, Hasher};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let Ok(expected) = hash(data) else {
            return;
        };

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut hasher = Hasher::new();
            for b in data {
                hasher.update(&[*b]);
            }
            let res = hasher.finalize().map(|sig| sig.to_string());
            assert_eq!(res.as_ref(), Ok(&expected), "Byte-by-byte streaming mismatch");
        }

        // 2. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new();
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                let res = hasher.finalize().map(|sig| sig.to_string());
                assert_eq!(res.as_ref(), Ok(&expected), "Split at {split_idx} mismatch");
            }
        }
    });
}
