//! Consistency & Regression Tests
//!
//! Verifies internal logic consistency and boundary conditions.
//! - Streaming vs One-shot consistency
//! - Signature text round-trip
//! - Similarity of related inputs

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use spamsum::{compare, hash, hash_signature, Hasher, Signature};

fn sample(size: usize) -> Vec<u8> {
    // xorshift keeps the data aperiodic without a rand dependency.
    let mut x: u32 = 0x9E37_79B9;
    (0..size)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            (x >> 24) as u8
        })
        .collect()
}

// =============================================================================
// STREAMING CONSISTENCY
// =============================================================================

#[test]
fn test_streaming_consistency() {
    let sizes = [0, 1, 6, 7, 64, 191, 192, 193, 4096, 100_000];

    for &size in &sizes {
        let input = sample(size);
        let oneshot = hash(&input).unwrap();

        for chunk in [1, 7, 4096] {
            let mut hasher = Hasher::new();
            for part in input.chunks(chunk) {
                hasher.update(part);
            }
            assert_eq!(
                hasher.finalize().unwrap().to_string(),
                oneshot,
                "CONSISTENCY FAILURE at size {size} with {chunk}-byte chunks",
            );
        }
    }
}

#[test]
fn test_io_write_matches_update() {
    use std::io::Write;

    let input = sample(10_000);
    let mut hasher = Hasher::new();
    hasher.write_all(&input).unwrap();
    assert_eq!(hasher.len(), 10_000);
    assert_eq!(hasher.finalize().unwrap(), hash_signature(&input).unwrap());
}

// =============================================================================
// SIGNATURE FORMAT
// =============================================================================

#[test]
fn test_signature_text_roundtrip() {
    for size in [0, 50, 5_000, 50_000] {
        let text = hash(&sample(size)).unwrap();
        let parsed: Signature = text.parse().unwrap();
        assert_eq!(parsed.to_string(), text);
        assert!(parsed.block_size() % 3 == 0);
        assert!(parsed.first().bytes().all(|b| spamsum::constants::B64.contains(&b)));
        assert!(parsed.second().bytes().all(|b| spamsum::constants::B64.contains(&b)));
    }
}

#[test]
fn test_block_size_grows_with_input() {
    let small = hash_signature(&sample(1_000)).unwrap();
    let large = hash_signature(&sample(1_000_000)).unwrap();
    assert!(large.block_size() > small.block_size());
}

// =============================================================================
// SIMILARITY
// =============================================================================

#[test]
fn test_self_similarity() {
    let sig = hash(&sample(30_000)).unwrap();
    assert_eq!(compare(&sig, &sig).unwrap(), 100);
}

#[test]
fn test_small_edit_stays_similar() {
    let original = sample(50_000);
    let mut edited = original.clone();
    edited[25_000..25_008].copy_from_slice(b"EDITEDXX");

    let a = hash(&original).unwrap();
    let b = hash(&edited).unwrap();
    assert_ne!(a, b);
    assert!(compare(&a, &b).unwrap() >= 80, "{a} vs {b}");
}

#[test]
fn test_unrelated_inputs_score_low() {
    let a = hash(&sample(50_000)).unwrap();
    let b = hash(&vec![0u8; 50_000]).unwrap();
    assert_eq!(compare(&a, &b).unwrap(), 0);
}

#[test]
fn test_malformed_input_is_an_error() {
    assert!(compare("not a signature", "3::").is_err());
    assert!(compare("3::", "3").is_err());
}
