//! Signature Comparison
//!
//! Scores two signatures by the weighted edit distance between digests that
//! share a block size.

use crate::constants::{MAX_RUN, MIN_BLOCKSIZE, ROLLING_WINDOW, SPAMSUM_LENGTH};
use crate::roll::RollingHash;
use crate::signature::Signature;
use crate::types::SpamsumError;

/// Block sizes at or above this never have their score capped.
const UNCAPPED_BLOCK_SIZE: u64 =
    (99 + ROLLING_WINDOW as u64) / ROLLING_WINDOW as u64 * MIN_BLOCKSIZE as u64;

const INSERT_COST: u32 = 1;
const REMOVE_COST: u32 = 1;
const REPLACE_COST: u32 = 2;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compare two signature strings.
///
/// Returns a score in `[0, 100]`: 0 for unrelated inputs (or incomparable
/// block sizes), 100 for identical signatures.
///
/// # Errors
/// Returns `MalformedSignature` if either string is not a valid signature.
///
/// # Example
/// ```rust
/// let score = spamsum::compare(
///     "24:FPlUMKVsgNfgmjFadP6WboWjb8tsH4RSXqMbLFpjwPDt4tFF:9lUajiiPbbnr4RSXqMbppMZ4t3",
///     "48:9lUajiiPbbnr4RSXqMbLbmo03Rcq0K/cvhQ+3/M8M5BEaB6:9HFHsGqabmoMR18hQ+308sBdk",
/// )?;
/// assert_eq!(score, 57);
/// # Ok::<(), spamsum::SpamsumError>(())
/// ```
pub fn compare(a: &str, b: &str) -> Result<u32, SpamsumError> {
    let a: Signature = a.parse()?;
    let b: Signature = b.parse()?;
    Ok(score_signatures(&a, &b))
}

// =============================================================================
// SCORING
// =============================================================================

pub(crate) fn score_signatures(a: &Signature, b: &Signature) -> u32 {
    let (bs1, bs2) = (a.block_size(), b.block_size());
    let doubled = bs1.checked_mul(2);

    // Only equal or adjacent block sizes describe the same pieces.
    if bs1 != bs2 && doubled != Some(bs2) && (bs1 % 2 == 1 || bs1 / 2 != bs2) {
        return 0;
    }

    let a1 = eliminate_sequences(a.first().as_bytes());
    let a2 = eliminate_sequences(a.second().as_bytes());
    let b1 = eliminate_sequences(b.first().as_bytes());
    let b2 = eliminate_sequences(b.second().as_bytes());

    if bs1 == bs2 && a1 == b1 && a2 == b2 {
        return 100;
    }

    match doubled {
        Some(double) if bs1 == bs2 => {
            score_digests(&a1, &b1, bs1).max(score_digests(&a2, &b2, double))
        }
        Some(double) if double == bs2 => score_digests(&b1, &a2, bs2),
        Some(_) => score_digests(&a1, &b2, bs1),
        // Block size so large that the second digest has no representable size.
        None if bs1 == bs2 => score_digests(&a1, &b1, bs1),
        None => score_digests(&a1, &b2, bs1),
    }
}

fn score_digests(s1: &[u8], s2: &[u8], block_size: u64) -> u32 {
    if !has_common_substring(s1, s2) {
        return 0;
    }

    let distance = u64::from(edit_distance(s1, s2));
    let total = (s1.len() + s2.len()) as u64;
    let length = SPAMSUM_LENGTH as u64;

    // Scale to 0..=SPAMSUM_LENGTH, then to 0..=100.
    let scaled = distance * length / total;
    let scaled = 100 * scaled / length;
    if scaled >= 100 {
        return 0;
    }
    let score = 100 - scaled;

    if block_size >= UNCAPPED_BLOCK_SIZE {
        return score as u32;
    }

    // Small block sizes: a handful of matching characters is not evidence.
    let cap = block_size / u64::from(MIN_BLOCKSIZE) * s1.len().min(s2.len()) as u64;
    score.min(cap) as u32
}

// =============================================================================
// STRING PRIMITIVES
// =============================================================================

/// Collapse runs of more than `MAX_RUN` identical bytes.
pub(crate) fn eliminate_sequences(digest: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(digest.len());
    let mut run = 0;

    for &c in digest {
        if out.last() == Some(&c) {
            run += 1;
            if run >= MAX_RUN {
                continue;
            }
        } else {
            run = 0;
        }
        out.push(c);
    }
    out
}

/// True if both digests contain the same `ROLLING_WINDOW`-byte substring.
fn has_common_substring(s1: &[u8], s2: &[u8]) -> bool {
    if s1.len() < ROLLING_WINDOW || s2.len() < ROLLING_WINDOW {
        return false;
    }

    let sums = |s: &[u8]| -> Vec<u32> {
        let mut roll = RollingHash::new();
        s.iter()
            .enumerate()
            .filter_map(|(i, &c)| {
                roll.push(c);
                (i + 1 >= ROLLING_WINDOW).then_some(roll.sum())
            })
            .collect()
    };

    let left = sums(s1);
    let right = sums(s2);

    // Window `i` of the sums covers `s[i..i + ROLLING_WINDOW]`.
    right.iter().enumerate().any(|(j, &h2)| {
        left.iter().enumerate().any(|(i, &h1)| {
            h1 == h2 && s1[i..i + ROLLING_WINDOW] == s2[j..j + ROLLING_WINDOW]
        })
    })
}

/// Levenshtein distance with a replacement costing as much as delete + insert.
fn edit_distance(s1: &[u8], s2: &[u8]) -> u32 {
    let mut prev: Vec<u32> = (0..=s2.len() as u32).collect();
    let mut curr = vec![0u32; s2.len() + 1];

    for (i, &c1) in s1.iter().enumerate() {
        curr[0] = i as u32 + 1;
        for (j, &c2) in s2.iter().enumerate() {
            let replace = prev[j] + if c1 == c2 { 0 } else { REPLACE_COST };
            let remove = prev[j + 1] + REMOVE_COST;
            let insert = curr[j] + INSERT_COST;
            curr[j + 1] = replace.min(remove).min(insert);
        }
        core::mem::swap(&mut prev, &mut curr);
    }
    prev[s2.len()]
}
