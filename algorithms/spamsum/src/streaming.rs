//! Streaming Hasher
//!
//! Tracks one piecewise digest per candidate block size. Block sizes that can
//! no longer be selected are dropped from the front as input grows, so work
//! per byte stays bounded by a few active slots.

use crate::constants::{
    block_size, B64, HASH_INIT, HASH_PRIME, NUM_BLOCKHASHES, SPAMSUM_LENGTH,
};
use crate::roll::RollingHash;
use crate::signature::Signature;
use crate::types::SpamsumError;

// =============================================================================
// BLOCK HASH STATE
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct BlockHash {
    /// FNV hash of the current piece.
    h: u32,
    /// FNV hash of the current piece, frozen once the digest reaches half length.
    half_h: u32,
    /// Character emitted from `half_h` at the last trigger past half length.
    half_digest: Option<u8>,
    /// Holds `len` characters, plus one at `len` once the digest is full.
    digest: [u8; SPAMSUM_LENGTH],
    len: usize,
}

impl BlockHash {
    const EMPTY: Self = Self {
        h: HASH_INIT,
        half_h: HASH_INIT,
        half_digest: None,
        digest: [0; SPAMSUM_LENGTH],
        len: 0,
    };

    fn digest(&self) -> &[u8] {
        &self.digest[..self.len]
    }

    /// Last character of a full digest, written past `len`.
    fn overflow(&self) -> Option<u8> {
        Some(self.digest[self.len]).filter(|&c| c != 0)
    }
}

#[inline]
const fn fnv(h: u32, c: u8) -> u32 {
    h.wrapping_mul(HASH_PRIME) ^ c as u32
}

#[inline]
fn b64_char(h: u32) -> char {
    char::from(B64[(h % 64) as usize])
}

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental fuzzy hasher.
///
/// Any split of the input across `update` calls yields the same signature.
#[derive(Debug, Clone)]
pub struct SpamsumHasher {
    roll: RollingHash,
    blocks: [BlockHash; NUM_BLOCKHASHES],
    /// First live block slot.
    start: usize,
    /// One past the last live block slot.
    end: usize,
    /// Total bytes processed
    total_len: u64,
}

impl SpamsumHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a new streaming hasher.
    pub const fn new() -> Self {
        Self {
            roll: RollingHash::new(),
            blocks: [BlockHash::EMPTY; NUM_BLOCKHASHES],
            start: 0,
            end: 1,
            total_len: 0,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.saturating_add(data.len() as u64);
        for &c in data {
            self.step(c);
        }
    }

    fn step(&mut self, c: u8) {
        self.roll.push(c);
        let h = u64::from(self.roll.sum());

        for block in &mut self.blocks[self.start..self.end] {
            block.h = fnv(block.h, c);
            block.half_h = fnv(block.half_h, c);
        }

        // `end` may grow and `start` may advance inside the loop.
        let mut i = self.start;
        while i < self.end {
            let bs = block_size(i);
            // A trigger at 2*bs is also a trigger at bs, so stop at the first miss.
            if h % bs != bs - 1 {
                break;
            }

            if self.blocks[i].len == 0 {
                self.try_fork();
            }

            let block = &mut self.blocks[i];
            block.digest[block.len] = B64[(block.h % 64) as usize];
            block.half_digest = Some(B64[(block.half_h % 64) as usize]);
            if block.len < SPAMSUM_LENGTH - 1 {
                block.len += 1;
                block.h = HASH_INIT;
                if block.len < SPAMSUM_LENGTH / 2 {
                    block.half_h = HASH_INIT;
                    block.half_digest = None;
                }
            } else {
                // Digest full: the tail keeps folding into the last character.
                self.try_reduce();
            }
            i += 1;
        }
    }

    /// Open the next larger block size, seeded from the current largest.
    fn try_fork(&mut self) {
        if self.end >= NUM_BLOCKHASHES {
            return;
        }
        let prev = self.blocks[self.end - 1];
        self.blocks[self.end] = BlockHash {
            h: prev.h,
            half_h: prev.half_h,
            ..BlockHash::EMPTY
        };
        self.end += 1;
    }

    /// Drop the smallest block size once it can never be selected.
    fn try_reduce(&mut self) {
        if self.end - self.start < 2 {
            return;
        }
        if block_size(self.start) * SPAMSUM_LENGTH as u64 >= self.total_len {
            return;
        }
        if self.blocks[self.start + 1].len < SPAMSUM_LENGTH / 2 {
            return;
        }
        self.start += 1;
    }

    /// Total bytes fed so far.
    pub const fn len(&self) -> u64 {
        self.total_len
    }

    /// True if no bytes have been fed.
    pub const fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    // =========================================================================
    // FINALIZATION
    // =========================================================================

    /// Finalize and return the signature.
    ///
    /// # Errors
    /// Returns `InputTooLarge` if the input needs a block size beyond
    /// `3 << 30`.
    pub fn finalize(self) -> Result<Signature, SpamsumError> {
        let h = self.roll.sum();
        let limit = SPAMSUM_LENGTH as u64;

        // Smallest block size whose full digest could cover the input...
        let mut bi = self.start;
        while block_size(bi) * limit < self.total_len {
            bi += 1;
            if bi >= NUM_BLOCKHASHES {
                return Err(SpamsumError::InputTooLarge {
                    len: self.total_len,
                });
            }
        }
        // ...then step down while the digest is too short to be useful.
        while bi >= self.end {
            bi -= 1;
        }
        while bi > self.start && self.blocks[bi].len < SPAMSUM_LENGTH / 2 {
            bi -= 1;
        }

        let block = &self.blocks[bi];
        let mut first = String::with_capacity(SPAMSUM_LENGTH);
        first.extend(block.digest().iter().copied().map(char::from));
        if h != 0 {
            first.push(b64_char(block.h));
        } else if let Some(c) = block.overflow() {
            first.push(char::from(c));
        }

        let mut second = String::with_capacity(SPAMSUM_LENGTH / 2);
        if bi + 1 < self.end {
            let next = &self.blocks[bi + 1];
            let len = next.len.min(SPAMSUM_LENGTH / 2 - 1);
            second.extend(next.digest[..len].iter().copied().map(char::from));
            if h != 0 {
                second.push(b64_char(next.half_h));
            } else if let Some(c) = next.half_digest {
                second.push(char::from(c));
            }
        } else if h != 0 {
            second.push(b64_char(block.h));
        }

        Ok(Signature::from_parts(block_size(bi), first, second))
    }

    /// Reset hasher for reuse.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for SpamsumHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for SpamsumHasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let sig = SpamsumHasher::new().finalize().unwrap();
        assert_eq!(sig.to_string(), "3::");
    }

    #[test]
    fn test_reset() {
        let mut hasher = SpamsumHasher::new();
        hasher.update(b"some bytes that will be forgotten");
        hasher.reset();
        assert!(hasher.is_empty());
        assert_eq!(hasher.finalize().unwrap().to_string(), "3::");
    }

    #[test]
    fn test_first_digest_never_exceeds_length() {
        let data: Vec<u8> = (0..200_000u32)
            .map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8)
            .collect();
        let mut hasher = SpamsumHasher::new();
        hasher.update(&data);
        let sig = hasher.finalize().unwrap();
        assert!(sig.first().len() <= SPAMSUM_LENGTH);
        assert!(sig.second().len() <= SPAMSUM_LENGTH / 2);
        assert!(sig.block_size() > 3);
    }

    #[test]
    fn test_zero_tail_keeps_full_digest_character() {
        let mut hasher = SpamsumHasher::new();
        hasher.update(&[b'A'; 4096]);
        hasher.update(&[0; 64]);
        let sig = hasher.finalize().unwrap();
        assert_eq!(sig.first().len(), SPAMSUM_LENGTH);
        assert!(sig.first().ends_with("kkw"));
        assert_eq!(sig.second(), "Yq");
    }

    #[test]
    fn test_zero_tail_keeps_half_digest_character() {
        let mut state = 12_345_u64;
        let mut data: Vec<u8> = (0..48_000)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                (state >> 33) as u8
            })
            .collect();
        data.extend_from_slice(&[0; 64]);

        let mut hasher = SpamsumHasher::new();
        hasher.update(&data);
        let sig = hasher.finalize().unwrap();
        assert_eq!(sig.block_size(), 768);
        assert_eq!(sig.second().len(), SPAMSUM_LENGTH / 2);
        assert!(sig.second().ends_with("tMQ"));
    }
}
