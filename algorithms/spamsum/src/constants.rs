//! Spamsum Constants
//!
//! Parameters fixed by the ssdeep signature format. Changing any of them
//! produces signatures that no longer compare against ssdeep output.

// =============================================================================
// ROLLING HASH
// =============================================================================

/// Width of the rolling window that decides trigger points (in bytes).
pub const ROLLING_WINDOW: usize = 7;

// =============================================================================
// PIECEWISE HASH (FNV-1)
// =============================================================================

/// FNV-1 32-bit prime.
pub const HASH_PRIME: u32 = 0x0100_0193;

/// Initial value of every piece hash.
pub const HASH_INIT: u32 = 0x2802_1967;

// =============================================================================
// SIGNATURE LAYOUT
// =============================================================================

/// Smallest block size; every block size is `MIN_BLOCKSIZE << n`.
pub const MIN_BLOCKSIZE: u32 = 3;

/// Maximum characters in the first digest.
pub const SPAMSUM_LENGTH: usize = 64;

/// Number of block sizes tracked in parallel (`3 << 0` up to `3 << 30`).
pub const NUM_BLOCKHASHES: usize = 31;

/// Digest alphabet.
pub const B64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Identical runs longer than this are collapsed before comparison.
pub const MAX_RUN: usize = 3;

/// Block size for slot `index`.
#[inline]
pub(crate) const fn block_size(index: usize) -> u64 {
    (MIN_BLOCKSIZE as u64) << index
}
