//! Signature Text Format
//!
//! `<blocksize>:<digest1>:<digest2>` with an optional `,<filename>` suffix as
//! written by the ssdeep tool. Digests are stored exactly as parsed so that
//! `Display` reproduces the input; run collapsing happens at compare time.

use crate::compare;
use crate::constants::SPAMSUM_LENGTH;
use crate::types::SpamsumError;
use core::fmt;
use core::str::FromStr;

// =============================================================================
// SIGNATURE
// =============================================================================

/// A parsed fuzzy-hash signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    block_size: u64,
    first: String,
    second: String,
}

impl Signature {
    pub(crate) const fn from_parts(block_size: u64, first: String, second: String) -> Self {
        Self {
            block_size,
            first,
            second,
        }
    }

    /// Block size of the first digest. The second digest uses twice this.
    pub const fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Digest at `block_size`.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Digest at `2 * block_size`.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Similarity score in `[0, 100]` against another signature.
    pub fn similarity(&self, other: &Self) -> u32 {
        compare::score_signatures(self, other)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.block_size, self.first, self.second)
    }
}

impl FromStr for Signature {
    type Err = SpamsumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (block_size, rest) = s
            .split_once(':')
            .ok_or(SpamsumError::malformed("missing block size separator"))?;

        if block_size.is_empty() || !block_size.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SpamsumError::malformed("block size is not a decimal number"));
        }
        let block_size = block_size
            .parse::<u64>()
            .map_err(|_| SpamsumError::malformed("block size out of range"))?;

        let (first, rest) = rest
            .split_once(':')
            .ok_or(SpamsumError::malformed("missing digest separator"))?;

        // Everything after the first comma is the file name.
        let second = rest.split_once(',').map_or(rest, |(digest, _)| digest);

        if compare::eliminate_sequences(first.as_bytes()).len() > SPAMSUM_LENGTH {
            return Err(SpamsumError::malformed("first digest too long"));
        }
        if compare::eliminate_sequences(second.as_bytes()).len() > SPAMSUM_LENGTH {
            return Err(SpamsumError::malformed("second digest too long"));
        }

        Ok(Self::from_parts(
            block_size,
            first.to_owned(),
            second.to_owned(),
        ))
    }
}
