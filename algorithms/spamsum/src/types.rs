//! Shared types used across the spamsum library.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced while hashing or comparing signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpamsumError {
    /// The input is longer than the largest block size can summarize.
    #[error("input of {len} bytes exceeds the largest spamsum block size")]
    InputTooLarge {
        /// Total bytes fed to the hasher.
        len: u64,
    },

    /// Signature text does not follow `<blocksize>:<digest>:<digest>`.
    #[error("malformed signature: {reason}")]
    MalformedSignature {
        /// What was wrong with the text.
        reason: &'static str,
    },
}

impl SpamsumError {
    pub(crate) const fn malformed(reason: &'static str) -> Self {
        Self::MalformedSignature { reason }
    }
}
