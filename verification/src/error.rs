//! Error Types
//!
//! `CheckError` is what a single check signals. `VerificationError`
//! aggregates every failed check of a run.

use crate::check::CheckKind;
use core::fmt;
use thiserror::Error;

// =============================================================================
// CODEC ERRORS
// =============================================================================

/// A codec library rejected its input or failed internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{component}: {message}")]
pub struct CodecError {
    /// Codec that failed.
    pub component: &'static str,
    /// The library's own description of the failure.
    pub message: String,
}

impl CodecError {
    /// Wrap any library error.
    pub fn new(component: &'static str, err: impl fmt::Display) -> Self {
        Self {
            component,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// CHECK ERRORS
// =============================================================================

/// Why a single check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Reversing the operation did not reproduce the fixture.
    #[error("{component} round trip did not reproduce the input")]
    RoundTripMismatch {
        /// Codec under test.
        component: &'static str,
    },

    /// The fuzzy hasher returned something that is not a signature.
    #[error("{component} produced a malformed signature {output:?}")]
    InvalidHashOutput {
        /// Hasher under test.
        component: &'static str,
        /// What it returned.
        output: String,
    },

    /// The similarity score of the fixed signature pair changed.
    #[error("similarity score {actual} does not match expected {expected}")]
    SimilarityMismatch {
        /// The fixed expected score.
        expected: u32,
        /// The score computed.
        actual: u32,
    },

    /// The codec was compiled out of this build.
    #[error("{component} codec is not available in this build")]
    CodecUnavailable {
        /// Codec requested.
        component: &'static str,
    },

    /// The codec library itself reported an error.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

// =============================================================================
// AGGREGATE
// =============================================================================

/// A failed check together with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// Which check failed.
    pub kind: CheckKind,
    /// How it failed.
    pub error: CheckError,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}

/// One or more checks of a run failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct VerificationError {
    /// Every failure, in execution order. Never empty.
    pub failures: Vec<CheckFailure>,
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} check(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}
