//! # Roundtrip Verification
//!
//! Asserts that the compression, serialization and fuzzy-hash codecs
//! linked into this build behave correctly on fixed inputs.
//!
//! Failures are aggregated by default so one run reports every broken
//! codec. `FailureMode::FailFast` stops at the first one instead.

//! # Usage
//! ```rust
//! use roundtrip_verification::{Verifier, VerifierConfig};
//!
//! // 1. Everything with defaults
//! roundtrip_verification::run_all_checks()?;
//!
//! // 2. Explicit configuration
//! let config = VerifierConfig::default();
//! config.validate().expect("defaults are valid");
//! let report = Verifier::new(&config).run();
//! assert!(report.is_success());
//! # Ok::<(), roundtrip_verification::VerificationError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod check;
pub mod codec;
mod codecs;
pub mod config;
pub mod error;
pub mod fixture;
pub mod registry;
pub mod report;
pub mod verifier;

// =============================================================================
// EXPORTS
// =============================================================================

pub use check::CheckKind;
pub use config::{FailureMode, VerifierConfig};
pub use error::{CheckError, CheckFailure, CodecError, VerificationError};
pub use report::{ReportFormat, Reporter};
pub use verifier::{Report, Status, Verifier};

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Run every check with the default configuration.
///
/// # Errors
/// Lists every check that failed.
pub fn run_all_checks() -> Result<(), VerificationError> {
    run_with(&VerifierConfig::default())
}

/// Run the checks `config` selects.
///
/// # Errors
/// Lists every check that failed. In fail-fast mode that is the first one.
pub fn run_with(config: &VerifierConfig) -> Result<(), VerificationError> {
    Verifier::new(config).run().into_result()
}
