//! Verifier Configuration
//!
//! Built once at startup, validated, then passed by reference.

use crate::check::CheckKind;
use core::ops::RangeInclusive;
use thiserror::Error;

// =============================================================================
// DEFAULTS & LIMITS
// =============================================================================

/// Default Brotli quality.
pub const DEFAULT_BROTLI_QUALITY: u32 = 6;
/// Default Brotli window (log2 of the window size).
pub const DEFAULT_BROTLI_WINDOW: u32 = 22;
/// Default Zstandard level.
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

const BROTLI_QUALITY_RANGE: RangeInclusive<i64> = 0..=11;
const BROTLI_WINDOW_RANGE: RangeInclusive<i64> = 10..=24;
const ZSTD_LEVEL_RANGE: RangeInclusive<i64> = -7..=22;

// =============================================================================
// TYPES
// =============================================================================

/// What to do once a check fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Run every check and report all failures together.
    #[default]
    Aggregate,
    /// Stop at the first failure; the remaining checks are skipped.
    FailFast,
}

/// Brotli encoder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrotliParams {
    /// Quality, 0 to 11.
    pub quality: u32,
    /// log2 of the sliding window, 10 to 24.
    pub lg_window: u32,
}

impl Default for BrotliParams {
    fn default() -> Self {
        Self {
            quality: DEFAULT_BROTLI_QUALITY,
            lg_window: DEFAULT_BROTLI_WINDOW,
        }
    }
}

/// Everything a verifier run depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Aggregate or halt on the first failure.
    pub failure_mode: FailureMode,
    /// Run checks on the rayon pool. Ignored in fail-fast mode.
    pub parallel: bool,
    /// Checks to run. Empty selects all of them.
    pub only: Vec<CheckKind>,
    /// Brotli encoder parameters.
    pub brotli: BrotliParams,
    /// Zstandard compression level.
    pub zstd_level: i32,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            failure_mode: FailureMode::Aggregate,
            parallel: false,
            only: Vec::new(),
            brotli: BrotliParams::default(),
            zstd_level: DEFAULT_ZSTD_LEVEL,
        }
    }
}

/// An option holds a value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{option} = {value} is outside {min}..={max}")]
pub struct ConfigError {
    /// Option name as written on the command line.
    pub option: &'static str,
    /// Rejected value.
    pub value: i64,
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
}

// =============================================================================
// VALIDATION & SELECTION
// =============================================================================

impl VerifierConfig {
    /// Reject out-of-range codec parameters.
    ///
    /// # Errors
    /// Returns the first option found outside its range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        in_range(
            "--brotli-quality",
            i64::from(self.brotli.quality),
            BROTLI_QUALITY_RANGE,
        )?;
        in_range(
            "--brotli-window",
            i64::from(self.brotli.lg_window),
            BROTLI_WINDOW_RANGE,
        )?;
        in_range("--zstd-level", i64::from(self.zstd_level), ZSTD_LEVEL_RANGE)
    }

    /// Checks to run in canonical order, without duplicates.
    pub fn selected(&self) -> Vec<CheckKind> {
        CheckKind::ALL
            .into_iter()
            .filter(|kind| self.only.is_empty() || self.only.contains(kind))
            .collect()
    }

    /// Whether checks run on the rayon pool.
    pub const fn runs_parallel(&self) -> bool {
        self.parallel && matches!(self.failure_mode, FailureMode::Aggregate)
    }
}

fn in_range(
    option: &'static str,
    value: i64,
    range: RangeInclusive<i64>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError {
            option,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
