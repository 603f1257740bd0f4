//! Check Registry
//!
//! Maps each `CheckKind` to a configured check, or to an
//! `UnavailableCheck` when the codec was compiled out.

use crate::check::{Check, CheckKind};
use crate::config::VerifierConfig;

/// Build the check for `kind` from `config`.
pub fn build(kind: CheckKind, config: &VerifierConfig) -> Box<dyn Check> {
    match kind {
        CheckKind::Brotli => brotli(config),
        CheckKind::Zstd => zstd(config),
        CheckKind::Igbinary => igbinary(),
        CheckKind::SsdeepHash => ssdeep_hash(),
        CheckKind::SsdeepCompare => ssdeep_compare(),
    }
}

/// Build every check `config` selects, in execution order.
pub fn build_selected(config: &VerifierConfig) -> Vec<Box<dyn Check>> {
    config
        .selected()
        .into_iter()
        .map(|kind| build(kind, config))
        .collect()
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

#[cfg(feature = "brotli")]
fn brotli(config: &VerifierConfig) -> Box<dyn Check> {
    use crate::check::CompressionCheck;
    use crate::codecs::Brotli;
    use crate::fixture::GREETING;

    Box::new(CompressionCheck::new(
        CheckKind::Brotli,
        Box::new(Brotli::new(config.brotli)),
        GREETING.as_bytes(),
    ))
}

#[cfg(not(feature = "brotli"))]
fn brotli(_config: &VerifierConfig) -> Box<dyn Check> {
    Box::new(crate::check::UnavailableCheck::new(CheckKind::Brotli, "brotli"))
}

#[cfg(feature = "zstd")]
fn zstd(config: &VerifierConfig) -> Box<dyn Check> {
    use crate::check::CompressionCheck;
    use crate::codecs::Zstd;
    use crate::fixture::GREETING;

    Box::new(CompressionCheck::new(
        CheckKind::Zstd,
        Box::new(Zstd::new(config.zstd_level)),
        GREETING.as_bytes(),
    ))
}

#[cfg(not(feature = "zstd"))]
fn zstd(_config: &VerifierConfig) -> Box<dyn Check> {
    Box::new(crate::check::UnavailableCheck::new(CheckKind::Zstd, "zstd"))
}

#[cfg(feature = "igbinary")]
fn igbinary() -> Box<dyn Check> {
    use crate::check::SerializationCheck;
    use crate::codecs::Igbinary;

    Box::new(SerializationCheck::new(
        Box::new(Igbinary),
        crate::fixture::mapping(),
    ))
}

#[cfg(not(feature = "igbinary"))]
fn igbinary() -> Box<dyn Check> {
    Box::new(crate::check::UnavailableCheck::new(CheckKind::Igbinary, "igbinary"))
}

#[cfg(feature = "ssdeep")]
fn ssdeep_hash() -> Box<dyn Check> {
    use crate::check::FuzzyHashCheck;
    use crate::codecs::Ssdeep;
    use crate::fixture::HASH_INPUT;

    Box::new(FuzzyHashCheck::new(Box::new(Ssdeep), HASH_INPUT.as_bytes()))
}

#[cfg(feature = "ssdeep")]
fn ssdeep_compare() -> Box<dyn Check> {
    use crate::check::SimilarityCheck;
    use crate::codecs::Ssdeep;
    use crate::fixture::{EXPECTED_SIMILARITY, SIGNATURE_A, SIGNATURE_B};

    Box::new(SimilarityCheck::new(
        Box::new(Ssdeep),
        SIGNATURE_A,
        SIGNATURE_B,
        EXPECTED_SIMILARITY,
    ))
}

#[cfg(not(feature = "ssdeep"))]
fn ssdeep_hash() -> Box<dyn Check> {
    Box::new(crate::check::UnavailableCheck::new(CheckKind::SsdeepHash, "ssdeep"))
}

#[cfg(not(feature = "ssdeep"))]
fn ssdeep_compare() -> Box<dyn Check> {
    Box::new(crate::check::UnavailableCheck::new(CheckKind::SsdeepCompare, "ssdeep"))
}
