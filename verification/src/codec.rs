//! Codec Interfaces
//!
//! The verifier only sees these traits. Implementations live in
//! `codecs/`, one file per library, each behind its cargo feature.

use crate::error::CodecError;
use indexmap::IndexMap;

/// Ordered string mapping, the serialization fixture type.
pub type Mapping = IndexMap<String, String>;

/// Lossless byte compression.
pub trait Compressor: Send + Sync {
    /// Name used in reports.
    fn name(&self) -> &'static str;

    /// Compress `input`.
    ///
    /// # Errors
    /// Library failure.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Reverse `compress`.
    ///
    /// # Errors
    /// Corrupt input or library failure.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// Binary serialization of ordered mappings.
pub trait Serializer: Send + Sync {
    /// Name used in reports.
    fn name(&self) -> &'static str;

    /// Serialize `value`.
    ///
    /// # Errors
    /// Library failure.
    fn serialize(&self, value: &Mapping) -> Result<Vec<u8>, CodecError>;

    /// Reverse `serialize`.
    ///
    /// # Errors
    /// Malformed input, or a value that is not a string mapping.
    fn deserialize(&self, input: &[u8]) -> Result<Mapping, CodecError>;
}

/// Similarity-preserving hashing.
pub trait FuzzyHasher: Send + Sync {
    /// Name used in reports.
    fn name(&self) -> &'static str;

    /// Textual signature of `input`.
    ///
    /// # Errors
    /// Library failure.
    fn hash(&self, input: &[u8]) -> Result<String, CodecError>;

    /// Similarity of two signatures, 0 to 100.
    ///
    /// # Errors
    /// Either signature is malformed.
    fn compare(&self, a: &str, b: &str) -> Result<u32, CodecError>;
}
