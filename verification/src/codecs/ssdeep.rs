//! ssdeep adapter over the `spamsum` crate.

use crate::codec::FuzzyHasher;
use crate::error::CodecError;

const NAME: &str = "ssdeep";

/// ssdeep-compatible fuzzy hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ssdeep;

impl FuzzyHasher for Ssdeep {
    fn name(&self) -> &'static str {
        NAME
    }

    fn hash(&self, input: &[u8]) -> Result<String, CodecError> {
        spamsum::hash(input).map_err(|e| CodecError::new(NAME, e))
    }

    fn compare(&self, a: &str, b: &str) -> Result<u32, CodecError> {
        spamsum::compare(a, b).map_err(|e| CodecError::new(NAME, e))
    }
}
