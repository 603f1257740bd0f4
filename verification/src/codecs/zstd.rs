//! Zstandard adapter over the `zstd` crate.

use crate::codec::Compressor;
use crate::error::CodecError;

const NAME: &str = "zstd";

/// Zstandard at a fixed level.
#[derive(Debug, Clone, Copy)]
pub struct Zstd {
    level: i32,
}

impl Zstd {
    /// Encoder at `level`.
    pub const fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Compressor for Zstd {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        ::zstd::encode_all(input, self.level).map_err(|e| CodecError::new(NAME, e))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        ::zstd::decode_all(input).map_err(|e| CodecError::new(NAME, e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_magic() {
        let compressed = Zstd::new(3).compress(b"Ahoj").unwrap();
        assert_eq!(&compressed[..4], &[0x28, 0xb5, 0x2f, 0xfd]);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let err = Zstd::new(3).decompress(b"not a zstd frame").unwrap_err();
        assert_eq!(err.component, "zstd");
    }
}
