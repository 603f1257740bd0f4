//! Brotli adapter over the `brotli` crate.

use crate::codec::Compressor;
use crate::config::BrotliParams;
use crate::error::CodecError;
use std::io::{Read, Write};

const NAME: &str = "brotli";
const BUFFER_SIZE: usize = 4096;

/// Brotli with fixed encoder parameters.
#[derive(Debug, Clone, Copy)]
pub struct Brotli {
    params: BrotliParams,
}

impl Brotli {
    /// Encoder using `params`.
    pub const fn new(params: BrotliParams) -> Self {
        Self { params }
    }
}

impl Compressor for Brotli {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        {
            // The stream is finished when the writer drops.
            let mut writer = ::brotli::CompressorWriter::new(
                &mut out,
                BUFFER_SIZE,
                self.params.quality,
                self.params.lg_window,
            );
            writer
                .write_all(input)
                .map_err(|e| CodecError::new(NAME, e))?;
        }
        Ok(out)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        ::brotli::Decompressor::new(input, BUFFER_SIZE)
            .read_to_end(&mut out)
            .map_err(|e| CodecError::new(NAME, e))?;
        Ok(out)
    }
}
