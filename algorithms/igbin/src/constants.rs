//! igbinary Wire Constants
//!
//! Type tags are single bytes; every multi-byte integer on the wire is
//! big-endian.

// =============================================================================
// HEADER
// =============================================================================

/// Format version written by the encoder.
pub const FORMAT_VERSION: u32 = 2;

/// Oldest format version the decoder accepts (same layout).
pub const LEGACY_FORMAT_VERSION: u32 = 1;

/// Header length in bytes.
pub const HEADER_SIZE: usize = 4;

/// Maximum nesting depth of arrays, in both directions.
pub const MAX_DEPTH: usize = 512;

// =============================================================================
// TYPE TAGS
// =============================================================================

pub(crate) const NULL: u8 = 0x00;
pub(crate) const BOOL_FALSE: u8 = 0x04;
pub(crate) const BOOL_TRUE: u8 = 0x05;

pub(crate) const LONG8_POS: u8 = 0x06;
pub(crate) const LONG8_NEG: u8 = 0x07;
pub(crate) const LONG16_POS: u8 = 0x08;
pub(crate) const LONG16_NEG: u8 = 0x09;
pub(crate) const LONG32_POS: u8 = 0x0a;
pub(crate) const LONG32_NEG: u8 = 0x0b;
pub(crate) const LONG64_POS: u8 = 0x20;
pub(crate) const LONG64_NEG: u8 = 0x21;

pub(crate) const DOUBLE: u8 = 0x0c;

pub(crate) const STRING_EMPTY: u8 = 0x0d;
pub(crate) const STRING_ID8: u8 = 0x0e;
pub(crate) const STRING_ID16: u8 = 0x0f;
pub(crate) const STRING_ID32: u8 = 0x10;
pub(crate) const STRING8: u8 = 0x11;
pub(crate) const STRING16: u8 = 0x12;
pub(crate) const STRING32: u8 = 0x13;

pub(crate) const ARRAY8: u8 = 0x14;
pub(crate) const ARRAY16: u8 = 0x15;
pub(crate) const ARRAY32: u8 = 0x16;
