//! Value model and error types.

use indexmap::IndexMap;
use thiserror::Error;

// =============================================================================
// VALUE MODEL
// =============================================================================

/// Ordered key/value table. Iteration follows insertion order, as on the wire.
pub type Array = IndexMap<Key, Value>;

/// A serializable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Signed 64-bit integer
    Int(i64),
    /// IEEE-754 double
    Float(f64),
    /// Byte string (not necessarily UTF-8)
    String(Vec<u8>),
    /// Ordered map
    Array(Array),
}

/// Array key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// Byte-string key
    Str(Vec<u8>),
}

impl Value {
    /// Contents of a string value, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// Contents of an array value.
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Build a list (keys `0..n`) from values.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Array(
            items
                .into_iter()
                .zip(0_i64..)
                .map(|(v, i)| (Key::Int(i), v.into()))
                .collect(),
        )
    }
}

impl Key {
    /// Contents of a string key, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(bytes) => std::str::from_utf8(bytes).ok(),
            Self::Int(_) => None,
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into_bytes())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Self::Str(v.as_bytes().to_vec())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Self::Str(v.into_bytes())
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::Array(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IgbinaryError {
    /// Header carries a version this decoder does not read.
    #[error("unsupported igbinary format version {0}")]
    UnsupportedVersion(u32),

    /// Input ended in the middle of a value.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof {
        /// Offset where more bytes were needed.
        offset: usize,
    },

    /// Tag is unknown, or names a type outside the value model (objects, references).
    #[error("unsupported type tag 0x{tag:02x} at offset {offset}")]
    UnsupportedType {
        /// The tag byte.
        tag: u8,
        /// Offset of the tag.
        offset: usize,
    },

    /// Back-reference to a string that was never defined.
    #[error("string id {id} at offset {offset} was never defined")]
    InvalidStringId {
        /// Referenced id.
        id: u32,
        /// Offset of the reference tag.
        offset: usize,
    },

    /// A 64-bit magnitude does not fit an `i64`.
    #[error("integer out of range at offset {offset}")]
    IntegerOverflow {
        /// Offset of the integer tag.
        offset: usize,
    },

    /// Input continues after the top-level value.
    #[error("{remaining} trailing bytes after value")]
    TrailingBytes {
        /// Unread bytes.
        remaining: usize,
    },

    /// Arrays nest deeper than `MAX_DEPTH`.
    #[error("nesting deeper than {limit} levels")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// A string or array is too long for a 32-bit length field.
    #[error("length {len} exceeds the 32-bit limit")]
    TooLarge {
        /// The offending length.
        len: usize,
    },

    /// A decoded length does not fit a `usize` on this platform.
    #[error("declared length {len} at offset {offset} does not fit in memory")]
    LengthOutOfRange {
        /// The declared length.
        len: u32,
        /// Offset of the length field.
        offset: usize,
    },
}
