//! Encoder
//!
//! Writes the smallest tag variant for every length and integer, and
//! replaces repeated strings with back-references.

use crate::constants::{
    ARRAY16, ARRAY32, ARRAY8, BOOL_FALSE, BOOL_TRUE, DOUBLE, FORMAT_VERSION, HEADER_SIZE,
    LONG16_NEG, LONG16_POS, LONG32_NEG, LONG32_POS, LONG64_NEG, LONG64_POS, LONG8_NEG, LONG8_POS,
    MAX_DEPTH, NULL, STRING16, STRING32, STRING8, STRING_EMPTY, STRING_ID16, STRING_ID32,
    STRING_ID8,
};
use crate::types::{Array, IgbinaryError, Key, Value};
use std::collections::HashMap;

/// Serialize a value, header included.
///
/// # Errors
/// Returns `TooLarge` for strings or arrays beyond `u32::MAX` and
/// `DepthLimitExceeded` for arrays nested deeper than `MAX_DEPTH`.
///
/// # Example
/// ```rust
/// use igbin::Value;
///
/// let bytes = igbin::to_vec(&Value::from("světe"))?;
/// assert_eq!(&bytes[..4], &[0, 0, 0, 2]);
/// # Ok::<(), igbin::IgbinaryError>(())
/// ```
pub fn to_vec(value: &Value) -> Result<Vec<u8>, IgbinaryError> {
    let mut encoder = Encoder::default();
    encoder.out.reserve(HEADER_SIZE + 16);
    encoder.out.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
    encoder.value(value, 0)?;
    Ok(encoder.out)
}

#[derive(Default)]
struct Encoder<'v> {
    out: Vec<u8>,
    /// First-occurrence id of every string written so far.
    strings: HashMap<&'v [u8], u32>,
}

impl<'v> Encoder<'v> {
    fn value(&mut self, value: &'v Value, depth: usize) -> Result<(), IgbinaryError> {
        match value {
            Value::Null => self.out.push(NULL),
            Value::Bool(false) => self.out.push(BOOL_FALSE),
            Value::Bool(true) => self.out.push(BOOL_TRUE),
            Value::Int(v) => self.long(*v),
            Value::Float(v) => {
                self.out.push(DOUBLE);
                self.out.extend_from_slice(&v.to_bits().to_be_bytes());
            }
            Value::String(bytes) => self.string(bytes)?,
            Value::Array(array) => self.array(array, depth)?,
        }
        Ok(())
    }

    fn long(&mut self, v: i64) {
        let magnitude = v.unsigned_abs();
        let negative = v < 0;
        let pick = |pos, neg| if negative { neg } else { pos };

        if let Ok(m) = u8::try_from(magnitude) {
            self.out.push(pick(LONG8_POS, LONG8_NEG));
            self.out.push(m);
        } else if let Ok(m) = u16::try_from(magnitude) {
            self.out.push(pick(LONG16_POS, LONG16_NEG));
            self.out.extend_from_slice(&m.to_be_bytes());
        } else if let Ok(m) = u32::try_from(magnitude) {
            self.out.push(pick(LONG32_POS, LONG32_NEG));
            self.out.extend_from_slice(&m.to_be_bytes());
        } else {
            self.out.push(pick(LONG64_POS, LONG64_NEG));
            self.out.extend_from_slice(&magnitude.to_be_bytes());
        }
    }

    fn string(&mut self, bytes: &'v [u8]) -> Result<(), IgbinaryError> {
        if bytes.is_empty() {
            self.out.push(STRING_EMPTY);
            return Ok(());
        }

        if let Some(&id) = self.strings.get(bytes) {
            self.sized(id, [STRING_ID8, STRING_ID16, STRING_ID32]);
            return Ok(());
        }

        let len = length(bytes.len())?;
        let id = length(self.strings.len())?;
        self.strings.insert(bytes, id);
        self.sized(len, [STRING8, STRING16, STRING32]);
        self.out.extend_from_slice(bytes);
        Ok(())
    }

    fn array(&mut self, array: &'v Array, depth: usize) -> Result<(), IgbinaryError> {
        if depth >= MAX_DEPTH {
            return Err(IgbinaryError::DepthLimitExceeded { limit: MAX_DEPTH });
        }

        self.sized(length(array.len())?, [ARRAY8, ARRAY16, ARRAY32]);
        for (key, value) in array {
            match key {
                Key::Int(k) => self.long(*k),
                Key::Str(k) => self.string(k)?,
            }
            self.value(value, depth + 1)?;
        }
        Ok(())
    }

    /// Write `tags[i]` followed by `n` in the narrowest of 1, 2 or 4 bytes.
    fn sized(&mut self, n: u32, tags: [u8; 3]) {
        if let Ok(n) = u8::try_from(n) {
            self.out.push(tags[0]);
            self.out.push(n);
        } else if let Ok(n) = u16::try_from(n) {
            self.out.push(tags[1]);
            self.out.extend_from_slice(&n.to_be_bytes());
        } else {
            self.out.push(tags[2]);
            self.out.extend_from_slice(&n.to_be_bytes());
        }
    }
}

fn length(len: usize) -> Result<u32, IgbinaryError> {
    u32::try_from(len).map_err(|_| IgbinaryError::TooLarge { len })
}
