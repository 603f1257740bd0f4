//! Decoder

use crate::constants::{
    ARRAY16, ARRAY32, ARRAY8, BOOL_FALSE, BOOL_TRUE, DOUBLE, FORMAT_VERSION, HEADER_SIZE,
    LEGACY_FORMAT_VERSION, LONG16_NEG, LONG16_POS, LONG32_NEG, LONG32_POS, LONG64_NEG, LONG64_POS,
    LONG8_NEG, LONG8_POS, MAX_DEPTH, NULL, STRING16, STRING32, STRING8, STRING_EMPTY,
    STRING_ID16, STRING_ID32, STRING_ID8,
};
use crate::types::{Array, IgbinaryError, Key, Value};

/// Upper bound on entries preallocated from an untrusted length field.
const MAX_PREALLOC: usize = 1024;

/// Deserialize a complete buffer into a value.
///
/// # Errors
/// Fails if the header is not version 1 or 2, if the input is truncated,
/// if a tag is outside the value model, if a string id is unknown, or if
/// bytes remain after the top-level value.
///
/// # Example
/// ```rust
/// let value = igbin::from_slice(&[0, 0, 0, 2, 0x06, 0x2a])?;
/// assert_eq!(value, igbin::Value::Int(42));
/// # Ok::<(), igbin::IgbinaryError>(())
/// ```
pub fn from_slice(input: &[u8]) -> Result<Value, IgbinaryError> {
    let mut decoder = Decoder {
        input,
        pos: 0,
        strings: Vec::new(),
    };

    let version = u32::from_be_bytes(decoder.take_array::<HEADER_SIZE>()?);
    if version != FORMAT_VERSION && version != LEGACY_FORMAT_VERSION {
        return Err(IgbinaryError::UnsupportedVersion(version));
    }

    let value = decoder.value(0)?;
    let remaining = input.len() - decoder.pos;
    if remaining > 0 {
        return Err(IgbinaryError::TrailingBytes { remaining });
    }
    Ok(value)
}

struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
    strings: Vec<&'a [u8]>,
}

impl<'a> Decoder<'a> {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    fn take(&mut self, n: usize) -> Result<&'a [u8], IgbinaryError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.input.len())
            .ok_or(IgbinaryError::UnexpectedEof {
                offset: self.input.len(),
            })?;
        let bytes = &self.input[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], IgbinaryError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, IgbinaryError> {
        Ok(self.take_array::<1>()?[0])
    }

    fn u16(&mut self) -> Result<u16, IgbinaryError> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    fn u32(&mut self) -> Result<u32, IgbinaryError> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    fn u64(&mut self) -> Result<u64, IgbinaryError> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    /// 32-bit length field.
    fn u32_len(&mut self) -> Result<usize, IgbinaryError> {
        let offset = self.pos;
        to_usize(self.u32()?, offset)
    }

    // =========================================================================
    // VALUES
    // =========================================================================

    fn value(&mut self, depth: usize) -> Result<Value, IgbinaryError> {
        let offset = self.pos;
        let tag = self.u8()?;

        let value = match tag {
            NULL => Value::Null,
            BOOL_FALSE => Value::Bool(false),
            BOOL_TRUE => Value::Bool(true),
            DOUBLE => Value::Float(f64::from_bits(self.u64()?)),
            ARRAY8 | ARRAY16 | ARRAY32 => Value::Array(self.array(tag, depth)?),
            _ => {
                if let Some(v) = self.long(tag, offset)? {
                    Value::Int(v)
                } else if let Some(s) = self.string(tag, offset)? {
                    Value::String(s.to_vec())
                } else {
                    return Err(IgbinaryError::UnsupportedType { tag, offset });
                }
            }
        };
        Ok(value)
    }

    /// Integer payload for a long tag, or `None` if `tag` is not one.
    fn long(&mut self, tag: u8, offset: usize) -> Result<Option<i64>, IgbinaryError> {
        let (magnitude, negative) = match tag {
            LONG8_POS | LONG8_NEG => (u64::from(self.u8()?), tag == LONG8_NEG),
            LONG16_POS | LONG16_NEG => (u64::from(self.u16()?), tag == LONG16_NEG),
            LONG32_POS | LONG32_NEG => (u64::from(self.u32()?), tag == LONG32_NEG),
            LONG64_POS | LONG64_NEG => (self.u64()?, tag == LONG64_NEG),
            _ => return Ok(None),
        };

        let value = if negative {
            0_i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        };
        value
            .map(Some)
            .ok_or(IgbinaryError::IntegerOverflow { offset })
    }

    /// String payload for a string tag, or `None` if `tag` is not one.
    fn string(&mut self, tag: u8, offset: usize) -> Result<Option<&'a [u8]>, IgbinaryError> {
        let len = match tag {
            STRING_EMPTY => return Ok(Some(&[])),
            STRING_ID8 | STRING_ID16 | STRING_ID32 => {
                let id = match tag {
                    STRING_ID8 => u32::from(self.u8()?),
                    STRING_ID16 => u32::from(self.u16()?),
                    _ => self.u32()?,
                };
                return usize::try_from(id)
                    .ok()
                    .and_then(|i| self.strings.get(i).copied())
                    .map(Some)
                    .ok_or(IgbinaryError::InvalidStringId { id, offset });
            }
            STRING8 => usize::from(self.u8()?),
            STRING16 => usize::from(self.u16()?),
            STRING32 => self.u32_len()?,
            _ => return Ok(None),
        };

        let bytes = self.take(len)?;
        self.strings.push(bytes);
        Ok(Some(bytes))
    }

    fn array(&mut self, tag: u8, depth: usize) -> Result<Array, IgbinaryError> {
        if depth >= MAX_DEPTH {
            return Err(IgbinaryError::DepthLimitExceeded { limit: MAX_DEPTH });
        }

        let len = match tag {
            ARRAY8 => usize::from(self.u8()?),
            ARRAY16 => usize::from(self.u16()?),
            _ => self.u32_len()?,
        };

        let mut array = Array::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            let key = self.key()?;
            let value = self.value(depth + 1)?;
            array.insert(key, value);
        }
        Ok(array)
    }

    fn key(&mut self) -> Result<Key, IgbinaryError> {
        let offset = self.pos;
        let tag = self.u8()?;

        if let Some(k) = self.long(tag, offset)? {
            return Ok(Key::Int(k));
        }
        if let Some(s) = self.string(tag, offset)? {
            return Ok(Key::Str(s.to_vec()));
        }
        Err(IgbinaryError::UnsupportedType { tag, offset })
    }
}

fn to_usize(len: u32, offset: usize) -> Result<usize, IgbinaryError> {
    usize::try_from(len).map_err(|_| IgbinaryError::LengthOutOfRange { len, offset })
}
