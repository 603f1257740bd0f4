//! igbinary adapter over the `igbin` crate.

use crate::codec::{Mapping, Serializer};
use crate::error::CodecError;
use igbin::{Key, Value};

const NAME: &str = "igbinary";

/// igbinary serializer for string mappings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Igbinary;

impl Serializer for Igbinary {
    fn name(&self) -> &'static str {
        NAME
    }

    fn serialize(&self, value: &Mapping) -> Result<Vec<u8>, CodecError> {
        let value: Value = value.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        igbin::to_vec(&value).map_err(|e| CodecError::new(NAME, e))
    }

    fn deserialize(&self, input: &[u8]) -> Result<Mapping, CodecError> {
        let value = igbin::from_slice(input).map_err(|e| CodecError::new(NAME, e))?;
        let Value::Array(array) = value else {
            return Err(CodecError::new(NAME, "top-level value is not an array"));
        };

        array
            .into_iter()
            .map(|(key, value)| {
                let key = match key {
                    Key::Str(bytes) => utf8(bytes)?,
                    Key::Int(i) => i.to_string(),
                };
                let Value::String(bytes) = value else {
                    return Err(CodecError::new(NAME, "array value is not a string"));
                };
                Ok((key, utf8(bytes)?))
            })
            .collect()
    }
}

fn utf8(bytes: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(bytes).map_err(|e| CodecError::new(NAME, e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_bytes() {
        let bytes = Igbinary.serialize(&crate::fixture::mapping()).unwrap();
        let mut expected = vec![0, 0, 0, 2, 0x14, 0x01, 0x11, 0x04];
        expected.extend_from_slice(b"Ahoj");
        expected.extend_from_slice(&[0x11, 0x06]);
        expected.extend_from_slice("světe".as_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_non_mapping_is_an_error() {
        let err = Igbinary.deserialize(&[0, 0, 0, 2, 0x06, 0x01]).unwrap_err();
        assert_eq!(err.message, "top-level value is not an array");

        let list = igbin::to_vec(&Value::list([Value::Null])).unwrap();
        assert!(Igbinary.deserialize(&list).is_err());
    }
}
