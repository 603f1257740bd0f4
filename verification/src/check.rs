//! Checks
//!
//! One struct per kind of property. Each check owns its codec and
//! fixture, runs once and reports a single `CheckError` on failure.

use crate::codec::{Compressor, FuzzyHasher, Mapping, Serializer};
use crate::error::CheckError;
use core::fmt;
use serde::Serialize;

// =============================================================================
// CHECK KINDS
// =============================================================================

/// Every check the verifier knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Brotli compression round trip.
    Brotli,
    /// Zstandard compression round trip.
    Zstd,
    /// igbinary serialization round trip.
    Igbinary,
    /// ssdeep signature format.
    SsdeepHash,
    /// ssdeep similarity of the fixed signature pair.
    SsdeepCompare,
}

impl CheckKind {
    /// All kinds in execution order.
    pub const ALL: [Self; 5] = [
        Self::Brotli,
        Self::Zstd,
        Self::Igbinary,
        Self::SsdeepHash,
        Self::SsdeepCompare,
    ];

    /// Stable name, as accepted by `--only`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brotli => "brotli",
            Self::Zstd => "zstd",
            Self::Igbinary => "igbinary",
            Self::SsdeepHash => "ssdeep-hash",
            Self::SsdeepCompare => "ssdeep-compare",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// CHECK TRAIT
// =============================================================================

/// A single verifiable property.
pub trait Check: Send + Sync {
    /// Which check this is.
    fn kind(&self) -> CheckKind;

    /// Execute the check.
    ///
    /// # Errors
    /// The first way the property was violated.
    fn run(&self) -> Result<(), CheckError>;
}

// =============================================================================
// COMPRESSION
// =============================================================================

/// `decompress(compress(fixture)) == fixture`, byte for byte.
pub struct CompressionCheck {
    kind: CheckKind,
    codec: Box<dyn Compressor>,
    fixture: &'static [u8],
}

impl CompressionCheck {
    /// Check `codec` against `fixture`.
    pub const fn new(kind: CheckKind, codec: Box<dyn Compressor>, fixture: &'static [u8]) -> Self {
        Self {
            kind,
            codec,
            fixture,
        }
    }
}

impl Check for CompressionCheck {
    fn kind(&self) -> CheckKind {
        self.kind
    }

    fn run(&self) -> Result<(), CheckError> {
        let compressed = self.codec.compress(self.fixture)?;
        let restored = self.codec.decompress(&compressed)?;
        if restored != self.fixture {
            return Err(CheckError::RoundTripMismatch {
                component: self.codec.name(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

/// `deserialize(serialize(fixture)) == fixture`, insertion order included.
pub struct SerializationCheck {
    codec: Box<dyn Serializer>,
    fixture: Mapping,
}

impl SerializationCheck {
    /// Check `codec` against `fixture`.
    pub const fn new(codec: Box<dyn Serializer>, fixture: Mapping) -> Self {
        Self { codec, fixture }
    }
}

impl Check for SerializationCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Igbinary
    }

    fn run(&self) -> Result<(), CheckError> {
        let bytes = self.codec.serialize(&self.fixture)?;
        let restored = self.codec.deserialize(&bytes)?;
        // IndexMap equality ignores order.
        if !restored.iter().eq(self.fixture.iter()) {
            return Err(CheckError::RoundTripMismatch {
                component: self.codec.name(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// FUZZY HASHING
// =============================================================================

/// `hash(fixture)` is a well-formed `<blocksize>:<digest>:<digest>` signature.
pub struct FuzzyHashCheck {
    codec: Box<dyn FuzzyHasher>,
    fixture: &'static [u8],
}

impl FuzzyHashCheck {
    /// Check `codec` against `fixture`.
    pub const fn new(codec: Box<dyn FuzzyHasher>, fixture: &'static [u8]) -> Self {
        Self { codec, fixture }
    }
}

impl Check for FuzzyHashCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::SsdeepHash
    }

    fn run(&self) -> Result<(), CheckError> {
        let output = self.codec.hash(self.fixture)?;
        if !is_signature(&output) {
            return Err(CheckError::InvalidHashOutput {
                component: self.codec.name(),
                output,
            });
        }
        Ok(())
    }
}

/// Block size is a positive decimal, the first digest non-empty, and both
/// digests only use the base64 alphabet.
fn is_signature(text: &str) -> bool {
    let mut parts = text.split(':');
    let (Some(block_size), Some(first), Some(second), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let is_b64 = |s: &str| {
        s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
    };

    !block_size.is_empty()
        && block_size.bytes().all(|b| b.is_ascii_digit())
        && block_size.parse::<u64>().is_ok_and(|bs| bs > 0)
        && !first.is_empty()
        && is_b64(first)
        && is_b64(second)
}

/// `compare(left, right) == expected`.
pub struct SimilarityCheck {
    codec: Box<dyn FuzzyHasher>,
    left: &'static str,
    right: &'static str,
    expected: u32,
}

impl SimilarityCheck {
    /// Check that `codec` scores `left` against `right` as `expected`.
    pub const fn new(
        codec: Box<dyn FuzzyHasher>,
        left: &'static str,
        right: &'static str,
        expected: u32,
    ) -> Self {
        Self {
            codec,
            left,
            right,
            expected,
        }
    }
}

impl Check for SimilarityCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::SsdeepCompare
    }

    fn run(&self) -> Result<(), CheckError> {
        let actual = self.codec.compare(self.left, self.right)?;
        if actual != self.expected {
            return Err(CheckError::SimilarityMismatch {
                expected: self.expected,
                actual,
            });
        }
        Ok(())
    }
}

// =============================================================================
// UNAVAILABLE
// =============================================================================

/// Stands in for a check whose codec was compiled out.
pub struct UnavailableCheck {
    kind: CheckKind,
    component: &'static str,
}

impl UnavailableCheck {
    /// A check of `kind` that always reports `component` as unavailable.
    pub const fn new(kind: CheckKind, component: &'static str) -> Self {
        Self { kind, component }
    }
}

impl Check for UnavailableCheck {
    fn kind(&self) -> CheckKind {
        self.kind
    }

    fn run(&self) -> Result<(), CheckError> {
        Err(CheckError::CodecUnavailable {
            component: self.component,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use crate::error::CodecError;

    // =========================================================================
    // FAKE CODECS
    // =========================================================================

    /// Copies input through, optionally corrupting the output of `decompress`.
    pub(crate) struct Identity {
        pub(crate) corrupt: bool,
    }

    impl Compressor for Identity {
        fn name(&self) -> &'static str {
            "identity"
        }

        fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
            Ok(input.to_vec())
        }

        fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
            let mut out = input.to_vec();
            if self.corrupt {
                out.push(0);
            }
            Ok(out)
        }
    }

    /// Deserializes to the fixture reversed.
    struct Reversing;

    impl Serializer for Reversing {
        fn name(&self) -> &'static str {
            "reversing"
        }

        fn serialize(&self, value: &Mapping) -> Result<Vec<u8>, CodecError> {
            Ok(value
                .iter()
                .flat_map(|(k, v)| [k.as_str(), "=", v.as_str(), "\n"])
                .collect::<String>()
                .into_bytes())
        }

        fn deserialize(&self, input: &[u8]) -> Result<Mapping, CodecError> {
            let text = std::str::from_utf8(input).map_err(|e| CodecError::new("reversing", e))?;
            Ok(text
                .lines()
                .rev()
                .filter_map(|line| line.split_once('='))
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect())
        }
    }

    /// Returns canned answers.
    struct Canned {
        signature: &'static str,
        score: u32,
    }

    impl FuzzyHasher for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn hash(&self, _input: &[u8]) -> Result<String, CodecError> {
            Ok(self.signature.to_owned())
        }

        fn compare(&self, _a: &str, _b: &str) -> Result<u32, CodecError> {
            Ok(self.score)
        }
    }

    // =========================================================================
    // TESTS
    // =========================================================================

    #[test]
    fn test_check_kind_names() {
        use clap::ValueEnum;

        // `--only` parses through clap, so its names must agree with `as_str`.
        for kind in CheckKind::ALL {
            let value = kind.to_possible_value().unwrap();
            assert_eq!(value.get_name(), kind.as_str());
            assert_eq!(CheckKind::from_str(&kind.to_string(), false), Ok(kind));
        }
        assert!(CheckKind::from_str("lz4", false).is_err());
        assert_eq!(
            serde_json::to_string(&CheckKind::SsdeepCompare).unwrap(),
            "\"ssdeep-compare\""
        );
    }

    #[test]
    fn test_compression_mismatch() {
        let good = CompressionCheck::new(
            CheckKind::Brotli,
            Box::new(Identity { corrupt: false }),
            b"abc",
        );
        assert_eq!(good.run(), Ok(()));

        let bad = CompressionCheck::new(
            CheckKind::Brotli,
            Box::new(Identity { corrupt: true }),
            b"abc",
        );
        assert_eq!(
            bad.run(),
            Err(CheckError::RoundTripMismatch {
                component: "identity"
            })
        );
    }

    #[test]
    fn test_serialization_order_matters() {
        let single: Mapping = [("a".to_owned(), "1".to_owned())].into_iter().collect();
        assert_eq!(
            SerializationCheck::new(Box::new(Reversing), single).run(),
            Ok(())
        );

        let pair: Mapping = [("a", "1"), ("b", "2")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        assert_eq!(
            SerializationCheck::new(Box::new(Reversing), pair).run(),
            Err(CheckError::RoundTripMismatch {
                component: "reversing"
            })
        );
    }

    #[test]
    fn test_signature_format() {
        assert!(is_signature("3:kKPFUB:kKqB"));
        assert!(is_signature("96:abc+/:"));
        assert!(!is_signature(""));
        assert!(!is_signature("3::"));
        assert!(!is_signature("0:abc:abc"));
        assert!(!is_signature("x3:abc:abc"));
        assert!(!is_signature("3:ab-c:abc"));
        assert!(!is_signature("3:abc:abc:abc"));
        assert!(!is_signature("3:abc"));

        let check = FuzzyHashCheck::new(
            Box::new(Canned {
                signature: "not a hash",
                score: 0,
            }),
            b"x",
        );
        assert_eq!(
            check.run(),
            Err(CheckError::InvalidHashOutput {
                component: "canned",
                output: "not a hash".to_owned()
            })
        );
    }

    #[test]
    fn test_similarity_mismatch() {
        let codec = || {
            Box::new(Canned {
                signature: "3:a:a",
                score: 42,
            })
        };
        assert_eq!(SimilarityCheck::new(codec(), "a", "b", 42).run(), Ok(()));
        assert_eq!(
            SimilarityCheck::new(codec(), "a", "b", 57).run(),
            Err(CheckError::SimilarityMismatch {
                expected: 57,
                actual: 42
            })
        );
    }

    #[test]
    fn test_unavailable() {
        assert_eq!(
            UnavailableCheck::new(CheckKind::Zstd, "zstd").run(),
            Err(CheckError::CodecUnavailable { component: "zstd" })
        );
    }
}
