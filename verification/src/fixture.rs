//! Fixed inputs and expected results.

use crate::codec::Mapping;

/// Compressed and decompressed by every compression check.
pub const GREETING: &str = "Ahoj světe";

/// Input of the fuzzy-hash format check.
pub const HASH_INPUT: &str = "ahoj světe";

/// Entries of the serialization fixture, in insertion order.
pub const MAPPING_ENTRIES: [(&str, &str); 1] = [("Ahoj", "světe")];

/// Left operand of the similarity check.
pub const SIGNATURE_A: &str =
    "24:FPlUMKVsgNfgmjFadP6WboWjb8tsH4RSXqMbLFpjwPDt4tFF:9lUajiiPbbnr4RSXqMbppMZ4t3";

/// Right operand of the similarity check.
pub const SIGNATURE_B: &str =
    "48:9lUajiiPbbnr4RSXqMbLbmo03Rcq0K/cvhQ+3/M8M5BEaB6:9HFHsGqabmoMR18hQ+308sBdk";

/// Score `SIGNATURE_A` and `SIGNATURE_B` must produce.
pub const EXPECTED_SIMILARITY: u32 = 57;

/// The serialization fixture as an ordered mapping.
pub fn mapping() -> Mapping {
    MAPPING_ENTRIES
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}
