//! Public API Layer
//!
use crate::signature::Signature;
use crate::streaming::SpamsumHasher;
use crate::types::SpamsumError;

// =============================================================================
// ONE-SHOT HASHING
// =============================================================================

/// Compute the fuzzy hash of `input` as signature text.
///
/// # Errors
/// Returns `InputTooLarge` for inputs beyond the largest block size
/// (about 192 GiB).
///
/// # Example
/// ```rust
/// let sig = spamsum::hash(b"")?;
/// assert_eq!(sig, "3::");
/// # Ok::<(), spamsum::SpamsumError>(())
/// ```
pub fn hash(input: &[u8]) -> Result<String, SpamsumError> {
    hash_signature(input).map(|sig| sig.to_string())
}

/// Compute the fuzzy hash of `input` as a parsed [`Signature`].
///
/// # Errors
/// Same as [`hash`].
pub fn hash_signature(input: &[u8]) -> Result<Signature, SpamsumError> {
    let mut hasher = SpamsumHasher::new();
    hasher.update(input);
    hasher.finalize()
}
