//! # Spamsum
//!
//! Context-triggered piecewise hashing, signature-compatible with ssdeep.
//! Similar inputs produce similar signatures, and [`compare`] scores how
//! alike two signatures are.

//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let sig = spamsum::hash("ahoj světe".as_bytes())?;
//! assert!(sig.starts_with("3:"));
//!
//! // 2. Streaming (files, sockets)
//! use spamsum::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update("ahoj ".as_bytes());
//! hasher.update("světe".as_bytes());
//! assert_eq!(hasher.finalize()?.to_string(), sig);
//!
//! // 3. Similarity
//! assert_eq!(spamsum::compare(&sig, &sig)?, 100);
//! # Ok::<(), spamsum::SpamsumError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod compare;
pub mod constants;
mod oneshot;
mod roll;
mod signature;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use compare::compare;
pub use oneshot::{hash, hash_signature};
pub use signature::Signature;
pub use streaming::SpamsumHasher as Hasher;
pub use types::SpamsumError;
