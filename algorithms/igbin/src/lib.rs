//! # igbin
//!
//! Compact binary serialization compatible with the igbinary format
//! (version 2). Covers the scalar types, byte strings and ordered arrays;
//! objects and references are rejected on decode.

//! # Usage
//! ```rust
//! use igbin::Value;
//!
//! let value: Value = [("Ahoj", "světe")].into_iter().collect();
//! let bytes = igbin::to_vec(&value)?;
//! assert_eq!(igbin::from_slice(&bytes)?, value);
//! # Ok::<(), igbin::IgbinaryError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod constants;
mod decode;
mod encode;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use decode::from_slice;
pub use encode::to_vec;
pub use types::{Array, IgbinaryError, Key, Value};
