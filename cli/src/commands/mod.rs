//! CLI Commands
//!
//! All fuzzy CLI commands organized as separate modules.

mod check;
mod compare;
mod hash;

pub use check::{check_mode, DEFAULT_THRESHOLD};
pub use compare::compare_signatures;
pub use hash::hash_files;
