//! Compare Command
//!
//! Score two signatures given on the command line.

use anyhow::{Context, Result};
use spamsum::Signature;

/// Print the similarity score of two signatures.
pub fn compare_signatures(left: &str, right: &str) -> Result<bool> {
    let a: Signature = left
        .parse()
        .with_context(|| format!("Invalid signature: {left}"))?;
    let b: Signature = right
        .parse()
        .with_context(|| format!("Invalid signature: {right}"))?;

    println!("{}", a.similarity(&b));
    Ok(true)
}
