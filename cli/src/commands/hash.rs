//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use rayon::prelude::*;
use spamsum::Signature;
use std::io::Read;
use std::path::{Path, PathBuf};

/// First line of every signature list, as written by ssdeep.
pub const HEADER: &str = "ssdeep,1.1--blocksize:hash:hash,filename";

const BUFFER_SIZE: usize = 128 * 1024;

/// Stream a file through the fuzzy hasher.
pub fn hash_file(path: &Path) -> Result<Signature> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut hasher = spamsum::Hasher::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let n = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    hasher
        .finalize()
        .with_context(|| format!("Failed to hash: {}", path.display()))
}

/// Hash files in parallel and print a signature list in input order.
///
/// Returns `false` if any file could not be hashed.
pub fn hash_files(files: &[PathBuf]) -> Result<bool> {
    let results: Vec<_> = files.par_iter().map(|path| hash_file(path)).collect();

    println!("{HEADER}");
    let mut failed = 0;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(sig) => println!("{sig},\"{}\"", path.display()),
            Err(e) => {
                tracing::debug!(path = %path.display(), "hash failed");
                eprintln!("Error: {e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("Failed to hash {failed} file(s)");
    }
    Ok(failed == 0)
}
