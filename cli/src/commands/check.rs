//! Check Command
//!
//! Re-hash the files of a signature list (like `ssdeep -m`) and report
//! which ones changed.

use super::hash::{hash_file, HEADER};
use anyhow::{Context, Result};
use spamsum::Signature;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Score at or above which a file counts as unchanged.
pub const DEFAULT_THRESHOLD: u32 = 100;

// =============================================================================
// PARSING
// =============================================================================

/// Split `<signature>,"<path>"` into its parts.
fn parse_line(line: &str) -> Option<(Signature, PathBuf)> {
    let (sig, path) = line.split_once(',')?;
    let path = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path);
    if path.is_empty() {
        return None;
    }
    Some((sig.parse().ok()?, PathBuf::from(path)))
}

// =============================================================================
// CHECK
// =============================================================================

/// Verify every file listed in `signature_file`.
///
/// Returns `false` if any file scored below `threshold` or could not be read.
pub fn check_mode(signature_file: &Path, threshold: u32) -> Result<bool> {
    let file = File::open(signature_file)
        .with_context(|| format!("Failed to open: {}", signature_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line == HEADER {
            continue;
        }

        let Some((expected, path)) = parse_line(line) else {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        };
        total += 1;

        match hash_file(&path) {
            Ok(actual) => {
                let score = expected.similarity(&actual);
                if score >= threshold {
                    println!("{}: OK ({score})", path.display());
                } else {
                    println!("{}: CHANGED ({score})", path.display());
                    failed += 1;
                }
            }
            Err(e) => {
                println!("{}: FAILED ({e:#})", path.display());
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} files unchanged");
    } else {
        eprintln!("WARNING: {failed} of {total} files changed or unreadable");
    }

    Ok(failed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_line() {
        let (sig, path) = parse_line("3:kKPFUB:kKqB,\"dir/a, b.txt\"").unwrap();
        assert_eq!(sig.to_string(), "3:kKPFUB:kKqB");
        assert_eq!(path, PathBuf::from("dir/a, b.txt"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_line("no comma here").is_none());
        assert!(parse_line("3:abc:def,").is_none());
        assert!(parse_line("x:abc:def,\"f\"").is_none());
    }
}
