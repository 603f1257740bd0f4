//! Fuzzy CLI
//!
//! ssdeep-style fuzzy hashing from the command line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, compare_signatures, hash_files, DEFAULT_THRESHOLD};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "fuzzy")]
#[command(about = "Context-triggered piecewise hashing (ssdeep compatible)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the similarity of two signatures (0-100)
    Compare {
        /// First signature
        left: String,
        /// Second signature
        right: String,
    },
    /// Re-hash the files of a signature list and report changes
    Check {
        #[arg(value_name = "FILE")]
        signature_file: PathBuf,

        /// Minimum score counted as unchanged
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u32,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ok = match &cli.command {
        Some(Commands::Compare { left, right }) => compare_signatures(left, right)?,
        Some(Commands::Check {
            signature_file,
            threshold,
        }) => check_mode(signature_file, *threshold)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: fuzzy [FILE]... or fuzzy --help");
                return Ok(ExitCode::FAILURE);
            }

            hash_files(&cli.files)?
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
