//! Roundtrip Verify
//!
//! Runs every codec check and exits 0 when all pass, 1 when any fails
//! and 2 on a configuration or output error.

use anyhow::{Context, Result};
use clap::Parser;
use roundtrip_verification::config::{
    BrotliParams, DEFAULT_BROTLI_QUALITY, DEFAULT_BROTLI_WINDOW, DEFAULT_ZSTD_LEVEL,
};
use roundtrip_verification::{
    report, CheckKind, FailureMode, ReportFormat, Reporter, Verifier, VerifierConfig,
};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "roundtrip-verify")]
#[command(about = "Verify compression, serialization and fuzzy-hash round trips", long_about = None)]
#[command(version)]
struct Cli {
    /// Stop at the first failing check
    #[arg(long, env = "ROUNDTRIP_FAIL_FAST")]
    fail_fast: bool,

    /// Run checks on the thread pool (ignored with --fail-fast)
    #[arg(long, env = "ROUNDTRIP_PARALLEL")]
    parallel: bool,

    /// Only run these checks (comma separated)
    #[arg(long, env = "ROUNDTRIP_ONLY", value_enum, value_delimiter = ',')]
    only: Vec<CheckKind>,

    /// Brotli quality (0-11)
    #[arg(long, env = "ROUNDTRIP_BROTLI_QUALITY", default_value_t = DEFAULT_BROTLI_QUALITY)]
    brotli_quality: u32,

    /// Brotli window, log2 (10-24)
    #[arg(long, env = "ROUNDTRIP_BROTLI_WINDOW", default_value_t = DEFAULT_BROTLI_WINDOW)]
    brotli_window: u32,

    /// Zstandard level (-7-22)
    #[arg(long, env = "ROUNDTRIP_ZSTD_LEVEL", default_value_t = DEFAULT_ZSTD_LEVEL, allow_hyphen_values = true)]
    zstd_level: i32,

    /// Report format
    #[arg(long, env = "ROUNDTRIP_FORMAT", value_enum, default_value_t = ReportFormat::Human)]
    format: ReportFormat,
}

impl Cli {
    fn config(&self) -> VerifierConfig {
        VerifierConfig {
            failure_mode: if self.fail_fast {
                FailureMode::FailFast
            } else {
                FailureMode::Aggregate
            },
            parallel: self.parallel,
            only: self.only.clone(),
            brotli: BrotliParams {
                quality: self.brotli_quality,
                lg_window: self.brotli_window,
            },
            zstd_level: self.zstd_level,
        }
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every check passed.
fn run(cli: &Cli) -> Result<bool> {
    let config = cli.config();
    config.validate().context("invalid configuration")?;

    let verifier = Verifier::new(&config);
    tracing::debug!(checks = ?verifier.kinds(), mode = ?config.failure_mode, "starting");
    let result = verifier.run();

    // Human output is diagnostics (stderr); JSON is the product (stdout).
    let mut reporter: Box<dyn Reporter> = match cli.format {
        ReportFormat::Human => report::reporter(cli.format, io::stderr().lock()),
        ReportFormat::Json => report::reporter(cli.format, io::stdout().lock()),
    };
    reporter.report(&result).context("failed to write report")?;

    Ok(result.is_success())
}
