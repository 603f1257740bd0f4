//! Reporters
//!
//! Render a `Report` for humans or machines. The reporter is picked once
//! at startup from `ReportFormat`.

use crate::check::CheckKind;
use crate::verifier::{Outcome, Report, Status};
use serde::Serialize;
use std::io::{self, Write};

/// Output format of the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per check plus a summary.
    #[default]
    Human,
    /// A single JSON document.
    Json,
}

/// Sink for a finished run.
pub trait Reporter {
    /// Write `report`.
    ///
    /// # Errors
    /// The underlying writer failed.
    fn report(&mut self, report: &Report) -> io::Result<()>;
}

/// Build the reporter for `format`, writing to `out`.
pub fn reporter<'w, W: Write + 'w>(format: ReportFormat, out: W) -> Box<dyn Reporter + 'w> {
    match format {
        ReportFormat::Human => Box::new(HumanReporter::new(out)),
        ReportFormat::Json => Box::new(JsonReporter::new(out)),
    }
}

// =============================================================================
// HUMAN
// =============================================================================

/// `PASS`/`FAIL`/`SKIP` lines followed by a summary.
pub struct HumanReporter<W> {
    out: W,
}

impl<W: Write> HumanReporter<W> {
    /// Reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for HumanReporter<W> {
    fn report(&mut self, report: &Report) -> io::Result<()> {
        for outcome in &report.outcomes {
            let kind = outcome.kind;
            let micros = outcome.elapsed.as_micros();
            match &outcome.status {
                Status::Passed => writeln!(self.out, "PASS {kind:<15} {micros:>8} us")?,
                Status::Failed(error) => writeln!(self.out, "FAIL {kind:<15} {error}")?,
                Status::Skipped => writeln!(self.out, "SKIP {kind}")?,
            }
        }
        writeln!(
            self.out,
            "\n{} passed, {} failed, {} skipped",
            report.passed(),
            report.failed(),
            report.skipped()
        )?;
        self.out.flush()
    }
}

// =============================================================================
// JSON
// =============================================================================

/// Whole report as one JSON object.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

#[derive(Serialize)]
struct JsonReport {
    success: bool,
    passed: usize,
    failed: usize,
    skipped: usize,
    checks: Vec<JsonOutcome>,
}

#[derive(Serialize)]
struct JsonOutcome {
    kind: CheckKind,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    elapsed_us: u64,
}

impl From<&Outcome> for JsonOutcome {
    fn from(outcome: &Outcome) -> Self {
        let (status, error) = match &outcome.status {
            Status::Passed => ("passed", None),
            Status::Failed(error) => ("failed", Some(error.to_string())),
            Status::Skipped => ("skipped", None),
        };
        Self {
            kind: outcome.kind,
            status,
            error,
            elapsed_us: u64::try_from(outcome.elapsed.as_micros()).unwrap_or(u64::MAX),
        }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, report: &Report) -> io::Result<()> {
        let doc = JsonReport {
            success: report.is_success(),
            passed: report.passed(),
            failed: report.failed(),
            skipped: report.skipped(),
            checks: report.outcomes.iter().map(JsonOutcome::from).collect(),
        };
        serde_json::to_writer_pretty(&mut self.out, &doc)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
