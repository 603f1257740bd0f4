//! Verifier
//!
//! Runs checks and collects one `Outcome` per check into a `Report`.
//! Aggregate mode runs everything (on rayon when asked); fail-fast mode
//! runs in order and skips the rest after the first failure.

use crate::check::{Check, CheckKind};
use crate::config::{FailureMode, VerifierConfig};
use crate::error::{CheckError, CheckFailure, VerificationError};
use crate::registry;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

// =============================================================================
// RESULTS
// =============================================================================

/// How a single check ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The property held.
    Passed,
    /// The property was violated or could not be tested.
    Failed(CheckError),
    /// Not run because an earlier check failed in fail-fast mode.
    Skipped,
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Which check.
    pub kind: CheckKind,
    /// How it ended.
    pub status: Status,
    /// Wall time spent in the check. Zero when skipped.
    pub elapsed: Duration,
}

/// All outcomes of a run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// One entry per selected check.
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, Status::Passed))
    }

    /// Number of checks that failed.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, Status::Failed(_)))
    }

    /// Number of checks skipped after a fail-fast stop.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, Status::Skipped))
    }

    /// Whether no check failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Collapse into the aggregate result.
    ///
    /// # Errors
    /// Every failed check, in execution order.
    pub fn into_result(self) -> Result<(), VerificationError> {
        let failures: Vec<_> = self
            .outcomes
            .into_iter()
            .filter_map(|outcome| match outcome.status {
                Status::Failed(error) => Some(CheckFailure {
                    kind: outcome.kind,
                    error,
                }),
                Status::Passed | Status::Skipped => None,
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(VerificationError { failures })
        }
    }

    fn count(&self, pred: impl Fn(&Status) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

// =============================================================================
// VERIFIER
// =============================================================================

/// A configured set of checks.
pub struct Verifier {
    checks: Vec<Box<dyn Check>>,
    failure_mode: FailureMode,
    parallel: bool,
}

impl Verifier {
    /// Every check `config` selects, configured from `config`.
    pub fn new(config: &VerifierConfig) -> Self {
        Self {
            checks: registry::build_selected(config),
            failure_mode: config.failure_mode,
            parallel: config.runs_parallel(),
        }
    }

    /// An explicit list of checks, run sequentially.
    pub fn with_checks(checks: Vec<Box<dyn Check>>, failure_mode: FailureMode) -> Self {
        Self {
            checks,
            failure_mode,
            parallel: false,
        }
    }

    /// Kinds of the checks this verifier runs, in order.
    pub fn kinds(&self) -> Vec<CheckKind> {
        self.checks.iter().map(|c| c.kind()).collect()
    }

    /// Run the checks.
    pub fn run(&self) -> Report {
        let outcomes = match self.failure_mode {
            FailureMode::FailFast => self.run_fail_fast(),
            FailureMode::Aggregate if self.parallel => {
                self.checks.par_iter().map(|c| run_one(c.as_ref())).collect()
            }
            FailureMode::Aggregate => self.checks.iter().map(|c| run_one(c.as_ref())).collect(),
        };
        Report { outcomes }
    }

    fn run_fail_fast(&self) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(self.checks.len());
        let mut halted = false;

        for check in &self.checks {
            if halted {
                outcomes.push(Outcome {
                    kind: check.kind(),
                    status: Status::Skipped,
                    elapsed: Duration::ZERO,
                });
                continue;
            }

            let outcome = run_one(check.as_ref());
            halted = matches!(outcome.status, Status::Failed(_));
            outcomes.push(outcome);
        }

        if halted {
            debug!("fail-fast stop, remaining checks skipped");
        }
        outcomes
    }
}

fn run_one(check: &dyn Check) -> Outcome {
    let kind = check.kind();
    debug!(check = %kind, "running");

    let start = Instant::now();
    let result = check.run();
    let elapsed = start.elapsed();

    let status = match result {
        Ok(()) => {
            info!(check = %kind, elapsed = ?elapsed, "passed");
            Status::Passed
        }
        Err(error) => {
            warn!(check = %kind, %error, "failed");
            Status::Failed(error)
        }
    };

    Outcome {
        kind,
        status,
        elapsed,
    }
}
