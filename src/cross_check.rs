//! Cross-checking the two independent algorithms.
//!
//! The brute-force simulation is the reference; the divisor analysis is the
//! closed form. Each run records three falsification criteria:
//!
//! | ID              | Claim                                      |
//! |-----------------|--------------------------------------------|
//! | `LS-AGREE`      | simulation == divisor analysis             |
//! | `LS-SIM-SQUARE` | simulation == perfect squares ≤ n          |
//! | `LS-DIV-SQUARE` | divisor analysis == perfect squares ≤ n    |
//!
//! Both algorithms take only `n` and own all their state, so they are timed
//! and run one after the other with no data flowing between them.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info_span, warn};

use crate::domains::{analyze, perfect_squares};
use crate::engine::{simulate, OnSwitchSet, SwitchCount};
use crate::error::{SwitchError, SwitchResult};

/// Status of a single falsification criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionStatus {
    /// Criterion ID (e.g., "LS-AGREE").
    pub id: String,
    /// Criterion name.
    pub name: String,
    /// Whether it passed.
    pub passed: bool,
}

impl CriterionStatus {
    fn new(id: &str, name: &str, passed: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            passed,
        }
    }
}

/// Outcome of running both algorithms for one switch count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossCheckReport {
    /// Switch count both algorithms ran with.
    pub switches: SwitchCount,
    /// Switches left on by the brute-force simulation.
    pub simulated: OnSwitchSet,
    /// Wall-clock time of the simulation in seconds.
    pub simulation_secs: f64,
    /// Switches left on according to divisor-count parity.
    pub analyzed: OnSwitchSet,
    /// Wall-clock time of the divisor analysis in seconds.
    pub analysis_secs: f64,
    /// Falsification criteria and their status.
    pub criteria: Vec<CriterionStatus>,
}

impl CrossCheckReport {
    /// Whether every criterion passed.
    #[must_use]
    pub fn verified(&self) -> bool {
        self.criteria.iter().all(|c| c.passed)
    }

    /// Whether the two algorithms produced the same set.
    #[must_use]
    pub fn algorithms_agree(&self) -> bool {
        self.simulated == self.analyzed
    }

    /// Turn a failed report into an error.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::CrossCheckMismatch`] if any criterion failed.
    pub fn verify(&self) -> SwitchResult<()> {
        if self.verified() {
            Ok(())
        } else {
            Err(SwitchError::CrossCheckMismatch {
                n: self.switches.get(),
                simulated: self.simulated.clone(),
                analyzed: self.analyzed.clone(),
            })
        }
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Build the criteria list from two already-computed results.
#[must_use]
pub fn evaluate(
    n: SwitchCount,
    simulated: &OnSwitchSet,
    analyzed: &OnSwitchSet,
) -> Vec<CriterionStatus> {
    let squares = perfect_squares(n);
    vec![
        CriterionStatus::new(
            "LS-AGREE",
            "Simulation matches divisor analysis",
            simulated == analyzed,
        ),
        CriterionStatus::new(
            "LS-SIM-SQUARE",
            "Simulation leaves exactly the perfect squares on",
            *simulated == squares,
        ),
        CriterionStatus::new(
            "LS-DIV-SQUARE",
            "Odd divisor counts are exactly the perfect squares",
            *analyzed == squares,
        ),
    ]
}

/// Run the simulation and the divisor analysis for `n` switches and
/// compare them.
#[must_use]
pub fn run_cross_check(n: SwitchCount) -> CrossCheckReport {
    let span = info_span!("cross_check", switches = n.get());
    let _guard = span.enter();

    let (simulated, simulation_time) = timed(|| simulate(n));
    debug!(elapsed = ?simulation_time, "simulate");

    let (analyzed, analysis_time) = timed(|| analyze(n));
    debug!(elapsed = ?analysis_time, "analyze");

    let criteria = evaluate(n, &simulated, &analyzed);
    for failed in criteria.iter().filter(|c| !c.passed) {
        warn!(id = %failed.id, "criterion failed: {}", failed.name);
    }

    CrossCheckReport {
        switches: n,
        simulated,
        simulation_secs: simulation_time.as_secs_f64(),
        analyzed,
        analysis_secs: analysis_time.as_secs_f64(),
        criteria,
    }
}

/// Summary of a verification sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Number of switch counts checked.
    pub checked: usize,
    /// Largest switch count checked.
    pub max: SwitchCount,
}

/// Cross-check every switch count `1..=max`, stopping at the first failure.
///
/// # Errors
///
/// Returns [`SwitchError::CrossCheckMismatch`] for the first `n` where the
/// algorithms disagree with each other or with the perfect squares.
pub fn sweep(max: SwitchCount) -> SwitchResult<SweepSummary> {
    let span = info_span!("sweep", max = max.get());
    let _guard = span.enter();

    for count in 1..=max.get() {
        let n = SwitchCount::new(count);
        let simulated = simulate(n);
        let analyzed = analyze(n);
        if evaluate(n, &simulated, &analyzed).iter().any(|c| !c.passed) {
            warn!(switches = count, "sweep stopped at first mismatch");
            return Err(SwitchError::CrossCheckMismatch {
                n: count,
                simulated,
                analyzed,
            });
        }
    }

    debug!(checked = max.get(), "sweep passed");
    Ok(SweepSummary {
        checked: max.get(),
        max,
    })
}
