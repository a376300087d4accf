//! Brute-force toggle simulation.
//!
//! # Governing Rule
//!
//! ```text
//! for k in 1..=n:
//!     toggle every position k·m ≤ n   (m = 1, 2, 3, ...)
//! ```
//!
//! Cost is Σ n/k = O(n · H(n)) ≈ n ln n toggles.

use tracing::debug;

use super::{OnSwitchSet, SwitchCount, SwitchState};

/// Run all `n` passes over a fresh board and report the switches left on.
///
/// `n = 0` runs no passes and returns an empty set.
#[must_use]
pub fn simulate(n: SwitchCount) -> OnSwitchSet {
    let count = n.get();
    let mut state = SwitchState::new(n);
    let mut toggles: u64 = 0;

    for pass in 1..=count {
        for position in (pass..=count).step_by(pass) {
            state.toggle(position);
            toggles += 1;
        }
    }

    let on = state.on_switches();
    debug!(switches = count, toggles, on = on.len(), "simulation finished");
    on
}
