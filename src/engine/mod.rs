//! Core toggle engine.
//!
//! Implements the switch-board model and the brute-force simulation:
//! - `SwitchCount` validated input (negative counts are unrepresentable)
//! - `SwitchState` owned on/off flags
//! - `OnSwitchSet` sorted result consumed by renderers and cross-checks

pub mod simulator;
pub mod state;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use simulator::simulate;
pub use state::{OnSwitchSet, SwitchState};

use crate::error::{SwitchError, SwitchResult};

/// Total number of switches on the board.
///
/// Zero is a valid count (no passes run, nothing ends on). Negative counts
/// are rejected at construction with [`SwitchError::InvalidInput`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SwitchCount(usize);

impl SwitchCount {
    /// Create a switch count.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    /// Number of switches.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether the board has no switches.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for SwitchCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for SwitchCount {
    type Error = SwitchError;

    fn try_from(value: i64) -> SwitchResult<Self> {
        usize::try_from(value).map(Self).map_err(|_| {
            SwitchError::invalid_input(format!(
                "switch count must not be negative, got {value}"
            ))
        })
    }
}

impl FromStr for SwitchCount {
    type Err = SwitchError;

    fn from_str(s: &str) -> SwitchResult<Self> {
        let value: i64 = s.trim().parse().map_err(|_| {
            SwitchError::invalid_input(format!("switch count must be an integer, got '{s}'"))
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for SwitchCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
