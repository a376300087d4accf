//! Switch-board state management.
//!
//! `SwitchState` is the mutable board a single computation owns.
//! `OnSwitchSet` is the immutable, sorted summary handed to everyone else.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SwitchCount;

/// On/off flags for switches `1..=n`, stored 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwitchState {
    flags: Vec<bool>,
}

impl SwitchState {
    /// Create a board with every switch off.
    #[must_use]
    pub fn new(n: SwitchCount) -> Self {
        Self {
            flags: vec![false; n.get()],
        }
    }

    /// Number of switches on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the board has no switches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flip the switch at 1-based `position`. Out-of-range positions are ignored.
    pub fn toggle(&mut self, position: usize) {
        if let Some(flag) = position
            .checked_sub(1)
            .and_then(|idx| self.flags.get_mut(idx))
        {
            *flag = !*flag;
        }
    }

    /// Collect the 1-based positions that are on.
    #[must_use]
    pub fn on_switches(&self) -> OnSwitchSet {
        OnSwitchSet(
            self.flags
                .iter()
                .enumerate()
                .filter_map(|(idx, &on)| on.then_some(idx + 1))
                .collect(),
        )
    }
}

/// Sorted, de-duplicated 1-based indices of switches that are on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OnSwitchSet(Vec<usize>);

impl OnSwitchSet {
    /// Build a set from arbitrary indices (sorted and de-duplicated here).
    #[must_use]
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }

    /// Whether `index` is on.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    /// Number of switches that are on.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no switch is on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indices as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Iterate over the indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Consume the set, returning the indices.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl FromIterator<usize> for OnSwitchSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for OnSwitchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}
