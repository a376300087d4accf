//! Near-square grid rendering.
//!
//! ```text
//! columns = min(⌊√n⌋, 16)
//! rows    = ⌈n / columns⌉
//! cell(r, c) holds switch r·columns + c + 1
//! ```
//!
//! For n = 20 the board is 5 rows of 4 cells:
//!
//! ```text
//! 1    |      |      | 4
//!      |      |      |
//!      |      |      | 9
//! ...
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::engine::{OnSwitchSet, SwitchCount};
use crate::error::{SwitchError, SwitchResult};

/// Upper bound on grid width regardless of board size.
pub const MAX_COLUMNS: usize = 16;

/// Width of every cell, numbers are left-aligned and padded to it.
pub const CELL_WIDTH: usize = 5;

/// Text placed between adjacent cells of a row.
pub const COLUMN_SEPARATOR: &str = "| ";

/// Row and column counts for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Number of rows (the last one may be partial).
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

impl GridLayout {
    /// Compute the layout for `n` switches.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::InvalidInput`] for an empty board, which has
    /// no meaningful grid.
    pub fn for_switches(n: SwitchCount) -> SwitchResult<Self> {
        if n.is_zero() {
            return Err(SwitchError::invalid_input(
                "cannot lay out a grid for 0 switches",
            ));
        }
        let count = n.get();
        let columns = count.isqrt().min(MAX_COLUMNS);
        let rows = count.div_ceil(columns);
        Ok(Self { rows, columns })
    }

    /// 1-based switch index shown at `(row, column)`.
    #[must_use]
    pub const fn index_at(&self, row: usize, column: usize) -> usize {
        row * self.columns + column + 1
    }
}

/// Render the board as text: one line per grid row, then a
/// `Rows: R, Cols: C` summary line.
///
/// Cells past `n` in a partial last row are emitted blank.
///
/// # Errors
///
/// Returns [`SwitchError::InvalidInput`] when `n` is zero.
pub fn render(n: SwitchCount, on_set: &OnSwitchSet) -> SwitchResult<String> {
    let layout = GridLayout::for_switches(n)?;
    let mut out = String::new();

    for row in 0..layout.rows {
        let cells: Vec<String> = (0..layout.columns)
            .map(|column| {
                let index = layout.index_at(row, column);
                if index <= n.get() && on_set.contains(index) {
                    format!("{index:<CELL_WIDTH$}")
                } else {
                    " ".repeat(CELL_WIDTH)
                }
            })
            .collect();
        out.push_str(&cells.join(COLUMN_SEPARATOR));
        out.push('\n');
    }

    writeln!(out, "Rows: {}, Cols: {}", layout.rows, layout.columns)
        .map_err(|e| SwitchError::serialization(e.to_string()))?;
    Ok(out)
}
