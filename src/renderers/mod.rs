//! Text renderers for switch boards.
//!
//! Renderers only consume a [`SwitchCount`](crate::engine::SwitchCount) and an
//! [`OnSwitchSet`](crate::engine::OnSwitchSet); they never touch the engines.

pub mod grid;

pub use grid::{render, GridLayout, CELL_WIDTH, COLUMN_SEPARATOR, MAX_COLUMNS};
