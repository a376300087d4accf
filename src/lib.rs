//! # lightswitch
//!
//! The light-switch (or locker) toggling puzzle, solved twice.
//!
//! N switches start off. Pass k toggles every switch whose index is a
//! multiple of k. After N passes, which switches are on?
//!
//! - [`engine`] answers by brute force: it runs every pass.
//! - [`domains`] answers in closed form: switch i is toggled once per divisor
//!   of i, so it ends on iff i has an odd divisor count, i.e. is a perfect
//!   square.
//! - [`cross_check`] runs both and falsifies either against the other and
//!   against the perfect squares.
//! - [`renderers`] draws the final board as a text grid.
//!
//! ## Example
//!
//! ```rust
//! use lightswitch::prelude::*;
//!
//! let n = SwitchCount::new(20);
//! let report = run_cross_check(n);
//! assert!(report.verified());
//! assert_eq!(report.simulated.as_slice(), &[1, 4, 9, 16]);
//!
//! let grid = render(n, &report.analyzed).unwrap();
//! assert!(grid.ends_with("Rows: 5, Cols: 4\n"));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod cross_check;
pub mod domains;
pub mod engine;
pub mod error;
pub mod renderers;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{PuzzleConfig, PuzzleConfigBuilder};
    pub use crate::cross_check::{run_cross_check, sweep, CrossCheckReport, SweepSummary};
    pub use crate::domains::{
        analyze, count_divisors, factorize, is_odd_divisor_count, perfect_squares,
        DivisorCount, PrimeFactorList,
    };
    pub use crate::engine::{simulate, OnSwitchSet, SwitchCount, SwitchState};
    pub use crate::error::{SwitchError, SwitchResult};
    pub use crate::renderers::{render, GridLayout};
}

/// Re-export for public API
pub use error::{SwitchError, SwitchResult};
