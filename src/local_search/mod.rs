//! Local search operators for improving tours.
//!
//! - [`two_opt`] — 2-opt edge exchange by value substitution

mod two_opt;

pub use two_opt::{two_opt_improve, TwoOptOutcome};
