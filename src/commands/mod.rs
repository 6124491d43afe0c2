//! Command implementations

pub mod check;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_guess};
pub use simple::{run_simple, run_simple_with};
pub use stats::{StatsReport, read_stats, reset_stats};
