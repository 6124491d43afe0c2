//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{Action, App, action_for_key, run_tui};
