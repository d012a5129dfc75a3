//! Output utilities for CLI commands
//!
//! Spinners for the non-interactive tool runs and the styled line builders
//! used by `show` and setup.

pub mod colors;
pub mod spinner;

pub use colors::{host_status_line, ok_line, quiet_status_line, step_line};
pub use spinner::CommandSpinner;
