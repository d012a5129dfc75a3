//! CLI command implementations
//!
//! One module per invocation mode: interactive setup, show, delete, copy.

mod copy;
mod delete;
mod setup;
mod show;

pub use copy::{CopyArgs, cmd_copy};
pub use delete::{DeleteArgs, cmd_delete};
pub use setup::cmd_setup;
pub use show::{ShowArgs, cmd_show};
