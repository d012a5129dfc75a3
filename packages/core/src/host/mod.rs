//! Host provisioning module
//!
//! Provides functionality for provisioning SSH access to a remote host:
//! - SSH config reading and block editing
//! - Per-host key generation and cleanup
//! - Public key installation and connectivity probing

mod error;
mod install;
mod keys;
mod probe;
mod process;
mod setup;
pub mod ssh_config;

// Public exports
pub use error::HostError;
pub use install::{InstallOutcome, ManualInstall, RemoteTarget, install_public_key};
pub use keys::{KEY_BITS, KeyPair, ensure_ssh_dir, generate_key, prune_known_hosts, remove_key_files};
pub use probe::{PROBE_COMMAND, probe_connection};
pub use process::{ToolOutcome, Tools};
pub use setup::{SetupRequest, validate_alias};
pub use ssh_config::{
    HostEntry, HostKeyStatus, list_configured_hosts, remove_host_entry, upsert_host_entry,
};
