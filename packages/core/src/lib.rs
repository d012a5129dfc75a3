//! auto-sshconfig-core - Core library for auto-sshconfig
//!
//! Everything the CLI needs to provision a host: SSH config block editing,
//! per-host key generation, public key installation and a connectivity probe.
//! All operations take their paths and tool names explicitly.

pub mod config;
pub mod host;
pub mod version;

// Re-export version functions for Rust consumers
pub use version::{get_version, get_version_long};

pub use config::{Settings, SshPaths, load_settings};
pub use host::{
    HostEntry, HostError, HostKeyStatus, InstallOutcome, KeyPair, ManualInstall, RemoteTarget,
    SetupRequest, ToolOutcome, Tools, ensure_ssh_dir, generate_key, install_public_key,
    list_configured_hosts, probe_connection, prune_known_hosts, remove_host_entry,
    remove_key_files, upsert_host_entry, validate_alias,
};
