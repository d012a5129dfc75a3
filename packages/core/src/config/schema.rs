//! Settings schema for auto-sshconfig
//!
//! Defines the structure and defaults for the optional config.json file.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::host::Tools;

/// User settings
///
/// Read from `~/.config/auto-sshconfig/config.json` (JSONC). Every field has a
/// default, so an empty object is a valid file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Settings file version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// SSH directory override (default: `~/.ssh`)
    #[serde(default)]
    pub ssh_dir: Option<PathBuf>,

    /// Username used when the setup prompt is left blank (default: "root")
    #[serde(default = "default_user")]
    pub default_user: String,

    /// ConnectTimeout passed to the final connectivity probe, in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Key generation binary (default: "ssh-keygen")
    #[serde(default = "default_ssh_keygen_bin")]
    pub ssh_keygen_bin: String,

    /// Public key installation binary (default: "ssh-copy-id")
    #[serde(default = "default_ssh_copy_id_bin")]
    pub ssh_copy_id_bin: String,

    /// SSH client binary (default: "ssh")
    #[serde(default = "default_ssh_bin")]
    pub ssh_bin: String,
}

fn default_version() -> u32 {
    1
}

fn default_user() -> String {
    "root".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_ssh_keygen_bin() -> String {
    "ssh-keygen".to_string()
}

fn default_ssh_copy_id_bin() -> String {
    "ssh-copy-id".to_string()
}

fn default_ssh_bin() -> String {
    "ssh".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            ssh_dir: None,
            default_user: default_user(),
            connect_timeout_secs: default_connect_timeout_secs(),
            ssh_keygen_bin: default_ssh_keygen_bin(),
            ssh_copy_id_bin: default_ssh_copy_id_bin(),
            ssh_bin: default_ssh_bin(),
        }
    }
}

impl Settings {
    /// External tool names as configured
    pub fn tools(&self) -> Tools {
        Tools {
            ssh_keygen: self.ssh_keygen_bin.clone(),
            ssh_copy_id: self.ssh_copy_id_bin.clone(),
            ssh: self.ssh_bin.clone(),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
