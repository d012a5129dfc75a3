//! Remote public key installation
//!
//! Wraps `ssh-copy-id`. When it fails, the caller gets the key text and the
//! one-liner the operator can paste on the server instead.

use std::fmt;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use super::error::HostError;
use super::keys::KeyPair;
use super::process::{ToolOutcome, Tools, run_interactive};

/// `user@address` of the server receiving the key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    pub user: String,
    pub address: String,
}

impl RemoteTarget {
    pub fn new(user: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            address: address.into(),
        }
    }
}

impl FromStr for RemoteTarget {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('@').collect();
        match parts.as_slice() {
            [user, address] if !user.is_empty() && !address.is_empty() => {
                Ok(Self::new(*user, *address))
            }
            _ => Err(HostError::InvalidTarget(s.to_string())),
        }
    }
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.address)
    }
}

/// Manual fallback when automatic installation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualInstall {
    /// Public key file contents, as read
    pub public_key: String,
    /// Shell command appending the key on the server; `None` without key text
    pub command: Option<String>,
}

impl ManualInstall {
    pub fn from_public_key(public_key: String) -> Self {
        let key = public_key.trim();
        let command = (!key.is_empty())
            .then(|| format!("echo '{key}' >> ~/.ssh/authorized_keys"));
        Self {
            public_key,
            command,
        }
    }

    /// Read the public key file; an unreadable file yields no command
    pub fn read(path: &Path) -> Self {
        let public_key = fs::read_to_string(path).unwrap_or_else(|e| {
            tracing::warn!("Could not read public key {}: {}", path.display(), e);
            String::new()
        });
        Self::from_public_key(public_key)
    }
}

/// Result of trying to install a public key
#[derive(Debug, Clone)]
pub enum InstallOutcome {
    /// `ssh-copy-id` succeeded
    Installed,
    /// `ssh-copy-id` failed; the operator must install the key by hand
    Manual {
        outcome: ToolOutcome,
        fallback: ManualInstall,
    },
}

fn copy_id_command(tools: &Tools, public_key: &Path, target: &RemoteTarget) -> Command {
    let mut cmd = Command::new(&tools.ssh_copy_id);
    cmd.arg("-i")
        .arg(public_key)
        .arg("-o")
        .arg("StrictHostKeyChecking=no")
        .arg(target.to_string());
    cmd
}

/// Install the public key of `keys` on `target`
///
/// `ssh-copy-id` runs attached to the terminal so password prompts reach the
/// operator. Fails only when the public key file does not exist.
pub fn install_public_key(
    tools: &Tools,
    keys: &KeyPair,
    target: &RemoteTarget,
) -> Result<InstallOutcome, HostError> {
    if !keys.public_key.exists() {
        return Err(HostError::PublicKeyMissing(keys.public_key.clone()));
    }

    let outcome = run_interactive(&mut copy_id_command(tools, &keys.public_key, target));
    if outcome.success() {
        tracing::info!("Installed {} on {}", keys.public_key.display(), target);
        return Ok(InstallOutcome::Installed);
    }

    tracing::warn!(
        "Public key installation on {} failed: {}",
        target,
        outcome.failure_detail()
    );
    Ok(InstallOutcome::Manual {
        outcome,
        fallback: ManualInstall::read(&keys.public_key),
    })
}
