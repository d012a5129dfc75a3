//! Path resolution for auto-sshconfig
//!
//! Two roots are involved:
//! - the tool's own settings under `~/.config/auto-sshconfig/`
//! - the SSH directory (`~/.ssh/` unless overridden) holding the client
//!   config and the per-host keypairs

use std::path::{Path, PathBuf};

/// Name of the SSH client configuration file inside the SSH directory
pub const SSH_CONFIG_FILE: &str = "config";

/// Prefix of every per-host private key file
pub const KEY_FILE_PREFIX: &str = "id_rsa_";

/// Get the settings directory path
///
/// Returns `~/.config/auto-sshconfig/` on every platform.
pub fn get_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("auto-sshconfig"))
}

/// Get the full path to the settings file
///
/// Returns: `{config_dir}/config.json`
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("config.json"))
}

/// Get the default SSH directory (`~/.ssh`)
pub fn get_default_ssh_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".ssh"))
}

/// Resolved file layout of one SSH directory
///
/// Every operation in [`crate::host`] takes this instead of looking up the
/// home directory itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshPaths {
    ssh_dir: PathBuf,
}

impl SshPaths {
    /// Use the given directory as the SSH directory
    pub fn new(ssh_dir: impl Into<PathBuf>) -> Self {
        Self {
            ssh_dir: ssh_dir.into(),
        }
    }

    /// The SSH directory itself
    pub fn ssh_dir(&self) -> &Path {
        &self.ssh_dir
    }

    /// `<ssh-dir>/config`
    pub fn config_file(&self) -> PathBuf {
        self.ssh_dir.join(SSH_CONFIG_FILE)
    }

    /// `<ssh-dir>/id_rsa_<alias>`
    pub fn private_key(&self, alias: &str) -> PathBuf {
        self.ssh_dir.join(format!("{KEY_FILE_PREFIX}{alias}"))
    }

    /// `<ssh-dir>/id_rsa_<alias>.pub`
    pub fn public_key(&self, alias: &str) -> PathBuf {
        self.ssh_dir.join(format!("{KEY_FILE_PREFIX}{alias}.pub"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_with_config_json() {
        let path = get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.ends_with("auto-sshconfig/config.json"));
    }

    #[test]
    fn test_default_ssh_dir_ends_with_dot_ssh() {
        let dir = get_default_ssh_dir().unwrap();
        assert!(dir.ends_with(".ssh"));
    }

    #[test]
    fn test_key_paths_derive_from_alias() {
        let paths = SshPaths::new("/home/me/.ssh");
        assert_eq!(paths.config_file(), PathBuf::from("/home/me/.ssh/config"));
        assert_eq!(
            paths.private_key("vpstest"),
            PathBuf::from("/home/me/.ssh/id_rsa_vpstest")
        );
        assert_eq!(
            paths.public_key("vpstest"),
            PathBuf::from("/home/me/.ssh/id_rsa_vpstest.pub")
        );
    }
}
