//! Answers collected by interactive setup

use super::error::HostError;
use super::install::RemoteTarget;
use super::keys::KeyPair;
use super::ssh_config::HostEntry;

/// Check that `alias` can be used as a `Host` pattern and in a key file name
///
/// Returns the trimmed alias. It must be non-empty and free of whitespace and `/`.
pub fn validate_alias(alias: &str) -> Result<&str, HostError> {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(HostError::InvalidConfig("host alias is empty".to_string()));
    }
    if alias.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(HostError::InvalidConfig(format!(
            "host alias '{alias}' must not contain spaces or '/'"
        )));
    }
    Ok(alias)
}

/// Validated alias/address/user triple driving a full setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupRequest {
    pub alias: String,
    pub address: String,
    pub user: String,
}

impl SetupRequest {
    /// Build a request from raw prompt answers
    ///
    /// Answers are trimmed; a blank user becomes `default_user`. The alias goes
    /// through [`validate_alias`] and the address must be non-empty.
    pub fn new(
        alias: &str,
        address: &str,
        user: &str,
        default_user: &str,
    ) -> Result<Self, HostError> {
        let alias = validate_alias(alias)?;
        let address = address.trim();
        let user = user.trim();

        if address.is_empty() {
            return Err(HostError::InvalidConfig("address is empty".to_string()));
        }

        Ok(Self {
            alias: alias.to_string(),
            address: address.to_string(),
            user: if user.is_empty() { default_user } else { user }.to_string(),
        })
    }

    pub fn target(&self) -> RemoteTarget {
        RemoteTarget::new(&self.user, &self.address)
    }

    /// Config block pointing the alias at the generated private key
    pub fn host_entry(&self, keys: &KeyPair) -> HostEntry {
        HostEntry {
            alias: self.alias.clone(),
            hostname: self.address.clone(),
            user: self.user.clone(),
            identity_file: keys.private_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SshPaths;
    use crate::host::ssh_config::{host_aliases, upsert_host_entry};
    use tempfile::TempDir;

    #[test]
    fn test_blank_user_defaults_to_root() {
        let request = SetupRequest::new("test", "1.2.3.4", "", "root").unwrap();
        assert_eq!(request.user, "root");
        assert_eq!(request.target().to_string(), "root@1.2.3.4");
    }

    #[test]
    fn test_answers_are_trimmed() {
        let request = SetupRequest::new(" web \n", "10.0.0.5\n", " deploy\n", "root").unwrap();
        assert_eq!(request.alias, "web");
        assert_eq!(request.address, "10.0.0.5");
        assert_eq!(request.user, "deploy");
    }

    #[test]
    fn test_empty_alias_or_address_rejected() {
        assert!(SetupRequest::new("", "1.2.3.4", "", "root").is_err());
        assert!(SetupRequest::new("a", "  ", "", "root").is_err());
        assert!(SetupRequest::new("my host", "1.2.3.4", "", "root").is_err());
        assert!(SetupRequest::new("../x", "1.2.3.4", "", "root").is_err());
    }

    #[test]
    fn test_validate_alias() {
        assert_eq!(validate_alias(" vpstest\n").unwrap(), "vpstest");
        for bad in ["", "   ", "my host", "../x", "a/b", "a\tb"] {
            assert!(
                matches!(validate_alias(bad), Err(HostError::InvalidConfig(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_setup_writes_identity_file_for_alias() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path());
        let request = SetupRequest::new("test", "1.2.3.4", "", "root").unwrap();
        let keys = KeyPair::for_alias(&paths, &request.alias);

        let written = upsert_host_entry(&paths, &request.host_entry(&keys)).unwrap();
        let content = std::fs::read_to_string(written).unwrap();

        assert_eq!(host_aliases(&content), vec!["test"]);
        assert!(content.contains("    User root\n"));
        assert!(content.contains("    HostName 1.2.3.4\n"));
        assert!(content.contains(&format!(
            "    IdentityFile {}\n",
            dir.path().join("id_rsa_test").display()
        )));
    }
}
