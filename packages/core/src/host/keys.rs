//! Per-host key management
//!
//! Keys live at `<ssh-dir>/id_rsa_<alias>` and are always RSA 4096 without a
//! passphrase. Generation shells out to `ssh-keygen`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use super::error::HostError;
use super::process::{ToolOutcome, Tools, run_captured};
use crate::config::SshPaths;

/// Key size passed to `ssh-keygen -b`
pub const KEY_BITS: u32 = 4096;

/// Private/public key paths for one alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: PathBuf,
    pub public_key: PathBuf,
}

impl KeyPair {
    pub fn for_alias(paths: &SshPaths, alias: &str) -> Self {
        Self {
            private_key: paths.private_key(alias),
            public_key: paths.public_key(alias),
        }
    }
}

/// Create the SSH directory with mode 0700 if it is missing
pub fn ensure_ssh_dir(paths: &SshPaths) -> Result<(), HostError> {
    let ssh_dir = paths.ssh_dir();
    if ssh_dir.exists() {
        return Ok(());
    }

    fs::create_dir_all(ssh_dir)
        .map_err(|e| HostError::SshDir(format!("Failed to create {}: {e}", ssh_dir.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(ssh_dir, fs::Permissions::from_mode(0o700))
            .map_err(|e| HostError::SshDir(format!("Failed to set .ssh permissions: {e}")))?;
    }

    tracing::info!("Created SSH directory {}", ssh_dir.display());
    Ok(())
}

/// Forget stored host keys for `address` (`ssh-keygen -R`)
///
/// Best-effort: a failure here is only logged.
pub fn prune_known_hosts(tools: &Tools, address: &str) -> ToolOutcome {
    let outcome = run_captured(Command::new(&tools.ssh_keygen).arg("-R").arg(address));
    if !outcome.success() {
        tracing::debug!(
            "known_hosts pruning for {} failed: {}",
            address,
            outcome.failure_detail()
        );
    }
    outcome
}

/// Delete both key files if present, returning the ones actually removed
pub fn remove_key_files(keys: &KeyPair) -> Vec<PathBuf> {
    let mut removed = Vec::new();

    for path in [&keys.private_key, &keys.public_key] {
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                removed.push(path.clone());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::debug!("Could not remove {}: {}", path.display(), e),
        }
    }

    removed
}

/// Build the `ssh-keygen` invocation for a fresh key
fn keygen_command(tools: &Tools, keys: &KeyPair, comment: &str) -> Command {
    let mut cmd = Command::new(&tools.ssh_keygen);
    cmd.arg("-t")
        .arg("rsa")
        .arg("-b")
        .arg(KEY_BITS.to_string())
        .arg("-f")
        .arg(&keys.private_key)
        .arg("-N")
        .arg("")
        .arg("-C")
        .arg(comment);
    cmd
}

/// Generate a new keypair for `alias`, replacing any existing one
///
/// The key comment is `<user>@<address>`. Returns an error when `ssh-keygen`
/// cannot be run or exits non-zero.
pub fn generate_key(
    paths: &SshPaths,
    tools: &Tools,
    alias: &str,
    user: &str,
    address: &str,
) -> Result<KeyPair, HostError> {
    let keys = KeyPair::for_alias(paths, alias);
    remove_key_files(&keys);

    let comment = format!("{user}@{address}");
    let outcome = run_captured(&mut keygen_command(tools, &keys, &comment));
    if !outcome.success() {
        return Err(HostError::KeygenFailed(outcome.failure_detail()));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(&keys.private_key, fs::Permissions::from_mode(0o600))
        {
            tracing::warn!(
                "Could not restrict permissions on {}: {}",
                keys.private_key.display(),
                e
            );
        }
    }

    tracing::info!("Generated key {}", keys.private_key.display());
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    fn tools_with_keygen(bin: &str) -> Tools {
        Tools {
            ssh_keygen: bin.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keygen_arguments() {
        let paths = SshPaths::new("/home/me/.ssh");
        let keys = KeyPair::for_alias(&paths, "vps");
        let cmd = keygen_command(&Tools::default(), &keys, "root@1.2.3.4");

        assert_eq!(cmd.get_program(), "ssh-keygen");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            [
                "-t",
                "rsa",
                "-b",
                "4096",
                "-f",
                "/home/me/.ssh/id_rsa_vps",
                "-N",
                "",
                "-C",
                "root@1.2.3.4"
            ]
        );
    }

    #[test]
    fn test_remove_key_files_reports_only_existing() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path());
        let keys = KeyPair::for_alias(&paths, "a");
        fs::write(&keys.public_key, "pub").unwrap();

        let removed = remove_key_files(&keys);
        assert_eq!(removed, vec![keys.public_key.clone()]);
        assert!(!keys.public_key.exists());
        assert!(remove_key_files(&keys).is_empty());
    }

    #[test]
    fn test_generate_failure_is_keygen_error() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path());

        let err = generate_key(&paths, &tools_with_keygen("false"), "a", "root", "1.2.3.4")
            .unwrap_err();
        assert!(matches!(err, HostError::KeygenFailed(_)));
    }

    #[test]
    fn test_generate_missing_tool_is_keygen_error() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path());

        let err = generate_key(
            &paths,
            &tools_with_keygen("auto-sshconfig-no-such-keygen"),
            "a",
            "root",
            "1.2.3.4",
        )
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_generate_clears_previous_keys() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path());
        let old = KeyPair::for_alias(&paths, "a");
        fs::write(&old.private_key, "old").unwrap();
        fs::write(&old.public_key, "old.pub").unwrap();

        let keys = generate_key(&paths, &tools_with_keygen("true"), "a", "root", "1.2.3.4")
            .unwrap();
        assert_eq!(keys, old);
        assert!(!keys.private_key.exists());
        assert!(!keys.public_key.exists());
    }

    #[test]
    fn test_prune_failure_is_not_an_error() {
        let outcome = prune_known_hosts(&tools_with_keygen("false"), "1.2.3.4");
        assert!(!outcome.success());
    }

    #[test]
    fn test_ensure_ssh_dir_creates_nested_dir() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path().join("home").join(".ssh"));
        ensure_ssh_dir(&paths).unwrap();
        assert!(paths.ssh_dir().is_dir());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(paths.ssh_dir()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }
}
