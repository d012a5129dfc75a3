//! auto-sshconfig delete - Remove a host's config block and key files

use anyhow::Result;
use auto_sshconfig_core::{
    KeyPair, SshPaths, remove_host_entry, remove_key_files, validate_alias,
};
use clap::Args;
use console::style;

use crate::output::ok_line;

/// Arguments for the delete command
#[derive(Args)]
pub struct DeleteArgs {
    /// Host alias to remove (e.g., "vpstest")
    pub alias: String,

    /// Arguments after the ones above are ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

pub fn cmd_delete(args: &DeleteArgs, paths: &SshPaths, quiet: bool) -> Result<()> {
    let alias = validate_alias(&args.alias)?;

    if !quiet {
        println!("Removing SSH config for: {}", style(alias).cyan());
    }

    let keys = KeyPair::for_alias(paths, alias);
    for removed in remove_key_files(&keys) {
        if !quiet {
            println!("{}", ok_line(format!("Removed: {}", removed.display())));
        }
    }

    if remove_host_entry(paths, alias)? && !quiet {
        println!(
            "{}",
            ok_line(format!(
                "Removed from config: {}",
                paths.config_file().display()
            ))
        );
    }

    if !quiet {
        println!(
            "{} SSH config '{}' removed",
            style("Success:").green().bold(),
            alias
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_delete_removes_keys_and_block() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path());
        fs::write(paths.private_key("b"), "key").unwrap();
        fs::write(paths.public_key("b"), "pub").unwrap();
        fs::write(paths.private_key("a"), "key").unwrap();
        fs::write(
            paths.config_file(),
            "Host a\n    User x\nHost b\n    User y\nHost c\n    User z\n",
        )
        .unwrap();

        let args = DeleteArgs {
            alias: "b".to_string(),
            ignored: Vec::new(),
        };
        cmd_delete(&args, &paths, true).unwrap();

        assert!(!paths.private_key("b").exists());
        assert!(!paths.public_key("b").exists());
        assert!(paths.private_key("a").exists());
        assert_eq!(
            fs::read_to_string(paths.config_file()).unwrap(),
            "Host a\n    User x\nHost c\n    User z\n"
        );
    }

    #[test]
    fn test_delete_without_anything_succeeds() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path());
        let args = DeleteArgs {
            alias: "ghost".to_string(),
            ignored: Vec::new(),
        };

        cmd_delete(&args, &paths, true).unwrap();
        assert!(!paths.config_file().exists());
    }

    #[test]
    fn test_invalid_alias_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = SshPaths::new(dir.path());
        let config = "Host a/b\n    User x\n";
        fs::write(paths.config_file(), config).unwrap();

        for alias in ["a/b", "../x", " "] {
            let args = DeleteArgs {
                alias: alias.to_string(),
                ignored: Vec::new(),
            };
            assert!(cmd_delete(&args, &paths, true).is_err(), "{alias:?}");
        }
        assert_eq!(fs::read_to_string(paths.config_file()).unwrap(), config);
    }
}
