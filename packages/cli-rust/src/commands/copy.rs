//! auto-sshconfig copy - Install an existing public key on a server

use anyhow::{Result, bail};
use auto_sshconfig_core::{
    HostError, InstallOutcome, KeyPair, ManualInstall, RemoteTarget, Settings, SshPaths,
    install_public_key, validate_alias,
};
use clap::Args;
use console::style;

use crate::output::ok_line;

/// Arguments for the copy command
#[derive(Args)]
pub struct CopyArgs {
    /// Host alias whose key should be copied (e.g., "vpstest")
    pub alias: String,

    /// Server to install the key on, as user@address
    pub target: String,

    /// Arguments after the ones above are ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

/// Print the public key and the command to install it by hand
pub fn print_manual_install(fallback: &ManualInstall) {
    match &fallback.command {
        Some(command) => {
            println!("{}", fallback.public_key.trim_end());
            println!();
            println!("Run on the server:");
            println!("  {}", style(command).yellow());
        }
        None => eprintln!(
            "{} Public key could not be read. Append it to ~/.ssh/authorized_keys on the server.",
            style("Warning:").yellow()
        ),
    }
}

pub fn cmd_copy(args: &CopyArgs, paths: &SshPaths, settings: &Settings, quiet: bool) -> Result<()> {
    let alias = validate_alias(&args.alias)?;
    let target: RemoteTarget = match args.target.parse() {
        Ok(target) => target,
        Err(e) => bail!("{e}\n\nExample: root@192.168.1.100"),
    };

    if !quiet {
        println!(
            "Copying key '{}' to {}...",
            style(alias).cyan(),
            style(&target).cyan()
        );
    }

    let keys = KeyPair::for_alias(paths, alias);
    match install_public_key(&settings.tools(), &keys, &target) {
        Ok(InstallOutcome::Installed) => {
            if !quiet {
                println!("{}", ok_line("Public key copied"));
            }
        }
        Ok(InstallOutcome::Manual { fallback, .. }) => {
            eprintln!();
            eprintln!(
                "{} ssh-copy-id failed. Copy the key manually:",
                style("Warning:").yellow()
            );
            print_manual_install(&fallback);
        }
        Err(e @ HostError::PublicKeyMissing(_)) => {
            bail!("{e}\n\nRun setup first: auto-sshconfig")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
