//! Interactive setup (no arguments)
//!
//! Asks for alias, address and user, then runs the five provisioning steps:
//! known_hosts cleanup, key generation, key installation, config update and a
//! connectivity probe. Only key generation can abort the run.

use anyhow::{Context, Result};
use auto_sshconfig_core::{
    InstallOutcome, SetupRequest, Settings, SshPaths, ensure_ssh_dir, generate_key,
    install_public_key, probe_connection, prune_known_hosts, upsert_host_entry,
};
use console::style;

use crate::commands::copy::print_manual_install;
use crate::output::{CommandSpinner, ok_line, step_line};
use crate::wizard::Prompter;

pub fn cmd_setup(
    paths: &SshPaths,
    settings: &Settings,
    prompter: &mut Prompter,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        println!("{}", style("=== Auto SSH Config ===").cyan().bold());
    }

    let alias = prompter.ask("Host alias")?;
    let address = prompter.ask("IP address")?;
    let user = prompter.ask(&format!("Username (default: {})", settings.default_user))?;

    let request = SetupRequest::new(&alias, &address, &user, &settings.default_user)?;
    let tools = settings.tools();

    if !quiet {
        println!();
        println!("{}", style("=== Setup SSH ===").cyan().bold());
    }

    ensure_ssh_dir(paths)?;

    if !quiet {
        println!("{}", step_line(1, "Cleaning known_hosts..."));
    }
    prune_known_hosts(&tools, &request.address);

    if !quiet {
        println!("{}", step_line(2, "Generate SSH key..."));
    }
    let spinner = CommandSpinner::new_maybe("Generating RSA 4096 key...", quiet);
    let keys = match generate_key(paths, &tools, &request.alias, &request.user, &request.address)
    {
        Ok(keys) => {
            spinner.success(&format!("Key: {}", keys.private_key.display()));
            keys
        }
        Err(e) => {
            spinner.fail("Key generation failed");
            return Err(e).context("Cannot continue without a key");
        }
    };

    if !quiet {
        println!("{}", step_line(3, "Copy public key..."));
    }
    match install_public_key(&tools, &keys, &request.target())? {
        InstallOutcome::Installed => {
            if !quiet {
                println!("{}", ok_line("Public key copied"));
            }
        }
        InstallOutcome::Manual { fallback, .. } => {
            println!();
            println!("{}", style("Manual copy:").yellow());
            print_manual_install(&fallback);
            prompter.pause("Press Enter when done...")?;
        }
    }

    if !quiet {
        println!("{}", step_line(4, "Update SSH config..."));
    }
    let config_path = upsert_host_entry(paths, &request.host_entry(&keys))?;
    if !quiet {
        println!("{}", ok_line(format!("Config: {}", config_path.display())));
    }

    if !quiet {
        println!("{}", step_line(5, "Test SSH..."));
    }
    let spinner = CommandSpinner::new_maybe(
        &format!("Connecting to {}...", request.alias),
        quiet,
    );
    let probe = probe_connection(&tools, &request.alias, settings.connect_timeout());
    if probe.success() {
        spinner.success(&format!("Test: {}", probe.output.trim()));
    } else {
        spinner.fail("Test failed");
        eprintln!(
            "{} Test failed: {}",
            style("Warning:").yellow(),
            probe.failure_detail()
        );
    }

    if !quiet {
        println!();
        println!("{}", style("=== Done ===").green().bold());
        println!("SSH: {}", style(format!("ssh {}", request.alias)).yellow());
    }

    Ok(())
}
