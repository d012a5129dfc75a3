//! auto-sshconfig show - List configured hosts and key presence

use anyhow::Result;
use auto_sshconfig_core::{SshPaths, list_configured_hosts};
use clap::Args;
use console::style;

use crate::output::{host_status_line, quiet_status_line};

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// Arguments after `show` are ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

pub fn cmd_show(paths: &SshPaths, quiet: bool) -> Result<()> {
    if !quiet {
        println!("{}", style("=== SSH Configs ===").cyan().bold());
    }

    let Some(hosts) = list_configured_hosts(paths) else {
        if !quiet {
            println!("SSH config not found");
        }
        return Ok(());
    };

    for host in &hosts {
        // Tab-separated and unstyled in quiet mode (for scripting)
        if quiet {
            println!("{}", quiet_status_line(host));
        } else {
            println!("{}", host_status_line(host));
        }
    }

    Ok(())
}
