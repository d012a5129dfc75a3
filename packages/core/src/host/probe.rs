//! Post-setup connectivity check

use std::process::Command;
use std::time::Duration;

use super::process::{ToolOutcome, Tools, run_captured};

/// Remote command run by the probe
pub const PROBE_COMMAND: &str = "echo 'OK'";

fn probe_command(tools: &Tools, alias: &str, timeout: Duration) -> Command {
    let mut cmd = Command::new(&tools.ssh);
    cmd.arg("-o")
        .arg(format!("ConnectTimeout={}", timeout.as_secs().max(1)))
        .arg("-o")
        .arg("BatchMode=yes")
        .arg(alias)
        .arg(PROBE_COMMAND);
    cmd
}

/// Connect to `alias` through the SSH config and run a trivial command
///
/// Uses the alias rather than the raw address so the freshly written config
/// block (user, identity file) is what gets tested.
pub fn probe_connection(tools: &Tools, alias: &str, timeout: Duration) -> ToolOutcome {
    let outcome = run_captured(&mut probe_command(tools, alias, timeout));
    if outcome.success() {
        tracing::info!("Connectivity probe to {} succeeded", alias);
    } else {
        tracing::info!(
            "Connectivity probe to {} failed: {}",
            alias,
            outcome.failure_detail()
        );
    }
    outcome
}
