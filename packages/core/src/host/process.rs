//! External tool invocation
//!
//! Every subprocess the tool starts goes through [`run_captured`] or
//! [`run_interactive`] and comes back as a [`ToolOutcome`], so callers branch
//! on a value instead of on terminal side effects.

use std::process::{Command, ExitStatus, Stdio};

/// Names of the external binaries used during provisioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    /// Key generation and known_hosts pruning
    pub ssh_keygen: String,
    /// Remote public key installation
    pub ssh_copy_id: String,
    /// SSH client used for the connectivity probe
    pub ssh: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            ssh_keygen: "ssh-keygen".to_string(),
            ssh_copy_id: "ssh-copy-id".to_string(),
            ssh: "ssh".to_string(),
        }
    }
}

/// Result of running one external tool to completion
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    /// Program name as invoked
    pub tool: String,
    /// Exit status, `None` when the process could not be spawned
    pub status: Option<ExitStatus>,
    /// Captured stdout followed by stderr (empty for interactive runs)
    pub output: String,
    /// Spawn error message
    pub spawn_error: Option<String>,
}

impl ToolOutcome {
    /// Whether the process ran and exited with status 0
    pub fn success(&self) -> bool {
        self.status.is_some_and(|s| s.success())
    }

    /// Human-readable reason for a failed run
    pub fn failure_detail(&self) -> String {
        if let Some(err) = &self.spawn_error {
            return format!("failed to run {}: {}", self.tool, err);
        }

        let status = match self.status.and_then(|s| s.code()) {
            Some(code) => format!("{} exited with status {}", self.tool, code),
            None => format!("{} was terminated by a signal", self.tool),
        };

        let output = self.output.trim();
        if output.is_empty() {
            status
        } else {
            format!("{status}: {output}")
        }
    }

    fn spawn_failed(tool: String, err: std::io::Error) -> Self {
        let message = if err.kind() == std::io::ErrorKind::NotFound {
            format!("{tool} not found. Install the OpenSSH client.")
        } else {
            err.to_string()
        };

        Self {
            tool,
            status: None,
            output: String::new(),
            spawn_error: Some(message),
        }
    }
}

fn program_name(cmd: &Command) -> String {
    cmd.get_program().to_string_lossy().to_string()
}

/// Run a command with stdin closed and stdout/stderr captured
pub fn run_captured(cmd: &mut Command) -> ToolOutcome {
    let tool = program_name(cmd);
    tracing::debug!("Running {:?}", cmd);

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    match cmd.output() {
        Ok(output) => {
            let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            tracing::debug!("{} finished with {}", tool, output.status);

            ToolOutcome {
                tool,
                status: Some(output.status),
                output: combined,
                spawn_error: None,
            }
        }
        Err(e) => ToolOutcome::spawn_failed(tool, e),
    }
}

/// Run a command attached to the controlling terminal
///
/// stdin, stdout and stderr are inherited so the operator can answer
/// password and host key prompts.
pub fn run_interactive(cmd: &mut Command) -> ToolOutcome {
    let tool = program_name(cmd);
    tracing::debug!("Running interactively {:?}", cmd);

    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    match cmd.status() {
        Ok(status) => {
            tracing::debug!("{} finished with {}", tool, status);
            ToolOutcome {
                tool,
                status: Some(status),
                output: String::new(),
                spawn_error: None,
            }
        }
        Err(e) => ToolOutcome::spawn_failed(tool, e),
    }
}
