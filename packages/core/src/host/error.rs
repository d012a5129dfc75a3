//! Host-specific error types
//!
//! Errors that can occur while provisioning a host.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during host operations
#[derive(Error, Debug)]
pub enum HostError {
    /// Key generation tool could not be run or exited non-zero
    #[error("Key generation failed: {0}")]
    KeygenFailed(String),

    /// Public key missing for the copy-only flow
    #[error("Public key not found: {}", .0.display())]
    PublicKeyMissing(PathBuf),

    /// `user@address` argument did not parse
    #[error("Invalid target '{0}'. Use: user@ip")]
    InvalidTarget(String),

    /// Invalid host details (empty alias or address)
    #[error("Invalid host configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read SSH config file
    #[error("Failed to read SSH config: {0}")]
    SshConfigRead(String),

    /// Failed to write SSH config file
    #[error("Failed to write SSH config: {0}")]
    SshConfigWrite(String),

    /// Failed to create or secure the SSH directory
    #[error("Failed to prepare SSH directory: {0}")]
    SshDir(String),
}
