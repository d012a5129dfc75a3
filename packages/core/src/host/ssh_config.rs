//! SSH config file reading and editing
//!
//! The config file is treated as a plain sequence of `\n`-separated lines. A
//! host block starts at a `Host <alias>` line and runs until the next `Host`
//! line or EOF. Edits only ever drop whole blocks or append a new one, so
//! every other byte of the file survives untouched.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::error::HostError;
use crate::config::SshPaths;

const HOST_KEYWORD: &str = "Host ";

/// Classification of a single config line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Host <alias>` line, carrying the alias
    Host(&'a str),
    /// Anything else (options, comments, blank lines)
    Other,
}

/// One line of the config file, with its original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigLine<'a> {
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

impl<'a> ConfigLine<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let kind = raw
            .trim()
            .strip_prefix(HOST_KEYWORD)
            .map(|alias| LineKind::Host(alias.trim()))
            .unwrap_or(LineKind::Other);

        Self { raw, kind }
    }
}

/// Split config content into classified lines
pub fn tokenize(content: &str) -> Vec<ConfigLine<'_>> {
    content.split('\n').map(ConfigLine::parse).collect()
}

/// Block scanner state while filtering out one alias
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside,
}

impl ScanState {
    /// Only `Host` lines change state: entering on the target alias, leaving
    /// on any other alias.
    fn next(self, line: &ConfigLine<'_>, target: &str) -> Self {
        match line.kind {
            LineKind::Host(alias) if alias == target => ScanState::Inside,
            LineKind::Host(_) => ScanState::Outside,
            LineKind::Other => self,
        }
    }

    fn keeps_line(self) -> bool {
        self == ScanState::Outside
    }
}

/// Drop every `Host <alias>` block from the config content
pub fn remove_host_block(content: &str, alias: &str) -> String {
    let mut state = ScanState::Outside;
    let mut kept = Vec::new();

    for line in tokenize(content) {
        state = state.next(&line, alias);
        if state.keeps_line() {
            kept.push(line.raw);
        }
    }

    kept.join("\n")
}

/// Aliases of all `Host` lines, in file order, skipping the `*` wildcard
pub fn host_aliases(content: &str) -> Vec<&str> {
    tokenize(content)
        .into_iter()
        .filter_map(|line| match line.kind {
            LineKind::Host(alias) if !alias.is_empty() && alias != "*" => Some(alias),
            _ => None,
        })
        .collect()
}

/// A host block as written by this tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub alias: String,
    pub hostname: String,
    pub user: String,
    pub identity_file: PathBuf,
}

impl HostEntry {
    /// Render the block, preceded by a blank line
    pub fn render(&self) -> String {
        format!(
            "\nHost {}\n    HostName {}\n    User {}\n    IdentityFile {}\n    StrictHostKeyChecking no\n",
            self.alias,
            self.hostname,
            self.user,
            self.identity_file.display()
        )
    }
}

/// Configured alias with local key presence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostKeyStatus {
    pub alias: String,
    pub key_path: PathBuf,
    pub key_present: bool,
}

/// List hosts from the SSH config with whether their private key exists
///
/// Returns `None` when the config file cannot be read.
pub fn list_configured_hosts(paths: &SshPaths) -> Option<Vec<HostKeyStatus>> {
    let config_path = paths.config_file();
    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", config_path.display(), e);
            return None;
        }
    };

    let hosts = host_aliases(&content)
        .into_iter()
        .map(|alias| {
            let key_path = paths.private_key(alias);
            HostKeyStatus {
                alias: alias.to_string(),
                key_present: key_path.exists(),
                key_path,
            }
        })
        .collect();

    Some(hosts)
}

/// Read the config file, `None` if it does not exist
fn read_existing(config_path: &Path) -> Result<Option<String>, HostError> {
    match fs::read_to_string(config_path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HostError::SshConfigRead(format!(
            "Failed to read {}: {}",
            config_path.display(),
            e
        ))),
    }
}

/// Write content to a file readable by the owner only
fn write_private_file(path: &Path, content: &str) -> Result<(), HostError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| {
        HostError::SshConfigWrite(format!("Failed to open {}: {}", path.display(), e))
    })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        HostError::SshConfigWrite(format!("Failed to write to {}: {}", path.display(), e))
    })?;

    // An existing file keeps its old mode on open, so tighten it explicitly
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            HostError::SshConfigWrite(format!("Failed to set config permissions: {e}"))
        })?;
    }

    Ok(())
}

/// Remove the block for `alias` from the SSH config
///
/// Returns `false` without touching anything when the config file does not
/// exist.
pub fn remove_host_entry(paths: &SshPaths, alias: &str) -> Result<bool, HostError> {
    let config_path = paths.config_file();
    let Some(content) = read_existing(&config_path)? else {
        tracing::debug!("No SSH config at {}", config_path.display());
        return Ok(false);
    };

    write_private_file(&config_path, &remove_host_block(&content, alias))?;
    tracing::info!(
        "Removed host '{}' from SSH config at {}",
        alias,
        config_path.display()
    );

    Ok(true)
}

/// Replace (or add) the block for `entry.alias` in the SSH config
///
/// Any existing block for the alias is filtered out and the new block is
/// appended, so the file holds exactly one block for it afterwards.
pub fn upsert_host_entry(paths: &SshPaths, entry: &HostEntry) -> Result<PathBuf, HostError> {
    let config_path = paths.config_file();
    let existing = read_existing(&config_path)?
        .map(|content| remove_host_block(&content, &entry.alias))
        .unwrap_or_default();

    let mut content = existing;
    content.push_str(&entry.render());
    write_private_file(&config_path, &content)?;

    tracing::info!(
        "Wrote host '{}' to SSH config at {}",
        entry.alias,
        config_path.display()
    );

    Ok(config_path)
}
