//! Settings management for auto-sshconfig
//!
//! Loads the optional JSONC settings file and resolves the SSH directory
//! layout every other module works against.

pub mod paths;
pub mod schema;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use jsonc_parser::parse_to_serde_value;

pub use paths::{SshPaths, get_config_dir, get_config_path, get_default_ssh_dir};
pub use schema::Settings;

/// Load settings from the settings file
///
/// A missing file yields the defaults; the file is not created.
/// Supports JSONC (JSON with comments) and rejects unknown fields.
pub fn load_settings() -> Result<Settings> {
    let config_path =
        get_config_path().ok_or_else(|| anyhow::anyhow!("Could not determine config file path"))?;

    load_settings_from(&config_path)
}

/// Load settings from an explicit path
pub fn load_settings_from(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        tracing::debug!(
            "Settings file not found, using defaults: {}",
            config_path.display()
        );
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let Some(parsed_value) = parse_to_serde_value(&contents, &Default::default())
        .map_err(|e| anyhow::anyhow!("Invalid JSONC in config file: {}", e))?
    else {
        // Comment-only or blank file
        return Ok(Settings::default());
    };

    let settings: Settings = serde_json::from_value(parsed_value).with_context(|| {
        format!(
            "Invalid configuration in {}. Check for unknown fields or invalid values.",
            config_path.display()
        )
    })?;

    Ok(settings)
}

/// Resolve the SSH directory layout for the given settings
pub fn resolve_ssh_paths(settings: &Settings) -> Result<SshPaths> {
    let ssh_dir = match &settings.ssh_dir {
        Some(dir) => dir.clone(),
        None => get_default_ssh_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };

    Ok(SshPaths::new(ssh_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_jsonc_comments_are_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            "{\n  // probe faster on a LAN\n  \"connect_timeout_secs\": 2\n}\n",
        )
        .unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.connect_timeout_secs, 2);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"bits": 2048}"#).unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid configuration"));
    }

    #[test]
    fn test_ssh_dir_override_is_used() {
        let settings = Settings {
            ssh_dir: Some("/srv/keys".into()),
            ..Default::default()
        };
        let paths = resolve_ssh_paths(&settings).unwrap();
        assert_eq!(paths.ssh_dir(), Path::new("/srv/keys"));
    }
}
