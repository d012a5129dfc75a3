//! Version information for auto-sshconfig

/// Get the current version string
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the long version string with build information
///
/// Build metadata comes from `ASC_GIT_HASH` / `ASC_BUILD_DATE` at compile
/// time and falls back to "unknown".
pub fn get_version_long() -> String {
    let git_hash = option_env!("ASC_GIT_HASH").unwrap_or("unknown");
    let build_date = option_env!("ASC_BUILD_DATE").unwrap_or("unknown");

    format!("{} (git: {git_hash}, built: {build_date})", get_version())
}
