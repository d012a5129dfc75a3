//! Styled line builders shared by the commands

use auto_sshconfig_core::HostKeyStatus;
use console::style;

/// `✓ <message>` in green
pub fn ok_line(message: impl std::fmt::Display) -> String {
    format!("{} {}", style("\u{2713}").green(), message)
}

/// One `show` line: `✓ alias` when the key exists, `- alias (key missing)`
/// otherwise
pub fn host_status_line(host: &HostKeyStatus) -> String {
    if host.key_present {
        ok_line(style(&host.alias).cyan())
    } else {
        format!(
            "{} {} {}",
            style("-").dim(),
            host.alias,
            style("(key missing)").yellow()
        )
    }
}

/// Unstyled `show` line for quiet mode: `alias<TAB>present|missing`
pub fn quiet_status_line(host: &HostKeyStatus) -> String {
    let state = if host.key_present { "present" } else { "missing" };
    format!("{}\t{}", host.alias, state)
}

/// Numbered setup step header, e.g. `3. Copy public key...`
pub fn step_line(step: usize, title: &str) -> String {
    format!("{} {}", style(format!("{step}.")).bold(), title)
}
