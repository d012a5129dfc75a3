//! auto-sshconfig CLI - Provision SSH keys and config entries for servers
//!
//! This module contains the shared CLI implementation used by the binary.

mod commands;
mod output;
mod wizard;

use anyhow::Result;
use auto_sshconfig_core::{Settings, SshPaths, config, get_version_long, load_settings};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

/// Generate an SSH key, install it on a server and add it to ~/.ssh/config
#[derive(Parser)]
#[command(name = "auto-sshconfig")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Set up SSH keys and ~/.ssh/config entries automatically",
    long_about = "Set up SSH keys and ~/.ssh/config entries automatically.\n\n\
    Run without arguments for the interactive setup: it generates an RSA 4096 key, \
    copies it to the server and writes a Host block for it."
)]
#[command(after_help = get_examples())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove the SSH config entry and key files of a host
    #[command(short_flag = 'r')]
    Delete(commands::DeleteArgs),
    /// Copy an existing public key to a server
    #[command(short_flag = 'c')]
    Copy(commands::CopyArgs),
    /// Show configured hosts and whether their key exists
    #[command(short_flag = 's')]
    Show(commands::ShowArgs),
}

/// Usage examples appended to the help output
fn get_examples() -> &'static str {
    "Examples:
  auto-sshconfig                                  Interactive setup
  auto-sshconfig -r vpstest                       Remove host 'vpstest'
  auto-sshconfig -c vpstest root@192.168.1.100    Copy key of 'vpstest' to a server
  auto-sshconfig -s                               Show configured hosts"
}

/// Parse arguments, handling unknown commands ourselves
///
/// Returns `None` when an unrecognized command was reported.
fn parse_cli() -> Option<Cli> {
    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().to_string())
        .collect();

    match Cli::try_parse_from(&args) {
        Ok(cli) => Some(cli),
        Err(e) => match unrecognized_command(&e, args.get(1).map(String::as_str)) {
            Some(command) => {
                println!("Unrecognized command: {}", style(command).yellow());
                println!("Use {} for help", style("-h").green());
                None
            }
            // Help, version and usage errors keep clap's output and exit code
            None => e.exit(),
        },
    }
}

/// The first argument when clap rejected it as an unknown subcommand or flag
///
/// Unknown arguments after a valid subcommand stay clap usage errors.
fn unrecognized_command(err: &clap::Error, first_arg: Option<&str>) -> Option<String> {
    let context = match err.kind() {
        ErrorKind::InvalidSubcommand => ContextKind::InvalidSubcommand,
        ErrorKind::UnknownArgument => ContextKind::InvalidArg,
        _ => return None,
    };

    match err.get(context) {
        Some(ContextValue::String(value)) if first_arg == Some(value.as_str()) => {
            Some(value.clone())
        }
        _ => None,
    }
}

/// Initialize tracing on stderr
///
/// `RUST_LOG` wins; otherwise each `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load settings, exiting with a rich message when the file is invalid
fn load_settings_or_exit() -> Settings {
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            let config_path = config::get_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            eprintln!("{} Configuration error", style("Error:").red().bold());
            eprintln!();
            eprintln!("  {e:#}");
            eprintln!();
            eprintln!("  Config file: {}", style(config_path).yellow());
            eprintln!();
            eprintln!(
                "  {} Check the config file for syntax errors or unknown fields.",
                style("Tip:").cyan()
            );
            std::process::exit(1);
        }
    }
}

pub fn run() -> Result<()> {
    let Some(cli) = parse_cli() else {
        return Ok(());
    };

    init_tracing(cli.verbose);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let settings = load_settings_or_exit();
    let paths: SshPaths = config::resolve_ssh_paths(&settings)?;

    if cli.verbose > 0 {
        eprintln!(
            "{} auto-sshconfig {}",
            style("[info]").cyan(),
            get_version_long()
        );
        eprintln!(
            "{} SSH directory: {}",
            style("[info]").cyan(),
            paths.ssh_dir().display()
        );
    }

    match cli.command {
        Some(Commands::Delete(args)) => commands::cmd_delete(&args, &paths, cli.quiet),
        Some(Commands::Copy(args)) => commands::cmd_copy(&args, &paths, &settings, cli.quiet),
        Some(Commands::Show(_)) => commands::cmd_show(&paths, cli.quiet),
        None => {
            let mut prompter = wizard::Prompter::detect();
            commands::cmd_setup(&paths, &settings, &mut prompter, cli.quiet)
        }
    }
}
