//! auto-sshconfig binary entry point

use console::style;

fn main() {
    if let Err(e) = auto_sshconfig::run() {
        eprintln!("{} {e:#}", style("Error:").red().bold());
        std::process::exit(1);
    }
}
