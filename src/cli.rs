use clap::Parser;
use std::path::PathBuf;

/// Address book assistant - manage contacts, emails and birthdays from the terminal
#[derive(Debug, Parser)]
#[command(name = "addressbook")]
#[command(about = "Interactive address book with birthday reminders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the per-user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `addressbook=info` (overrides config and RUST_LOG)
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}
