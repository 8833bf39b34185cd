use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `wpd` binary.
#[derive(Debug, Parser)]
#[command(
    name = "wpd",
    version,
    about = "WordPress Plugin Directory advisor for mirrored Composer packages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Shared output mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a package against the directory and print any warnings
    Check(CheckArgs),
    /// Print the directory changelog link for a package (no network)
    Changelog(ChangelogArgs),
    /// Simulate a host lifecycle event and run the standard hook table
    Event(EventArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Package name (e.g., wpackagist-plugin/akismet)
    pub package: String,

    /// Package type as reported by the host
    #[arg(long, default_value = "wordpress-plugin")]
    pub kind: String,

    /// Version being installed or updated to
    #[arg(long, default_value = "*")]
    pub package_version: String,
}

#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Package name (e.g., wpackagist-plugin/akismet)
    pub package: String,
}

#[derive(Debug, Args)]
pub struct EventArgs {
    /// Lifecycle event fired by the host
    #[arg(value_enum)]
    pub event: EventArg,

    /// Package name the event refers to (the update target for updates)
    pub package: String,

    /// Package type as reported by the host
    #[arg(long, default_value = "wordpress-plugin")]
    pub kind: String,

    /// Version being installed or updated to
    #[arg(long, default_value = "*")]
    pub package_version: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum EventArg {
    PrePackageInstall,
    PrePackageUpdate,
    PostPackageUpdate,
}

impl From<EventArg> for wpd_advisor::hooks::EventKind {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::PrePackageInstall => Self::PrePackageInstall,
            EventArg::PrePackageUpdate => Self::PrePackageUpdate,
            EventArg::PostPackageUpdate => Self::PostPackageUpdate,
        }
    }
}
