use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `trove` binary.
#[derive(Debug, Parser)]
#[command(
    name = "trove",
    version,
    about = "Trove - fetch awesome lists and parse them into structured data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and parse an awesome list from a raw markdown URL
    Fetch(FetchArgs),
    /// Validate a raw-content URL without fetching it
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Raw GitHub/GitLab URL of the list's README
    pub url: String,

    /// Print the full parse result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Raw GitHub/GitLab URL of the list's README
    pub url: String,
}
