use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spotdiff",
    about = "spotdiff — token-level differences between two versions of a document",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Session configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show how a file's lines split into tokens
    Tokens(TokensArgs),
    /// Show differing lines with changed tokens highlighted
    Diff(DiffArgs),
    /// Score a review against the lines a reviewer marked as changed
    Review(ReviewArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct TokensArgs {
    pub path: PathBuf,
    /// Only this 1-based line
    #[arg(long)]
    pub line: Option<usize>,
}

#[derive(Args)]
pub struct DiffArgs {
    pub a: PathBuf,
    pub b: PathBuf,
    /// Print identical lines too
    #[arg(long)]
    pub all_lines: bool,
}

#[derive(Args)]
pub struct ReviewArgs {
    pub a: PathBuf,
    pub b: PathBuf,
    /// 1-based lines the reviewer marked, comma separated
    #[arg(long, value_delimiter = ',')]
    pub found: Vec<usize>,
}
