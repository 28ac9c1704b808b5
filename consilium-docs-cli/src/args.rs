use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "validate-docs")]
#[command(about = "Validate Consilium phase documents against the docs conventions")]
pub struct Args {
    /// Repository root (defaults to two levels above this executable)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format written to stdout
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
