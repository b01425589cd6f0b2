use std::path::PathBuf;

use clap::Parser;
use scram_dictionary::StorageStrategy;

use crate::config::LogLevel;

#[derive(Parser, Debug)]
#[command(
    name = "scrambled-strings",
    about = "Count dictionary words hidden, verbatim or scrambled, in input strings",
    version,
)]
pub struct Cli {
    /// Dictionary file, one word per line
    #[arg(long)]
    pub dictionary: PathBuf,

    /// Input file, one case per line
    #[arg(long)]
    pub input: PathBuf,

    /// TOML configuration file [default: scrambled.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Word store backend, overriding the configuration file
    #[arg(long)]
    pub storage: Option<StorageStrategy>,

    /// Log level, overriding the configuration file
    #[arg(long, value_enum, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
