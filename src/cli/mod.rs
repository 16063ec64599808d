use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod preview;

pub use config::Config;

/// rde-preview - Offline HTML preview of structured RDE data packages
#[derive(Parser)]
#[command(name = "preview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML config file (see `[preview]` keys)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Structured input data directory (defaults to `data` next to the executable)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    preview::run(cli.input, &config)
}
