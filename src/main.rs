//! # RDE Preview
//!
//! Generates an offline HTML preview of a structured RDE data package.
//!
//! ## Usage
//!
//! ```bash
//! # Preview ./data next to the executable
//! preview
//!
//! # Preview a specific package without prompts
//! preview --config preview.toml work/data
//! ```
//!
//! Output lands in `output_preview[_NNNN]` next to the input directory,
//! status lines in `preview.log` beside it.

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
