use anyhow::{Context, Result};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use rde_preview::browser::open_in_browser;
use rde_preview::generate_preview;
use rde_preview::logger::PreviewLog;
use rde_preview::output::create_output_dir;
use rde_preview::package::check_input_dir;

use super::config::{Config, PreviewConfig};

/// Default input directory name next to the executable
const DEFAULT_INPUT_DIR: &str = "data";

const ABORT_PROMPT: &str = "An error occurred and processing was aborted. Press Enter.";
const DONE_PROMPT: &str = "Finished successfully. Press Enter to exit and open the preview in the browser.";

/// Input directory and the directory that receives the log and output
fn resolve_paths(input: Option<PathBuf>) -> Result<(PathBuf, PathBuf)> {
    match input {
        Some(input) => {
            let input = if input.is_absolute() {
                input
            } else {
                std::env::current_dir()
                    .context("Failed to read the current directory")?
                    .join(input)
            };
            let root = input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input.clone());
            Ok((input, root))
        }
        None => {
            let exe = std::env::current_exe().context("Failed to locate the executable")?;
            let root = exe
                .parent()
                .map(Path::to_path_buf)
                .context("Executable has no parent directory")?;
            Ok((root.join(DEFAULT_INPUT_DIR), root))
        }
    }
}

fn prompt(settings: &PreviewConfig, message: &str) {
    if !settings.wait_for_enter() {
        return;
    }
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

fn abort(settings: &PreviewConfig) -> ! {
    prompt(settings, ABORT_PROMPT);
    std::process::exit(1);
}

/// Check the package, generate the site, then hand it to the browser
pub fn run(input: Option<PathBuf>, config: &Config) -> Result<()> {
    let settings = &config.preview;
    let (input_dir, root_dir) = resolve_paths(input)?;
    let log_path = root_dir.join(settings.log_file());
    let log = PreviewLog::open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    info!("Input:  {}", input_dir.display());
    info!("Log:    {}", log.path().display());

    if let Err(e) = check_input_dir(&input_dir) {
        log.error(&e);
        abort(settings);
    }
    log.info("Input directory check passed.");

    let out_dir = match create_output_dir(&root_dir) {
        Ok(dir) => dir,
        Err(e) => {
            log.error(&e);
            abort(settings);
        }
    };
    log.info(format!("Created output directory {}.", out_dir.display()));

    let summary = match generate_preview(&input_dir, &out_dir, &log) {
        Ok(summary) => summary,
        Err(e) => {
            let e = anyhow::Error::new(e).context("Unexpected error while generating the preview");
            log.error(format!("{e:?}"));
            abort(settings);
        }
    };

    prompt(settings, DONE_PROMPT);
    if settings.open_browser() {
        if let Err(e) = open_in_browser(&summary.index) {
            log.error(format!("Failed to open {} in the browser: {e}", summary.index.display()));
        }
    }

    Ok(())
}
