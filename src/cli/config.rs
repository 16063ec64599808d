//! TOML configuration file support.
//!
//! Interactive behaviour of the `preview` binary can be adjusted in a
//! config file passed with `--config`:
//!
//! ```toml
//! # preview.toml
//! [preview]
//! open_browser = true
//! wait_for_enter = false
//! log_file = "preview.log"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use rde_preview::logger::LOG_FILE_NAME;

/// Root configuration structure for preview.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Run settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Settings of a preview run. Absent keys take their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewConfig {
    /// Open `index.html` in the default browser after a successful run.
    pub open_browser: Option<bool>,

    /// Wait for Enter before exiting.
    pub wait_for_enter: Option<bool>,

    /// Log file name, created next to the input directory.
    pub log_file: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl PreviewConfig {
    pub fn open_browser(&self) -> bool {
        self.open_browser.unwrap_or(true)
    }

    pub fn wait_for_enter(&self) -> bool {
        self.wait_for_enter.unwrap_or(true)
    }

    pub fn log_file(&self) -> &str {
        self.log_file.as_deref().unwrap_or(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [preview]
            open_browser = false
            wait_for_enter = false
            log_file = "run.log"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert!(!config.preview.open_browser());
        assert!(!config.preview.wait_for_enter());
        assert_eq!(config.preview.log_file(), "run.log");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [preview]
            wait_for_enter = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert!(!config.preview.wait_for_enter());
        assert!(config.preview.open_browser());
        assert_eq!(config.preview.log_file(), "preview.log");
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.preview.open_browser, None);
        assert!(config.preview.wait_for_enter());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[preview]\nopen_browser = \"yes\"").is_err());
    }
}
