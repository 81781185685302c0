//! Configuration file loading for archreport.
//!
//! Reads `.archreport/archreport.json`. Falls back to defaults when the file
//! is missing or incomplete.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory holding archreport configuration, relative to the project root.
pub const CONFIG_DIR: &str = ".archreport";
/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "archreport.json";

/// Top-level archreport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report document location, relative to the project root.
    #[serde(default = "default_report_file")]
    pub report_file: String,
    /// Pretty-print the report document.
    #[serde(default)]
    pub pretty: bool,
}

fn default_report_file() -> String {
    "archreport-violations.json".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_file: default_report_file(),
            pretty: false,
        }
    }
}

impl ReportConfig {
    /// Load configuration from `archreport.json` inside `config_dir`.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Write this configuration to `archreport.json` inside `config_dir`,
    /// creating the directory if needed.
    pub fn save(&self, config_dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(config_dir)?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(config_dir.join(CONFIG_FILE), json + "\n")
    }

    /// Resolve the report path against the project root.
    pub fn report_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.report_file)
    }
}
