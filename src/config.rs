//! Configuration file support
//!
//! Settings can come from a TOML or YAML file. Command-line flags override
//! anything read here.

use crate::error::{Error, Result};
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names probed in the working directory when no config is given
const DEFAULT_LOCATIONS: &[&str] = &[
    ".codefinder.toml",
    "codefinder.toml",
    ".codefinder.yml",
    ".codefinder.yaml",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tree supplying the classes that may be imported
    pub source_root: Option<PathBuf>,
    /// Tree scanned for imports
    pub target_root: Option<PathBuf>,
    /// Report file
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
    /// Open the report with the default application once written
    pub open_report: bool,
    /// Sort directory listings by name instead of native order
    pub sort_entries: bool,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: None,
            target_root: None,
            output: None,
            format: ReportFormat::Csv,
            open_report: true,
            sort_entries: false,
            parallel: true,
        }
    }
}

impl Config {
    /// Load a config file; YAML for `.yml`/`.yaml`, TOML otherwise
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );
        let parsed = if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        parsed.map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load the first config found in `dir`, or the defaults
    pub fn from_default_locations(dir: &Path) -> Result<Self> {
        for name in DEFAULT_LOCATIONS {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!("Loading config from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }
        Ok(Self::default())
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    fn from_yaml_str(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
