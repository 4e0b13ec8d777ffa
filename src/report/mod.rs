mod colors;
mod label;
mod opener;
mod summary;
mod table;
mod writer;

pub use label::derive_label;
pub use opener::open_report;
pub use summary::{SummaryReporter, UsageStats};
pub use table::{build_rows, ReportRow, HEADER};
pub use writer::{to_csv, to_json, write_csv, write_json};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default report file name, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "dependency_usages.csv";

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Comma-separated table with a header row
    #[default]
    Csv,
    /// JSON array of row objects
    Json,
}

/// Writes report rows to disk and optionally opens them
pub struct Reporter {
    format: ReportFormat,
    output_path: PathBuf,
    open_after_write: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path: output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
            open_after_write: false,
        }
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open_after_write = open;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write `rows` (header first) in the configured format
    pub fn report(&self, rows: &[ReportRow]) -> Result<()> {
        match self.format {
            ReportFormat::Csv => write_csv(rows, &self.output_path)?,
            ReportFormat::Json => write_json(rows, &self.output_path)?,
        }

        if self.open_after_write {
            open_report(&self.output_path);
        }
        Ok(())
    }
}
