//! CodeFinder - Find which classes of one Java codebase another one imports
//!
//! Quantifies the coupling between two source trees without compiling
//! either of them.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! 1. **File Discovery** - Walk a tree and find all .java files
//! 2. **Dependency Collection** - Qualified name of every class in the source tree
//! 3. **Import Scanning** - Single pass over the header of each target class
//! 4. **Aggregation** - Ordered map of used class to consuming classes
//! 5. **Reporting** - Four-column table written as CSV or JSON

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod report;

pub use analysis::{analyze, Analysis, AnalysisOptions, DependencySet, UsageAggregator, UsageMap};
pub use config::Config;
pub use discovery::FileFinder;
pub use error::{Error, Result};
pub use parser::{ImportScanner, QualifiedUnit, ReferenceScanner, Usage};
pub use report::{build_rows, derive_label, ReportFormat, ReportRow, Reporter};
