//! Import scanner
//!
//! Single forward pass over the lines of one compilation unit. The package
//! declaration and the import block sit at the top of a Java file, so the
//! scan stops at the first non-blank line after the import block.
//!
//! ## Known limitations
//!
//! - `import ` inside a comment within the header block counts as an import
//! - wildcard and static imports never match a qualified class name
//! - a line mentioning `package` anywhere updates the current package

use super::names::{parse_namespace, qualified_name, TERMINATOR};
use super::source_lines;
use crate::analysis::DependencySet;

/// Reference-declaration keyword, space-terminated so `importer` does not match
pub const IMPORT_KEYWORD: &str = "import ";

/// One class of the target tree importing one class of the source tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Usage {
    /// Qualified name of the imported class
    pub dependency: String,
    /// Qualified name of the importing class
    pub consumer: String,
}

impl Usage {
    pub fn new(dependency: impl Into<String>, consumer: impl Into<String>) -> Self {
        Self {
            dependency: dependency.into(),
            consumer: consumer.into(),
        }
    }
}

/// Extracts the usages of known dependencies from one compilation unit.
///
/// Implementations must be pure over their inputs so files can be scanned
/// in parallel.
pub trait ReferenceScanner: Send + Sync {
    /// Scan `source` (the full text of unit `unit_name`) for imports of
    /// classes in `dependencies`, in order of appearance
    fn scan(&self, unit_name: &str, source: &str, dependencies: &DependencySet) -> Vec<Usage>;
}

/// Line-based scanner for `package` and `import` declarations
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportScanner;

impl ImportScanner {
    pub fn new() -> Self {
        Self
    }

    /// Scan pre-split lines. Line endings may still be attached.
    pub fn scan_lines<'a, I>(
        &self,
        unit_name: &str,
        lines: I,
        dependencies: &DependencySet,
    ) -> Vec<Usage>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut usages = Vec::new();
        let mut namespace = String::new();
        let mut import_section_started = false;

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(declared) = parse_namespace(line) {
                namespace = declared;
            }

            if let Some(imported) = imported_name(line) {
                import_section_started = true;
                if dependencies.contains(imported) {
                    usages.push(Usage::new(imported, qualified_name(&namespace, unit_name)));
                }
            } else if import_section_started {
                // Past the import block
                break;
            }
        }

        usages
    }
}

impl ReferenceScanner for ImportScanner {
    fn scan(&self, unit_name: &str, source: &str, dependencies: &DependencySet) -> Vec<Usage> {
        self.scan_lines(unit_name, source_lines(source), dependencies)
    }
}

/// Name between the import keyword and the first terminator on the line.
///
/// Without a terminator the rest of the line, minus its line ending, is used.
fn imported_name(line: &str) -> Option<&str> {
    let index = line.find(IMPORT_KEYWORD)?;
    let rest = &line[index + IMPORT_KEYWORD.len()..];
    Some(match rest.find(TERMINATOR) {
        Some(end) => &rest[..end],
        None => rest.trim_end_matches(['\r', '\n']),
    })
}
