//! Qualified name extraction
//!
//! A compilation unit is named `{package}.{UnitName}`, where the package comes
//! from the first line mentioning the `package` keyword and the unit name is
//! the file name without its `.java` suffix.

use super::{read_source, source_lines};
use crate::discovery::JAVA_EXTENSION;
use crate::error::Result;
use std::path::Path;

/// Namespace-declaration keyword
pub const PACKAGE_KEYWORD: &str = "package";

/// Statement terminator
pub const TERMINATOR: char = ';';

/// Namespace and unit name of one compilation unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedUnit {
    /// Declared package, empty when none was found
    pub namespace: String,
    /// File name without the `.java` suffix
    pub unit_name: String,
}

impl QualifiedUnit {
    pub fn new(namespace: impl Into<String>, unit_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            unit_name: unit_name.into(),
        }
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// Dotted name. A unit without a package yields `.UnitName`.
    pub fn qualified_name(&self) -> String {
        qualified_name(&self.namespace, &self.unit_name)
    }
}

/// Join a namespace and a unit name
pub fn qualified_name(namespace: &str, unit_name: &str) -> String {
    format!("{}.{}", namespace, unit_name)
}

/// Strip the `.java` suffix from a file name.
///
/// Names without the suffix are returned unchanged.
pub fn unit_name(file_name: &str) -> &str {
    file_name.strip_suffix(JAVA_EXTENSION).unwrap_or(file_name)
}

/// Extract the package declared on `line`, if the line mentions the keyword.
///
/// Everything after the keyword is kept except terminators and whitespace,
/// so `"  package org.acme.core ;\r\n"` gives `org.acme.core`. A malformed
/// line yields whatever is left rather than an error.
pub fn parse_namespace(line: &str) -> Option<String> {
    let index = line.find(PACKAGE_KEYWORD)?;
    let rest = &line[index + PACKAGE_KEYWORD.len()..];
    Some(
        rest.chars()
            .filter(|c| *c != TERMINATOR && !c.is_whitespace())
            .collect(),
    )
}

/// Package of a unit's text: the first line mentioning the keyword wins
pub fn namespace_of(source: &str) -> String {
    source_lines(source)
        .find_map(parse_namespace)
        .unwrap_or_default()
}

/// Read a compilation unit and derive its qualified name.
///
/// A file that is not valid UTF-8 is reported and treated as having no
/// package.
pub fn extract_qualified_unit(path: &Path) -> Result<QualifiedUnit> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let unit = unit_name(&file_name).to_string();

    let namespace = match read_source(path)? {
        Some(source) => namespace_of(&source),
        None => String::new(),
    };

    Ok(QualifiedUnit::new(namespace, unit))
}
