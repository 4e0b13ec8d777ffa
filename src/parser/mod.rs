//! Lightweight text parsing of Java compilation units
//!
//! No grammar, no AST: packages and imports are picked out of the raw lines
//! of a file.

mod names;
mod scanner;

pub use names::{
    extract_qualified_unit, namespace_of, parse_namespace, qualified_name, unit_name,
    QualifiedUnit, PACKAGE_KEYWORD, TERMINATOR,
};
pub use scanner::{ImportScanner, ReferenceScanner, Usage, IMPORT_KEYWORD};

use crate::error::{Error, Result};
use std::path::Path;
use tracing::warn;

/// Read a source file as UTF-8 text.
///
/// Returns `Ok(None)` when the bytes are not valid UTF-8; the caller skips
/// the file. Any other I/O failure is fatal.
pub fn read_source(path: &Path) -> Result<Option<String>> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(Some(text)),
        Err(_) => {
            warn!("Decoding error, skipping file {}", path.display());
            Ok(None)
        }
    }
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`, without endings
pub fn source_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let ending = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + ending..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
