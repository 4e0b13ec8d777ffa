//! File discovery
//!
//! Walks a root directory depth-first and hands every Java compilation unit
//! to a caller-supplied action. Entries are visited in the order the host
//! filesystem lists them; each subdirectory is descended into as soon as it
//! is encountered.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File-name suffix identifying a compilation unit
pub const JAVA_EXTENSION: &str = ".java";

/// Check whether a file name denotes a compilation unit
pub fn is_compilation_unit(file_name: &str) -> bool {
    file_name.ends_with(JAVA_EXTENSION)
}

/// Recursive finder for compilation units under a root directory
#[derive(Debug, Clone, Default)]
pub struct FileFinder {
    /// Sort each directory listing by file name instead of native order
    sort_entries: bool,
}

impl FileFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort directory listings by name.
    ///
    /// Makes output identical across platforms, at the cost of differing
    /// from the native listing order.
    pub fn with_sorted_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Visit every compilation unit under `root`, in walk order.
    ///
    /// Any error from the filesystem or from `action` aborts the walk.
    pub fn visit<F>(&self, root: &Path, mut action: F) -> Result<()>
    where
        F: FnMut(&Path) -> Result<()>,
    {
        check_root(root)?;

        let mut walker = WalkDir::new(root).follow_links(true);
        if self.sort_entries {
            walker = walker.sort_by_file_name();
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    if let Some(path) = err.path() {
                        debug!("Skipping dangling symlink {}", path.display());
                    }
                    continue;
                }
                Err(source) => {
                    return Err(Error::Walk {
                        root: root.to_path_buf(),
                        source,
                    })
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let is_unit = entry
                .file_name()
                .to_str()
                .map(is_compilation_unit)
                .unwrap_or(false);
            if is_unit {
                action(entry.path())?;
            }
        }

        Ok(())
    }

    /// Collect every compilation unit under `root`, in walk order
    pub fn find_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.visit(root, |path| {
            files.push(path.to_path_buf());
            Ok(())
        })?;
        debug!("Found {} Java files under {}", files.len(), root.display());
        Ok(files)
    }
}

/// A link whose target is missing is neither a directory nor a file
fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .map(|e| e.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false);
    not_found
        && err
            .path()
            .and_then(|p| std::fs::symlink_metadata(p).ok())
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::RootNotFound {
                path: root.to_path_buf(),
            }
        } else {
            Error::io(root, source)
        }
    })?;

    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}
