//! Dependency set: every qualified class name declared in the source tree

use crate::discovery::FileFinder;
use crate::error::Result;
use crate::parser::{extract_qualified_unit, QualifiedUnit};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Qualified names of the classes a target tree could import.
///
/// Built once from the source tree and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    names: HashSet<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `root` and collect the qualified name of every class that
    /// declares a package
    pub fn build(root: &Path, finder: &FileFinder, parallel: bool) -> Result<Self> {
        info!("Collecting possible dependencies in {}", root.display());

        let mut set = Self::new();
        if parallel {
            let files = finder.find_files(root)?;
            let units = files
                .par_iter()
                .map(|path| extract_qualified_unit(path))
                .collect::<Result<Vec<_>>>()?;
            for unit in units {
                set.add_unit(&unit);
            }
        } else {
            finder.visit(root, |path| {
                let unit = extract_qualified_unit(path)?;
                set.add_unit(&unit);
                Ok(())
            })?;
        }

        info!("{} possible dependencies found in source directory", set.len());
        Ok(set)
    }

    /// Add a unit's qualified name. Units without a package cannot be
    /// imported and are ignored; returns whether the name was added.
    pub fn add_unit(&mut self, unit: &QualifiedUnit) -> bool {
        if !unit.has_namespace() {
            debug!("Ignoring {} without package", unit.unit_name);
            return false;
        }
        self.names.insert(unit.qualified_name())
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for DependencySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
