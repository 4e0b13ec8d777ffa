//! Usage aggregation over the target tree

use super::DependencySet;
use crate::discovery::FileFinder;
use crate::error::Result;
use crate::parser::{read_source, unit_name, ImportScanner, ReferenceScanner, Usage};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Dependency → consumers, both in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl UsageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `consumer` to the consumers of `dependency`
    pub fn record(&mut self, dependency: &str, consumer: impl Into<String>) {
        let slot = match self.index.get(dependency) {
            Some(&slot) => slot,
            None => {
                self.entries.push((dependency.to_string(), Vec::new()));
                self.index
                    .insert(dependency.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[slot].1.push(consumer.into());
    }

    pub fn record_usage(&mut self, usage: Usage) {
        self.record(&usage.dependency, usage.consumer);
    }

    pub fn consumers(&self, dependency: &str) -> Option<&[String]> {
        self.index
            .get(dependency)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Number of distinct dependencies with at least one consumer
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded (dependency, consumer) pairs
    pub fn usage_count(&self) -> usize {
        self.entries.iter().map(|(_, consumers)| consumers.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(dependency, consumers)| (dependency.as_str(), consumers.as_slice()))
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for UsageMap
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut map = UsageMap::new();
        for (dependency, consumers) in iter {
            for consumer in consumers {
                map.record(dependency.as_ref(), consumer);
            }
        }
        map
    }
}

/// Walks the target tree and records every import of a known dependency
pub struct UsageAggregator<'a, S: ReferenceScanner = ImportScanner> {
    dependencies: &'a DependencySet,
    scanner: S,
    finder: FileFinder,
    parallel: bool,
}

impl<'a> UsageAggregator<'a, ImportScanner> {
    pub fn new(dependencies: &'a DependencySet) -> Self {
        Self {
            dependencies,
            scanner: ImportScanner::new(),
            finder: FileFinder::new(),
            parallel: false,
        }
    }
}

impl<'a, S: ReferenceScanner> UsageAggregator<'a, S> {
    /// Replace the scanner used on each file
    pub fn with_scanner<T: ReferenceScanner>(self, scanner: T) -> UsageAggregator<'a, T> {
        UsageAggregator {
            dependencies: self.dependencies,
            scanner,
            finder: self.finder,
            parallel: self.parallel,
        }
    }

    pub fn with_finder(mut self, finder: FileFinder) -> Self {
        self.finder = finder;
        self
    }

    /// Scan files in parallel. Results are merged in walk order, so the
    /// resulting map is identical to a sequential run.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scan every compilation unit under `root`
    pub fn aggregate(&self, root: &Path) -> Result<UsageMap> {
        info!("Checking for usages in {}", root.display());

        let mut usages = UsageMap::new();
        if self.parallel {
            let files = self.finder.find_files(root)?;
            let per_file = files
                .par_iter()
                .map(|path| self.scan_file(path))
                .collect::<Result<Vec<_>>>()?;
            for found in per_file {
                found.into_iter().for_each(|usage| usages.record_usage(usage));
            }
        } else {
            self.finder.visit(root, |path| {
                for usage in self.scan_file(path)? {
                    usages.record_usage(usage);
                }
                Ok(())
            })?;
        }

        info!("Usages of {} classes found", usages.len());
        Ok(usages)
    }

    /// Scan one file. Files that are not valid UTF-8 yield no usages.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Usage>> {
        let Some(source) = read_source(path)? else {
            return Ok(Vec::new());
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        let found = self
            .scanner
            .scan(unit_name(&file_name), &source, self.dependencies);
        if !found.is_empty() {
            debug!("{}: {} usages", path.display(), found.len());
        }
        Ok(found)
    }
}
