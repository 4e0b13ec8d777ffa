// Analysis module - dependency collection and usage aggregation
//
// Two phases, strictly in order:
// 1. Collect every qualified class name declared in the source tree
// 2. Walk the target tree and record which of those names each class imports

mod dependencies;
mod usage;

pub use dependencies::DependencySet;
pub use usage::{UsageAggregator, UsageMap};

use crate::discovery::FileFinder;
use crate::error::Result;
use std::path::Path;

/// Settings shared by both analysis phases
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Sort directory listings by name
    pub sort_entries: bool,
    /// Process files in parallel
    pub parallel: bool,
}

/// Result of a complete two-tree analysis
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dependencies: DependencySet,
    pub usages: UsageMap,
}

/// Find the classes of `source_root` imported by classes of `target_root`
pub fn analyze(
    source_root: &Path,
    target_root: &Path,
    options: &AnalysisOptions,
) -> Result<Analysis> {
    let finder = FileFinder::new().with_sorted_entries(options.sort_entries);

    let dependencies = DependencySet::build(source_root, &finder, options.parallel)?;
    let usages = UsageAggregator::new(&dependencies)
        .with_finder(finder)
        .with_parallel(options.parallel)
        .aggregate(target_root)?;

    Ok(Analysis {
        dependencies,
        usages,
    })
}
