//! Summary reporter - statistics and most used classes

use crate::analysis::{DependencySet, UsageMap};
use crate::report::colors::{BoxChars, StructureColors};
use colored::Colorize;
use std::path::PathBuf;

/// Aggregate numbers of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageStats {
    /// Classes declared in the source tree
    pub dependencies: usize,
    /// Source classes imported at least once
    pub used_classes: usize,
    /// (dependency, consumer) pairs
    pub usages: usize,
}

impl UsageStats {
    pub fn compute(dependencies: &DependencySet, usages: &UsageMap) -> Self {
        Self {
            dependencies: dependencies.len(),
            used_classes: usages.len(),
            usages: usages.usage_count(),
        }
    }

    /// Share of source classes used by the target, in percent
    pub fn coverage_percent(&self) -> f64 {
        if self.dependencies == 0 {
            0.0
        } else {
            self.used_classes as f64 * 100.0 / self.dependencies as f64
        }
    }
}

/// Terminal summary printed after a run
pub struct SummaryReporter {
    source_label: String,
    target_label: String,
    /// Number of most used classes to list
    top_n: usize,
    output_path: Option<PathBuf>,
}

impl SummaryReporter {
    pub fn new(source_label: impl Into<String>, target_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            target_label: target_label.into(),
            top_n: 10,
            output_path: None,
        }
    }

    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn report(&self, dependencies: &DependencySet, usages: &UsageMap) {
        let stats = UsageStats::compute(dependencies, usages);

        println!();
        println!("{}", "CodeFinder Usage Summary".cyan().bold());
        println!("{}", BoxChars::heavy_line(50));
        println!(
            "  {} {} {} {}",
            StructureColors::label(&self.source_label),
            "→".dimmed(),
            StructureColors::label(&self.target_label),
            StructureColors::dimmed("(source → target)")
        );
        println!();
        println!(
            "  Possible dependencies: {}",
            StructureColors::count(&stats.dependencies.to_string())
        );
        println!(
            "  Classes used:          {} ({:.1}%)",
            StructureColors::count(&stats.used_classes.to_string()),
            stats.coverage_percent()
        );
        println!(
            "  Total usages:          {}",
            StructureColors::count(&stats.usages.to_string())
        );

        let top = self.most_used(usages);
        if !top.is_empty() {
            println!();
            println!("  {}", "Most used classes".bold());
            println!("  {}", BoxChars::light_line(30));
            for (name, count) in top {
                println!(
                    "  {:>5}  {}",
                    StructureColors::count(&count.to_string()),
                    StructureColors::symbol_name(name)
                );
            }
        }

        if let Some(path) = &self.output_path {
            println!();
            println!(
                "  Report written to {}",
                StructureColors::file_path(&path.display().to_string())
            );
        }
        println!();
    }

    /// Dependencies by consumer count, descending; ties keep discovery order
    fn most_used<'m>(&self, usages: &'m UsageMap) -> Vec<(&'m str, usize)> {
        let mut counts: Vec<_> = usages
            .iter()
            .map(|(dependency, consumers)| (dependency, consumers.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(self.top_n);
        counts
    }
}
