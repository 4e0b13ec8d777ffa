//! Flattening of usages into report rows

use crate::analysis::UsageMap;
use serde::Serialize;

/// Column titles, always the first row of a report
pub const HEADER: [&str; 4] = ["Source Root", "Used Class", "Target Root", "Consuming Class"];

/// One (dependency, consumer) pair with the labels of both trees
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub source_root: String,
    pub used_class: String,
    pub target_root: String,
    pub consuming_class: String,
}

impl ReportRow {
    pub fn header() -> Self {
        Self::new(HEADER[0], HEADER[1], HEADER[2], HEADER[3])
    }

    pub fn new(
        source_root: impl Into<String>,
        used_class: impl Into<String>,
        target_root: impl Into<String>,
        consuming_class: impl Into<String>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            used_class: used_class.into(),
            target_root: target_root.into(),
            consuming_class: consuming_class.into(),
        }
    }

    pub fn fields(&self) -> [&str; 4] {
        [
            self.source_root.as_str(),
            self.used_class.as_str(),
            self.target_root.as_str(),
            self.consuming_class.as_str(),
        ]
    }
}

/// Header row followed by one row per recorded usage, in map order
pub fn build_rows(usages: &UsageMap, source_label: &str, target_label: &str) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(1 + usages.usage_count());
    rows.push(ReportRow::header());

    for (dependency, consumers) in usages.iter() {
        for consumer in consumers {
            rows.push(ReportRow::new(
                source_label,
                dependency,
                target_label,
                consumer.as_str(),
            ));
        }
    }

    rows
}
