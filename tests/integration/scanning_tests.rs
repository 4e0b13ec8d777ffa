//! Integration tests for the scanning pipeline
//!
//! These tests run the full analysis over the fixture trees under
//! `tests/fixtures`: `cardgen` is the source tree, `finder` the target.

use codefinder::analysis::{analyze, AnalysisOptions, DependencySet, UsageAggregator};
use codefinder::discovery::FileFinder;
use codefinder::report::{build_rows, derive_label, ReportRow, HEADER};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SOURCE_ROOT: &str = "tests/fixtures/cardgen/src/main/java";
const TARGET_ROOT: &str = "tests/fixtures/finder/src/main/java";

fn fixture(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

fn sorted_options(parallel: bool) -> AnalysisOptions {
    AnalysisOptions {
        sort_entries: true,
        parallel,
    }
}

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

// ============================================================================
// Dependency collection
// ============================================================================

mod dependency_tests {
    use super::*;

    #[test]
    fn test_collects_packaged_classes_only() {
        let set = DependencySet::build(&fixture(SOURCE_ROOT), &FileFinder::new(), false).unwrap();

        let mut names: Vec<_> = set.iter().collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "tarkleigh.cardgen.CardGen",
                "tarkleigh.cardgen.DataFormatter",
                "tarkleigh.cardgen.xml.XMLParser",
            ]
        );
    }

    #[test]
    fn test_rebuild_gives_same_set() {
        let finder = FileFinder::new();
        let first = DependencySet::build(&fixture(SOURCE_ROOT), &finder, true).unwrap();
        let second = DependencySet::build(&fixture(SOURCE_ROOT), &finder, false).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Usage aggregation
// ============================================================================

mod usage_tests {
    use super::*;

    #[test]
    fn test_usages_in_walk_order() {
        let analysis = analyze(
            &fixture(SOURCE_ROOT),
            &fixture(TARGET_ROOT),
            &sorted_options(false),
        )
        .unwrap();
        let usages = &analysis.usages;

        let keys: Vec<_> = usages.iter().map(|(dependency, _)| dependency).collect();
        assert_eq!(
            keys,
            vec![
                "tarkleigh.cardgen.CardGen",
                "tarkleigh.cardgen.xml.XMLParser",
                "tarkleigh.cardgen.DataFormatter",
            ]
        );
        assert_eq!(
            usages.consumers("tarkleigh.cardgen.CardGen").unwrap(),
            [".Default", "tarkleigh.finder.Main"]
        );
        assert_eq!(
            usages.consumers("tarkleigh.cardgen.xml.XMLParser").unwrap(),
            ["tarkleigh.finder.Main", "tarkleigh.finder.io.InputReader"]
        );
        assert_eq!(
            usages.consumers("tarkleigh.cardgen.DataFormatter").unwrap(),
            [
                "tarkleigh.finder.io.InputReader",
                "tarkleigh.finder.io.OutputWriter"
            ]
        );
    }

    #[test]
    fn test_parallel_analysis_is_identical() {
        let sequential = analyze(
            &fixture(SOURCE_ROOT),
            &fixture(TARGET_ROOT),
            &sorted_options(false),
        )
        .unwrap();
        let parallel = analyze(
            &fixture(SOURCE_ROOT),
            &fixture(TARGET_ROOT),
            &sorted_options(true),
        )
        .unwrap();

        assert_eq!(sequential.usages, parallel.usages);
        assert_eq!(sequential.dependencies, parallel.dependencies);
    }

    #[test]
    fn test_import_in_body_is_ignored() {
        let analysis = analyze(
            &fixture(SOURCE_ROOT),
            &fixture(TARGET_ROOT),
            &sorted_options(false),
        )
        .unwrap();

        // Main.java mentions DataFormatter in a comment after the imports
        let consumers = analysis
            .usages
            .consumers("tarkleigh.cardgen.DataFormatter")
            .unwrap();
        assert!(!consumers.iter().any(|c| c == "tarkleigh.finder.Main"));
    }

    #[test]
    fn test_namespace_less_consumer_is_kept() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "source/Lib.java", b"package lib;\nclass Lib {}\n");
        write(dir.path(), "source/Loose.java", b"class Loose {}\n");
        write(
            dir.path(),
            "target/Loose.java",
            b"import lib.Lib;\nimport .Loose;\nclass Loose {}\n",
        );

        let analysis = analyze(
            &dir.path().join("source"),
            &dir.path().join("target"),
            &sorted_options(false),
        )
        .unwrap();

        assert_eq!(analysis.dependencies.len(), 1);
        assert_eq!(analysis.usages.consumers("lib.Lib").unwrap(), [".Loose"]);
        assert!(analysis.usages.consumers(".Loose").is_none());
    }

    #[test]
    fn test_decode_errors_do_not_abort() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "source/Lib.java", b"package lib;\nclass Lib {}\n");
        write(dir.path(), "source/Broken.java", b"package \xc3\x28lib;\n");
        write(
            dir.path(),
            "target/Broken.java",
            b"package app;\nimport lib.Lib;\n/* \xff */\n",
        );
        write(dir.path(), "target/Ok.java", b"package app;\nimport lib.Lib;\n");

        let analysis = analyze(
            &dir.path().join("source"),
            &dir.path().join("target"),
            &sorted_options(false),
        )
        .unwrap();

        assert_eq!(analysis.dependencies.len(), 1);
        assert_eq!(analysis.usages.consumers("lib.Lib").unwrap(), ["app.Ok"]);
    }

    #[test]
    fn test_missing_target_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let deps = DependencySet::new();

        let result = UsageAggregator::new(&deps).aggregate(&dir.path().join("nope"));
        assert!(matches!(
            result,
            Err(codefinder::Error::RootNotFound { .. })
        ));
    }
}

// ============================================================================
// Report rows
// ============================================================================

mod report_tests {
    use super::*;

    #[test]
    fn test_labels_for_fixture_roots() {
        assert_eq!(derive_label(SOURCE_ROOT), "cardgen");
        assert_eq!(derive_label(TARGET_ROOT), "finder");
    }

    #[test]
    fn test_rows_for_fixture_trees() {
        let analysis = analyze(
            &fixture(SOURCE_ROOT),
            &fixture(TARGET_ROOT),
            &sorted_options(false),
        )
        .unwrap();

        let rows = build_rows(
            &analysis.usages,
            &derive_label(SOURCE_ROOT),
            &derive_label(TARGET_ROOT),
        );

        assert_eq!(rows.len(), 1 + analysis.usages.usage_count());
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].fields(), HEADER);
        assert_eq!(
            rows[1],
            ReportRow::new("cardgen", "tarkleigh.cardgen.CardGen", "finder", ".Default")
        );
        assert_eq!(
            rows[6],
            ReportRow::new(
                "cardgen",
                "tarkleigh.cardgen.DataFormatter",
                "finder",
                "tarkleigh.finder.io.OutputWriter"
            )
        );
    }
}
