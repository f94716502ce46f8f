//! Drafts directory discovery

use super::*;
use crate::config::CardsConfig;
use crate::error::CardsError;
use crate::loader::ReportSource;
use tempfile::TempDir;

#[test]
fn test_discover_picks_newest_report() {
    let temp_dir = TempDir::new().unwrap();
    write_report(temp_dir.path(), "nifty50_analysis-2024-02-28.md", SAMPLE_REPORT);
    let newest = write_report(temp_dir.path(), "nifty50_analysis-2024-03-01.md", SAMPLE_REPORT);
    write_report(temp_dir.path(), "nifty50_analysis-2023-12-31.md", SAMPLE_REPORT);
    write_report(temp_dir.path(), "notes.md", "not a report");

    let config = CardsConfig::default().with_drafts_dir(temp_dir.path());
    let source = ReportSource::discover(&config).unwrap();

    assert_eq!(source, ReportSource::Path(newest));
}

#[test]
fn test_discover_ignores_directories() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("nifty50_analysis-2099-01-01.md")).unwrap();
    let report = write_report(temp_dir.path(), "nifty50_analysis-2024-03-01.md", SAMPLE_REPORT);

    let config = CardsConfig::default().with_drafts_dir(temp_dir.path());
    assert_eq!(
        ReportSource::discover(&config).unwrap(),
        ReportSource::Path(report)
    );
}

#[test]
fn test_discover_without_reports() {
    let temp_dir = TempDir::new().unwrap();
    write_report(temp_dir.path(), "charts.md", "");

    let config = CardsConfig::default().with_drafts_dir(temp_dir.path());
    match ReportSource::discover(&config) {
        Err(CardsError::NoReportDiscovered { pattern }) => {
            assert!(pattern.ends_with("nifty50_analysis-*.md"));
        }
        other => panic!("Expected NoReportDiscovered error, got {:?}", other),
    }
}
