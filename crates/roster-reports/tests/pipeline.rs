//! End-to-end: files on disk through the record parser into a report.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use roster_ingest::parse_sources;
use roster_reports::{ReportValues, lookup};
use tempfile::TempDir;

const HEADER: &str = "name,position,completed_tasks,performance,skills,team,experience_years";

fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let body = std::iter::once(HEADER)
        .chain(rows.iter().copied())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(&path, body).expect("fixture should be written");
    path
}

fn values(pairs: &[(&str, f64)]) -> ReportValues {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), *value))
        .collect()
}

#[test]
fn two_files_feed_the_performance_report() {
    let dir = TempDir::new().unwrap();
    let frontend = write_csv(
        dir.path(),
        "frontend.csv",
        &["Petrov Petr,Frontend Developer,20,5.0,\"Vue.js, JavaScript\",Web Team,5"],
    );
    let backend = write_csv(
        dir.path(),
        "backend.csv",
        &["Ivanov Ivan,Backend Developer,30,4.6,\"Python, DRF\",API Team,3"],
    );

    let employees = parse_sources(&[frontend, backend]).unwrap();
    let report = lookup("performance").unwrap().build(&employees);
    let result = report.compute();

    assert_eq!(
        result,
        values(&[("Frontend Developer", 5.0), ("Backend Developer", 4.6)])
    );
    assert_eq!(
        result.keys().collect::<Vec<_>>(),
        ["Frontend Developer", "Backend Developer"]
    );
}

#[test]
fn groups_span_files() {
    let dir = TempDir::new().unwrap();
    let first = write_csv(
        dir.path(),
        "a.csv",
        &[
            "Ivanov Ivan,Frontend Developer,30,4.6,Sass,Web Team,3",
            "Petrov Petr,Backend Developer,20,5.0,Python,API Team,5",
        ],
    );
    let second = write_csv(
        dir.path(),
        "b.csv",
        &[
            "Sergeev Andrey,Frontend Developer,30,4.1,Sass,Web Team,3",
            "Pavlov Raul,Backend Developer,20,4.2,Python,API Team,5",
        ],
    );

    let employees = parse_sources(&[first, second]).unwrap();
    let result = lookup("performance").unwrap().build(&employees).compute();

    assert_eq!(
        result,
        values(&[("Frontend Developer", 4.35), ("Backend Developer", 4.6)])
    );
}
