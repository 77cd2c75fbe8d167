mod support;

use std::fs;
use std::process::Command;

use clap::Parser;
use jobindex_scraper::cli::{dispatch, Args};
use support::{refused_url, serve};

fn args(url: &str, extra: &[&str]) -> Args {
    let mut argv = vec!["jobindex", url, "--timeout", "5"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_dispatch_empty_search_writes_report() {
    let (url, _requests) = serve(vec![r#"{"results": []}"#]);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.txt");

    dispatch(args(&url, &["--output", out.to_str().unwrap()])).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "No job postings found.\n");
}

#[test]
fn test_dispatch_writes_all_pages() {
    let (url, _requests) = serve(vec![
        r#"{"total_pages": 2, "results": [{"headline": "Smed"}]}"#,
        r#"{"results": [{"headline": "Elektriker"}]}"#,
    ]);
    let dir = tempfile::tempdir().unwrap();

    dispatch(args(&url, &["--format", "markdown", "--output", dir.path().to_str().unwrap()])).unwrap();

    let md = fs::read_to_string(dir.path().join("jobs.md")).unwrap();
    assert!(md.contains("Fetched 2 jobs at "));
    assert!(md.find("## Smed").unwrap() < md.find("## Elektriker").unwrap());
}

#[test]
fn test_dispatch_fetch_failure_is_err() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.txt");

    let err = dispatch(args(&refused_url(), &["--output", out.to_str().unwrap()])).unwrap_err();

    assert!(format!("{err:#}").contains("failed to fetch data"));
    assert!(!out.exists());
}

fn jobindex() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jobindex"));
    cmd.env_remove("RUST_LOG")
        .env_remove("JOBINDEX_URL")
        .env_remove("JOBINDEX_TIMEOUT")
        .env_remove("JOBINDEX_USER_AGENT");
    cmd
}

#[test]
fn test_binary_exits_zero_on_empty_search() {
    let (url, _requests) = serve(vec![r#"{"results": []}"#]);

    let output = jobindex().arg(&url).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "No job postings found.\n");
}

#[test]
fn test_binary_exits_one_on_fetch_failure() {
    let output = jobindex().arg(refused_url()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("failed to fetch data").count(), 1);
}

#[test]
fn test_binary_reports_bad_log_level() {
    let output = jobindex()
        .args(["--log-level", "foo=notalevel", "http://127.0.0.1:1/x"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}
