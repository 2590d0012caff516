use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::tempdir;

fn sample_log() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("sample_logs")
        .join("access.log")
}

fn logpulse(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logpulse"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run logpulse binary")
}

#[test]
fn cli_runs_successfully_with_default_metrics() {
    // Act
    let output = logpulse(&[sample_log().to_str().unwrap()]);

    // Assert
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["request_count"], 10);
    assert_eq!(report["error_count"], 2);
    assert_eq!(report["error_rate_percent"], 20.0);
    assert_eq!(report["latency_p50_ms"], 117.0);
    assert_eq!(report["latency_p95_ms"], 870);
    assert_eq!(report["latency_max_ms"], 1204);
    assert!(report.get("parse_errors").is_none());
}

#[test]
fn cli_accepts_explicit_json_format() {
    let output = logpulse(&[sample_log().to_str().unwrap(), "--format", "json"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("request_count"));
}

#[test]
fn cli_uses_metrics_from_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let config = dir.path().join("metrics.hcl");
    fs::write(&config, r#"metrics = ["request_count", "parse_errors"]"#).unwrap();
    let log = dir.path().join("access.log");
    fs::write(
        &log,
        "2024-09-10T10:15:30Z GET /api/orders 200 123\n\
         INVALID LINE\n\
         2024-09-10T10:15:32Z GET /api/users 200 98\n",
    )
    .unwrap();

    // Act
    let output = logpulse(&[
        log.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    // Assert
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        report,
        serde_json::json!({ "parse_errors": 1, "request_count": 2 })
    );
}

#[test]
fn missing_log_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.log");

    let output = logpulse(&[missing.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to open log file"));
}

#[test]
fn unknown_configured_metric_fails() {
    // Arrange
    let dir = tempdir().unwrap();
    let config = dir.path().join("metrics.hcl");
    fs::write(&config, r#"metrics = ["request_count", "throughput"]"#).unwrap();

    // Act
    let output = logpulse(&[
        sample_log().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    // Assert
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown metric 'throughput'"));
}

#[test]
fn unsupported_format_is_rejected() {
    let output = logpulse(&[sample_log().to_str().unwrap(), "--format", "xml"]);

    assert!(!output.status.success());
}
