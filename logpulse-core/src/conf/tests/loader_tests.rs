use crate::conf::{ConfigError, DEFAULT_METRICS, MetricsConfig, load_config};
use crate::metrics::MetricRegistry;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_metric_list_in_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("metrics.hcl");
    fs::write(&path, r#"metrics = ["latency", "parse_errors", "request_count"]"#).unwrap();

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(
        config.metrics,
        vec!["latency", "parse_errors", "request_count"]
    );
}

#[test]
fn default_config_is_the_builtin_set() {
    let config = MetricsConfig::default();

    assert_eq!(config.metrics, DEFAULT_METRICS);
    assert_eq!(config.metrics, vec!["request_count", "error_rate", "latency"]);
}

#[test]
fn default_config_builds_against_builtin_registry() {
    let metrics = MetricRegistry::builtin()
        .build_all(&MetricsConfig::default().metrics)
        .unwrap();

    assert_eq!(metrics.len(), 3);
}

#[test]
fn missing_file_is_read_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.hcl");

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn malformed_hcl_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metrics.hcl");
    fs::write(&path, "metrics = [").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metrics.hcl");
    fs::write(
        &path,
        "metrics = [\"latency\"]\nthroughput = true\n",
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_metric_name_fails_when_building() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("metrics.hcl");
    fs::write(&path, r#"metrics = ["request_count", "bogus"]"#).unwrap();
    let config = load_config(&path).unwrap();

    // Act
    let err = MetricRegistry::builtin()
        .build_all(&config.metrics)
        .err()
        .unwrap();

    // Assert
    assert_eq!(
        err.to_string(),
        "unknown metric 'bogus' (known metrics: error_rate, latency, parse_errors, request_count)"
    );
}
