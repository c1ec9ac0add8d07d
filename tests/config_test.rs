//! Integration tests for configuration loading.

use flptime::config::{load_config, load_config_or_default};
use std::fs;
use tempfile::tempdir;

#[test]
fn load_full_config() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("flptime.toml");
    fs::write(
        &path,
        r#"
[scan]
extensions = ["flp", "FLP"]
follow_links = false
max_depth = 2
parallel = true

[report]
json = true
pause_on_exit = true
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.scan.extensions, vec!["flp"]);
    assert!(!config.scan.follow_links);
    assert_eq!(config.scan.max_depth, 2);
    assert!(config.scan.parallel);
    assert!(config.report.json);
    assert!(config.report.pause_on_exit);
}

#[test]
fn explicit_path_wins() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[report]\njson = true\n").unwrap();

    let config = load_config_or_default(Some(path.as_path())).unwrap();
    assert!(config.report.json);
    assert_eq!(config.scan.extensions, vec!["flp"]);
}

#[test]
fn missing_file_is_an_error() {
    let temp = tempdir().unwrap();
    let err = load_config(&temp.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn malformed_toml_is_an_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[scan\nextensions = ").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
