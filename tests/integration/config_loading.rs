// tests/integration/config_loading.rs

use std::io::Write;

use stepgraph::config::{load_and_validate, load_or_default};
use stepgraph::errors::StepgraphError;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_full_config_round_trips_into_sections() {
    let file = write_config(
        r##"
[layout]
columns = 4
h_spacing = 320
v_spacing = 200
margin = 20

[refresh]
interval_secs = 10

[palette.task_types]
approval = "#8b5cf6"
"##,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.layout.columns, 4);
    assert_eq!(cfg.layout.h_spacing, 320);
    assert_eq!(cfg.layout.node_width, 250);
    assert_eq!(cfg.refresh.interval_secs, 10);
    assert_eq!(cfg.palette.task_types.get("approval").map(String::as_str), Some("#8b5cf6"));
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.layout.columns, 3);
    assert_eq!(cfg.refresh.interval_secs, 5);
    assert!(cfg.palette.task_types.is_empty());
}

#[test]
fn test_overlapping_spacing_returns_config_error() {
    let file = write_config(
        r#"
[layout]
h_spacing = 200
node_width = 250
"#,
    );

    match load_and_validate(file.path()) {
        Err(StepgraphError::ConfigError(msg)) => {
            assert!(msg.contains("h_spacing"));
            assert!(msg.contains("node_width"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_zero_interval_returns_config_error() {
    let file = write_config("[refresh]\ninterval_secs = 0\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(StepgraphError::ConfigError(_))
    ));
}

#[test]
fn test_bad_palette_color_returns_config_error() {
    let file = write_config("[palette.task_types]\ndispatch = \"green\"\n");

    match load_and_validate(file.path()) {
        Err(StepgraphError::ConfigError(msg)) => {
            assert!(msg.contains("dispatch"));
            assert!(msg.contains("green"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_wrong_toml_type_returns_toml_error() {
    let file = write_config("[layout]\ncolumns = \"three\"\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(StepgraphError::TomlError(_))
    ));
}

#[test]
fn test_explicit_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        load_or_default(Some(missing.as_path())),
        Err(StepgraphError::IoError(_))
    ));
}
