// tests/integration/input_loading.rs

use std::io::Write;

use stepgraph::errors::StepgraphError;
use stepgraph::input::{StepSource, load_steps};
use stepgraph::types::ViewMode;
use tempfile::NamedTempFile;

#[test]
fn test_execution_file_loads_with_status() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
  {{"id": 1, "name": "Create delivery note", "task_type": "creation", "order": 1, "status": "completed"}},
  {{"id": 2, "name": "Prepare", "task_type": "preparation", "order": 2, "status": "in_progress",
    "timeout_minutes": 60,
    "dependencies": [{{"depends_on_task_id": 1, "dependency_type": "blocking"}}]}}
]"#
    )
    .unwrap();

    let source = load_steps(file.path(), ViewMode::Execution).unwrap();
    assert_eq!(source.mode(), ViewMode::Execution);
    match source {
        StepSource::Execution(steps) => {
            assert_eq!(steps.len(), 2);
            assert_eq!(steps[1].status.as_deref(), Some("in_progress"));
            assert_eq!(steps[1].dependencies[0].depends_on_task_id, 1);
        }
        other => panic!("expected execution steps, got {:?}", other),
    }
}

#[test]
fn test_template_shape_read_in_wrong_mode_is_json_error() {
    // Template dependencies lack `depends_on_task_id`.
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 2, "order": 2, "dependencies": [{{"depends_on_template_id": 1, "dependency_type": "soft"}}]}}]"#
    )
    .unwrap();

    assert!(matches!(
        load_steps(file.path(), ViewMode::Execution),
        Err(StepgraphError::JsonError(_))
    ));
    assert!(load_steps(file.path(), ViewMode::Template).is_ok());
}

#[test]
fn test_missing_input_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_steps(dir.path().join("steps.json"), ViewMode::Template),
        Err(StepgraphError::IoError(_))
    ));
}
