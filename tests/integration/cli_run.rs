// tests/integration/cli_run.rs

use std::io::Write;

use stepgraph::cli::CliArgs;
use stepgraph::types::ViewMode;
use tempfile::NamedTempFile;

fn steps_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
  {{"id": 1, "name": "Order", "task_type": "creation", "order": 1}},
  {{"id": 2, "name": "Check", "task_type": "validation", "order": 2,
    "dependencies": [{{"depends_on_template_id": 7, "dependency_type": "blocking"}}]}}
]"#
    )
    .unwrap();
    file
}

fn args(input: &NamedTempFile) -> CliArgs {
    CliArgs {
        input: input.path().to_string_lossy().into_owned(),
        mode: ViewMode::Template,
        config: None,
        watch: false,
        interval_secs: None,
        dry_run: false,
        pretty: false,
        log_level: None,
    }
}

#[tokio::test]
async fn test_render_once_succeeds() {
    let input = steps_file();
    let result = stepgraph::run(CliArgs {
        pretty: true,
        ..args(&input)
    })
    .await;
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn test_dry_run_succeeds_with_orphan_diagnostics() {
    let input = steps_file();
    let result = stepgraph::run(CliArgs {
        dry_run: true,
        ..args(&input)
    })
    .await;
    assert!(result.is_ok(), "{:?}", result);
}

#[tokio::test]
async fn test_explicit_bad_config_fails_run() {
    let input = steps_file();
    let mut config = NamedTempFile::new().unwrap();
    write!(config, "[layout]\ncolumns = 0\n").unwrap();

    let result = stepgraph::run(CliArgs {
        config: Some(config.path().to_string_lossy().into_owned()),
        ..args(&input)
    })
    .await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("columns"));
}

#[tokio::test]
async fn test_zero_interval_in_watch_mode_fails() {
    let input = steps_file();
    let result = stepgraph::run(CliArgs {
        watch: true,
        interval_secs: Some(0),
        ..args(&input)
    })
    .await;
    assert!(result.is_err());
}
