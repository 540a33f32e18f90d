#![cfg(unix)]

use cv_build_selector::{
    BuildRunner, BuildTool, ProcessBuildTool, SelectorError, Target, ToolConfig,
};
use std::path::Path;

fn shell_exiting_with(code: i32) -> ProcessBuildTool {
    // `sh -c <script> <$0>` receives the target as $0
    ProcessBuildTool::new("sh").with_args(vec!["-c".to_string(), format!("exit {}", code)])
}

#[tokio::test]
async fn test_zero_exit_is_success() {
    let status = shell_exiting_with(0).run(&Target::All).await.unwrap();
    assert!(status.success());
    assert_eq!(status.code, Some(0));
}

#[tokio::test]
async fn test_exit_code_is_reported_raw() {
    let status = shell_exiting_with(2).run(&Target::All).await.unwrap();
    assert!(!status.success());
    assert_eq!(status.code, Some(2));
}

#[tokio::test]
async fn test_runner_normalizes_real_failure() {
    let runner = BuildRunner::new(shell_exiting_with(2));

    let err = runner.run(Path::new("cv.yaml")).await.unwrap_err();

    assert!(matches!(err, SelectorError::ToolFailed { code: Some(2), .. }));
    assert_eq!(err.exit_code(), Some(1));
}

#[tokio::test]
async fn test_target_is_passed_after_prefix_args() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("target.txt");
    let script = format!("printf '%s' \"$0\" > '{}'", out.display());
    let tool = ProcessBuildTool::new("sh").with_args(vec!["-c".to_string(), script]);

    BuildRunner::new(tool)
        .run(Path::new("cvs/english.yaml"))
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "english");
}

#[tokio::test]
async fn test_missing_program_is_spawn_error() {
    let tool = ProcessBuildTool::new("cv-build-selector-no-such-tool");

    let err = tool.run(&Target::All).await.unwrap_err();

    match err {
        SelectorError::Spawn { program, source } => {
            assert_eq!(program, "cv-build-selector-no-such-tool");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_from_settings_uses_configured_program() {
    let config = ToolConfig {
        program: "scons-3".to_string(),
        args: vec!["-j4".to_string()],
    };
    let tool = ProcessBuildTool::from_settings(&config);

    let invocation = tool.invocation(&Target::Named("cv".to_string()));

    assert_eq!(invocation.program, "scons-3");
    assert_eq!(invocation.args, vec!["-j4", "cv"]);
}

#[test]
fn test_default_program_is_scons() {
    let invocation = ProcessBuildTool::default().invocation(&Target::All);
    assert_eq!(invocation.program, "scons");
    assert_eq!(invocation.args, vec![""]);
}
