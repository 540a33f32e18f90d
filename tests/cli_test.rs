#![cfg(unix)]

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Config that makes `sh -c <script>` stand in for the build tool.
fn shell_config(script: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[tool]\nprogram = \"sh\"\nargs = [\"-c\", {:?}]", script).unwrap();
    file
}

fn run_selector(config: &NamedTempFile, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_selector"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_successful_build_exits_zero() {
    let config = shell_config("exit 0");

    let output = run_selector(&config, &["cv.yaml"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Building target cv\n");
}

#[test]
fn test_failed_build_exits_one_quietly() {
    let config = shell_config("exit 2");

    let output = run_selector(&config, &["cv.yaml"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Building target cv\n");
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_no_argument_builds_all_versions() {
    let config = shell_config("exit 0");

    let output = run_selector(&config, &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Building all CV versions\n"
    );
}

#[test]
fn test_extra_arguments_do_not_change_target() {
    let config = shell_config("exit 0");

    let output = run_selector(&config, &["dir/sub/build.yaml", "extra"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Building target build\n"
    );
}

#[test]
fn test_missing_tool_exits_non_zero_with_diagnostic() {
    let config = shell_config("exit 0");

    let output = run_selector(&config, &["--tool", "cv-build-selector-no-such-tool", "cv.yaml"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cv-build-selector-no-such-tool"));
}
