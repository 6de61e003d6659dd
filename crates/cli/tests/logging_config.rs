use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("spingen.log");

    // Create config with file logging
    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[profiles.default]
export_dir = "{}"

[logging]
level = "warn"
file_level = "debug"
file = "{}"
"#,
        root.display(),
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    // Generation logs at info level, which only the file layer accepts
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .args(["generate", "-t", "[a|b]", "-n", "2", "--batch"])
        .assert()
        .success()
        .stderr(predicate::str::contains("generated variations").not());

    assert!(log_file.exists(), "Log file should be created");
    let logged = fs::read_to_string(&log_file).unwrap();
    assert!(logged.contains("generated variations"), "log was: {logged}");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let config_path = root.join("config.toml");
    let config_content = r#"
version = 1
[profiles.default]

[logging]
level = "trace"
"#;
    fs::write(&config_path, config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.env_remove("RUST_LOG").arg("--config").arg(&config_path).arg("doctor").assert().success();

    // If it didn't crash, the level parsing worked.
}

#[test]
fn test_verbose_flag_raises_stderr_level() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .env_remove("RUST_LOG")
        .args(["-v", "generate", "-t", "[a|b]", "-n", "1", "--batch"])
        .assert()
        .success()
        .stderr(predicate::str::contains("generated variations"));
}

#[test]
fn test_default_level_keeps_stderr_quiet() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .env_remove("RUST_LOG")
        .args(["generate", "-t", "[a|b]", "-n", "1", "--batch"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
