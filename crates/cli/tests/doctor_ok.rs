use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
export_dir = "/tmp/spins"
count = 25
delimiter = ";"
seed = 7
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   spingen doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("export_dir: /tmp/spins"))
        .stdout(predicate::str::contains("count: 25"))
        .stdout(predicate::str::contains("seed: 7"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("spingen").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
export_dir = "/tmp/xdg-spins"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   spingen doctor"))
        .stdout(predicate::str::contains("export_dir: /tmp/xdg-spins"));
}

#[test]
fn doctor_falls_back_to_defaults_without_config() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("path: (none, defaults in use"))
        .stdout(predicate::str::contains("count: 10"))
        .stdout(predicate::str::contains("delimiter: ;"))
        .stdout(predicate::str::contains("seed: random"));
}

#[test]
fn doctor_selects_profile_override() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
version = 1
profile = "default"

[profiles.default]
count = 5

[profiles.tabs]
count = 50
delimiter = "\\t"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.args(["--config", cfg.to_str().unwrap(), "--profile", "tabs", "doctor"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("profile: tabs"))
        .stdout(predicate::str::contains("count: 50"))
        .stdout(predicate::str::contains("delimiter: \\t"));
}

#[test]
fn doctor_fails_on_missing_explicit_config() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("absent.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAIL spingen doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_unknown_profile() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(&cfg, "version = 1\n[profiles.default]\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap(), "--profile", "nope"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL spingen doctor"))
        .stdout(predicate::str::contains("nope"));
}
