use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const VILLES: &str = "Ville;Région;Habitants\n\
Lyon;Auvergne-Rhône-Alpes;522000.0\n\
Nice;Provence-Alpes-Côte d'Azur;342000\n";

fn spingen(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spingen"));
    cmd.env("XDG_CONFIG_HOME", dir).env_remove("RUST_LOG").current_dir(dir);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn batch_expands_one_variation_per_row() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("villes.csv"), VILLES).unwrap();

    let out = stdout_of(spingen(tmp.path()).args([
        "batch",
        "--data",
        "villes.csv",
        "-t",
        "{Ville} ({Région}) compte {Habitants} habitants",
        "--no-export",
    ]));

    insta::assert_snapshot!(out.trim_end(), @r"
    loaded: villes.csv (rows: 2, columns: 3)
    --- Variation 1 ---
    Ville = Lyon
    Région = Auvergne-Rhône-Alpes
    Habitants = 522000
    Lyon (Auvergne-Rhône-Alpes) compte 522000 habitants

    --- Variation 2 ---
    Ville = Nice
    Région = Provence-Alpes-Côte d'Azur
    Habitants = 342000
    Nice (Provence-Alpes-Côte d'Azur) compte 342000 habitants

    -- 2 variations --
    ");
}

#[test]
fn batch_exports_to_profile_export_dir() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("villes.csv"), VILLES).unwrap();
    let export_dir = tmp.path().join("out");
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        format!("version = 1\n[profiles.default]\nexport_dir = \"{}\"\n", export_dir.display()),
    )
    .unwrap();

    spingen(tmp.path())
        .args(["--config", cfg.to_str().unwrap()])
        .args(["batch", "-d", "villes.csv", "-t", "[Visitez|Découvrez] {Ville}"])
        .args(["-c", "Ville"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exported: "));

    let csv = fs::read_to_string(export_dir.join("variations_full.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Ville,Generated Text");
    assert_eq!(lines.len(), 3);
    assert!(lines[1] == "Lyon,Visitez Lyon" || lines[1] == "Lyon,Découvrez Lyon");
    assert!(lines[2].starts_with("Nice,"));
}

#[test]
fn batch_output_flag_overrides_export_path() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("villes.csv"), VILLES).unwrap();

    spingen(tmp.path())
        .args(["batch", "-d", "villes.csv", "-t", "{Ville}", "-o", "custom.csv"])
        .assert()
        .success();

    let csv = fs::read_to_string(tmp.path().join("custom.csv")).unwrap();
    assert!(csv.starts_with("Ville,Région,Habitants,Generated Text\n"));
    assert!(csv.contains("Lyon,Auvergne-Rhône-Alpes,522000,Lyon\n"));
}

#[test]
fn batch_preview_limits_printed_variations_only() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("villes.csv"), VILLES).unwrap();

    let out = stdout_of(spingen(tmp.path()).args([
        "batch", "-d", "villes.csv", "-t", "{Ville}", "--preview", "1", "-o", "all.csv",
    ]));
    assert_eq!(out.matches("--- Variation").count(), 1);
    assert!(out.contains("-- showing 1 of 2 variations --"));

    let csv = fs::read_to_string(tmp.path().join("all.csv")).unwrap();
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn batch_decodes_latin1_and_repairs_mojibake() {
    let tmp = tempdir().unwrap();
    // "Rhône" in Latin-1, so not valid UTF-8
    fs::write(tmp.path().join("latin1.csv"), b"Fleuve\nRh\xf4ne\n").unwrap();
    // "Île" read as Windows-1252 and saved back as UTF-8
    fs::write(tmp.path().join("mojibake.csv"), "Lieu\nÃŽle-de-France\n").unwrap();

    spingen(tmp.path())
        .args(["batch", "-d", "latin1.csv", "-t", "Le {Fleuve}", "--no-export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Le Rhône\n"));

    spingen(tmp.path())
        .args(["batch", "-d", "mojibake.csv", "-t", "En {Lieu}", "--no-export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("En Île-de-France\n"));
}

#[test]
fn batch_warns_about_tokens_no_column_provides() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("villes.csv"), VILLES).unwrap();

    spingen(tmp.path())
        .args(["batch", "-d", "villes.csv", "-t", "{Ville} {Pays}", "-c", "Ville", "--no-export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lyon {Pays}"))
        .stderr(predicate::str::contains("no selected column provides this token"));
}

#[test]
fn batch_json_output_includes_row_values() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("villes.csv"), VILLES).unwrap();

    let out = stdout_of(spingen(tmp.path()).args([
        "batch", "-d", "villes.csv", "-t", "{Ville}", "-c", "Ville", "--format", "json",
        "--no-export",
    ]));

    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed[1]["index"], 2);
    assert_eq!(parsed[1]["variables"]["Ville"], "Nice");
    assert_eq!(parsed[1]["text"], "Nice");
}

#[test]
fn batch_fails_on_unknown_column() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("villes.csv"), VILLES).unwrap();

    spingen(tmp.path())
        .args(["batch", "-d", "villes.csv", "-t", "{Ville}", "-c", "Pays", "--no-export"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAIL spingen batch"))
        .stdout(predicate::str::contains("unknown column: Pays"));
}

#[test]
fn batch_fails_on_missing_file() {
    let tmp = tempdir().unwrap();
    spingen(tmp.path())
        .args(["batch", "-d", "absent.csv", "-t", "{x}"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("data file not found"));
}

#[test]
fn batch_fails_on_header_only_file() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("vide.csv"), "Ville;Région\n").unwrap();

    spingen(tmp.path())
        .args(["batch", "-d", "vide.csv", "-t", "{Ville}"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("data has no rows"));
}

#[test]
fn batch_fails_on_invalid_template_before_loading() {
    let tmp = tempdir().unwrap();
    spingen(tmp.path())
        .args(["batch", "-d", "absent.csv", "-t", "[ | ]"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid template: a spin group has no valid option"));
}

#[test]
fn batch_rejects_output_with_no_export() {
    let tmp = tempdir().unwrap();
    spingen(tmp.path())
        .args(["batch", "-d", "x.csv", "-t", "{x}", "-o", "a.csv", "--no-export"])
        .assert()
        .failure()
        .code(2);
}
