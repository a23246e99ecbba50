//! Integration tests for the palladio-tc CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("palladio-tc").unwrap();
    // keep the host environment from leaking into manifest resolution
    cmd.env_remove("PLD_CONAN_HOUDINI_VERSION")
        .env_remove("PLD_CONAN_SKIP_CESDK")
        .env_remove("PLD_CONAN_CESDK_VERSION");
    cmd
}

#[test]
fn test_version() {
    cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("palladio-tc "));
}

#[test]
fn test_plan_default_matrix() {
    cmd()
        .args(["plan", "--root", "/repo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("palladio-tc-base:win19-vc1438-v0"))
        .stdout(predicate::str::contains("palladio-tc:win19-vc1438-hdk210559-v0"))
        .stdout(predicate::str::contains("palladio-tc:win19-vc1438-hdk205684-v0"))
        .stdout(predicate::str::contains("palladio-tc:win19-vc1438-hdk200896-v0"));
}

#[test]
fn test_plan_single_version_scenario() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        r#"
[images]
houdini_versions = ["21.0.559"]
"#,
    )
    .unwrap();

    let output = cmd()
        .args(["plan", "--root", "/repo", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "C:/Program Files/Side Effects Software/Houdini 21.0.559",
        ))
        .get_output()
        .clone();

    // exactly two build invocations: base first, then the derived image
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("palladio-tc-base:win19-vc1438-v0"));
    assert!(lines[1].starts_with("palladio-tc:win19-vc1438-hdk210559-v0"));
}

#[test]
fn test_plan_json() {
    cmd()
        .args(["plan", "--root", "/repo", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\""))
        .stdout(predicate::str::contains("BASE_IMAGE"))
        .stdout(predicate::str::contains("HOUDINI_VERSION"));
}

#[test]
fn test_deps_defaults() {
    let output = cmd().arg("deps").assert().success().get_output().clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "catch2/2.13.7",
            "houdini/[21.0]@sidefx/stable",
            "cesdk/3.2.10650@esri-rd-zurich/stable",
        ]
    );
}

#[test]
fn test_deps_houdini_override() {
    cmd()
        .arg("deps")
        .env("PLD_CONAN_HOUDINI_VERSION", "21.0.559")
        .assert()
        .success()
        .stdout(predicate::str::contains("houdini/21.0.559@sidefx/stable"))
        .stdout(predicate::str::contains("[21.0]").not());
}

#[test]
fn test_deps_skip_cesdk() {
    cmd()
        .arg("deps")
        .env("PLD_CONAN_SKIP_CESDK", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("cesdk").not())
        .stdout(predicate::str::contains("catch2/2.13.7"));
}

#[test]
fn test_deps_skip_wins_over_cesdk_override() {
    cmd()
        .arg("deps")
        .env("PLD_CONAN_SKIP_CESDK", "1")
        .env("PLD_CONAN_CESDK_VERSION", "3.3.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("cesdk").not());
}

#[test]
fn test_deps_cesdk_override() {
    cmd()
        .arg("deps")
        .env("PLD_CONAN_CESDK_VERSION", "3.3.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("cesdk/3.3.0@esri-rd-zurich/stable"))
        .stdout(predicate::str::contains("3.2.10650").not());
}

#[test]
fn test_deps_json() {
    cmd()
        .args(["deps", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"package\": \"catch2\""))
        .stdout(predicate::str::contains("\"channel\": \"sidefx/stable\""));
}

#[test]
fn test_build_fails_without_config_file() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["build", "--config"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure();
}
