// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn config_show_reflects_workspace_file() {
    let temp = workspace();

    brief(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("program = \"sh\""))
        .stdout(predicate::str::contains("label = \"CF Tunnel\""));
}

#[test]
fn config_show_applies_env_layer() {
    let temp = workspace();

    brief(temp.path())
        .env("BOOTSTRAP_USER_NAME", "Dana")
        .env("BOOTSTRAP_PROD_URL", "https://prod.test/health")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user_name = \"Dana\""))
        .stdout(predicate::str::contains("url = \"https://prod.test/health\""));
}

#[test]
fn config_from_env_path() {
    let temp = workspace();
    write(&temp, "alt.toml", "user_name = \"Alt\"\n");

    brief(temp.path())
        .env("BRIEF_CONFIG", temp.path().join("alt.toml"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user_name = \"Alt\""));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = workspace();

    brief(temp.path())
        .args(["--config", "/nonexistent/brief.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn malformed_workspace_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    write(&temp, "brief.toml", "[probes\n");

    brief(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user_name = \"there\""))
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn malformed_explicit_config_is_an_error() {
    let temp = workspace();
    write(&temp, "named.toml", "[probes\n");

    brief(temp.path())
        .arg("--config")
        .arg(temp.path().join("named.toml"))
        .arg("next")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: invalid config"));
}
