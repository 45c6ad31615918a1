//! Integration tests for the pkgcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn install(site: &Path, dir_name: &str, version: &str) {
    let dist = site.join(dir_name);
    fs::create_dir_all(&dist).unwrap();
    fs::write(
        dist.join("METADATA"),
        format!("Metadata-Version: 2.1\nVersion: {}\n", version),
    )
    .unwrap();
}

/// A project dir with `.pkgcheck.yml` and an empty `site` directory.
fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".pkgcheck.yml"), config).unwrap();
    fs::create_dir_all(temp.path().join("site")).unwrap();
    temp
}

fn pkgcheck(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("pkgcheck"));
    cmd.current_dir(project);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("PKGCHECK_PYTHON");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pkgcheck(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--site-packages"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pkgcheck(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn missing_package_exits_one_with_remediation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages:\n  - alpha\n  - beta[x]\n");
    install(&temp.path().join("site"), "alpha-1.2.dist-info", "1.2");

    pkgcheck(temp.path())
        .args(["--site-packages", "site"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checking 2 Python packages..."))
        .stdout(predicate::str::contains("(Found: alpha==1.2)"))
        .stdout(predicate::str::contains("Package 'beta' not found"))
        .stdout(predicate::str::contains("Installed: 1"))
        .stdout(predicate::str::contains("Missing:   1"))
        .stdout(predicate::str::contains("\nAction Required:\n"))
        .stdout(predicate::str::contains("✗ Action Required").not())
        .stdout(predicate::str::contains(r#"pip install "beta[x]""#));
    Ok(())
}

#[test]
fn all_installed_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [alpha, beta]\n");
    install(&temp.path().join("site"), "alpha-1.2.dist-info", "1.2");
    install(&temp.path().join("site"), "beta-0.1.dist-info", "0.1");

    pkgcheck(temp.path())
        .args(["--site-packages", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All packages are installed!"))
        .stdout(predicate::str::contains("Action Required").not());
    Ok(())
}

#[test]
fn lookup_error_is_warned_and_counted_missing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [gamma]\n");
    fs::create_dir_all(temp.path().join("site/gamma-1.0.dist-info"))?;

    pkgcheck(temp.path())
        .args(["--site-packages", "site"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("⚠"))
        .stdout(predicate::str::contains("Error checking 'gamma'"))
        .stdout(predicate::str::contains(r#"pip install "gamma""#));
    Ok(())
}

#[test]
fn explicit_check_subcommand_matches_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [alpha]\n");
    install(&temp.path().join("site"), "alpha-1.2.dist-info", "1.2");

    pkgcheck(temp.path())
        .args(["check", "--site-packages", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha==1.2"));
    Ok(())
}

#[test]
fn json_output_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [alpha, beta]\n");
    install(&temp.path().join("site"), "alpha-1.2.dist-info", "1.2");

    let output = pkgcheck(temp.path())
        .args(["check", "--format", "json", "--site-packages", "site"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["total"], 2);
    assert_eq!(value["missing"][0], "beta");
    assert_eq!(value["results"][0]["version"], "1.2");
    Ok(())
}

#[test]
fn installer_flag_changes_remediation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [httpx]\n");

    pkgcheck(temp.path())
        .args(["check", "--installer", "uv pip install", "--site-packages", "site"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#"uv pip install "httpx""#));
    Ok(())
}

#[test]
fn config_installer_changes_remediation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [httpx]\ninstaller: python -m pip install\n");

    pkgcheck(temp.path())
        .args(["--site-packages", "site"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#"python -m pip install "httpx""#));
    Ok(())
}

#[test]
fn no_args_without_python_reports_default_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    pkgcheck(temp.path())
        .env("PKGCHECK_PYTHON", "definitely-not-a-python-binary")
        .env_remove("VIRTUAL_ENV")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checking 26 Python packages..."))
        .stdout(predicate::str::contains("Missing:   26"))
        .stdout(predicate::str::contains(
            r#"pip install "langgraph" "langgraph-checkpoint" "langgraph-cli[inmem]""#,
        ));
    Ok(())
}

#[test]
fn quiet_hides_found_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [alpha, beta]\n");
    install(&temp.path().join("site"), "alpha-1.2.dist-info", "1.2");

    pkgcheck(temp.path())
        .args(["--quiet", "--site-packages", "site"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("alpha==1.2").not())
        .stdout(predicate::str::contains("Package 'beta' not found"));
    Ok(())
}

#[test]
fn malformed_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [unterminated\n");

    pkgcheck(temp.path())
        .args(["--site-packages", "site"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn missing_config_override_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    pkgcheck(temp.path())
        .args(["--config", "nope.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn list_shows_packages_with_extras() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [httpx, \"uvicorn[standard]\"]\n");

    pkgcheck(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 packages (from config)"))
        .stdout(predicate::str::contains("uvicorn [extras: standard]"));
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    pkgcheck(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pkgcheck"));
    Ok(())
}
