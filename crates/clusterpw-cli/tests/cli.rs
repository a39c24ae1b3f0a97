use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "CLUSTERPW_CONFIG",
    "CLUSTERPW_ALWAYS_CHANGE_ALL_PASSWORD",
    "CLUSTERPW_FENCE_AGENT",
    "CLUSTERPW_SECURE_VAGRANT_USER_PWD",
    "CLUSTERPW_PASSWORD_DIR",
    "CLUSTERPW_PASSWORD_LENGTH",
    "CLUSTERPW_LOG_LEVEL",
    "RUST_LOG",
];

fn clusterpw(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clusterpw").unwrap();
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn read(dir: &TempDir, file: &str) -> String {
    fs::read_to_string(dir.path().join("vagrant_pwd").join(file)).unwrap()
}

#[test]
fn provision_creates_admin_password_with_notice() {
    let dir = TempDir::new().unwrap();

    let output = clusterpw(&dir).arg("provision").assert().success();
    let value = read(&dir, ".hacluster_pwd");

    assert_eq!(value.len(), 13);
    output.stdout(format!(
        "Create new hacluster_pwd in vagrant_pwd/.hacluster_pwd file: {}\n",
        value
    ));
    assert!(!dir.path().join("vagrant_pwd/.fencecluster_pwd").exists());
    assert!(!dir.path().join("vagrant_pwd/.vagrant_pwd").exists());
}

#[test]
fn provision_is_silent_on_cache_hit() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("vagrant_pwd")).unwrap();
    fs::write(dir.path().join("vagrant_pwd/.hacluster_pwd"), "abc").unwrap();

    clusterpw(&dir)
        .arg("provision")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read(&dir, ".hacluster_pwd"), "abc");
}

#[test]
fn provision_flags_from_environment() {
    let dir = TempDir::new().unwrap();

    clusterpw(&dir)
        .arg("provision")
        .env("CLUSTERPW_FENCE_AGENT", "true")
        .env("CLUSTERPW_SECURE_VAGRANT_USER_PWD", "yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Create new fencecluster_pwd"))
        .stdout(predicate::str::contains("Create new vagrant_user_pwd in vagrant_pwd/.vagrant_pwd"));

    assert_eq!(read(&dir, ".fencecluster_pwd").len(), 13);
    assert_eq!(read(&dir, ".vagrant_pwd").len(), 13);
}

#[test]
fn provision_reset_regenerates() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("vagrant_pwd")).unwrap();
    fs::write(dir.path().join("vagrant_pwd/.hacluster_pwd"), "abc").unwrap();

    clusterpw(&dir)
        .args(["provision", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Create new hacluster_pwd"));

    assert_ne!(read(&dir, ".hacluster_pwd"), "abc");
}

#[test]
fn provision_reads_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("clusterpw.yml"),
        "directory: secrets\nfence_agent: true\npassword:\n  length: 20\n  exact_length: true\n",
    )
    .unwrap();

    clusterpw(&dir).arg("provision").assert().success();

    let fence = fs::read_to_string(dir.path().join("secrets/.fencecluster_pwd")).unwrap();
    assert_eq!(fence.len(), 20);
    assert!(!dir.path().join("vagrant_pwd").exists());
}

#[test]
fn provision_export_lines() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("vagrant_pwd")).unwrap();
    fs::write(dir.path().join("vagrant_pwd/.hacluster_pwd"), "it's").unwrap();

    clusterpw(&dir)
        .args(["provision", "--export", "--fence-agent"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("export HACLUSTER_PWD='it'\\''s'\n"))
        .stdout(predicate::str::contains("export FENCECLUSTER_PWD='"))
        .stdout(predicate::str::contains("Create new").not())
        .stderr(predicate::str::contains("Create new fencecluster_pwd"));
}

#[test]
fn show_status_and_reset() {
    let dir = TempDir::new().unwrap();

    clusterpw(&dir)
        .args(["show", "hacluster"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hacluster_pwd is not cached"));

    clusterpw(&dir).arg("provision").assert().success();
    let value = read(&dir, ".hacluster_pwd");

    clusterpw(&dir)
        .args(["show", "hacluster"])
        .assert()
        .success()
        .stdout(format!("{}\n", value));

    clusterpw(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("hacluster_pwd"))
        .stdout(predicate::str::contains("disabled"));

    clusterpw(&dir)
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    clusterpw(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed hacluster_pwd"));

    assert!(!dir.path().join("vagrant_pwd/.hacluster_pwd").exists());
}

#[test]
fn unknown_secret_is_rejected() {
    let dir = TempDir::new().unwrap();

    clusterpw(&dir)
        .args(["show", "root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown secret: root"));
}

#[test]
fn invalid_environment_flag_fails() {
    let dir = TempDir::new().unwrap();

    clusterpw(&dir)
        .arg("provision")
        .env("CLUSTERPW_FENCE_AGENT", "sometimes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CLUSTERPW_FENCE_AGENT"));

    assert!(!dir.path().join("vagrant_pwd").exists());
}

#[test]
fn malformed_config_reports_path_once() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("clusterpw.yml"), "password: [unclosed\n").unwrap();

    let output = clusterpw(&dir).arg("provision").assert().failure();
    let stderr = String::from_utf8_lossy(&output.get_output().stderr).into_owned();

    assert_eq!(stderr.matches("Failed to load").count(), 1, "{stderr}");
    assert!(stderr.contains("clusterpw.yml"));
    assert!(!dir.path().join("vagrant_pwd").exists());
}

#[test]
fn oversized_length_is_rejected() {
    let dir = TempDir::new().unwrap();

    clusterpw(&dir)
        .args(["provision", "--length", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("password.length must be at most"));

    assert!(!dir.path().join("vagrant_pwd").exists());
}

#[test]
fn quiet_help_describes_error_only_logging() {
    let dir = TempDir::new().unwrap();

    clusterpw(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Only log errors"));
}

#[test]
fn init_writes_default_config_once() {
    let dir = TempDir::new().unwrap();

    clusterpw(&dir).arg("init").assert().success();
    let written = fs::read_to_string(dir.path().join("clusterpw.yml")).unwrap();
    assert!(written.contains("directory: vagrant_pwd"));
    assert!(written.contains("length: 12"));

    clusterpw(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    clusterpw(&dir).args(["init", "--force"]).assert().success();
}
