//! Integration tests for the `appforge` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ID: &str = "com.example.foo";

/// A command isolated from the user's config, `.env` and `RUST_LOG`.
fn appforge(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_appforge"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("xdg"))
        .env("NO_COLOR", "1")
        .env("APPFORGE_LOGGING__TIMESTAMPS", "false")
        .env_remove("RUST_LOG");
    cmd
}

fn create_project(home: &TempDir) -> std::path::PathBuf {
    appforge(home)
        .args(["new", ID, "--yes", "--dir"])
        .arg(home.path())
        .assert()
        .success();
    home.path().join(ID)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_2() {
    let home = TempDir::new().unwrap();
    appforge(&home).arg("bogus").assert().code(2);
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_layout() {
    let home = TempDir::new().unwrap();

    appforge(&home)
        .args(["new", ID, "--yes", "--dir"])
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created com.example.foo"));

    let root = home.path().join(ID);
    for dir in ["app", "log", "pkg", "prj"] {
        assert!(root.join(dir).is_dir(), "{dir}");
    }
    assert_eq!(read(&root.join("log").join("common.log")), "");
}

#[test]
fn new_defaults_to_current_dir() {
    let home = TempDir::new().unwrap();
    appforge(&home).args(["new", ID, "--yes"]).assert().success();
    assert!(home.path().join(ID).join("prj").is_dir());
}

#[test]
fn new_twice_is_conflict() {
    let home = TempDir::new().unwrap();
    create_project(&home);

    appforge(&home)
        .args(["new", ID, "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_with_malformed_id_fails() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .args(["new", "com..broken", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid package id"));
    assert!(!home.path().join("com..broken").exists());
}

#[test]
fn new_in_missing_dir_is_not_found() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .args(["new", ID, "--yes", "--dir"])
        .arg(home.path().join("missing"))
        .assert()
        .code(3);
}

#[test]
fn new_dry_run_writes_nothing() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .args(["new", ID, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("common.log"));
    assert!(!home.path().join(ID).exists());
}

#[test]
fn new_dry_run_reports_conflict() {
    let home = TempDir::new().unwrap();
    create_project(&home);
    appforge(&home)
        .args(["new", ID, "--dry-run"])
        .assert()
        .code(2);
}

#[test]
fn quiet_new_prints_nothing() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .args(["-q", "new", ID])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(home.path().join(ID).is_dir());
}

// ── info ──────────────────────────────────────────────────────────────────────

#[test]
fn info_loads_project_root() {
    let home = TempDir::new().unwrap();
    let root = create_project(&home);

    appforge(&home)
        .args(["info", "--dir"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(ID))
        .stdout(predicate::str::contains("prj"));
}

#[test]
fn info_json_output() {
    let home = TempDir::new().unwrap();
    let root = create_project(&home);

    let out = appforge(&home)
        .current_dir(&root)
        .args(["info", "--output-format", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["package_id"], ID);
    assert_eq!(value["log"], root.join("log").display().to_string());
}

#[test]
fn info_outside_project_is_not_found() {
    let home = TempDir::new().unwrap();
    let plain = home.path().join("not-a-project");
    fs::create_dir(&plain).unwrap();

    appforge(&home)
        .args(["info", "--dir"])
        .arg(&plain)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid path"));
}

#[test]
fn info_with_missing_child_is_not_found() {
    let home = TempDir::new().unwrap();
    let root = create_project(&home);
    fs::remove_dir(root.join("pkg")).unwrap();

    appforge(&home)
        .args(["info", "--dir"])
        .arg(&root)
        .assert()
        .code(3);
}

// ── log ───────────────────────────────────────────────────────────────────────

#[test]
fn log_writes_terminal_and_common_log() {
    let home = TempDir::new().unwrap();
    let root = create_project(&home);

    appforge(&home)
        .args(["log", "hello", "--dir"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));

    assert_eq!(read(&root.join("log").join("common.log")), "hello\n");
}

#[test]
fn log_resets_common_log_each_run() {
    let home = TempDir::new().unwrap();
    let root = create_project(&home);

    for msg in ["first", "second"] {
        appforge(&home)
            .current_dir(&root)
            .args(["log", msg])
            .assert()
            .success();
    }

    assert_eq!(read(&root.join("log").join("common.log")), "second\n");
}

#[test]
fn log_to_platform_file() {
    let home = TempDir::new().unwrap();
    let root = create_project(&home);

    appforge(&home)
        .current_dir(&root)
        .args(["log", "gradle done", "--platform", "android"])
        .assert()
        .success();

    assert_eq!(read(&root.join("log").join("android.log")), "gradle done\n");
    assert_eq!(read(&root.join("log").join("common.log")), "");
}

#[test]
fn log_with_timestamps() {
    let home = TempDir::new().unwrap();
    let root = create_project(&home);

    appforge(&home)
        .current_dir(&root)
        .env("APPFORGE_LOGGING__TIMESTAMPS", "true")
        .args(["log", "stamped"])
        .assert()
        .success();

    let line = read(&root.join("log").join("common.log"));
    assert!(line.ends_with(" stamped\n"), "{line:?}");
    assert!(line.len() > "stamped\n".len() + 10);
}

#[test]
fn log_rejects_unknown_platform() {
    let home = TempDir::new().unwrap();
    let root = create_project(&home);

    appforge(&home)
        .current_dir(&root)
        .env("APPFORGE_PLATFORMS__KNOWN", "android,ios")
        .args(["log", "x", "--platform", "wasm"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown platform"))
        .stderr(predicate::str::contains("android, ios"));

    assert!(!root.join("log").join("wasm.log").exists());
}

// ── config / init / completions ───────────────────────────────────────────────

#[test]
fn init_then_config_get() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("appforge.toml");

    appforge(&home)
        .args(["init", "--config"])
        .arg(&file)
        .assert()
        .success();
    assert!(read(&file).contains("[output]"));

    appforge(&home)
        .args(["config", "get", "output.format", "--config"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = human"));
}

#[test]
fn init_without_force_keeps_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("appforge.toml");
    fs::write(&file, "[output]\nformat = \"plain\"\n").unwrap();

    appforge(&home)
        .args(["init", "--config"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(read(&file), "[output]\nformat = \"plain\"\n");
}

#[test]
fn init_writes_default_location() {
    let home = TempDir::new().unwrap();
    appforge(&home).arg("init").assert().success();

    appforge(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn env_overrides_config_value() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .env("APPFORGE_OUTPUT__FORMAT", "json")
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = json"));
}

#[test]
fn missing_config_file_exits_4() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .args(["config", "list", "--config"])
        .arg(home.path().join("absent.toml"))
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key_exits_4() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn shell_completions() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appforge"));
}

#[test]
fn verbose_flag_emits_diagnostics() {
    let home = TempDir::new().unwrap();
    appforge(&home)
        .args(["-v", "new", ID, "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}
