use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "collision-safe batch case renaming",
        ));
}

#[test]
fn test_version_subcommand() {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("recase 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"\{"name":"recase","version":"0\.1\.0"\}"#).unwrap());
}

#[test]
fn test_rename_requires_mode() {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.arg("rename")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--mode"));
}

#[test]
fn test_rename_kebab_basic() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();
    temp_dir.child("AnotherFile.txt").write_str("b").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["rename", "-m", "kebab", "--skip-history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 2 item(s)"));

    assert!(temp_dir.path().join("my-file.txt").exists());
    assert!(temp_dir.path().join("another-file.txt").exists());
    assert!(!temp_dir.path().join("myFile.txt").exists());
}

#[test]
fn test_rename_dry_run_leaves_files() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["rename", "-m", "snake", "--dry-run", "--skip-history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename:"))
        .stdout(predicate::str::contains("Dry run: 1 item(s) would be renamed"));

    assert!(temp_dir.path().join("myFile.txt").exists());
    assert!(!temp_dir.path().join("my_file.txt").exists());
}

#[test]
fn test_rename_recursive_with_directories() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("OuterDir").create_dir_all().unwrap();
    temp_dir
        .child("OuterDir/someFile.txt")
        .write_str("x")
        .unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["rename", "-m", "snake", "-r", "-d", "--skip-history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 2 item(s)"));

    assert!(temp_dir.path().join("outer_dir/some_file.txt").exists());
    assert!(!temp_dir.path().join("OuterDir").exists());
}

#[test]
fn test_rename_dirs_only_skips_files() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("MyDir").create_dir_all().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["rename", "-m", "snake", "-r", "-D", "--skip-history"])
        .assert()
        .success();

    assert!(temp_dir.path().join("my_dir").exists());
    assert!(temp_dir.path().join("myFile.txt").exists());
}

#[test]
fn test_rename_with_ignore_pattern() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();
    temp_dir.child("keepMe.log").write_str("b").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["rename", "-m", "snake", "--ignore", "*.log", "--skip-history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 1 item(s)"));

    assert!(temp_dir.path().join("my_file.txt").exists());
    assert!(temp_dir.path().join("keepMe.log").exists());
}

#[test]
fn test_rename_missing_path_exits_with_2() {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.args(["rename", "-m", "snake", "-p", "/definitely/not/here"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_rename_json_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["rename", "-m", "kebab", "--output", "json", "--skip-history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\":\"rename\""))
        .stdout(predicate::str::contains("\"renames\":1"))
        .stdout(predicate::str::contains("\"mode\":\"kebab\""));
}

#[test]
fn test_rename_dry_run_json_is_single_document() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args([
            "rename",
            "-m",
            "kebab",
            "--dry-run",
            "--output",
            "json",
            "--skip-history",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("Would rename").not())
        .stdout(predicate::str::contains("\"dry_run\":true"));

    assert!(temp_dir.path().join("myFile.txt").exists());
}

#[test]
fn test_rename_quiet_suppresses_summary() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["-q", "rename", "-m", "snake", "--skip-history"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp_dir.path().join("my_file.txt").exists());
}

#[test]
fn test_rename_verbose_prints_each_rename() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["-v", "rename", "-m", "snake", "--skip-history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed: "))
        .stdout(predicate::str::contains("my_file.txt"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.args(["-q", "-v", "rename", "-m", "snake"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_rename_and_undo_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("contents").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .args(["rename", "-m", "kebab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 1 item(s)"));

    assert!(temp_dir.path().join("my-file.txt").exists());

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .arg("undo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reverted 1 rename(s)"));

    assert!(temp_dir.path().join("myFile.txt").exists());
    assert!(!temp_dir.path().join("my-file.txt").exists());

    // The entry was consumed, a second undo has nothing to revert
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .arg("undo")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no rename history found"));
}

#[test]
fn test_undo_dry_run_keeps_entry() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    temp_dir.child("myFile.txt").write_str("a").unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .args(["rename", "-m", "snake"])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .args(["undo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename:"))
        .stdout(predicate::str::contains("1 rename(s) would be reverted"));

    // Nothing reverted, entry still there for a real undo
    assert!(temp_dir.path().join("my_file.txt").exists());

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .arg("undo")
        .assert()
        .success();

    assert!(temp_dir.path().join("myFile.txt").exists());
}

#[test]
fn test_undo_without_history() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .arg("undo")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no rename history found"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("recase"));
}
