//! End-to-end tests for the dotup binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dotup() -> Command {
    Command::cargo_bin("dotup").unwrap()
}

#[test]
fn missing_manifest_argument_is_a_usage_error() {
    dotup()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_positional_arguments_are_rejected() {
    dotup()
        .args(["one.yaml", "two.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_prints_the_group_flag() {
    dotup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--group"));
}

#[test]
fn nonexistent_manifest_fails() {
    dotup()
        .arg("/no/such/manifest.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn unparsable_manifest_fails() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("setup.yaml");
    fs::write(
        &manifest,
        "dependencies:\n  - type: snap\n    command: spotify\n",
    )
    .unwrap();

    dotup()
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read manifest"));
}

#[test]
fn repository_without_clone_root_fails() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("setup.yaml");
    fs::write(
        &manifest,
        "dependencies:\n  - type: repository\n    repo: junegunn/fzf\n    command: fzf\n    groups: [default]\n",
    )
    .unwrap();

    dotup()
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("repos_directory"));
}

#[test]
fn directory_manifest_creates_the_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("created/by/dotup");
    let manifest = temp.path().join("setup.yaml");
    fs::write(
        &manifest,
        format!(
            "dependencies:\n  - type: directory\n    path: {}\n    permissions: 0755\n    groups: [default]\n",
            target.display()
        ),
    )
    .unwrap();

    dotup().arg(&manifest).assert().success();

    assert!(target.is_dir());
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}

#[test]
fn generated_files_start_with_the_banner_and_keep_manifest_order() {
    let temp = TempDir::new().unwrap();
    let env_file = temp.path().join("env.sh");
    let fish_file = temp.path().join("paths.fish");
    let manifest = temp.path().join("setup.yaml");
    fs::write(
        &manifest,
        format!(
            r#"
config:
  env_file: {env}
  fish_file: {fish}
dependencies:
  - type: custom
    command: sh
    groups: [default]
    dotfile:
      absolute_paths: [/first/bin]
    fish:
      absolute_paths: [/first/bin]
  - type: custom
    command: sh
    groups: [default]
    dotfile:
      absolute_paths: [/second/bin]
    fish:
      absolute_paths: [/second/bin]
"#,
            env = env_file.display(),
            fish = fish_file.display()
        ),
    )
    .unwrap();

    dotup().arg(&manifest).assert().success();

    let env_contents = fs::read_to_string(&env_file).unwrap();
    assert!(env_contents.starts_with("# *******     AUTOGENERATED FILE     *******\n"));
    let first = env_contents.find("/first/bin").unwrap();
    let second = env_contents.find("/second/bin").unwrap();
    assert!(first < second);

    let fish_contents = fs::read_to_string(&fish_file).unwrap();
    assert!(fish_contents.contains("fish_add_path /first/bin"));
}

#[test]
fn group_flag_selects_beyond_default() {
    let temp = TempDir::new().unwrap();
    let default_dir = temp.path().join("default_dir");
    let laptop_dir = temp.path().join("laptop_dir");
    let server_dir = temp.path().join("server_dir");
    let manifest = temp.path().join("setup.yaml");
    fs::write(
        &manifest,
        format!(
            "dependencies:\n  - type: directory\n    path: {}\n    groups: [default]\n  - type: directory\n    path: {}\n    groups: [laptop]\n  - type: directory\n    path: {}\n    groups: [server]\n",
            default_dir.display(),
            laptop_dir.display(),
            server_dir.display()
        ),
    )
    .unwrap();

    dotup()
        .arg(&manifest)
        .args(["--group", "laptop"])
        .assert()
        .success();

    assert!(default_dir.is_dir());
    assert!(laptop_dir.is_dir());
    assert!(!server_dir.exists());
}

#[test]
fn empty_group_dependency_warns_but_run_succeeds() {
    let temp = TempDir::new().unwrap();
    let orphan = temp.path().join("orphan_dir");
    let manifest = temp.path().join("setup.yaml");
    fs::write(
        &manifest,
        format!(
            "dependencies:\n  - type: directory\n    path: {}\n    groups: []\n",
            orphan.display()
        ),
    )
    .unwrap();

    dotup()
        .arg(&manifest)
        .assert()
        .success()
        .stderr(predicate::str::contains("not attached to any groups"));

    assert!(!orphan.exists());
}

#[test]
fn verbose_flag_logs_the_manifest_decode() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("setup.yaml");
    fs::write(&manifest, "dependencies: []\n").unwrap();

    dotup()
        .arg(&manifest)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("manifest decoded"));
}

#[test]
fn failing_install_command_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("setup.yaml");
    fs::write(
        &manifest,
        r#"
dependencies:
  - type: custom
    command: dotup-no-such-program
    groups: [default]
    install_commands:
      - program: sh
        args: ["-c", "exit 7"]
"#,
    )
    .unwrap();

    dotup().arg(&manifest).assert().failure();
}
