#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn devtask(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("devtask").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_no_argument_shows_help() {
    let temp = TempDir::new().unwrap();

    devtask(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: devtask"))
        .stdout(predicate::str::contains("producer-demo"))
        .stdout(predicate::str::contains("read-stream"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_help_is_case_insensitive() {
    let temp = TempDir::new().unwrap();

    let lower = devtask(&temp).arg("help").assert().success();
    let upper = devtask(&temp).arg("HeLp").assert().success();

    assert_eq!(lower.get_output().stdout, upper.get_output().stdout);
}

#[test]
fn test_unknown_command_is_reported_without_failing() {
    let temp = TempDir::new().unwrap();

    devtask(&temp)
        .arg("bogus-command")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: bogus-command"))
        .stdout(predicate::str::contains("devtask help"))
        .stdout(predicate::str::contains("Usage:").not());
}

#[test]
fn test_help_flag_is_just_an_unknown_command() {
    let temp = TempDir::new().unwrap();

    devtask(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: --help"));
}

#[test]
fn test_clean_removes_only_existing_targets() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join(".pytest_cache/v")).unwrap();
    fs::create_dir_all(root.join("producer/__pycache__")).unwrap();
    fs::write(root.join("producer/__pycache__/main.cpython-311.pyc"), b"").unwrap();
    fs::write(root.join("producer/main.py"), b"").unwrap();
    fs::write(root.join(".coverage"), b"").unwrap();

    devtask(&temp)
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed .pytest_cache"))
        .stdout(predicate::str::contains("Removed .coverage"))
        .stdout(predicate::str::contains("✓ clean complete"));

    assert!(!root.join(".pytest_cache").exists());
    assert!(!root.join(".coverage").exists());
    assert!(!root.join("producer/__pycache__").exists());
    assert!(root.join("producer/main.py").exists());
}

#[test]
fn test_clean_on_empty_workspace() {
    let temp = TempDir::new().unwrap();

    devtask(&temp)
        .arg("CLEAN")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean."));
}

fn with_malformed_config() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("devtask.json"), "{ nope").unwrap();
    temp
}

#[test]
fn test_unknown_command_with_malformed_config_still_reported() {
    let temp = with_malformed_config();

    devtask(&temp)
        .arg("bogus-command")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: bogus-command"))
        .stderr(predicate::str::contains("Config error").not());
}

#[test]
fn test_help_with_malformed_config_still_shown() {
    let temp = with_malformed_config();

    devtask(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: devtask"));
}

#[test]
fn test_task_with_malformed_config_exits_with_error() {
    let temp = with_malformed_config();

    devtask(&temp)
        .arg("lint")
        .assert()
        .failure()
        .stdout(predicate::str::contains("==>").not())
        .stderr(predicate::str::contains("Error: Config error"));
}

/// Stub executables that append their name and arguments to a log file.
#[cfg(unix)]
mod stubs {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    pub struct Workspace {
        pub temp: TempDir,
        pub bin: PathBuf,
        pub log: PathBuf,
    }

    impl Workspace {
        pub fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let bin = temp.path().join(".stub-bin");
            fs::create_dir_all(&bin).unwrap();
            let log = temp.path().join("calls.log");
            Self { temp, bin, log }
        }

        /// Adds a stub that logs its call, prints `stdout`, and exits with `code`.
        pub fn stub(&self, program: &str, stdout: &str, code: i32) -> &Self {
            let path = self.bin.join(program);
            let script = format!(
                "#!/bin/sh\necho \"{program} $*\" >> \"{log}\"\nprintf '%s' '{stdout}'\nexit {code}\n",
                log = self.log.display()
            );
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            self
        }

        pub fn write_config(&self, json: &str) {
            fs::write(self.temp.path().join("devtask.json"), json).unwrap();
        }

        /// `devtask` with only the stub directory (and /bin for `sh`) on PATH.
        pub fn devtask(&self) -> Command {
            let mut cmd = devtask(&self.temp);
            cmd.env("PATH", format!("{}:/bin:/usr/bin", self.bin.display()));
            cmd
        }

        pub fn calls(&self) -> Vec<String> {
            read_lines(&self.log)
        }
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(unix)]
mod with_stubs {
    use super::stubs::Workspace;
    use super::*;

    #[test]
    fn test_producer_uses_default_parameters() {
        let ws = Workspace::new();
        ws.stub("python", "", 0);

        ws.devtask()
            .arg("producer")
            .assert()
            .success()
            .stdout(predicate::str::contains("==> Running producer"))
            .stdout(predicate::str::contains("✓ producer complete"));

        assert_eq!(
            ws.calls(),
            vec!["python -m producer.main --num-transactions 100 --batch-size 10"]
        );
    }

    #[test]
    fn test_producer_demo_uses_fixed_larger_count() {
        let ws = Workspace::new();
        ws.stub("python", "", 0);

        ws.devtask().arg("producer-demo").assert().success();

        assert_eq!(
            ws.calls(),
            vec!["python -m producer.main --num-transactions 1000 --batch-size 10"]
        );
    }

    #[test]
    fn test_mixed_case_runs_same_steps() {
        let upper = Workspace::new();
        upper.stub("pytest", "", 0);
        upper.devtask().arg("TEST-COV").assert().success();

        let lower = Workspace::new();
        lower.stub("pytest", "", 0);
        lower.devtask().arg("test-cov").assert().success();

        assert_eq!(upper.calls(), lower.calls());
        assert_eq!(
            upper.calls(),
            vec!["pytest tests/ -v --cov=producer --cov-report=term-missing --cov-report=html"]
        );
    }

    #[test]
    fn test_lint_runs_every_check_despite_failure() {
        let ws = Workspace::new();
        ws.stub("mypy", "", 0).stub("flake8", "", 1).stub("black", "", 0);

        ws.devtask()
            .arg("lint")
            .assert()
            .success()
            .stdout(predicate::str::contains("Running style checks (flake8) failed"))
            .stdout(predicate::str::contains("lint finished with 1 failed step"));

        assert_eq!(
            ws.calls(),
            vec![
                "mypy producer/",
                "flake8 producer/ tests/ --max-line-length=100 --statistics",
                "black --check producer/ tests/",
            ]
        );
    }

    #[test]
    fn test_abort_policy_stops_and_fails() {
        let ws = Workspace::new();
        ws.stub("mypy", "", 1).stub("flake8", "", 0).stub("black", "", 0);
        ws.write_config(r#"{ "failure_policy": "abort" }"#);

        ws.devtask()
            .arg("lint")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error: 'mypy producer/' failed (exit code 1)"));

        assert_eq!(ws.calls(), vec!["mypy producer/"]);
    }

    #[test]
    fn test_missing_program_is_reported() {
        let ws = Workspace::new();
        ws.write_config(r#"{ "programs": { "aws": "devtask-missing-aws" } }"#);

        ws.devtask()
            .arg("verify-stream")
            .assert()
            .success()
            .stdout(predicate::str::contains("Failed to launch 'devtask-missing-aws'"))
            .stdout(predicate::str::contains("verify-stream finished with 1 failed step"));
    }

    #[test]
    fn test_read_stream_feeds_iterator_to_get_records() {
        let ws = Workspace::new();
        ws.stub("aws", "SHARD-ITERATOR-1", 0);

        ws.devtask().arg("read-stream").assert().success();

        let calls = ws.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].contains("kinesis get-shard-iterator"));
        assert!(calls[0].contains("--shard-iterator-type TRIM_HORIZON"));
        assert!(calls[1].contains(
            "kinesis get-records --shard-iterator SHARD-ITERATOR-1 --limit 5 --region us-east-1"
        ));
    }

    #[test]
    fn test_start_pauses_after_compose() {
        let ws = Workspace::new();
        ws.stub("docker-compose", "", 0);
        ws.write_config(r#"{ "startup_wait_secs": 0 }"#);

        ws.devtask()
            .arg("start")
            .assert()
            .success()
            .stdout(predicate::str::contains("==> Waiting 0s for LocalStack to be ready..."));

        assert_eq!(ws.calls(), vec!["docker-compose up -d"]);
    }
}
