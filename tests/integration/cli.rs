#[path = "common/mod.rs"]
mod common;

use std::{env, fs};

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn spirit() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("spirit"))
}

#[test]
fn missing_procfile_is_fatal() {
    let temp = tempdir().expect("failed to create tempdir");

    spirit()
        .current_dir(temp.path())
        .arg("status")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Procfile doesn't exist"));
}

#[test]
fn unknown_process_name_exits_nonzero() {
    let temp = tempdir().expect("failed to create tempdir");
    fs::write(temp.path().join("Procfile"), "web: sleep 100\n").unwrap();

    spirit()
        .current_dir(temp.path())
        .args(["start", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Unable to find process 'ghost'"));
}

#[test]
fn status_lists_processes_sorted() {
    let temp = tempdir().expect("failed to create tempdir");
    fs::write(
        temp.path().join("Procfile"),
        "worker: sleep 100\nweb: sleep 100\nclock: sleep 100\n",
    )
    .unwrap();

    spirit()
        .current_dir(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(contains(
            "clock:\tstopped\nweb:\tstopped\nworker:\tstopped",
        ));
}

#[test]
fn run_executes_inline_with_inherited_output() {
    let temp = tempdir().expect("failed to create tempdir");
    fs::write(temp.path().join("Procfile"), "web: sleep 100\n").unwrap();

    spirit()
        .current_dir(temp.path())
        .args(["run", "echo", "hello"])
        .assert()
        .success()
        .stdout(contains("hello"));
}

#[test]
fn run_applies_the_env_file() {
    let temp = tempdir().expect("failed to create tempdir");
    fs::write(temp.path().join("Procfile"), "web: sleep 100\n").unwrap();
    fs::write(temp.path().join(".env"), "SPIRIT_GREETING=bonjour\n").unwrap();

    spirit()
        .current_dir(temp.path())
        .args(["run", "sh", "-c", "echo $SPIRIT_GREETING"])
        .assert()
        .success()
        .stdout(contains("bonjour"));
}

#[test]
fn run_propagates_failure_as_exit_one() {
    let temp = tempdir().expect("failed to create tempdir");
    fs::write(temp.path().join("Procfile"), "web: sleep 100\n").unwrap();

    spirit()
        .current_dir(temp.path())
        .args(["run", "false"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn start_status_stop_through_the_cli() {
    let temp = tempdir().expect("failed to create tempdir");
    let dir = temp.path();
    fs::write(dir.join("Procfile"), "web: sleep 100\n").unwrap();

    // The fake helper stands in for daemon(1) via PATH.
    common::write_fake_daemon(dir);
    let path = format!("{}:{}", dir.display(), env::var("PATH").unwrap());

    spirit()
        .current_dir(dir)
        .env("PATH", &path)
        .args(["start", "web"])
        .assert()
        .success();

    let pid_file = dir.join("tmp/pids/web.pid");
    let daemon_pid_file = dir.join("tmp/pids/web.daemon.pid");
    common::wait_for_path(&pid_file);
    common::wait_for_path(&daemon_pid_file);
    assert!(dir.join("tmp/logs/web.log").exists());
    let child_pid = common::read_pid(&pid_file);
    let daemon_pid = common::read_pid(&daemon_pid_file);

    spirit()
        .current_dir(dir)
        .env("PATH", &path)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("web:\trunning"));

    spirit()
        .current_dir(dir)
        .env("PATH", &path)
        .args(["stop", "web"])
        .assert()
        .success();

    common::wait_for_process_exit(child_pid);

    // Pid files survive a stop, so the post-stop state reads dead.
    spirit()
        .current_dir(dir)
        .env("PATH", &path)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("web:\tdead"));

    common::kill_if_alive(child_pid);
    common::kill_if_alive(daemon_pid);
}
