#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    thread,
    time::{Duration, Instant},
};

use sysinfo::{Pid, ProcessesToUpdate, System};

/// Writes a minimal stand-in for `daemon(1)` into `dir` and returns its
/// path. The script honors the flag contract spirit relies on: it
/// detaches the trailing command, appends its combined output to the log,
/// writes the command's pid to the pid file and its own supervising
/// shell's pid to the daemon pid file, and forwards SIGTERM to the
/// command.
pub fn write_fake_daemon(dir: &Path) -> PathBuf {
    let path = dir.join("daemon");
    fs::write(
        &path,
        r#"#!/bin/sh
while [ $# -gt 0 ]; do
  case "$1" in
    -t) tag="$2"; shift 2 ;;
    -r) shift ;;
    -o) log="$2"; shift 2 ;;
    -p) pidfile="$2"; shift 2 ;;
    -P) daemonpidfile="$2"; shift 2 ;;
    *) break ;;
  esac
done
: > "$pidfile"
(
  "$@" >> "$log" 2>&1 &
  child=$!
  echo "$child" > "$pidfile"
  trap 'kill -TERM "$child" 2>/dev/null; exit 0' TERM
  wait "$child"
) >/dev/null 2>&1 </dev/null &
echo $! > "$daemonpidfile"
while [ ! -s "$pidfile" ]; do sleep 0.05; done
"#,
    )
    .expect("failed to write fake daemon helper");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod fake daemon helper");
    }

    path
}

pub fn is_process_alive(pid: u32) -> bool {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);
    system.process(Pid::from_u32(pid)).is_some()
}

pub fn read_pid(path: &Path) -> u32 {
    fs::read_to_string(path)
        .expect("read pid file")
        .trim()
        .parse()
        .expect("parse pid file")
}

pub fn wait_for_path(path: &Path) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if path.exists() {
            return;
        }
        thread::sleep(Duration::from_millis(100));
    }
    panic!("Timed out waiting for {:?} to exist", path);
}

pub fn wait_for_process_exit(pid: u32) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if !is_process_alive(pid) {
            return;
        }
        thread::sleep(Duration::from_millis(100));
    }
    panic!("Timed out waiting for PID {} to exit", pid);
}

/// Best-effort cleanup for processes a test may have left behind.
pub fn kill_if_alive(pid: u32) {
    if is_process_alive(pid) {
        let _ = nix::sys::signal::kill(
            nix::unistd::Pid::from_raw(pid as i32),
            nix::sys::signal::Signal::SIGKILL,
        );
    }
}
