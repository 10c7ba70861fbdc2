//! Lifecycle controller: the state machine governing start, stop,
//! restart, and status for one named process.
//!
//! The controller never writes pid files itself — it observes the files
//! the daemonizing helper wrote and the OS process table, decides what
//! state a process is in, and acts through the [`Launcher`] seam. It also
//! never removes pid files: after a successful `stop` both files remain
//! on disk, so a later `status` reports `dead` rather than `stopped`.
//! That matches the observed behavior of the helper contract, where the
//! files are the helper's to manage.
use std::thread;
use std::time::Duration;

use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use tracing::{debug, info, warn};

use crate::error::{PidFileError, SupervisorError};
use crate::launcher::{DaemonHelper, Launcher};
use crate::pid::{is_alive, read_pid};
use crate::process::{Process, ProcessStatus};

/// Bounded-wait termination protocol: after SIGTERM, probe liveness up to
/// `attempts` times, sleeping `interval` between probes.
#[derive(Debug, Clone, Copy)]
pub struct StopPolicy {
    /// Number of liveness probes before giving up.
    pub attempts: u32,
    /// Sleep between probes.
    pub interval: Duration,
}

impl Default for StopPolicy {
    /// 12 probes spaced 5 seconds apart, a 60-second budget.
    fn default() -> Self {
        Self {
            attempts: 12,
            interval: Duration::from_secs(5),
        }
    }
}

/// Drives one process at a time through stopped/running/dead.
///
/// At most one control operation is expected to be in flight per process
/// name; concurrent invocations race on pid-file reads without locking,
/// which is accepted under the single-operator assumption.
#[derive(Debug)]
pub struct Controller<L = DaemonHelper> {
    launcher: L,
    stop_policy: StopPolicy,
}

impl Controller<DaemonHelper> {
    /// Controller backed by the `daemon(1)` helper and the default
    /// termination-wait budget.
    pub fn new() -> Self {
        Self::with_launcher(DaemonHelper::new(), StopPolicy::default())
    }
}

impl Default for Controller<DaemonHelper> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Launcher> Controller<L> {
    /// Controller with an explicit launcher and stop policy.
    pub fn with_launcher(launcher: L, stop_policy: StopPolicy) -> Self {
        Self {
            launcher,
            stop_policy,
        }
    }

    /// Resolves the current state from pid-file presence and a single
    /// liveness probe. Never mutates anything.
    ///
    /// Resolution order: neither pid file present is `stopped`; a live
    /// pid in the pid file is `running`; everything else is `dead` —
    /// including the case where only the daemon pid file remains, which
    /// must not be treated as a fault.
    pub fn status(&self, process: &Process) -> Result<ProcessStatus, SupervisorError> {
        if !process.pid_file().exists() && !process.daemon_pid_file().exists() {
            return Ok(ProcessStatus::Stopped);
        }

        match read_pid(process.pid_file()) {
            Ok(pid) => {
                if is_alive(pid)? {
                    Ok(ProcessStatus::Running)
                } else {
                    Ok(ProcessStatus::Dead)
                }
            }
            Err(PidFileError::NotFound(_)) => Ok(ProcessStatus::Dead),
            Err(err) => Err(err.into()),
        }
    }

    /// Starts `process` unless it is already running.
    pub fn start(&self, process: &Process) -> Result<(), SupervisorError> {
        if self.status(process)? == ProcessStatus::Running {
            debug!("'{}' is already running; nothing to do", process.name());
            return Ok(());
        }

        info!("Starting '{}'", process.name());
        self.launcher.launch(process)
    }

    /// Stops `process` by terminating its daemonizing helper, then waits
    /// for the helper to leave the process table.
    ///
    /// A missing daemon pid file means nothing was launched; that is
    /// success, regardless of what the command pid file says. A pid the
    /// OS no longer knows is likewise success — the goal is "not
    /// running". The wait is bounded by the [`StopPolicy`]; a process
    /// still alive after the full budget is a
    /// [`SupervisorError::StopTimeout`].
    pub fn stop(&self, process: &Process) -> Result<(), SupervisorError> {
        if !process.daemon_pid_file().exists() {
            debug!("'{}' has no daemon pid file; nothing to stop", process.name());
            return Ok(());
        }

        let pid = read_pid(process.daemon_pid_file())?;

        info!("Stopping '{}' (daemon pid {pid})", process.name());
        match signal::kill(pid, Signal::SIGTERM) {
            Ok(()) => {}
            Err(Errno::ESRCH) => return Ok(()),
            Err(errno) => {
                return Err(SupervisorError::SignalFailed {
                    pid: pid.as_raw(),
                    errno,
                });
            }
        }

        for _ in 0..self.stop_policy.attempts {
            if !is_alive(pid)? {
                return Ok(());
            }
            thread::sleep(self.stop_policy.interval);
        }

        warn!(
            "'{}' (pid {pid}) survived the termination-wait budget",
            process.name()
        );
        Err(SupervisorError::StopTimeout {
            process: process.name().to_string(),
            pid: pid.as_raw(),
        })
    }

    /// Stops and then starts `process`. The first error short-circuits:
    /// if `stop` fails (including a timeout), `start` is never attempted.
    pub fn restart(&self, process: &Process) -> Result<(), SupervisorError> {
        self.stop(process)?;
        self.start(process)
    }
}
