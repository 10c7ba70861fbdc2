//! Pid-file reading and liveness probing.
//!
//! Pid files are written exclusively by the external daemonizing helper;
//! this module only ever observes them. A pid file holds exactly one
//! decimal integer and nothing else — anything else is treated as
//! corruption, not as a valid state.
use std::fs;
use std::path::Path;

use nix::errno::Errno;
use nix::sys::signal;
use nix::unistd::Pid;

use crate::error::{PidFileError, SupervisorError};

/// Reads a pid from the file at `path`.
///
/// Distinguishes three failure modes: the file is absent
/// (`PidFileError::NotFound`), the file holds something other than a
/// nonnegative decimal integer (`PidFileError::Corrupt`), or the read
/// itself failed (`PidFileError::Read`).
pub fn read_pid(path: &Path) -> Result<Pid, PidFileError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            PidFileError::NotFound(path.to_path_buf())
        } else {
            PidFileError::Read(err)
        }
    })?;

    // Parse into the raw pid type directly; a wider parse followed by a
    // cast could wrap values above i32::MAX into negative pids, which
    // kill(2) interprets as process groups.
    let trimmed = contents.trim();
    let pid = trimmed
        .parse::<i32>()
        .ok()
        .filter(|pid| *pid >= 0)
        .ok_or_else(|| PidFileError::Corrupt {
            path: path.to_path_buf(),
            contents: trimmed.to_string(),
        })?;

    Ok(Pid::from_raw(pid))
}

/// Probes the OS process table with a no-effect signal.
///
/// `ESRCH` means confirmed dead; any other errno is indeterminate and is
/// surfaced to the caller rather than folded into a boolean.
pub fn is_alive(pid: Pid) -> Result<bool, SupervisorError> {
    match signal::kill(pid, None) {
        Ok(()) => Ok(true),
        Err(Errno::ESRCH) => Ok(false),
        Err(errno) => Err(SupervisorError::ProbeFailed {
            pid: pid.as_raw(),
            errno,
        }),
    }
}
