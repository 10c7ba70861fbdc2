//! Error handling for spirit.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Defines all possible errors that can occur in the supervisor.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// A process name was requested that the manifest does not declare.
    #[error("Unable to find process '{0}'")]
    UnknownProcess(String),

    /// The Procfile manifest is missing from the working directory.
    #[error("Procfile doesn't exist: {0}")]
    ProcfileMissing(PathBuf),

    /// Error reading or parsing a pid file.
    #[error("PID file error: {0}")]
    PidFile(#[from] PidFileError),

    /// A liveness probe failed for a reason other than "no such process".
    #[error("Failed to probe process {pid}: {errno}")]
    ProbeFailed {
        /// The pid that was probed.
        pid: i32,
        /// The underlying errno.
        errno: nix::errno::Errno,
    },

    /// Error delivering a termination signal.
    #[error("Failed to signal process {pid}: {errno}")]
    SignalFailed {
        /// The pid that was signalled.
        pid: i32,
        /// The underlying errno.
        errno: nix::errno::Errno,
    },

    /// An external tool (the daemonizing helper, pager, or tail) could not
    /// be found on the search path or failed to launch.
    #[error("Failed to run '{tool}': {source}")]
    ToolLaunch {
        /// The tool that failed to launch.
        tool: String,
        /// The underlying error that occurred.
        #[source]
        source: std::io::Error,
    },

    /// An external tool ran but exited with a nonzero status.
    #[error("'{tool}' exited with {status}")]
    ToolFailed {
        /// The tool that failed.
        tool: String,
        /// The exit status it reported.
        status: ExitStatus,
    },

    /// A stopped process remained alive past the termination-wait budget.
    #[error("Process '{process}' with pid {pid} never exited")]
    StopTimeout {
        /// The process name.
        process: String,
        /// The pid that refused to exit.
        pid: i32,
    },

    /// Filesystem read/stat failure other than "not found".
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for pid-file operations.
#[derive(Debug, Error)]
pub enum PidFileError {
    /// The pid file does not exist.
    #[error("PID file not found: {0}")]
    NotFound(PathBuf),

    /// The pid file exists but does not hold a single decimal integer.
    #[error("PID file {path} is corrupt: {contents:?}")]
    Corrupt {
        /// Path of the offending file.
        path: PathBuf,
        /// What the file actually held.
        contents: String,
    },

    /// Error reading the pid file.
    #[error("Failed to read PID file: {0}")]
    Read(#[from] std::io::Error),
}
