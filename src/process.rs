//! Process descriptors.
use std::path::{Path, PathBuf};

use strum_macros::{AsRefStr, Display, EnumString};

/// Observed state of a supervised process, resolved purely from pid-file
/// presence and a liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ProcessStatus {
    /// Neither pid file exists; nothing was ever started (or everything
    /// was cleaned up externally).
    Stopped,
    /// The supervised command's pid is alive.
    Running,
    /// Pid files remain but the supervised command's pid is gone or was
    /// never recorded.
    Dead,
}

/// Immutable description of one manifest entry: the command to run and the
/// filesystem paths that track it across invocations.
///
/// The three paths are derived from the process name and the registry root
/// (the working directory at registry-build time) and never change after
/// construction.
#[derive(Debug, Clone)]
pub struct Process {
    name: String,
    command: String,
    arguments: Vec<String>,
    pid_file: PathBuf,
    daemon_pid_file: PathBuf,
    log_file: PathBuf,
}

impl Process {
    /// Builds a descriptor rooted at `root`, deriving
    /// `tmp/pids/<name>.pid`, `tmp/pids/<name>.daemon.pid`, and
    /// `tmp/logs/<name>.log`.
    pub fn new(root: &Path, name: &str, command: &str, arguments: Vec<String>) -> Self {
        let pids = root.join("tmp").join("pids");
        let logs = root.join("tmp").join("logs");

        Self {
            name: name.to_string(),
            command: command.to_string(),
            arguments,
            pid_file: pids.join(format!("{name}.pid")),
            daemon_pid_file: pids.join(format!("{name}.daemon.pid")),
            log_file: logs.join(format!("{name}.log")),
        }
    }

    /// The manifest name, unique within a registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The executable name or path.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Ordered arguments for the command.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Path holding the supervised command's pid.
    pub fn pid_file(&self) -> &Path {
        &self.pid_file
    }

    /// Path holding the daemonizing helper's own pid.
    pub fn daemon_pid_file(&self) -> &Path {
        &self.daemon_pid_file
    }

    /// Path of the combined stdout+stderr capture.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// The literal shell command line handed to the helper.
    pub fn command_line(&self) -> String {
        let mut line = self.command.clone();
        for arg in &self.arguments {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
