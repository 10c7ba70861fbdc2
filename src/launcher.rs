//! Daemonizing-helper invocation.
//!
//! Spirit never forks or detaches anything itself. Starting a process
//! means invoking the external `daemon(1)` helper, which detaches the
//! command from the controlling terminal, redirects its combined output
//! to the log file, and writes both pid files before returning.
use std::fs;
use std::process::Command;

use tracing::debug;

use crate::error::SupervisorError;
use crate::process::Process;

/// Seam between the lifecycle controller and the external helper, so the
/// helper can be stubbed in tests.
pub trait Launcher {
    /// Launches `process` as a detached daemon. Blocks only until the
    /// helper has finished its own setup and returned.
    fn launch(&self, process: &Process) -> Result<(), SupervisorError>;
}

/// Production launcher invoking the `daemon(1)` helper from the search
/// path.
#[derive(Debug, Clone)]
pub struct DaemonHelper {
    program: String,
}

impl DaemonHelper {
    /// Launcher resolving `daemon` via `PATH`.
    pub fn new() -> Self {
        Self::with_program("daemon")
    }

    /// Launcher invoking an explicit helper binary, used by tests to
    /// substitute a scripted stand-in.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DaemonHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for DaemonHelper {
    fn launch(&self, process: &Process) -> Result<(), SupervisorError> {
        // The helper writes the pid files and the log but does not create
        // their directories.
        for path in [process.pid_file(), process.log_file()] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        let command_line = process.command_line();
        debug!(
            "Launching '{}' via {}: {command_line}",
            process.name(),
            self.program
        );

        let status = Command::new(&self.program)
            .arg("-t")
            .arg(process.name())
            .arg("-r")
            .arg("-o")
            .arg(process.log_file())
            .arg("-p")
            .arg(process.pid_file())
            .arg("-P")
            .arg(process.daemon_pid_file())
            .arg("sh")
            .arg("-c")
            .arg(&command_line)
            .status()
            .map_err(|source| SupervisorError::ToolLaunch {
                tool: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SupervisorError::ToolFailed {
                tool: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}
