//! Log viewing and tailing: pure delegations to the standard pager and
//! `tail -f`, connected to the controlling terminal.
use std::process::Command;

use crate::error::SupervisorError;
use crate::process::Process;

/// Opens the process's log file in `less`.
pub fn view(process: &Process) -> Result<(), SupervisorError> {
    run_tool("less", |cmd| {
        cmd.arg(process.log_file());
    })
}

/// Streams newly appended log lines with `tail -f` until interrupted.
pub fn tail(process: &Process) -> Result<(), SupervisorError> {
    run_tool("tail", |cmd| {
        cmd.arg("-f").arg(process.log_file());
    })
}

fn run_tool(
    tool: &str,
    configure: impl FnOnce(&mut Command),
) -> Result<(), SupervisorError> {
    let mut cmd = Command::new(tool);
    configure(&mut cmd);

    let status = cmd.status().map_err(|source| SupervisorError::ToolLaunch {
        tool: tool.to_string(),
        source,
    })?;

    if !status.success() {
        return Err(SupervisorError::ToolFailed {
            tool: tool.to_string(),
            status,
        });
    }

    Ok(())
}
