use std::process::Command;

use crate::error::SetupError;

/// Result of one external invocation. The install contract only looks at
/// the exit code; output is captured for diagnostics.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Seam for the external package-manager call, so tests can substitute a
/// fake instead of spawning processes.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<RunOutput, SetupError>;
}

/// Runs the command via `std::process::Command`, blocking until it exits.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<RunOutput, SetupError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| SetupError::Spawn {
                command: program.to_string(),
                source: e,
            })?;

        Ok(RunOutput {
            // Terminated by signal on unix; report as generic failure.
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
