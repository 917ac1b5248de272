//! Child-process execution of the assembled runner invocation.

use crate::invocation::RunnerInvocation;

/// Outcome of a runner invocation.
///
/// A failed run is data, not a fault: the caller decides what to print and
/// which exit code to propagate.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Success {
        stdout: String,
    },
    /// Non-zero exit, or the runner could not be spawned at all
    /// (`exit_code: None`, the spawn error text in `stderr`).
    Failure {
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success { .. })
    }
}

/// Run the invocation as a blocking child process with captured output.
///
/// No retry and no timeout; the single child call is waited on to
/// completion.
pub fn execute(invocation: &RunnerInvocation) -> RunOutcome {
    let output = match invocation.to_command().output() {
        Ok(output) => output,
        Err(e) => {
            return RunOutcome::Failure {
                exit_code: None,
                stderr: format!("failed to spawn '{}': {}", invocation.program, e),
            }
        }
    };

    if output.status.success() {
        RunOutcome::Success {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        }
    } else {
        RunOutcome::Failure {
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
