//! Assembly of the external runner invocation.
//!
//! The invocation is a structured argument list handed directly to
//! `std::process::Command`; nothing is ever joined into a shell string, so
//! shell quoting cannot corrupt a filter expression or path.

use crate::cli::RunParams;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Output columns requested from the runner.
const COLUMNS: &str = "min,max,mean,stddev,rounds,iterations";

/// A fully assembled runner invocation.
#[derive(Debug, Clone)]
pub struct RunnerInvocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory passed to the child; relative paths inside the
    /// argument list resolve against it.
    pub working_dir: PathBuf,
}

impl RunnerInvocation {
    /// Assemble the runner argument list.
    ///
    /// The leading tokens are appended in a fixed order (target file,
    /// benchmark-only mode, minimum rounds, GC knob, sort, columns); the
    /// warm-up, filter, comparison and save tokens follow conditionally.
    pub fn build(params: &RunParams, working_dir: &Path) -> Self {
        let mut args = Vec::new();

        args.push(params.target.clone());
        args.push("--benchmark-only".to_string());
        args.push(format!("--benchmark-min-rounds={}", params.rounds));
        if params.disable_gc {
            args.push("--benchmark-disable-gc".to_string());
        }
        args.push("--benchmark-sort=name".to_string());
        args.push(format!("--benchmark-columns={}", COLUMNS));

        if params.warmup {
            args.push("--benchmark-warmup=on".to_string());
        }

        if let Some(filter) = &params.filter {
            args.push("-k".to_string());
            args.push(filter.clone());
        }

        if params.compare {
            args.push(format!("--benchmark-compare={}", params.baseline));
            args.push(format!(
                "--benchmark-compare-fail=mean:{}%",
                params.threshold_pct
            ));
        }

        if params.save_baseline {
            args.push(format!("--benchmark-save={}", params.output));
            args.push("--benchmark-save-data".to_string());
        }

        Self {
            program: params.program.clone(),
            args,
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Build the `Command` for this invocation.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.working_dir);
        cmd
    }

    /// Single-line rendering for status output only.
    pub fn display(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}
