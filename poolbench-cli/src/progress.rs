//! Spinner shown while the runner child process executes.
//!
//! Display is TTY-gated: in pipes and CI logs nothing is drawn.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

pub struct RunnerSpinner {
    bar: Option<ProgressBar>,
}

impl RunnerSpinner {
    /// Start a steady-tick spinner with the given message.
    pub fn start(message: &str) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self { bar: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(pb) }
    }

    /// Stop the spinner and clear its line.
    pub fn finish(self) {
        if let Some(pb) = self.bar {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_start_and_finish() {
        let spinner = RunnerSpinner::start("Running benchmarks...");
        spinner.finish();
    }
}
