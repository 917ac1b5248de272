mod cli;
mod exec;
mod invocation;
mod output;
mod progress;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::process;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // The project root is handed to the child as its working directory;
    // the driver's own working directory is never changed.
    let project_root = env::current_dir().context("Failed to get current directory")?;

    let config = poolbench_runtime::HarnessConfig::load();
    let params = args.resolve(&config);

    let invocation = invocation::RunnerInvocation::build(&params, &project_root);
    output::print_header(&invocation);

    let spinner = progress::RunnerSpinner::start("Running benchmarks...");
    let outcome = exec::execute(&invocation);
    spinner.finish();

    let exit_code = match &outcome {
        exec::RunOutcome::Success { stdout } => {
            output::print_results(stdout);
            if params.save_baseline {
                output::print_saved(&params.output);
            }
            0
        }
        exec::RunOutcome::Failure { exit_code, stderr } => {
            output::print_failure(*exit_code, stderr);
            exit_code.unwrap_or(1)
        }
    };

    // Best-effort reporting: the completion line prints in every case, then
    // the child's exit code is propagated.
    output::print_completion(exit_code == 0);

    if exit_code != 0 {
        process::exit(exit_code);
    }

    Ok(())
}
