//! User-facing output of the driver.

use crate::invocation::RunnerInvocation;
use colored::*;

const SEPARATOR: &str = "═══════════════════════════════════════";

/// Print the run header and the assembled invocation.
pub fn print_header(invocation: &RunnerInvocation) {
    println!("PoolBench - IPPool Benchmark Runner");
    println!("=====================================\n");
    println!("{} {}", "Invocation:".bold(), invocation.display().dimmed());
    println!("{}\n", SEPARATOR);
}

/// Print the runner's captured stdout verbatim.
pub fn print_results(stdout: &str) {
    println!("{}", "Benchmark results:".green().bold());
    print!("{}", stdout);
    if !stdout.ends_with('\n') {
        println!();
    }
}

/// Report a failed run together with the captured error stream.
pub fn print_failure(exit_code: Option<i32>, stderr: &str) {
    match exit_code {
        Some(code) => eprintln!(
            "{} benchmark run failed (exit code {})",
            "FAILED".red().bold(),
            code
        ),
        None => eprintln!("{} benchmark runner did not start", "FAILED".red().bold()),
    }
    if !stderr.is_empty() {
        eprintln!("{}", "Error output:".dimmed());
        eprint!("{}", stderr);
        if !stderr.ends_with('\n') {
            eprintln!();
        }
    }
}

/// Print where the runner stored the saved baseline.
pub fn print_saved(output_name: &str) {
    println!(
        "\n{} .benchmarks/{}/",
        "Baseline saved under".bold(),
        output_name
    );
}

/// Final completion line, printed whether or not the run succeeded.
pub fn print_completion(success: bool) {
    println!("\n{}", SEPARATOR);
    if success {
        println!("{}", "Benchmark run complete.".green().bold());
    } else {
        println!("{}", "Benchmark run complete (with failures).".yellow());
    }
}
