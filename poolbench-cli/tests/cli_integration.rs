//! End-to-end tests of the `poolbench` binary.
//!
//! The external runner is substituted through `poolbench.toml`: `echo`
//! reflects the assembled argument list back on stdout, `false` simulates a
//! failed benchmark run.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn project_with_runner(program: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let config = format!("[runner]\nprogram = \"{}\"\n", program);
    fs::write(dir.path().join("poolbench.toml"), config).unwrap();
    dir
}

fn poolbench(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("poolbench").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn successful_run_prints_results_and_completion() {
    let dir = project_with_runner("echo");

    poolbench(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Benchmark results:"))
        .stdout(predicate::str::contains("tests/test_benchmarks.py"))
        .stdout(predicate::str::contains("--benchmark-only"))
        .stdout(predicate::str::contains("Benchmark run complete."));
}

#[test]
fn rounds_flag_reaches_the_runner() {
    let dir = project_with_runner("echo");

    poolbench(&dir)
        .arg("--rounds")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("--benchmark-min-rounds=7"));
}

#[test]
fn compare_flag_reaches_the_runner() {
    let dir = project_with_runner("echo");

    poolbench(&dir)
        .arg("--compare")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--benchmark-compare=.benchmarks/baseline.json",
        ))
        .stdout(predicate::str::contains(
            "--benchmark-compare-fail=mean:10%",
        ));
}

#[test]
fn save_baseline_prints_destination() {
    let dir = project_with_runner("echo");

    poolbench(&dir)
        .arg("--save-baseline")
        .arg("--output")
        .arg("mybaseline")
        .assert()
        .success()
        .stdout(predicate::str::contains("--benchmark-save=mybaseline"))
        .stdout(predicate::str::contains(
            "Baseline saved under .benchmarks/mybaseline/",
        ));
}

#[test]
fn failed_run_still_prints_completion_and_propagates_exit_code() {
    let dir = project_with_runner("false");

    poolbench(&dir)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Benchmark results:").not())
        .stdout(predicate::str::contains(
            "Benchmark run complete (with failures).",
        ))
        .stderr(predicate::str::contains("FAILED"));
}

#[test]
fn missing_runner_is_reported_not_crashed() {
    let dir = project_with_runner("poolbench-no-such-runner");

    poolbench(&dir)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Benchmark run complete (with failures).",
        ))
        .stderr(predicate::str::contains("did not start"))
        .stderr(predicate::str::contains("poolbench-no-such-runner"));
}
