use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the external benchmark runner invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Runner executable
    #[serde(default = "default_program")]
    pub program: String,

    /// Target test file handed to the runner
    #[serde(default = "default_target")]
    pub target: String,

    /// Disable the runner's garbage collector during measurement
    #[serde(default = "default_disable_gc")]
    pub disable_gc: bool,
}

fn default_program() -> String {
    "pytest".to_string()
}
fn default_target() -> String {
    "tests/test_benchmarks.py".to_string()
}
fn default_disable_gc() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            target: default_target(),
            disable_gc: default_disable_gc(),
        }
    }
}

/// Configuration for measurement parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Minimum measurement rounds per benchmark case
    #[serde(default = "default_rounds")]
    pub rounds: u32,

    /// Run warm-up iterations before measurement
    #[serde(default = "default_warmup")]
    pub warmup: bool,

    /// Name of the saved baseline artifact
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_rounds() -> u32 {
    5
}
fn default_warmup() -> bool {
    true
}
fn default_output() -> String {
    "benchmark-results".to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            warmup: default_warmup(),
            output: default_output(),
        }
    }
}

/// Configuration for baseline comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Baseline artifact the runner compares against
    #[serde(default = "default_baseline")]
    pub baseline: String,

    /// Mean-regression failure threshold percentage
    #[serde(default = "default_threshold")]
    pub threshold_pct: f64,
}

fn default_baseline() -> String {
    ".benchmarks/baseline.json".to_string()
}
fn default_threshold() -> f64 {
    10.0
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            threshold_pct: default_threshold(),
        }
    }
}

/// Complete PoolBench harness configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HarnessConfig {
    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub run: RunConfig,

    #[serde(default)]
    pub comparison: ComparisonConfig,
}

impl HarnessConfig {
    /// Load configuration with priority: env vars > config file > defaults
    ///
    /// Command-line flags are layered on top by the driver.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(file_config) = Self::from_file("poolbench.toml") {
            config = file_config;
        }

        config.apply_env_overrides();

        config
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: HarnessConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Unparsable values are ignored and the previous value kept.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(program) = std::env::var("POOLBENCH_RUNNER") {
            self.runner.program = program;
        }

        if let Ok(target) = std::env::var("POOLBENCH_TARGET") {
            self.runner.target = target;
        }

        if let Ok(rounds) = std::env::var("POOLBENCH_ROUNDS") {
            if let Ok(val) = rounds.parse() {
                self.run.rounds = val;
            }
        }

        if let Ok(output) = std::env::var("POOLBENCH_OUTPUT") {
            self.run.output = output;
        }

        if let Ok(baseline) = std::env::var("POOLBENCH_BASELINE") {
            self.comparison.baseline = baseline;
        }

        if let Ok(threshold) = std::env::var("POOLBENCH_THRESHOLD") {
            if let Ok(val) = threshold.parse() {
                self.comparison.threshold_pct = val;
            }
        }
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string_pretty(self)?;
        fs::write(path, toml)?;
        Ok(())
    }
}
