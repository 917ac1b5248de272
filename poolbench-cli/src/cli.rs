//! Command-line surface of the driver and its resolution against the
//! harness configuration.

use clap::{ArgAction, Parser};
use poolbench_runtime::HarnessConfig;

/// Run the IPPool benchmark suite through the external test runner
#[derive(Parser, Debug)]
#[command(name = "poolbench")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Compare results against the stored baseline
    #[arg(long, action = ArgAction::SetTrue)]
    pub compare: bool,

    /// Save current results as the new baseline
    #[arg(long, action = ArgAction::SetTrue)]
    pub save_baseline: bool,

    /// Only run benchmark cases matching the expression (e.g. ipv4, ipv6, add, remove)
    #[arg(long, value_name = "EXPR")]
    pub filter: Option<String>,

    /// Name of the saved baseline artifact
    #[arg(long, value_name = "NAME")]
    pub output: Option<String>,

    /// Minimum measurement rounds per benchmark case
    #[arg(long, value_name = "N")]
    pub rounds: Option<u32>,

    /// Enable warm-up iterations before measurement (default)
    #[arg(long, overrides_with = "no_warmup", action = ArgAction::SetTrue)]
    pub warmup: bool,

    /// Disable warm-up iterations
    #[arg(long, overrides_with = "warmup", action = ArgAction::SetTrue)]
    pub no_warmup: bool,
}

/// Effective parameters of a single driver run.
///
/// Constructed once per invocation from flags layered over the harness
/// configuration, immutable afterwards. `--compare` and `--save-baseline`
/// are accepted together without conflict detection.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub program: String,
    pub target: String,
    pub disable_gc: bool,
    pub rounds: u32,
    pub warmup: bool,
    pub output: String,
    pub filter: Option<String>,
    pub compare: bool,
    pub save_baseline: bool,
    pub baseline: String,
    pub threshold_pct: f64,
}

impl Args {
    /// Layer the given flags over the configuration. Flags win when given;
    /// absent flags fall through to the config value.
    pub fn resolve(&self, config: &HarnessConfig) -> RunParams {
        let warmup = if self.no_warmup {
            false
        } else if self.warmup {
            true
        } else {
            config.run.warmup
        };

        RunParams {
            program: config.runner.program.clone(),
            target: config.runner.target.clone(),
            disable_gc: config.runner.disable_gc,
            rounds: self.rounds.unwrap_or(config.run.rounds),
            warmup,
            output: self
                .output
                .clone()
                .unwrap_or_else(|| config.run.output.clone()),
            filter: self.filter.clone(),
            compare: self.compare,
            save_baseline: self.save_baseline,
            baseline: config.comparison.baseline.clone(),
            threshold_pct: config.comparison.threshold_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).expect("argv should parse")
    }

    #[test]
    fn test_defaults_fall_through_to_config() {
        let args = parse(&["poolbench"]);
        let params = args.resolve(&HarnessConfig::default());

        assert_eq!(params.rounds, 5);
        assert!(params.warmup);
        assert_eq!(params.output, "benchmark-results");
        assert_eq!(params.filter, None);
        assert!(!params.compare);
        assert!(!params.save_baseline);
        assert_eq!(params.threshold_pct, 10.0);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = HarnessConfig::default();
        config.run.rounds = 20;
        config.run.output = "nightly".to_string();

        let args = parse(&[
            "poolbench",
            "--rounds",
            "7",
            "--output",
            "mybaseline",
            "--filter",
            "ipv4",
            "--compare",
            "--save-baseline",
        ]);
        let params = args.resolve(&config);

        assert_eq!(params.rounds, 7);
        assert_eq!(params.output, "mybaseline");
        assert_eq!(params.filter.as_deref(), Some("ipv4"));
        assert!(params.compare);
        assert!(params.save_baseline);
    }

    #[test]
    fn test_no_warmup_flag() {
        let args = parse(&["poolbench", "--no-warmup"]);
        let params = args.resolve(&HarnessConfig::default());
        assert!(!params.warmup);
    }

    #[test]
    fn test_warmup_flag_overrides_config() {
        let mut config = HarnessConfig::default();
        config.run.warmup = false;

        let args = parse(&["poolbench", "--warmup"]);
        let params = args.resolve(&config);
        assert!(params.warmup);
    }

    #[test]
    fn test_later_warmup_flag_wins() {
        let args = parse(&["poolbench", "--warmup", "--no-warmup"]);
        let params = args.resolve(&HarnessConfig::default());
        assert!(!params.warmup);
    }
}
