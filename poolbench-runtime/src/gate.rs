//! Pre-execution gate for benchmark test items.
//!
//! Benchmark cases take long enough to measure that they must not run during
//! ordinary test sessions. The runner calls [`setup_check`] for each
//! discovered item before its body executes; items that declare the
//! benchmark fixture are skipped unless the session was started in
//! benchmark-only mode.

/// Fixture name that marks an item as a benchmark case.
pub const BENCHMARK_FIXTURE: &str = "benchmark";

/// Runner token that puts a session into benchmark-only mode.
pub const BENCHMARK_ONLY_FLAG: &str = "--benchmark-only";

/// A discovered test item, as presented by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    pub name: String,
    /// Declared fixture requirements of the item.
    pub fixtures: Vec<String>,
}

impl TestItem {
    pub fn new<S: Into<String>>(name: S, fixtures: Vec<String>) -> Self {
        Self {
            name: name.into(),
            fixtures,
        }
    }

    /// Whether the item declares the benchmark fixture.
    pub fn requires_benchmark(&self) -> bool {
        self.fixtures.iter().any(|f| f == BENCHMARK_FIXTURE)
    }
}

/// Options of the active test session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub benchmark_only: bool,
}

impl SessionOptions {
    pub fn new(benchmark_only: bool) -> Self {
        Self { benchmark_only }
    }

    /// Derive session options from a runner argument list.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let benchmark_only = args.into_iter().any(|a| a.as_ref() == BENCHMARK_ONLY_FLAG);
        Self { benchmark_only }
    }
}

/// Outcome of the gate check for a single item, decided once before the
/// item's body runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The item runs normally.
    Eligible,
    /// The item is skipped with an explanatory message.
    Skipped(String),
}

impl GateDecision {
    pub fn is_skipped(&self) -> bool {
        matches!(self, GateDecision::Skipped(_))
    }
}

/// Decide whether a test item may run in the active session.
///
/// Pure predicate with no fallible operations: an item requiring the
/// benchmark fixture is skipped unless the session runs in benchmark-only
/// mode; everything else is always eligible.
pub fn setup_check(item: &TestItem, session: &SessionOptions) -> GateDecision {
    if item.requires_benchmark() && !session.benchmark_only {
        GateDecision::Skipped(format!(
            "{}: benchmark tests are only run with {}",
            item.name, BENCHMARK_ONLY_FLAG
        ))
    } else {
        GateDecision::Eligible
    }
}
