//! Runtime support for PoolBench, the benchmark harness of the IPPool suite.
//!
//! This crate carries the pieces shared between the `poolbench` driver binary
//! and the benchmark test suite itself:
//!
//! - [`config`]: layered harness configuration (defaults, `poolbench.toml`,
//!   `POOLBENCH_*` environment variables).
//! - [`gate`]: the pre-execution gate that keeps benchmark test items out of
//!   ordinary test sessions.

pub mod config;
pub mod gate;

pub use config::HarnessConfig;
pub use gate::{setup_check, GateDecision, SessionOptions, TestItem};
