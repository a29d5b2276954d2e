//! # velum-bench
//!
//! Benchmark scenarios, runner, and metrics for the Velum engine.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Hanging cloth** — pinned top row, drapes under gravity
//! 2. **Cylinder drape** — free-falling cloth lands on a cylinder and floor
//! 3. **Windy flag** — pinned top row with a steady lateral wind

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::ScenarioMetrics;
pub use runner::ScenarioRunner;
pub use scenarios::{Scenario, ScenarioKind};
