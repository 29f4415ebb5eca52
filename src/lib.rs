//! FX-Coach: Paper-Trading Strategy Coach
//!
//! This is the root crate that provides benchmark and integration-test
//! access to the internal modules. For actual functionality, use the
//! individual crates directly:
//!
//! - `paper-core`: Shared types, error taxonomy, configuration
//! - `sim-engine`: Rolling history, strategies, metrics tracking, sessions

// Re-export for benchmarks
pub use paper_core as core;
pub use sim_engine as engine;
