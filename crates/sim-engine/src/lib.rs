//! Sim-Engine
//!
//! Paper-trading simulation core: rolling price history, rule-based signal
//! generation, fixed-constant trade simulation, and cumulative per-strategy
//! performance tracking.
//!
//! The engine is synchronous and single-threaded by design. One external
//! caller (a poller, a CLI, a test) drives a [`Session`] one price at a time;
//! fetching that price — and deciding what to do when the fetch fails — is
//! entirely the caller's problem. Independent sessions are fully isolated:
//! create one `Session` per user or per run.
//!
//! # Example
//!
//! ```
//! use paper_core::{Config, PriceSample, StrategyKind};
//! use sim_engine::Session;
//!
//! let mut session = Session::new(&Config::default()).unwrap();
//! let ticks = session.step(PriceSample::from_f64(1.0852).unwrap()).unwrap();
//! assert_eq!(ticks.len(), 3);
//!
//! let stats = session.metrics().stats(StrategyKind::Breakout).unwrap();
//! assert_eq!(stats.trades, 1);
//! ```

pub mod history;
pub mod metrics;
pub mod session;
pub mod strategies;

// Re-exports
pub use history::RollingHistory;
pub use metrics::{MetricsTracker, StrategyReport, StrategyStats};
pub use session::{ReplaySummary, Session, StrategyTick};
pub use strategies::StrategyRules;
