//! Paper-Core
//!
//! Shared types, error taxonomy, and configuration for the FX paper-trading
//! coach. The simulation engine itself lives in `sim-engine`; this crate only
//! defines what the engine and its callers exchange:
//!
//! - `Signal`, `TradeOutcome`, `TradeLevels`: what a strategy emits per tick
//! - `StrategyKind`: the closed set of built-in strategies
//! - `PriceSample`: a validated price observation
//! - `Config`: session parameters loaded from the environment

pub mod config;
pub mod error;
pub mod types;

// Re-export the most commonly used items for downstream crates.
pub use config::Config;
pub use error::{Error, Result};
pub use types::{PriceSample, Signal, StrategyKind, TradeLevels, TradeOutcome};
