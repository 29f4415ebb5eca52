//! Configuration for a simulation session.

use crate::types::StrategyKind;
use crate::{Error, Result};
use rust_decimal::Decimal;
use std::env;
use tracing::debug;

/// Session parameters, fixed at construction time.
#[derive(Debug, Clone)]
pub struct Config {
    /// Capacity of the rolling price window used for live signals.
    pub window_capacity: usize,
    /// Starting equity for every tracked strategy.
    pub initial_equity: Decimal,
    /// Strategies evaluated each tick, in evaluation order.
    pub strategies: Vec<StrategyKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_capacity: 100,
            initial_equity: Decimal::from(1000),
            strategies: StrategyKind::all().to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// - `COACH_WINDOW_CAPACITY`: rolling window size (default 100)
    /// - `COACH_INITIAL_EQUITY`: starting equity (default 1000)
    /// - `COACH_STRATEGIES`: comma-separated list of `trend_follow`,
    ///   `mean_revert`, `breakout` (default: all three)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let window_capacity = match env::var("COACH_WINDOW_CAPACITY") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| Error::Config {
                message: format!("COACH_WINDOW_CAPACITY is not a valid integer: {raw}"),
            })?,
            Err(_) => defaults.window_capacity,
        };

        let initial_equity = match env::var("COACH_INITIAL_EQUITY") {
            Ok(raw) => raw.parse::<Decimal>().map_err(|_| Error::Config {
                message: format!("COACH_INITIAL_EQUITY is not a valid number: {raw}"),
            })?,
            Err(_) => defaults.initial_equity,
        };

        let strategies = match env::var("COACH_STRATEGIES") {
            Ok(raw) => raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<StrategyKind>())
                .collect::<Result<Vec<_>>>()
                .map_err(|e| Error::Config {
                    message: format!("COACH_STRATEGIES: {e}"),
                })?,
            Err(_) => defaults.strategies,
        };

        let config = Self {
            window_capacity,
            initial_equity,
            strategies,
        };
        config.validate()?;
        debug!(
            capacity = config.window_capacity,
            initial_equity = %config.initial_equity,
            strategies = config.strategies.len(),
            "loaded configuration from environment"
        );
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.window_capacity == 0 {
            return Err(Error::Config {
                message: "window capacity must be greater than zero".to_string(),
            });
        }
        if self.initial_equity <= Decimal::ZERO {
            return Err(Error::Config {
                message: "initial equity must be positive".to_string(),
            });
        }
        if self.strategies.is_empty() {
            return Err(Error::Config {
                message: "at least one strategy must be active".to_string(),
            });
        }
        Ok(())
    }
}
