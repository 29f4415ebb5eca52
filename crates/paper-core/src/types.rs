//! Core data types exchanged between the simulation engine and its callers.

use crate::{Error, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directional trade suggestion derived from price history.
///
/// `Hold` is the no-signal case: the strategy saw nothing actionable in the
/// current window (including the insufficient-history case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub fn name(&self) -> &'static str {
        match self {
            Signal::Buy => "Buy",
            Signal::Sell => "Sell",
            Signal::Hold => "Hold",
        }
    }

    /// True for Buy/Sell, false for Hold.
    pub fn is_directional(&self) -> bool {
        !matches!(self, Signal::Hold)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The closed set of built-in strategies.
///
/// Each variant implements the same two-function contract in `sim-engine`:
/// signal generation over a history window, and a fixed-constant trade
/// simulation for that signal. New strategies extend this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Moving-average crossover: short MA of 5 vs long MA of 20.
    TrendFollow,

    /// Bets on prices returning to the 20-sample average, with a 1% band.
    MeanRevert,

    /// Trades new 10-sample highs and lows.
    Breakout,
}

impl StrategyKind {
    /// Human-readable name, as rendered on the dashboard.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::TrendFollow => "Trend-Follow",
            StrategyKind::MeanRevert => "Mean-Revert",
            StrategyKind::Breakout => "Breakout",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::TrendFollow => "Follows momentum via moving-average crossover",
            StrategyKind::MeanRevert => "Bets on prices returning to their recent average",
            StrategyKind::Breakout => "Trades breaks above recent highs or below recent lows",
        }
    }

    /// All built-in strategies, in declaration order. This order is also the
    /// default registration order of a session, which fixes tie-breaks.
    pub fn all() -> &'static [StrategyKind] {
        &[
            StrategyKind::TrendFollow,
            StrategyKind::MeanRevert,
            StrategyKind::Breakout,
        ]
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "trend_follow" => Ok(StrategyKind::TrendFollow),
            "mean_revert" => Ok(StrategyKind::MeanRevert),
            "breakout" => Ok(StrategyKind::Breakout),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// A validated price observation, implicitly time-ordered by arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSample(Decimal);

impl PriceSample {
    /// Validate a decimal price. Rejects zero and negative values.
    pub fn new(price: Decimal) -> Result<Self> {
        if price <= Decimal::ZERO {
            return Err(Error::InvalidPrice {
                value: price.to_string(),
            });
        }
        Ok(Self(price))
    }

    /// Validate a raw float from a price source. Rejects NaN, infinities,
    /// zero, and negative values; NaN is unrepresentable past this boundary.
    pub fn from_f64(price: f64) -> Result<Self> {
        if !price.is_finite() || price <= 0.0 {
            return Err(Error::InvalidPrice {
                value: price.to_string(),
            });
        }
        let value = Decimal::from_f64(price).ok_or_else(|| Error::InvalidPrice {
            value: price.to_string(),
        })?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for PriceSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Suggested entry/stop/target prices attached to a directional outcome.
///
/// These are display hints for the surrounding presentation layer, offset
/// from the entry by fixed per-strategy deltas; they play no part in the
/// simulated P/L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLevels {
    pub entry: Decimal,
    pub stop: Decimal,
    pub target: Decimal,
}

/// Result of simulating one trade for one signal.
///
/// `win` is `None` exactly when the signal was `Hold` — a hold has no
/// win/loss classification, but it still counts as a tick in the stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub pnl: Decimal,
    pub win: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<TradeLevels>,
}

impl TradeOutcome {
    /// The zero outcome of a `Hold` signal.
    pub fn hold() -> Self {
        Self {
            pnl: Decimal::ZERO,
            win: None,
            levels: None,
        }
    }

    pub fn is_win(&self) -> bool {
        self.win == Some(true)
    }
}
