//! Signal generation and trade simulation for the built-in strategies.
//!
//! Each strategy is a variant of [`StrategyKind`] implementing the same
//! two-function contract: [`StrategyRules::check_signal`] derives a direction
//! from the visible history window, and [`StrategyRules::simulate_trade`]
//! turns that direction into a fixed-constant outcome.
//!
//! The simulated P/L values are lookup constants per strategy and direction,
//! not a function of subsequent price movement. That is a deliberate
//! simplification of this simulator, not something to derive from the series.

mod breakout;
mod mean_revert;
mod trend_follow;

use paper_core::{Signal, StrategyKind, TradeLevels, TradeOutcome};
use rust_decimal::Decimal;

/// The two-function strategy contract.
///
/// Implemented on the closed [`StrategyKind`] set; adding a strategy means
/// adding a variant and a rule module, not a new trait object.
pub trait StrategyRules {
    /// Derive a signal from the history window, oldest price first.
    ///
    /// Deterministic in the window contents and never mutates it. A window
    /// shorter than the strategy's minimum yields `Hold`.
    fn check_signal(&self, history: &[Decimal]) -> Signal;

    /// Simulate the trade for a signal at the given tick price.
    fn simulate_trade(&self, signal: Signal, price: Decimal) -> TradeOutcome;
}

impl StrategyRules for StrategyKind {
    fn check_signal(&self, history: &[Decimal]) -> Signal {
        match self {
            StrategyKind::TrendFollow => trend_follow::check_signal(history),
            StrategyKind::MeanRevert => mean_revert::check_signal(history),
            StrategyKind::Breakout => breakout::check_signal(history),
        }
    }

    fn simulate_trade(&self, signal: Signal, price: Decimal) -> TradeOutcome {
        match self {
            StrategyKind::TrendFollow => trend_follow::simulate_trade(signal, price),
            StrategyKind::MeanRevert => mean_revert::simulate_trade(signal, price),
            StrategyKind::Breakout => breakout::simulate_trade(signal, price),
        }
    }
}

/// Mean of the last `n` samples. Callers guarantee `history.len() >= n`.
fn mean_of_last(history: &[Decimal], n: usize) -> Decimal {
    let tail = &history[history.len() - n..];
    let sum: Decimal = tail.iter().copied().sum();
    sum / Decimal::from(n as u64)
}

/// Directional outcome with entry/stop/target levels mirrored for sells.
fn directional_outcome(
    signal: Signal,
    entry: Decimal,
    pnl: Decimal,
    stop_delta: Decimal,
    target_delta: Decimal,
) -> TradeOutcome {
    let (win, levels) = match signal {
        Signal::Buy => (
            Some(true),
            Some(TradeLevels {
                entry,
                stop: entry - stop_delta,
                target: entry + target_delta,
            }),
        ),
        Signal::Sell => (
            Some(false),
            Some(TradeLevels {
                entry,
                stop: entry + stop_delta,
                target: entry - target_delta,
            }),
        ),
        Signal::Hold => return TradeOutcome::hold(),
    };
    TradeOutcome { pnl, win, levels }
}
