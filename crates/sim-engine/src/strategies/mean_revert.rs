//! Mean-Revert: fade moves outside a 1% band around the recent average.

use super::{directional_outcome, mean_of_last};
use paper_core::{Signal, TradeOutcome};
use rust_decimal::Decimal;

const MIN_HISTORY: usize = 20;
const AVG_WINDOW: usize = 20;

/// Buy below 99% of the 20-sample average, sell above 101%. Prices inside
/// the band — the edges included — hold.
pub(super) fn check_signal(history: &[Decimal]) -> Signal {
    if history.len() < MIN_HISTORY {
        return Signal::Hold;
    }
    let avg = mean_of_last(history, AVG_WINDOW);
    let price = history[history.len() - 1];
    if price < avg * Decimal::new(99, 2) {
        Signal::Buy
    } else if price > avg * Decimal::new(101, 2) {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

pub(super) fn simulate_trade(signal: Signal, price: Decimal) -> TradeOutcome {
    let pnl = match signal {
        Signal::Buy => Decimal::from(8),
        Signal::Sell => Decimal::from(-4),
        Signal::Hold => return TradeOutcome::hold(),
    };
    // stop 0.0015 / target 0.003 away from entry
    directional_outcome(signal, price, pnl, Decimal::new(15, 4), Decimal::new(3, 3))
}
