//! Breakout: trade new highs and lows of the last 10 samples.

use super::directional_outcome;
use paper_core::{Signal, TradeOutcome};
use rust_decimal::Decimal;

const MIN_HISTORY: usize = 10;
const RANGE_WINDOW: usize = 10;

/// Buy when the latest price is the high of the window, sell when it is the
/// low. The buy side is checked first, so a perfectly flat window (where the
/// last price is both high and low) resolves to Buy.
pub(super) fn check_signal(history: &[Decimal]) -> Signal {
    if history.len() < MIN_HISTORY {
        return Signal::Hold;
    }
    let tail = &history[history.len() - RANGE_WINDOW..];
    let high = tail.iter().copied().max().unwrap_or_default();
    let low = tail.iter().copied().min().unwrap_or_default();
    let price = history[history.len() - 1];
    if price >= high {
        Signal::Buy
    } else if price <= low {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

pub(super) fn simulate_trade(signal: Signal, price: Decimal) -> TradeOutcome {
    let pnl = match signal {
        Signal::Buy => Decimal::from(15),
        Signal::Sell => Decimal::from(-7),
        Signal::Hold => return TradeOutcome::hold(),
    };
    // stop 0.003 / target 0.006 away from entry
    directional_outcome(signal, price, pnl, Decimal::new(3, 3), Decimal::new(6, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_increasing_run_buys() {
        let history: Vec<Decimal> = (1..=10).map(|n| Decimal::new(n, 3)).collect();
        assert_eq!(check_signal(&history), Signal::Buy);
    }

    #[test]
    fn new_low_sells() {
        let mut history = vec![Decimal::ONE; 9];
        history.push(Decimal::new(95, 2));
        assert_eq!(check_signal(&history), Signal::Sell);
    }

    #[test]
    fn mid_range_price_holds() {
        let mut history = vec![Decimal::new(90, 2), Decimal::new(110, 2)];
        history.extend(vec![Decimal::ONE; 8]);
        assert_eq!(check_signal(&history), Signal::Hold);
    }

    #[test]
    fn flat_window_resolves_to_buy() {
        // last == high == low; the buy branch wins.
        let history = vec![Decimal::ONE; 10];
        assert_eq!(check_signal(&history), Signal::Buy);
    }

    #[test]
    fn only_last_ten_samples_count() {
        // An old spike outside the window must not suppress the breakout.
        let mut history = vec![Decimal::from(5)];
        history.extend((1..=10).map(|n| Decimal::new(n, 3)));
        assert_eq!(check_signal(&history), Signal::Buy);
    }

    #[test]
    fn outcomes_match_lookup_table() {
        let price = Decimal::ONE;
        let buy = simulate_trade(Signal::Buy, price);
        assert_eq!(buy.pnl, Decimal::from(15));
        assert_eq!(buy.win, Some(true));
        assert_eq!(buy.levels.unwrap().target, price + Decimal::new(6, 3));

        let sell = simulate_trade(Signal::Sell, price);
        assert_eq!(sell.pnl, Decimal::from(-7));
        assert_eq!(sell.win, Some(false));

        assert_eq!(simulate_trade(Signal::Hold, price), TradeOutcome::hold());
    }
}
