//! Trend-Follow: simple moving-average crossover.

use super::{directional_outcome, mean_of_last};
use paper_core::{Signal, TradeOutcome};
use rust_decimal::Decimal;

const MIN_HISTORY: usize = 20;
const SHORT_WINDOW: usize = 5;
const LONG_WINDOW: usize = 20;

/// Buy when the short MA sits above the long MA, sell when below, hold on
/// exact equality (a flat market).
pub(super) fn check_signal(history: &[Decimal]) -> Signal {
    if history.len() < MIN_HISTORY {
        return Signal::Hold;
    }
    let short_ma = mean_of_last(history, SHORT_WINDOW);
    let long_ma = mean_of_last(history, LONG_WINDOW);
    if short_ma > long_ma {
        Signal::Buy
    } else if short_ma < long_ma {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

pub(super) fn simulate_trade(signal: Signal, price: Decimal) -> TradeOutcome {
    let pnl = match signal {
        Signal::Buy => Decimal::from(10),
        Signal::Sell => Decimal::from(-5),
        Signal::Hold => return TradeOutcome::hold(),
    };
    // stop 0.002 / target 0.004 away from entry
    directional_outcome(signal, price, pnl, Decimal::new(2, 3), Decimal::new(4, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_prices_hold() {
        let history = vec![Decimal::ONE; 20];
        assert_eq!(check_signal(&history), Signal::Hold);
    }

    #[test]
    fn rising_tail_buys() {
        // 15 flat samples then 5 rising ones: short MA pulls above long MA.
        let mut history = vec![Decimal::ONE; 15];
        for n in 1..=5 {
            history.push(Decimal::ONE + Decimal::new(n, 2));
        }
        assert_eq!(check_signal(&history), Signal::Buy);
    }

    #[test]
    fn falling_tail_sells() {
        let mut history = vec![Decimal::from(2); 15];
        for n in 1..=5 {
            history.push(Decimal::from(2) - Decimal::new(n, 2));
        }
        assert_eq!(check_signal(&history), Signal::Sell);
    }

    #[test]
    fn nineteen_samples_hold() {
        let history: Vec<Decimal> = (1..=19).map(Decimal::from).collect();
        assert_eq!(check_signal(&history), Signal::Hold);
    }

    #[test]
    fn buy_outcome_is_plus_ten_with_levels() {
        let price = Decimal::new(10850, 4); // 1.0850
        let outcome = simulate_trade(Signal::Buy, price);
        assert_eq!(outcome.pnl, Decimal::from(10));
        assert_eq!(outcome.win, Some(true));
        let levels = outcome.levels.unwrap();
        assert_eq!(levels.entry, price);
        assert_eq!(levels.stop, price - Decimal::new(2, 3));
        assert_eq!(levels.target, price + Decimal::new(4, 3));
    }

    #[test]
    fn sell_outcome_is_minus_five_with_mirrored_levels() {
        let price = Decimal::ONE;
        let outcome = simulate_trade(Signal::Sell, price);
        assert_eq!(outcome.pnl, Decimal::from(-5));
        assert_eq!(outcome.win, Some(false));
        let levels = outcome.levels.unwrap();
        assert_eq!(levels.stop, price + Decimal::new(2, 3));
        assert_eq!(levels.target, price - Decimal::new(4, 3));
    }
}
