//! Cumulative per-strategy performance bookkeeping.

use paper_core::{Error, Result, StrategyKind, TradeOutcome};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Running statistics for one strategy.
///
/// `equity` always equals the initial equity plus `total_pnl`, and the
/// equity curve holds one snapshot per recorded tick. Every tick counts as a
/// trade, including holds — win rate and average P/L are per-tick figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyStats {
    pub trades: u32,
    pub wins: u32,
    pub total_pnl: Decimal,
    pub equity: Decimal,
    pub equity_curve: Vec<Decimal>,
    pub max_drawdown: Decimal,
}

impl StrategyStats {
    fn new(initial_equity: Decimal) -> Self {
        Self {
            trades: 0,
            wins: 0,
            total_pnl: Decimal::ZERO,
            equity: initial_equity,
            equity_curve: Vec::new(),
            max_drawdown: Decimal::ZERO,
        }
    }

    /// Percentage of recorded ticks classified as wins. Zero before any tick.
    pub fn win_rate(&self) -> f64 {
        if self.trades == 0 {
            return 0.0;
        }
        self.wins as f64 / self.trades as f64 * 100.0
    }

    /// Mean P/L per recorded tick. Zero before any tick.
    pub fn avg_pnl(&self) -> Decimal {
        if self.trades == 0 {
            return Decimal::ZERO;
        }
        self.total_pnl / Decimal::from(self.trades)
    }
}

/// One row of the dashboard summary.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy: StrategyKind,
    pub trades: u32,
    pub win_rate: f64,
    pub avg_pnl: f64,
    pub max_drawdown: Decimal,
    pub equity: Decimal,
    pub total_pnl: Decimal,
}

/// Tracks trade outcomes for a fixed set of strategies.
///
/// The set is registered at construction and never grows; updating or
/// resetting a strategy outside it is a lookup error surfaced to the caller.
/// Registration order is significant: it fixes iteration order and the
/// best-strategy tie-break.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    initial_equity: Decimal,
    stats: Vec<(StrategyKind, StrategyStats)>,
}

impl MetricsTracker {
    pub fn new(initial_equity: Decimal, strategies: &[StrategyKind]) -> Self {
        Self {
            initial_equity,
            stats: strategies
                .iter()
                .map(|&kind| (kind, StrategyStats::new(initial_equity)))
                .collect(),
        }
    }

    fn entry_mut(&mut self, kind: StrategyKind) -> Result<&mut StrategyStats> {
        self.stats
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .map(|(_, s)| s)
            .ok_or_else(|| Error::UnknownStrategy(kind.name().to_string()))
    }

    /// Record one trade outcome for a strategy.
    ///
    /// Holds count as ticks too: `trades` increments, `wins` does not, and
    /// the equity curve gets a flat snapshot.
    pub fn update(&mut self, kind: StrategyKind, outcome: &TradeOutcome) -> Result<()> {
        let stats = self.entry_mut(kind)?;
        stats.trades += 1;
        if outcome.is_win() {
            stats.wins += 1;
        }
        stats.total_pnl += outcome.pnl;
        stats.equity += outcome.pnl;
        stats.equity_curve.push(stats.equity);

        let peak = stats
            .equity_curve
            .iter()
            .copied()
            .max()
            .unwrap_or(stats.equity);
        let drawdown = peak - stats.equity;
        if drawdown > stats.max_drawdown {
            stats.max_drawdown = drawdown;
        }

        debug!(
            strategy = kind.name(),
            pnl = %outcome.pnl,
            equity = %stats.equity,
            trades = stats.trades,
            "recorded trade outcome"
        );
        Ok(())
    }

    /// Read-only statistics for one strategy.
    pub fn stats(&self, kind: StrategyKind) -> Result<&StrategyStats> {
        self.stats
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, s)| s)
            .ok_or_else(|| Error::UnknownStrategy(kind.name().to_string()))
    }

    /// The strategy with the highest current equity. Ties go to the earliest
    /// registered strategy; `None` only when the tracked set is empty.
    pub fn best_strategy(&self) -> Option<StrategyKind> {
        let mut best: Option<(StrategyKind, Decimal)> = None;
        for (kind, stats) in &self.stats {
            match best {
                Some((_, equity)) if stats.equity <= equity => {}
                _ => best = Some((*kind, stats.equity)),
            }
        }
        best.map(|(kind, _)| kind)
    }

    /// Clear one strategy's statistics back to the initial record.
    pub fn reset(&mut self, kind: StrategyKind) -> Result<()> {
        let initial_equity = self.initial_equity;
        let stats = self.entry_mut(kind)?;
        *stats = StrategyStats::new(initial_equity);
        debug!(strategy = kind.name(), "reset strategy stats");
        Ok(())
    }

    /// Tracked strategies and their statistics, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (StrategyKind, &StrategyStats)> {
        self.stats.iter().map(|(kind, stats)| (*kind, stats))
    }

    /// Dashboard rows in registration order.
    pub fn summary(&self) -> Vec<StrategyReport> {
        self.stats
            .iter()
            .map(|(kind, stats)| StrategyReport {
                strategy: *kind,
                trades: stats.trades,
                win_rate: stats.win_rate(),
                avg_pnl: stats.avg_pnl().to_f64().unwrap_or(0.0),
                max_drawdown: stats.max_drawdown,
                equity: stats.equity,
                total_pnl: stats.total_pnl,
            })
            .collect()
    }

    pub fn initial_equity(&self) -> Decimal {
        self.initial_equity
    }
}
