//! Simulation session: one price in, every strategy evaluated, stats updated.

use crate::history::RollingHistory;
use crate::metrics::MetricsTracker;
use crate::strategies::StrategyRules;
use paper_core::{Config, Error, PriceSample, Result, Signal, StrategyKind, TradeOutcome};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

/// What one strategy produced on one tick.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyTick {
    pub strategy: StrategyKind,
    pub signal: Signal,
    pub outcome: TradeOutcome,
}

/// Result of replaying the full price log through one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    pub strategy: StrategyKind,
    pub trades: u32,
    pub total_pnl: Decimal,
}

/// One isolated paper-trading session.
///
/// Owns the rolling window, the full arrival log, the active strategy set,
/// and the metrics tracker. Strictly single-writer: one caller drives
/// [`Session::step`] serially. Run multiple users on multiple sessions.
#[derive(Debug, Clone)]
pub struct Session {
    history: RollingHistory,
    /// Every price ever stepped, in arrival order. Unlike the rolling
    /// window this log is unbounded; the lab replay walks it in full.
    log: Vec<Decimal>,
    strategies: Vec<StrategyKind>,
    tracker: MetricsTracker,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        info!(
            capacity = config.window_capacity,
            initial_equity = %config.initial_equity,
            strategies = config.strategies.len(),
            "starting paper-trading session"
        );
        Ok(Self {
            history: RollingHistory::new(config.window_capacity),
            log: Vec::new(),
            strategies: config.strategies.clone(),
            tracker: MetricsTracker::new(config.initial_equity, &config.strategies),
        })
    }

    /// Advance the session by one price tick.
    ///
    /// Appends the price, then evaluates every active strategy in
    /// registration order against the rolling window and records its
    /// simulated outcome. Returns the per-strategy ticks for the caller to
    /// render.
    pub fn step(&mut self, price: PriceSample) -> Result<Vec<StrategyTick>> {
        let price = price.value();
        self.history.append(price);
        self.log.push(price);
        let snapshot = self.history.snapshot();

        let mut ticks = Vec::with_capacity(self.strategies.len());
        for &kind in &self.strategies {
            let signal = kind.check_signal(&snapshot);
            let outcome = kind.simulate_trade(signal, price);
            self.tracker.update(kind, &outcome)?;
            debug!(strategy = kind.name(), signal = signal.name(), pnl = %outcome.pnl, "tick");
            ticks.push(StrategyTick {
                strategy: kind,
                signal,
                outcome,
            });
        }
        Ok(ticks)
    }

    /// Lab mode: replay the entire price log through one strategy.
    ///
    /// Resets that strategy's statistics first, then records one outcome per
    /// logged price in arrival order. The signal is evaluated against the
    /// complete log on every iteration — not the prefix up to that price,
    /// and not the live rolling window. This view intentionally disagrees
    /// with [`Session::step`]; the two are distinct operations, not two
    /// encodings of one rule.
    pub fn replay_strategy(&mut self, kind: StrategyKind) -> Result<ReplaySummary> {
        self.tracker.reset(kind)?;

        for &price in &self.log {
            let signal = kind.check_signal(&self.log);
            let outcome = kind.simulate_trade(signal, price);
            self.tracker.update(kind, &outcome)?;
        }

        let stats = self.tracker.stats(kind)?;
        info!(
            strategy = kind.name(),
            trades = stats.trades,
            total_pnl = %stats.total_pnl,
            "replayed strategy over full history"
        );
        Ok(ReplaySummary {
            strategy: kind,
            trades: stats.trades,
            total_pnl: stats.total_pnl,
        })
    }

    /// Lab mode: record a single extra tick for one strategy at the last
    /// seen price, leaving the others untouched.
    pub fn lab_tick(&mut self, kind: StrategyKind) -> Result<StrategyTick> {
        let price = self.log.last().copied().ok_or(Error::EmptyHistory)?;
        let snapshot = self.history.snapshot();
        let signal = kind.check_signal(&snapshot);
        let outcome = kind.simulate_trade(signal, price);
        self.tracker.update(kind, &outcome)?;
        Ok(StrategyTick {
            strategy: kind,
            signal,
            outcome,
        })
    }

    /// Canned prose for a strategy's current signal, for the "insight" box.
    pub fn explain_signal(&self, kind: StrategyKind) -> &'static str {
        match kind.check_signal(&self.history.snapshot()) {
            Signal::Buy => "Price crossed above moving average. Momentum detected.",
            Signal::Sell => "Price dropped below support. Possible reversal.",
            Signal::Hold => "No strong signal. Market is neutral.",
        }
    }

    pub fn history(&self) -> &RollingHistory {
        &self.history
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.tracker
    }

    pub fn strategies(&self) -> &[StrategyKind] {
        &self.strategies
    }

    /// Number of prices stepped so far (the arrival log length).
    pub fn ticks_seen(&self) -> usize {
        self.log.len()
    }
}
