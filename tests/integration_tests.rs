//! Integration tests for component interactions.
//!
//! These tests drive full sessions end to end and verify the invariants the
//! presentation layer relies on.

use paper_core::{Config, Error, PriceSample, StrategyKind};
use rust_decimal::Decimal;
use sim_engine::{Session, StrategyRules};

fn sample(value: Decimal) -> PriceSample {
    PriceSample::new(value).unwrap()
}

/// A session fed only well-formed prices keeps every bookkeeping invariant.
#[test]
fn test_stats_invariants_hold_across_a_noisy_feed() {
    let mut session = Session::new(&Config::default()).unwrap();

    // A deliberately jagged feed: trends, spikes, dips.
    let feed: Vec<Decimal> = (0..60)
        .map(|n| {
            let base = Decimal::ONE + Decimal::new(n % 13, 3);
            if n % 17 == 0 {
                base + Decimal::new(5, 2)
            } else {
                base
            }
        })
        .collect();

    for (i, price) in feed.iter().enumerate() {
        session.step(sample(*price)).unwrap();

        for (kind, stats) in session.metrics().iter() {
            assert_eq!(stats.trades as usize, i + 1, "{kind}: one tick per step");
            assert!(stats.wins <= stats.trades);
            assert_eq!(stats.equity_curve.len(), stats.trades as usize);
            assert_eq!(
                stats.equity,
                session.metrics().initial_equity() + stats.total_pnl,
                "{kind}: equity is initial plus cumulative P/L"
            );
            assert!(stats.max_drawdown >= Decimal::ZERO);
        }
    }
}

/// max_drawdown never decreases, whatever the feed does.
#[test]
fn test_max_drawdown_is_monotone() {
    let mut session = Session::new(&Config::default()).unwrap();
    let mut previous = vec![Decimal::ZERO; StrategyKind::all().len()];

    for n in 0..80 {
        // Sawtooth: rises for 9 ticks, crashes on the 10th.
        let price = if n % 10 == 9 {
            Decimal::new(90, 2)
        } else {
            Decimal::ONE + Decimal::new(n % 10, 3)
        };
        session.step(sample(price)).unwrap();

        for (i, (_, stats)) in session.metrics().iter().enumerate() {
            assert!(stats.max_drawdown >= previous[i]);
            previous[i] = stats.max_drawdown;
        }
    }
}

/// The live path uses the bounded window; the lab replay uses the full log.
/// With a feed longer than the window the two genuinely disagree.
#[test]
fn test_live_and_replay_paths_diverge_beyond_the_window() {
    let config = Config {
        window_capacity: 20,
        ..Config::default()
    };
    let mut session = Session::new(&config).unwrap();

    // 150 ticks of an early crash the rolling window has long forgotten,
    // followed by a slow grind upward.
    for n in 0..150i64 {
        let price = if n < 30 {
            Decimal::new(80, 2)
        } else {
            Decimal::new(80, 2) + Decimal::new(n - 30, 3)
        };
        session.step(sample(price)).unwrap();
    }

    let live_equity = session
        .metrics()
        .stats(StrategyKind::TrendFollow)
        .unwrap()
        .equity;

    let summary = session.replay_strategy(StrategyKind::TrendFollow).unwrap();
    assert_eq!(summary.trades, 150);

    // Replay evaluates the whole 150-price log every iteration, so its
    // signal is uniform; the live path mixed holds, buys, and the odd sell.
    let replay_equity = session
        .metrics()
        .stats(StrategyKind::TrendFollow)
        .unwrap()
        .equity;
    assert_ne!(live_equity, replay_equity);

    let log: Vec<Decimal> = (0..150i64)
        .map(|n| {
            if n < 30 {
                Decimal::new(80, 2)
            } else {
                Decimal::new(80, 2) + Decimal::new(n - 30, 3)
            }
        })
        .collect();
    let uniform = StrategyKind::TrendFollow.check_signal(&log);
    let per_trade = StrategyKind::TrendFollow
        .simulate_trade(uniform, Decimal::ONE)
        .pnl;
    assert_eq!(summary.total_pnl, per_trade * Decimal::from(150));
}

/// Strategies configured out of a session are lookup errors, not silent no-ops.
#[test]
fn test_untracked_strategy_surfaces_lookup_error() {
    let config = Config {
        strategies: vec![StrategyKind::Breakout],
        ..Config::default()
    };
    let mut session = Session::new(&config).unwrap();
    session.step(sample(Decimal::ONE)).unwrap();

    assert!(matches!(
        session.metrics().stats(StrategyKind::TrendFollow),
        Err(Error::UnknownStrategy(_))
    ));
    assert!(matches!(
        session.replay_strategy(StrategyKind::MeanRevert),
        Err(Error::UnknownStrategy(_))
    ));

    // The tracked strategy is unaffected by the failed lookups.
    assert_eq!(
        session.metrics().stats(StrategyKind::Breakout).unwrap().trades,
        1
    );
}

/// Sessions are fully isolated: stepping one never moves another.
#[test]
fn test_sessions_do_not_share_state() {
    let config = Config::default();
    let mut a = Session::new(&config).unwrap();
    let b = Session::new(&config).unwrap();

    for n in 0..25 {
        a.step(sample(Decimal::ONE + Decimal::new(n, 3))).unwrap();
    }

    assert_eq!(a.ticks_seen(), 25);
    assert_eq!(b.ticks_seen(), 0);
    assert_eq!(
        b.metrics().stats(StrategyKind::Breakout).unwrap().trades,
        0
    );
}

/// The configured initial equity flows through every derived figure.
#[test]
fn test_custom_initial_equity() {
    let config = Config {
        initial_equity: Decimal::from(500),
        ..Config::default()
    };
    let mut session = Session::new(&config).unwrap();

    for _ in 0..10 {
        session.step(sample(Decimal::ONE)).unwrap();
    }

    // Flat feed: Breakout buys from tick 10, the others hold throughout.
    let breakout = session.metrics().stats(StrategyKind::Breakout).unwrap();
    assert_eq!(breakout.equity, Decimal::from(515));
    let trend = session.metrics().stats(StrategyKind::TrendFollow).unwrap();
    assert_eq!(trend.equity, Decimal::from(500));
    assert_eq!(session.metrics().best_strategy(), Some(StrategyKind::Breakout));
}

/// JSON summary rows are stable and serializable for the presentation sink.
#[test]
fn test_summary_serializes() {
    let mut session = Session::new(&Config::default()).unwrap();
    for n in 0..30 {
        session.step(sample(Decimal::ONE + Decimal::new(n, 3))).unwrap();
    }

    let json = serde_json::to_string(&session.metrics().summary()).unwrap();
    assert!(json.contains("\"strategy\":\"trend_follow\""));
    assert!(json.contains("\"equity\""));
    assert!(json.contains("\"max_drawdown\""));
}
