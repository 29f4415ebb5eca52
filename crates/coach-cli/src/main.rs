//! Coach CLI
//!
//! Demo driver for the paper-trading engine. Feeds a session one price per
//! tick — from a file or a synthetic random walk — and renders the coach
//! dashboard the way the original terminal version did. This binary plays
//! the "external poller" role: it owns price acquisition and decides what to
//! do with bad input; the engine never sees a malformed price.

use anyhow::{Context, Result};
use clap::Parser;
use paper_core::{Config, PriceSample, StrategyKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sim_engine::Session;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "coach-cli", about = "Paper-trading strategy coach")]
struct Args {
    /// Number of price ticks to feed into the session.
    #[arg(long, default_value_t = 120)]
    ticks: usize,

    /// File with one price per line. Uses a synthetic walk when omitted.
    #[arg(long)]
    feed: Option<PathBuf>,

    /// Seed for the synthetic random-walk feed.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Replay the full accumulated history through one strategy afterwards.
    #[arg(long)]
    replay: Option<StrategyKind>,

    /// Print the final per-strategy summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coach_cli=info,sim_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("Starting paper-trading coach");

    // Load configuration
    let config = Config::from_env().context("loading configuration")?;
    let mut session = Session::new(&config)?;

    let prices = match &args.feed {
        Some(path) => read_feed(path)?,
        None => synthetic_walk(args.seed, args.ticks),
    };

    for raw in prices.into_iter().take(args.ticks) {
        // A bad price is this layer's problem: skip the tick, keep going.
        let price = match PriceSample::from_f64(raw) {
            Ok(price) => price,
            Err(e) => {
                warn!("skipping tick: {e}");
                continue;
            }
        };
        let ticks = session.step(price)?;
        for tick in &ticks {
            debug!(
                strategy = tick.strategy.name(),
                signal = tick.signal.name(),
                pnl = %tick.outcome.pnl,
                "tick"
            );
        }
    }
    info!(ticks = session.ticks_seen(), "feed complete");

    if let Some(kind) = args.replay {
        let summary = session.replay_strategy(kind)?;
        info!(
            strategy = summary.strategy.name(),
            trades = summary.trades,
            total_pnl = %summary.total_pnl,
            "lab replay complete"
        );
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&session.metrics().summary())?
        );
    } else {
        render_dashboard(&session);
    }

    Ok(())
}

/// Parse a one-price-per-line feed file, skipping malformed lines.
fn read_feed(path: &Path) -> Result<Vec<f64>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading price feed {}", path.display()))?;
    Ok(raw
        .lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            match line.parse::<f64>() {
                Ok(price) => Some(price),
                Err(_) => {
                    warn!(line = n + 1, "skipping malformed price line");
                    None
                }
            }
        })
        .collect())
}

/// Seeded random walk around a EUR/USD-looking level, standing in for the
/// live fetch the engine deliberately knows nothing about.
fn synthetic_walk(seed: u64, ticks: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = 1.0850_f64;
    (0..ticks)
        .map(|_| {
            price += rng.gen_range(-0.0008..0.0008);
            price = price.max(0.9000);
            price
        })
        .collect()
}

fn render_dashboard(session: &Session) {
    let metrics = session.metrics();

    println!("\n--- COACH MODE (Main Dashboard) ---");
    if let Some(best) = metrics.best_strategy() {
        if let Ok(stats) = metrics.stats(best) {
            println!("Current Signal: {best}");
            println!("Win % (past {} trades): {:.1}%", stats.trades, stats.win_rate());
            println!("Avg P/L: ${:.2}/trade", stats.avg_pnl());
            println!("Max Drawdown: -${:.2}", stats.max_drawdown);
            println!("Equity: ${:.2}", stats.equity);
            println!("Insight: {}", session.explain_signal(best));
        }
    }

    println!("\n--- SANDBOX / STRATEGY LAB ---");
    println!(
        "{:<15}{:<8}{:<10}{:<10}{:<10}",
        "Strategy", "Win %", "Avg P/L", "Max DD", "Equity"
    );
    for row in metrics.summary() {
        println!(
            "{:<15}{:<8.1}{:<10.2}{:<10.2}{:<10.2}",
            row.strategy.name(),
            row.win_rate,
            row.avg_pnl,
            -row.max_drawdown,
            row.equity
        );
    }
}
