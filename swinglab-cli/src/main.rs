//! Swinglab CLI — simulate, optimize, and signal commands.
//!
//! Commands:
//! - `simulate` — run one wallet over a candle CSV and write the trade ledger
//! - `optimize` — run the parameter search and write the ranked leaderboard
//! - `signal` — evaluate the decision engine on the latest complete row and
//!   append it to a decision log

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use swinglab_core::data::{read_candles, synthetic_candles, write_candles};
use swinglab_core::domain::Candle;
use swinglab_core::indicators::enrich;
use swinglab_core::strategy::decide;
use swinglab_runner::{
    aggressive_configs, append_signal_log, export_ledger_csv, export_leaderboard_csv,
    filter_rows, simulate, Optimizer, ParamGrid, RunConfig,
};

/// Number of synthetic candles generated when no data file is given.
const SYNTHETIC_ROWS: usize = 720;
/// Seed for synthetic data, fixed so repeated runs agree.
const SYNTHETIC_SEED: u64 = 42;

#[derive(Parser)]
#[command(
    name = "swinglab",
    about = "Swinglab CLI — rule-strategy backtesting and parameter search"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulated wallet over a candle CSV and write the trade ledger.
    Simulate {
        /// Candle CSV (timestamp,open,high,low,close,volume plus optional
        /// indicator columns). Omit with --synthetic.
        #[arg(long)]
        data: Option<PathBuf>,

        /// TOML run config (strategy parameters and initial cash).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Generate a seeded synthetic candle series instead of reading a file.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Output path for the trade ledger CSV.
        #[arg(long, default_value = "simulated_trades.csv")]
        out: PathBuf,

        /// Also write the indicator-enriched candle snapshot here.
        #[arg(long)]
        save_enriched: Option<PathBuf>,
    },
    /// Run the parameter search and write the ranked leaderboard.
    Optimize {
        /// Candle CSV. Omit with --synthetic.
        #[arg(long)]
        data: Option<PathBuf>,

        /// TOML run config providing the base strategy and initial cash.
        #[arg(long)]
        config: Option<PathBuf>,

        /// TOML parameter grid; defaults to the four aggressive configs.
        #[arg(long)]
        grid: Option<PathBuf>,

        /// Generate a seeded synthetic candle series instead of reading a file.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Disable parallel execution (output is identical either way).
        #[arg(long, default_value_t = false)]
        sequential: bool,

        /// Output path for the leaderboard CSV.
        #[arg(long, default_value = "optimizer_results.csv")]
        out: PathBuf,
    },
    /// Evaluate the decision engine on the latest complete row and append
    /// the decision to a log.
    Signal {
        /// Candle CSV.
        #[arg(long)]
        data: PathBuf,

        /// TOML run config for the RSI thresholds.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Decision log CSV (created with a header on first use).
        #[arg(long, default_value = "trades.csv")]
        log: PathBuf,

        /// Current cash balance to record alongside the decision.
        #[arg(long, default_value_t = 0.0)]
        cash: f64,

        /// Current asset balance to record alongside the decision.
        #[arg(long, default_value_t = 0.0)]
        asset: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            data,
            config,
            synthetic,
            out,
            save_enriched,
        } => run_simulate(data, config, synthetic, out, save_enriched),
        Commands::Optimize {
            data,
            config,
            grid,
            synthetic,
            sequential,
            out,
        } => run_optimize(data, config, grid, synthetic, sequential, out),
        Commands::Signal {
            data,
            config,
            log,
            cash,
            asset,
        } => run_signal(data, config, log, cash, asset),
    }
}

/// Load candles from a file or generate a synthetic series, enriching
/// indicators when the file does not already carry them.
fn load_dataset(data: Option<&Path>, synthetic: bool) -> Result<Vec<Candle>> {
    let mut candles = match (data, synthetic) {
        (Some(path), false) => {
            read_candles(path).with_context(|| format!("loading '{}'", path.display()))?
        }
        (None, true) => synthetic_candles(SYNTHETIC_ROWS, SYNTHETIC_SEED),
        (Some(_), true) => bail!("--data and --synthetic are mutually exclusive"),
        (None, false) => bail!("either --data or --synthetic is required"),
    };

    if !candles.iter().any(|c| c.has_indicators()) {
        enrich(&mut candles);
    }
    Ok(candles)
}

fn load_run_config(path: Option<&Path>) -> Result<RunConfig> {
    match path {
        Some(path) => RunConfig::load(path),
        None => Ok(RunConfig::default()),
    }
}

fn run_simulate(
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    synthetic: bool,
    out: PathBuf,
    save_enriched: Option<PathBuf>,
) -> Result<()> {
    let candles = load_dataset(data.as_deref(), synthetic)?;
    let run_config = load_run_config(config.as_deref())?;

    if let Some(path) = &save_enriched {
        write_candles(path, &candles)?;
        println!("Enriched snapshot saved to {}", path.display());
    }

    let rows = filter_rows(&candles);
    if rows.is_empty() {
        bail!("no rows with complete indicator data to simulate");
    }

    let ledger = simulate(&rows, &run_config.strategy, run_config.initial_cash);
    std::fs::write(&out, export_ledger_csv(&ledger)?)
        .with_context(|| format!("writing '{}'", out.display()))?;

    let final_value = ledger
        .final_portfolio_value()
        .unwrap_or(run_config.initial_cash);
    let net_return = (final_value - run_config.initial_cash) / run_config.initial_cash * 100.0;

    println!("Run {}", run_config.run_id());
    println!(
        "Simulated {} rows ({} skipped for missing indicators)",
        rows.len(),
        candles.len() - rows.len()
    );
    println!(
        "Final portfolio value: {final_value:.2} ({net_return:+.2}%), {} trades",
        ledger.trade_count()
    );
    println!("Ledger saved to {}", out.display());
    Ok(())
}

fn run_optimize(
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    grid: Option<PathBuf>,
    synthetic: bool,
    sequential: bool,
    out: PathBuf,
) -> Result<()> {
    let candles = load_dataset(data.as_deref(), synthetic)?;
    let run_config = load_run_config(config.as_deref())?;

    let configs = match &grid {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read grid file '{}'", path.display()))?;
            let grid: ParamGrid = toml::from_str(&text)
                .with_context(|| format!("failed to parse grid file '{}'", path.display()))?;
            grid.generate_configs(&run_config.strategy)
        }
        None => aggressive_configs(),
    };

    let leaderboard = Optimizer::new(run_config.initial_cash)
        .with_parallelism(!sequential)
        .run(&candles, &configs);

    std::fs::write(&out, export_leaderboard_csv(&leaderboard)?)
        .with_context(|| format!("writing '{}'", out.display()))?;

    println!(
        "Evaluated {} configurations over {} rows",
        leaderboard.len(),
        filter_rows(&candles).len()
    );
    println!("rank  rsi_buy  rsi_sell  tp      sl      risk    return%  trades");
    for (rank, row) in leaderboard.entries().iter().enumerate() {
        println!(
            "{:<4}  {:<7}  {:<8}  {:<6}  {:<6}  {:<6}  {:>7.2}  {:>6}",
            rank + 1,
            row.rsi_buy,
            row.rsi_sell,
            row.take_profit_pct,
            row.stop_loss_pct,
            row.risk_pct,
            row.net_return_pct,
            row.total_trades
        );
    }
    println!("Leaderboard saved to {}", out.display());
    Ok(())
}

fn run_signal(
    data: PathBuf,
    config: Option<PathBuf>,
    log: PathBuf,
    cash: f64,
    asset: f64,
) -> Result<()> {
    let candles = load_dataset(Some(&data), false)?;
    let run_config = load_run_config(config.as_deref())?;

    let latest = candles
        .iter()
        .rev()
        .find(|c| c.has_indicators())
        .context("no row with complete indicator data")?;

    let signal = decide(
        latest,
        run_config.strategy.rsi_buy,
        run_config.strategy.rsi_sell,
    );
    append_signal_log(&log, &signal, cash, asset)?;

    println!(
        "Trade Signal: {} | Reason: {} | Time: {}",
        signal.action, signal.reason, signal.time
    );
    println!("Decision appended to {}", log.display());
    Ok(())
}
