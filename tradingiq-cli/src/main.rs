//! TradingIQ CLI: analyze, candles and symbol listing.
//!
//! Commands:
//! - `analyze` prints quote, indicators, pattern, decision and a candle summary
//! - `candles` prints the generated daily candles
//! - `symbols` lists the recognized symbols

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use tradingiq_core::config::check_candle_days;
use tradingiq_core::presentation::{
    decision_summary, format_change, format_compact, format_level_price, macd_status,
    moving_average_status, percent_delta, rsi_status, stochastic_status, RISK_DISCLAIMER,
};
use tradingiq_core::{Analysis, Analyzer, Candle, DashboardConfig, LookupError};

#[derive(Parser)]
#[command(
    name = "tradingiq",
    about = "TradingIQ CLI: stock and crypto analysis from fixture data",
    version
)]
struct Cli {
    /// Config file (default: <config_dir>/tradingiq/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one symbol and print the full dashboard in text form.
    Analyze {
        /// Symbol to analyze (e.g., AAPL, BTC). Case-insensitive.
        symbol: String,

        /// Master seed for reproducible candles.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the analysis as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// TOML fixture file replacing the built-in symbols.
        #[arg(long)]
        fixtures: Option<PathBuf>,

        /// Last candle date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,
    },
    /// Print the synthetic daily candles for one symbol.
    Candles {
        /// Symbol to generate candles for.
        symbol: String,

        /// Master seed for reproducible candles.
        #[arg(long)]
        seed: Option<u64>,

        /// Number of daily candles. Defaults to the configured window.
        #[arg(long)]
        days: Option<usize>,

        /// Print the candles as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// TOML fixture file replacing the built-in symbols.
        #[arg(long)]
        fixtures: Option<PathBuf>,

        /// Last candle date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,
    },
    /// List the recognized symbols.
    Symbols {
        /// TOML fixture file replacing the built-in symbols.
        #[arg(long)]
        fixtures: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (message, status) = failure(&err);
            eprintln!("{message}");
            ExitCode::from(status)
        }
    }
}

/// Message and exit status for a failed command. Unknown symbols exit with
/// 1 and the bare not-found message; anything else exits with 2.
fn failure(err: &anyhow::Error) -> (String, u8) {
    match err.downcast_ref::<LookupError>() {
        Some(lookup) => (lookup.to_string(), 1),
        None => (format!("Error: {err:#}"), 2),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = DashboardConfig::resolve(cli.config.as_deref()).context("loading config")?;
    init_logging(&config.log_level);

    match cli.command {
        Commands::Analyze {
            symbol,
            seed,
            json,
            fixtures,
            end,
        } => {
            apply_overrides(&mut config, seed, fixtures, None)?;
            let end = parse_end(end.as_deref())?;
            let analysis = run_lookup(&config, &symbol, end)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", render_analysis(&analysis));
            }
            Ok(())
        }
        Commands::Candles {
            symbol,
            seed,
            days,
            json,
            fixtures,
            end,
        } => {
            apply_overrides(&mut config, seed, fixtures, days)?;
            let end = parse_end(end.as_deref())?;
            let analysis = run_lookup(&config, &symbol, end)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis.candles)?);
            } else {
                print!("{}", render_candles(&analysis.candles));
            }
            Ok(())
        }
        Commands::Symbols { fixtures } => {
            apply_overrides(&mut config, None, fixtures, None)?;
            let analyzer = Analyzer::from_config(&config).context("loading fixtures")?;
            for symbol in analyzer.symbols() {
                println!("{symbol}");
            }
            Ok(())
        }
    }
}

/// Formatted logs to stderr so stdout stays clean for `--json`.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tradingiq_core={default_level},tradingiq_cli={default_level}"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn apply_overrides(
    config: &mut DashboardConfig,
    seed: Option<u64>,
    fixtures: Option<PathBuf>,
    days: Option<usize>,
) -> Result<()> {
    if seed.is_some() {
        config.seed = seed;
    }
    if fixtures.is_some() {
        config.fixtures = fixtures;
    }
    if let Some(days) = days {
        config.candle_days = check_candle_days(days).context("--days")?;
    }
    debug!(seed = ?config.seed, fixtures = ?config.fixtures, days = config.candle_days, "resolved options");
    Ok(())
}

fn parse_end(end: Option<&str>) -> Result<NaiveDate> {
    match end {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid --end date '{s}', expected YYYY-MM-DD")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Analyze `symbol`. An unknown symbol surfaces as a [`LookupError`].
fn run_lookup(config: &DashboardConfig, symbol: &str, end: NaiveDate) -> Result<Analysis> {
    let mut analyzer = Analyzer::from_config(config).context("loading fixtures")?;
    Ok(analyzer.analyze(symbol, end)?)
}

fn render_analysis(analysis: &Analysis) -> String {
    let quote = &analysis.quote;
    let ind = &analysis.indicators;
    let pattern = &analysis.pattern;
    let decision = &analysis.decision;
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    line(String::new());
    line(format!("=== {} ({}) ===", quote.name, quote.symbol));
    line(format!("Price:          {}", format_level_price(quote.price)));
    line(format!("Change:         {}", format_change(quote.change, quote.change_percent)));
    line(format!("Volume:         {}", format_compact(quote.volume as f64)));
    line(format!("Market Cap:     {}", format_compact(quote.market_cap)));
    line(String::new());

    line("--- Technical Indicators ---".into());
    line(format!("RSI (14):       {:.1} ({})", ind.rsi, rsi_status(ind.rsi).label));
    line(format!(
        "MACD:           {:.2} / signal {:.2} / hist {:.2} ({})",
        ind.macd.macd,
        ind.macd.signal,
        ind.macd.histogram,
        macd_status(ind.macd.histogram).label
    ));
    let ma = &ind.moving_averages;
    line(format!(
        "SMA 20/50/200:  {:.2} / {:.2} / {:.2} ({})",
        ma.sma20,
        ma.sma50,
        ma.sma200,
        moving_average_status(ind).label
    ));
    line(format!("EMA 12/26:      {:.2} / {:.2}", ma.ema12, ma.ema26));
    line(format!(
        "Bollinger:      {:.2} / {:.2} / {:.2}",
        ind.bollinger.upper, ind.bollinger.middle, ind.bollinger.lower
    ));
    line(format!(
        "Stochastic:     %K {:.1} / %D {:.1} ({})",
        ind.stochastic.k,
        ind.stochastic.d,
        stochastic_status(ind).label
    ));
    line(String::new());

    line("--- Pattern ---".into());
    line(format!(
        "{} ({}, {}% confidence)",
        pattern.name,
        pattern.kind.label(),
        pattern.confidence
    ));
    line(format!("  {}", pattern.description));
    line(format!("  Advice: {}", pattern.advice));
    line(String::new());

    line("--- Decision ---".into());
    line(format!(
        "{}  {}",
        decision.action,
        decision_summary(decision.action, decision.confidence, &decision.timeframe)
    ));
    if let Some(target) = decision.target_price {
        line(format!(
            "Target:         {} ({:+.1}%)",
            format_level_price(target),
            percent_delta(target, quote.price)
        ));
    }
    if let Some(stop) = decision.stop_loss {
        line(format!(
            "Stop Loss:      {} ({:+.1}%)",
            format_level_price(stop),
            percent_delta(stop, quote.price)
        ));
    }
    line(format!(
        "Signals:        {} bullish / {} bearish",
        analysis.tally.bullish, analysis.tally.bearish
    ));
    for reason in &decision.reasoning {
        line(format!("  - {reason}"));
    }
    line(String::new());

    line("--- Candles ---".into());
    line(candle_summary(&analysis.candles));
    line(String::new());
    line(format!("WARNING: {RISK_DISCLAIMER}"));
    out
}

/// One-line summary: date range, up/down counts and the full high/low range.
fn candle_summary(candles: &[Candle]) -> String {
    let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
        return "No candles".into();
    };
    let up = candles.iter().filter(|c| c.is_bullish()).count();
    let high = candles.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let low = candles.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    format!(
        "{} to {}: {} days, {} up / {} down, range {:.2} to {:.2}",
        first.date,
        last.date,
        candles.len(),
        up,
        candles.len() - up,
        low,
        high
    )
}

fn render_candles(candles: &[Candle]) -> String {
    let mut out = format!(
        "{:<12} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
        "Date", "Open", "High", "Low", "Close", "Volume"
    );
    out.push_str(&"-".repeat(77));
    out.push('\n');
    for c in candles {
        out.push_str(&format!(
            "{:<12} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12}\n",
            c.date.to_string(),
            c.open,
            c.high,
            c.low,
            c.close,
            c.volume
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradingiq_core::{Action, Fixtures};

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn analysis(symbol: &str) -> Analysis {
        Analyzer::new(Box::new(Fixtures::builtin()))
            .with_seed(Some(7))
            .analyze(symbol, end())
            .unwrap()
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["tradingiq", "analyze", "aapl", "--seed", "3", "--json"]).unwrap();
        match cli.command {
            Commands::Analyze { symbol, seed, json, .. } => {
                assert_eq!(symbol, "aapl");
                assert_eq!(seed, Some(3));
                assert!(json);
            }
            _ => panic!("expected analyze"),
        }

        let cli = Cli::try_parse_from(["tradingiq", "candles", "BTC", "--days", "5", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Candles { days: Some(5), .. }));

        assert!(Cli::try_parse_from(["tradingiq", "analyze"]).is_err());
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = DashboardConfig::default();
        apply_overrides(&mut config, Some(9), Some(PathBuf::from("f.toml")), Some(10)).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.fixtures, Some(PathBuf::from("f.toml")));
        assert_eq!(config.candle_days, 10);

        assert!(apply_overrides(&mut config, None, None, Some(0)).is_err());
        assert!(apply_overrides(&mut config, None, None, Some(100_000_000)).is_err());
        assert_eq!(config.candle_days, 10);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn unknown_symbol_exits_with_not_found_message() {
        let config = DashboardConfig::default();
        let err = run_lookup(&config, "xyz", end()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LookupError>(),
            Some(LookupError::SymbolNotFound { .. })
        ));
        let (message, status) = failure(&err);
        assert_eq!(message, "XYZ not found. Available symbols: AAPL, TSLA, BTC, ETH");
        assert_eq!(status, 1);
    }

    #[test]
    fn other_failures_exit_with_two() {
        let config = DashboardConfig {
            fixtures: Some(PathBuf::from("/nonexistent/tradingiq/fixtures.toml")),
            ..DashboardConfig::default()
        };
        let err = run_lookup(&config, "AAPL", end()).unwrap_err();
        let (message, status) = failure(&err);
        assert!(message.starts_with("Error: loading fixtures"));
        assert_eq!(status, 2);
    }

    #[test]
    fn end_date_parsing() {
        assert_eq!(parse_end(Some("2026-10-19")).unwrap(), end());
        assert!(parse_end(Some("19/10/2026")).is_err());
    }

    #[test]
    fn analysis_text_has_every_section() {
        let text = render_analysis(&analysis("aapl"));
        assert!(text.contains("=== Apple Inc. (AAPL) ==="));
        assert!(text.contains("--- Technical Indicators ---"));
        assert!(text.contains("Ascending Triangle"));
        assert!(text.contains("BUY"));
        assert!(text.contains("Target:"));
        assert!(text.contains("30 days"));
        assert!(text.contains(RISK_DISCLAIMER));
    }

    #[test]
    fn hold_has_no_levels() {
        // RSI and MACD turn bearish; trend and pattern stay bullish: 2-2.
        let mut fixtures = Fixtures::builtin();
        fixtures.symbols.truncate(1);
        let indicators = fixtures.symbols[0].indicators.as_mut().unwrap();
        indicators.rsi = 45.0;
        indicators.macd.histogram = -0.5;

        let a = Analyzer::new(Box::new(fixtures))
            .with_seed(Some(7))
            .analyze("AAPL", end())
            .unwrap();
        assert_eq!(a.decision.action, Action::Hold);

        let text = render_analysis(&a);
        assert!(text.contains("HOLD  Based on technical analysis"));
        assert!(text.contains("Signals:        2 bullish / 2 bearish"));
        assert!(!text.contains("Target:"));
        assert!(!text.contains("Stop Loss:"));
    }

    #[test]
    fn candle_table_one_row_per_day() {
        let a = analysis("ETH");
        let table = render_candles(&a.candles);
        assert_eq!(table.lines().count(), 2 + 30);
        assert!(table.contains("2026-10-19"));
        assert!(table.contains("2026-09-20"));
    }

    #[test]
    fn empty_candle_summary() {
        assert_eq!(candle_summary(&[]), "No candles");
    }

    #[test]
    fn analysis_serializes_to_json() {
        let a = analysis("TSLA");
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["quote"]["symbol"], "TSLA");
        assert_eq!(json["candles"].as_array().unwrap().len(), 30);
    }
}
