//! TradingIQ TUI: terminal dashboard with vim-style navigation.
//!
//! Views:
//! 1. Dashboard: overview, chart, indicators, pattern and decision cards
//! 2. Chart: full-size candles with target and stop lines
//! 3. Help: keyboard shortcuts and how to read the analysis

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use tradingiq_core::config::default_config_path;
use tradingiq_core::{Analyzer, DashboardConfig};
use tradingiq_tui::app::{AppState, Overlay};
use tradingiq_tui::logging::{self, LOG_CAPACITY, LogBuffer};
use tradingiq_tui::{input, ui};

#[derive(Parser, Debug)]
#[command(name = "tradingiq-tui", about = "TradingIQ terminal dashboard", version)]
struct Args {
    /// Symbol to analyze at startup (overrides config)
    #[arg(long)]
    symbol: Option<String>,

    /// Master seed for reproducible candles (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML fixture file replacing the built-in symbols (overrides config)
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Config file (default: <config_dir>/tradingiq/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration errors surface before the terminal is taken over.
    let first_run = args.config.is_none() && default_config_path().map_or(true, |p| !p.exists());
    let mut config = DashboardConfig::resolve(args.config.as_deref()).context("loading config")?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.fixtures.is_some() {
        config.fixtures = args.fixtures.clone();
    }

    let logs = Arc::new(LogBuffer::new(LOG_CAPACITY));
    logging::init(logs.clone(), &config.log_level);
    info!(fixtures = ?config.fixtures, seed = ?config.seed, "starting dashboard");

    let analyzer = Analyzer::from_config(&config).context("loading fixtures")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(analyzer, config.popular_symbols.clone(), logs);
    let startup = args.symbol.unwrap_or(config.default_symbol);
    app.select(&startup);
    if first_run {
        app.overlay = Overlay::Welcome;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check exit
        if !app.running {
            info!("shutting down");
            return Ok(());
        }
    }
}
