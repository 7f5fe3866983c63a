//! TradingIQ TUI: single-screen terminal dashboard for one symbol at a time.
//!
//! Provides:
//! - Quote overview with compact money formatting
//! - 30-day synthetic candle chart with target/stop overlays
//! - Technical indicator, pattern and trading-decision cards
//! - Symbol search, popular-symbol bar, error history and log overlays

pub mod app;
pub mod input;
pub mod logging;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::{AppState, Overlay, Panel};
pub use input::handle_key;
pub use logging::LogBuffer;
pub use theme::Theme;
