//! Buffer-level widgets.
//!
//! - CandleChart: OHLC candles with grid, dates, legend and target/stop lines

pub mod candle_chart;

pub use candle_chart::{overlays_from_decision, CandleChartPanel, LevelOverlay};
