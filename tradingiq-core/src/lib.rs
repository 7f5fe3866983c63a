//! TradingIQ Core: domain types, fixtures, candle generator and the
//! signal-scoring decision engine.
//!
//! This crate contains everything the dashboard computes:
//! - Domain types (quote, indicator set, candle, pattern call, decision)
//! - A read-only market data provider trait with built-in and TOML fixtures
//! - Seedable synthetic candle generation
//! - The five-rule decision engine
//! - Display derivations shared by the TUI and CLI
//! - Dashboard configuration

pub mod analysis;
pub mod candles;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod presentation;
pub mod rng;

pub use analysis::{analyze, Analysis, Analyzer};
pub use config::{ConfigError, DashboardConfig};
pub use data::{Fixtures, LookupError, MarketDataProvider};
pub use domain::{
    Action, Candle, Decision, IndicatorSet, PatternCall, PatternKind, Quote,
};
pub use engine::{decide, SignalTally};
