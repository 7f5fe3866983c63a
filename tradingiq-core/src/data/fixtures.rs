//! Fixture tables: the built-in symbol set and TOML fixture files.
//!
//! A fixture file is an array of `[[symbols]]` tables, each with a required
//! `quote` sub-table and optional `indicators` and `pattern` sub-tables:
//!
//! ```toml
//! [[symbols]]
//! [symbols.quote]
//! symbol = "AAPL"
//! name = "Apple Inc."
//! # ...
//! [symbols.indicators]
//! rsi = 58.4
//! # ...
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::data::provider::MarketDataProvider;
use crate::domain::{
    normalize_symbol, Bollinger, IndicatorSet, Macd, MovingAverages, PatternCall, PatternKind,
    Quote, Stochastic,
};

/// Symbols with built-in fixture data, in display order.
pub const BUILTIN_SYMBOLS: [&str; 4] = ["AAPL", "TSLA", "BTC", "ETH"];

/// Everything known about one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolFixture {
    pub quote: Quote,
    #[serde(default)]
    pub indicators: Option<IndicatorSet>,
    #[serde(default)]
    pub pattern: Option<PatternCall>,
}

/// An ordered, read-only fixture table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    pub symbols: Vec<SymbolFixture>,
}

impl Fixtures {
    /// Load a fixture table from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a fixture table from a TOML string.
    ///
    /// Symbols are normalized to upper case. Duplicate symbols and inverted
    /// Bollinger bands are rejected.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut fixtures: Fixtures =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut seen = Vec::with_capacity(fixtures.symbols.len());
        for fixture in &mut fixtures.symbols {
            let symbol = normalize_symbol(&fixture.quote.symbol);
            if symbol.is_empty() {
                return Err(ConfigError::Invalid("fixture with empty symbol".into()));
            }
            if seen.contains(&symbol) {
                return Err(ConfigError::Invalid(format!("duplicate fixture for {symbol}")));
            }
            if let Some(indicators) = &fixture.indicators {
                if !indicators.bollinger.is_ordered() {
                    return Err(ConfigError::Invalid(format!(
                        "{symbol}: Bollinger bands must satisfy lower <= middle <= upper"
                    )));
                }
            }
            fixture.quote.symbol = symbol.clone();
            seen.push(symbol);
        }
        Ok(fixtures)
    }

    fn find(&self, symbol: &str) -> Option<&SymbolFixture> {
        self.symbols.iter().find(|f| f.quote.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The four symbols the dashboard ships with.
    pub fn builtin() -> Self {
        Self {
            symbols: vec![aapl(), tsla(), btc(), eth()],
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MarketDataProvider for Fixtures {
    fn name(&self) -> &str {
        "fixtures"
    }

    fn quote(&self, symbol: &str) -> Option<Quote> {
        self.find(symbol).map(|f| f.quote.clone())
    }

    fn indicators(&self, symbol: &str) -> Option<IndicatorSet> {
        self.find(symbol).and_then(|f| f.indicators.clone())
    }

    fn pattern(&self, symbol: &str) -> Option<PatternCall> {
        self.find(symbol).and_then(|f| f.pattern.clone())
    }

    fn symbols(&self) -> Vec<String> {
        self.symbols.iter().map(|f| f.quote.symbol.clone()).collect()
    }
}

// ── Built-in fixtures ────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn indicator_set(
    rsi: f64,
    (macd, signal, histogram): (f64, f64, f64),
    (sma20, sma50, sma200, ema12, ema26): (f64, f64, f64, f64, f64),
    (upper, middle, lower): (f64, f64, f64),
    (k, d): (f64, f64),
) -> IndicatorSet {
    IndicatorSet {
        rsi,
        macd: Macd { macd, signal, histogram },
        moving_averages: MovingAverages { sma20, sma50, sma200, ema12, ema26 },
        bollinger: Bollinger { upper, middle, lower },
        stochastic: Stochastic { k, d },
    }
}

fn pattern(name: &str, kind: PatternKind, confidence: u8, description: &str, advice: &str) -> PatternCall {
    PatternCall {
        name: name.into(),
        kind,
        confidence,
        description: description.into(),
        advice: advice.into(),
    }
}

fn aapl() -> SymbolFixture {
    SymbolFixture {
        quote: Quote {
            symbol: "AAPL".into(),
            name: "Apple Inc.".into(),
            price: 193.42,
            change: 2.83,
            change_percent: 1.48,
            volume: 45_673_200,
            market_cap: 2_980_000_000_000.0,
        },
        indicators: Some(indicator_set(
            58.4,
            (1.90, 1.23, 0.67),
            (189.45, 185.67, 178.23, 191.23, 188.45),
            (198.45, 189.45, 180.45),
            (62.3, 58.7),
        )),
        pattern: Some(pattern(
            "Ascending Triangle",
            PatternKind::Bullish,
            78,
            "Price is forming higher lows while testing resistance at $195. This pattern typically breaks upward.",
            "Wait for breakout above $195 with volume confirmation. Target: $205-210.",
        )),
    }
}

fn tsla() -> SymbolFixture {
    SymbolFixture {
        quote: Quote {
            symbol: "TSLA".into(),
            name: "Tesla Inc.".into(),
            price: 248.98,
            change: -5.22,
            change_percent: -2.05,
            volume: 89_234_500,
            market_cap: 792_000_000_000.0,
        },
        indicators: Some(indicator_set(
            34.2,
            (-3.68, -2.45, -1.23),
            (258.67, 265.23, 220.45, 252.34, 261.78),
            (275.23, 258.67, 242.11),
            (28.9, 32.4),
        )),
        pattern: Some(pattern(
            "Head and Shoulders",
            PatternKind::Bearish,
            82,
            "Classic reversal pattern with left shoulder at $280, head at $295, right shoulder at $275.",
            "Pattern suggests downside to $230-235. Consider shorting on neckline break.",
        )),
    }
}

fn btc() -> SymbolFixture {
    SymbolFixture {
        quote: Quote {
            symbol: "BTC".into(),
            name: "Bitcoin".into(),
            price: 43_250.75,
            change: 1_240.50,
            change_percent: 2.95,
            volume: 12_450_000_000,
            market_cap: 847_000_000_000.0,
        },
        indicators: Some(indicator_set(
            67.8,
            (802.45, 567.89, 234.56),
            (42_150.67, 40_890.23, 38_450.12, 42_890.34, 41_567.89),
            (45_890.23, 42_150.67, 38_411.11),
            (72.4, 69.8),
        )),
        pattern: Some(pattern(
            "Bull Flag",
            PatternKind::Bullish,
            85,
            "Strong upward move followed by consolidation. Flag pole shows $8,000 gain.",
            "Bullish continuation pattern. Target: $51,000-52,000 on breakout.",
        )),
    }
}

fn eth() -> SymbolFixture {
    SymbolFixture {
        quote: Quote {
            symbol: "ETH".into(),
            name: "Ethereum".into(),
            price: 2_640.32,
            change: -89.23,
            change_percent: -3.27,
            volume: 8_750_000_000,
            market_cap: 317_000_000_000.0,
        },
        indicators: Some(indicator_set(
            42.1,
            (-69.12, -45.67, -23.45),
            (2_710.45, 2_820.67, 2_450.23, 2_680.34, 2_750.89),
            (2_890.45, 2_710.45, 2_530.45),
            (38.7, 41.2),
        )),
        pattern: Some(pattern(
            "Double Bottom",
            PatternKind::Bullish,
            71,
            "Two lows at $2,580 level with higher high in between. Reversal pattern forming.",
            "Watch for break above $2,750 for confirmation. Target: $2,950-3,000.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_symbols_in_display_order() {
        let fixtures = Fixtures::builtin();
        assert_eq!(fixtures.symbols(), BUILTIN_SYMBOLS.to_vec());
    }

    #[test]
    fn builtin_fixtures_are_complete() {
        let fixtures = Fixtures::builtin();
        for symbol in BUILTIN_SYMBOLS {
            assert!(fixtures.quote(symbol).is_some(), "{symbol} quote");
            let indicators = fixtures.indicators(symbol).expect("indicators");
            assert!(indicators.bollinger.is_ordered(), "{symbol} bands");
            assert!(fixtures.pattern(symbol).is_some(), "{symbol} pattern");
        }
    }

    #[test]
    fn lookup_is_exact_key_fetch() {
        let fixtures = Fixtures::builtin();
        assert!(fixtures.quote("aapl").is_none());
        assert!(fixtures.quote("GOOGL").is_none());
        assert!(fixtures.indicators("XYZ").is_none());
    }

    #[test]
    fn parses_partial_fixture_file() {
        let toml = r#"
            [[symbols]]
            [symbols.quote]
            symbol = "doge"
            name = "Dogecoin"
            price = 0.12
            change = 0.01
            change_percent = 9.0
            volume = 1000
            market_cap = 17000000000.0
        "#;
        let fixtures = Fixtures::from_toml(toml).unwrap();
        assert_eq!(fixtures.symbols(), vec!["DOGE".to_string()]);
        assert!(fixtures.quote("DOGE").is_some());
        assert!(fixtures.indicators("DOGE").is_none());
        assert!(fixtures.pattern("DOGE").is_none());
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let toml = r#"
            [[symbols]]
            [symbols.quote]
            symbol = "ABC"
            name = "A"
            price = 1.0
            change = 0.0
            change_percent = 0.0
            volume = 1
            market_cap = 1.0

            [[symbols]]
            [symbols.quote]
            symbol = "abc"
            name = "B"
            price = 1.0
            change = 0.0
            change_percent = 0.0
            volume = 1
            market_cap = 1.0
        "#;
        let err = Fixtures::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn builtin_roundtrips_through_toml() {
        let fixtures = Fixtures::builtin();
        let text = toml::to_string(&fixtures).unwrap();
        let parsed = Fixtures::from_toml(&text).unwrap();
        assert_eq!(parsed, fixtures);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Fixtures::from_toml("[[symbols]\nbroken").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
