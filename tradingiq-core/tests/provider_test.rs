//! Integration tests for provider injection at the selection boundary.
//!
//! A hand-built provider stands in for the fixture table so tests can shape
//! exactly the records the engine sees.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tradingiq_core::data::{Fixtures, LookupError, MarketDataProvider};
use tradingiq_core::domain::{
    Bollinger, IndicatorSet, Macd, MovingAverages, PatternCall, PatternKind, Quote, Stochastic,
};
use tradingiq_core::{analyze, Action, Analyzer};

/// One-symbol provider with an optional pattern.
struct SingleSymbol {
    quote: Quote,
    indicators: IndicatorSet,
    pattern: Option<PatternCall>,
}

impl MarketDataProvider for SingleSymbol {
    fn name(&self) -> &str {
        "single"
    }

    fn quote(&self, symbol: &str) -> Option<Quote> {
        (symbol == self.quote.symbol).then(|| self.quote.clone())
    }

    fn indicators(&self, symbol: &str) -> Option<IndicatorSet> {
        (symbol == self.quote.symbol).then(|| self.indicators.clone())
    }

    fn pattern(&self, symbol: &str) -> Option<PatternCall> {
        if symbol == self.quote.symbol {
            self.pattern.clone()
        } else {
            None
        }
    }

    fn symbols(&self) -> Vec<String> {
        vec![self.quote.symbol.clone()]
    }
}

fn neutral_provider(pattern: Option<PatternKind>) -> SingleSymbol {
    SingleSymbol {
        quote: Quote {
            symbol: "MID".into(),
            name: "Midpoint Corp".into(),
            price: 100.0,
            change: 0.0,
            change_percent: 0.0,
            volume: 1_000,
            market_cap: 1e9,
        },
        indicators: IndicatorSet {
            rsi: 50.0,
            macd: Macd { macd: 0.0, signal: 0.0, histogram: 0.0 },
            moving_averages: MovingAverages {
                sma20: 100.0,
                sma50: 100.0,
                sma200: 100.0,
                ema12: 100.0,
                ema26: 100.0,
            },
            bollinger: Bollinger { upper: 110.0, middle: 100.0, lower: 90.0 },
            stochastic: Stochastic { k: 50.0, d: 50.0 },
        },
        pattern: pattern.map(|kind| PatternCall {
            name: "Rectangle".into(),
            kind,
            confidence: 55,
            description: "Sideways range.".into(),
            advice: "Wait.".into(),
        }),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn boundary_values_all_vote_bearish() {
    // RSI == 50, histogram == 0, price == SMA20: every tie breaks bearish.
    let provider = neutral_provider(Some(PatternKind::Neutral));
    let mut rng = StdRng::seed_from_u64(5);
    let analysis = analyze(&provider, "mid", today(), 30, &mut rng).unwrap();
    assert_eq!(analysis.tally.bullish, 0);
    assert_eq!(analysis.tally.bearish, 3);
    assert_eq!(analysis.decision.action, Action::Sell);
    assert_eq!(analysis.decision.confidence, 90);
    assert_eq!(analysis.decision.reasoning.len(), 3);
}

#[test]
fn missing_pattern_is_not_found() {
    let provider = neutral_provider(None);
    let mut rng = StdRng::seed_from_u64(5);
    let err = analyze(&provider, "MID", today(), 30, &mut rng).unwrap_err();
    assert_eq!(
        err,
        LookupError::SymbolNotFound {
            symbol: "MID".into(),
            available: vec![],
        }
    );
    assert_eq!(err.to_string(), "MID not found. Available symbols: none");
}

#[test]
fn analyzer_accepts_boxed_provider() {
    let mut analyzer = Analyzer::new(Box::new(neutral_provider(Some(PatternKind::Bullish))))
        .with_seed(Some(1));
    assert_eq!(analyzer.provider().name(), "single");
    let analysis = analyzer.analyze("MID", today()).unwrap();
    // three bearish ties against one bullish pattern
    assert_eq!(analysis.decision.action, Action::Sell);
    assert_eq!(analysis.decision.confidence, 80);
    assert_eq!(analysis.decision.reasoning[3], "Bullish pattern: Rectangle");
}

#[test]
fn fixture_file_replaces_builtin_symbols() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixtures.toml");
    let mut custom = Fixtures::builtin();
    custom.symbols.truncate(1);
    std::fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

    let loaded = Fixtures::from_file(&path).unwrap();
    assert_eq!(loaded.symbols(), vec!["AAPL".to_string()]);

    let mut rng = StdRng::seed_from_u64(2);
    let err = analyze(&loaded, "TSLA", today(), 30, &mut rng).unwrap_err();
    assert_eq!(err.to_string(), "TSLA not found. Available symbols: AAPL");
}

#[test]
fn partial_fixture_is_never_offered_as_available() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixtures.toml");
    let mut custom = Fixtures::builtin();
    custom.symbols.truncate(1);
    let mut text = toml::to_string(&custom).unwrap();
    text.push_str(
        r#"
[[symbols]]
[symbols.quote]
symbol = "doge"
name = "Dogecoin"
price = 0.12
change = 0.01
change_percent = 9.0
volume = 1000
market_cap = 17000000000.0
"#,
    );
    std::fs::write(&path, text).unwrap();

    let loaded = Fixtures::from_file(&path).unwrap();
    assert_eq!(loaded.symbols(), vec!["AAPL".to_string(), "DOGE".to_string()]);
    assert_eq!(loaded.available(), vec!["AAPL".to_string()]);
    assert!(!loaded.is_complete("DOGE"));

    let mut analyzer = Analyzer::new(Box::new(loaded)).with_seed(Some(3));
    assert_eq!(analyzer.symbols(), vec!["AAPL".to_string()]);
    let err = analyzer.analyze("doge", today()).unwrap_err();
    assert_eq!(err.to_string(), "DOGE not found. Available symbols: AAPL");
}
