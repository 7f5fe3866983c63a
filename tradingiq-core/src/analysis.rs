//! Symbol selection: fixture lookup, candle generation and scoring.
//!
//! This is the boundary where unknown symbols are rejected. Everything
//! downstream of a successful [`Analysis`] can assume complete inputs.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::candles::{generate_candles, CANDLE_DAYS};
use crate::config::{check_candle_days, ConfigError, DashboardConfig};
use crate::data::{Fixtures, LookupError, MarketDataProvider};
use crate::domain::{normalize_symbol, Candle, Decision, IndicatorSet, PatternCall, Quote};
use crate::engine::{score, SignalTally};
use crate::rng::selection_rng;

/// Everything the dashboard renders for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub quote: Quote,
    pub indicators: IndicatorSet,
    pub pattern: PatternCall,
    pub candles: Vec<Candle>,
    pub decision: Decision,
    pub tally: SignalTally,
}

impl Analysis {
    pub fn symbol(&self) -> &str {
        &self.quote.symbol
    }
}

/// Look up `input`, generate candles ending at `end`, and score.
///
/// The symbol is trimmed and upper-cased first. A symbol is recognized only
/// when the provider has its quote, indicators and pattern.
pub fn analyze<P, R>(
    provider: &P,
    input: &str,
    end: NaiveDate,
    days: usize,
    rng: &mut R,
) -> Result<Analysis, LookupError>
where
    P: MarketDataProvider + ?Sized,
    R: Rng + ?Sized,
{
    let symbol = normalize_symbol(input);
    if symbol.is_empty() {
        return Err(LookupError::EmptySymbol);
    }

    let (quote, indicators, pattern) = match (
        provider.quote(&symbol),
        provider.indicators(&symbol),
        provider.pattern(&symbol),
    ) {
        (Some(q), Some(i), Some(p)) => (q, i, p),
        _ => {
            warn!(%symbol, provider = provider.name(), "symbol not found");
            return Err(provider.not_found(&symbol));
        }
    };

    let candles = generate_candles(quote.price, end, days, rng);
    let (decision, tally) = score(&indicators, &pattern, &quote);
    info!(
        %symbol,
        action = %decision.action,
        confidence = decision.confidence,
        candles = candles.len(),
        "analysis complete"
    );

    Ok(Analysis {
        quote,
        indicators,
        pattern,
        candles,
        decision,
        tally,
    })
}

/// Stateful front door used by the binaries: owns the provider and hands
/// each selection its own RNG.
pub struct Analyzer {
    provider: Box<dyn MarketDataProvider>,
    seed: Option<u64>,
    days: usize,
    selections: u64,
}

impl Analyzer {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            seed: None,
            days: CANDLE_DAYS,
            selections: 0,
        }
    }

    /// Provider, seed and window from configuration: the fixture file when
    /// one is set, otherwise the built-in symbols.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ConfigError> {
        let days = check_candle_days(config.candle_days)?;
        let fixtures = match &config.fixtures {
            Some(path) => Fixtures::from_file(path)?,
            None => Fixtures::builtin(),
        };
        info!(symbols = fixtures.len(), seed = ?config.seed, "fixtures loaded");
        Ok(Self::new(Box::new(fixtures))
            .with_seed(config.seed)
            .with_days(days))
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    pub fn provider(&self) -> &dyn MarketDataProvider {
        self.provider.as_ref()
    }

    /// Symbols that can be selected.
    pub fn symbols(&self) -> Vec<String> {
        self.provider.available()
    }

    /// Analyze `input` with candles ending at `end`.
    ///
    /// Failed lookups do not consume a selection, so a seeded session
    /// reproduces regardless of typos.
    pub fn analyze(&mut self, input: &str, end: NaiveDate) -> Result<Analysis, LookupError> {
        let symbol = normalize_symbol(input);
        let mut rng = selection_rng(self.seed, &symbol, self.selections);
        let analysis = analyze(self.provider.as_ref(), &symbol, end, self.days, &mut rng)?;
        self.selections += 1;
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Fixtures;
    use crate::domain::Action;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn analyze_normalizes_input() {
        let fixtures = Fixtures::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let analysis = analyze(&fixtures, "  aapl ", today(), CANDLE_DAYS, &mut rng).unwrap();
        assert_eq!(analysis.symbol(), "AAPL");
        assert_eq!(analysis.candles.len(), 30);
        assert_eq!(analysis.decision.action, Action::Buy);
    }

    #[test]
    fn unknown_symbol_lists_available() {
        let fixtures = Fixtures::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let err = analyze(&fixtures, "xyz", today(), CANDLE_DAYS, &mut rng).unwrap_err();
        assert_eq!(
            err.to_string(),
            "XYZ not found. Available symbols: AAPL, TSLA, BTC, ETH"
        );
    }

    #[test]
    fn blank_input_rejected() {
        let fixtures = Fixtures::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let err = analyze(&fixtures, "   ", today(), CANDLE_DAYS, &mut rng).unwrap_err();
        assert_eq!(err, LookupError::EmptySymbol);
    }

    #[test]
    fn seeded_analyzer_is_reproducible_per_session() {
        let mut a = Analyzer::new(Box::new(Fixtures::builtin())).with_seed(Some(11));
        let mut b = Analyzer::new(Box::new(Fixtures::builtin())).with_seed(Some(11));

        let first_a = a.analyze("BTC", today()).unwrap();
        let first_b = b.analyze("BTC", today()).unwrap();
        assert_eq!(first_a.candles, first_b.candles);

        // A second selection of the same symbol regenerates.
        let second_a = a.analyze("BTC", today()).unwrap();
        assert_ne!(first_a.candles, second_a.candles);
    }

    #[test]
    fn failed_lookup_does_not_advance_session() {
        let mut a = Analyzer::new(Box::new(Fixtures::builtin())).with_seed(Some(3));
        let mut b = Analyzer::new(Box::new(Fixtures::builtin())).with_seed(Some(3));

        assert!(a.analyze("GOOGL", today()).is_err());
        let from_a = a.analyze("ETH", today()).unwrap();
        let from_b = b.analyze("ETH", today()).unwrap();
        assert_eq!(from_a.candles, from_b.candles);
    }

    #[test]
    fn analyzer_respects_days() {
        let mut analyzer = Analyzer::new(Box::new(Fixtures::builtin()))
            .with_seed(Some(1))
            .with_days(7);
        let analysis = analyzer.analyze("TSLA", today()).unwrap();
        assert_eq!(analysis.candles.len(), 7);
    }

    #[test]
    fn from_config_applies_seed_and_days() {
        let config = DashboardConfig {
            seed: Some(5),
            candle_days: 10,
            ..DashboardConfig::default()
        };
        let mut a = Analyzer::from_config(&config).unwrap();
        let mut b = Analyzer::new(Box::new(Fixtures::builtin())).with_seed(Some(5)).with_days(10);
        assert_eq!(a.symbols(), vec!["AAPL", "TSLA", "BTC", "ETH"]);
        assert_eq!(a.analyze("AAPL", today()).unwrap(), b.analyze("AAPL", today()).unwrap());
    }

    #[test]
    fn from_config_rejects_oversized_window() {
        let config = DashboardConfig {
            candle_days: 100_000_000,
            ..DashboardConfig::default()
        };
        assert!(matches!(Analyzer::from_config(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn from_config_missing_fixture_file_fails() {
        let config = DashboardConfig {
            fixtures: Some("/nonexistent/tradingiq/fixtures.toml".into()),
            ..DashboardConfig::default()
        };
        assert!(matches!(Analyzer::from_config(&config), Err(ConfigError::Read { .. })));
    }
}
