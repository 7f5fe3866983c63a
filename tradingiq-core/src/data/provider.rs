//! Market data provider trait and the lookup error surfaced to users.
//!
//! The MarketDataProvider trait abstracts over fixture sources (the built-in
//! table, a TOML fixture file, test doubles) so callers never touch global
//! state.

use thiserror::Error;

use crate::domain::{IndicatorSet, PatternCall, Quote};

/// Lookup failures at the symbol-selection boundary.
///
/// Displayable in both CLI and TUI contexts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{symbol} not found. Available symbols: {}", symbol_list(available))]
    SymbolNotFound {
        symbol: String,
        available: Vec<String>,
    },

    #[error("no symbol entered")]
    EmptySymbol,
}

fn symbol_list(symbols: &[String]) -> String {
    if symbols.is_empty() {
        "none".to_string()
    } else {
        symbols.join(", ")
    }
}

/// Read-only source of per-symbol fixture data.
///
/// Keys are expected to be already normalized (see
/// [`crate::domain::normalize_symbol`]). Every lookup is a pure key fetch;
/// absent keys return `None` and nothing is fabricated.
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    fn quote(&self, symbol: &str) -> Option<Quote>;

    fn indicators(&self, symbol: &str) -> Option<IndicatorSet>;

    fn pattern(&self, symbol: &str) -> Option<PatternCall>;

    /// Recognized symbols, in display order.
    fn symbols(&self) -> Vec<String>;

    /// Whether `symbol` has the quote, indicators and pattern selection needs.
    fn is_complete(&self, symbol: &str) -> bool {
        self.quote(symbol).is_some()
            && self.indicators(symbol).is_some()
            && self.pattern(symbol).is_some()
    }

    /// Listed symbols that can actually be selected.
    fn available(&self) -> Vec<String> {
        self.symbols()
            .into_iter()
            .filter(|s| self.is_complete(s))
            .collect()
    }

    /// Build the not-found error for `symbol`, listing what is available.
    fn not_found(&self, symbol: &str) -> LookupError {
        LookupError::SymbolNotFound {
            symbol: symbol.to_string(),
            available: self.available(),
        }
    }
}
