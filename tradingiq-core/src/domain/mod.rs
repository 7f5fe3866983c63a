//! Domain types for the TradingIQ dashboard

pub mod candle;
pub mod decision;
pub mod indicators;
pub mod pattern;
pub mod quote;

pub use candle::Candle;
pub use decision::{Action, Decision};
pub use indicators::{Bollinger, IndicatorSet, Macd, MovingAverages, Stochastic};
pub use pattern::{PatternCall, PatternKind};
pub use quote::Quote;

/// Symbol type alias
pub type Symbol = String;

/// Normalize user input into a lookup key: trimmed and upper-cased.
pub fn normalize_symbol(input: &str) -> Symbol {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_symbol("  aapl "), "AAPL");
        assert_eq!(normalize_symbol("Btc"), "BTC");
        assert_eq!(normalize_symbol("   "), "");
    }
}
