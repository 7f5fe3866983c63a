//! Quote: the headline price card for a symbol.

use serde::{Deserialize, Serialize};

/// Price snapshot for a single symbol.
///
/// `change` and `change_percent` are independently supplied fixture fields;
/// no cross-field consistency is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: f64,
}

impl Quote {
    /// A flat day counts as up.
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote(change: f64) -> Quote {
        Quote {
            symbol: "AAPL".into(),
            name: "Apple Inc.".into(),
            price: 193.42,
            change,
            change_percent: 1.48,
            volume: 45_673_200,
            market_cap: 2.98e12,
        }
    }

    #[test]
    fn flat_day_is_up() {
        assert!(sample_quote(0.0).is_up());
        assert!(sample_quote(2.83).is_up());
        assert!(!sample_quote(-0.01).is_up());
    }
}
