//! Technical indicator snapshot for a symbol.

use serde::{Deserialize, Serialize};

/// MACD line, signal line and histogram.
///
/// `histogram == macd - signal` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub sma20: f64,
    pub sma50: f64,
    pub sma200: f64,
    pub ema12: f64,
    pub ema26: f64,
}

/// Bollinger envelope. Invariant: `lower <= middle <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bollinger {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl Bollinger {
    pub fn is_ordered(&self) -> bool {
        self.lower <= self.middle && self.middle <= self.upper
    }
}

/// Stochastic oscillator %K / %D, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stochastic {
    pub k: f64,
    pub d: f64,
}

/// Static indicator values for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: f64,
    pub macd: Macd,
    pub moving_averages: MovingAverages,
    pub bollinger: Bollinger,
    pub stochastic: Stochastic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_ordering() {
        let bands = Bollinger { upper: 198.45, middle: 189.45, lower: 180.45 };
        assert!(bands.is_ordered());

        let inverted = Bollinger { upper: 180.0, middle: 189.45, lower: 198.0 };
        assert!(!inverted.is_ordered());
    }
}
