//! Candle: one synthetic trading day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar for a single day.
///
/// Generated candles satisfy `low <= min(open, close)` and
/// `high >= max(open, close)`; the invariant is established at generation
/// time and not re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Candle {
    /// Close strictly above open. A doji is drawn as bearish.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }

    /// OHLC sanity check: wicks enclose the body.
    pub fn is_sane(&self) -> bool {
        self.low <= self.body_bottom() && self.high >= self.body_top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candle() -> Candle {
        Candle {
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            open: 100.0,
            high: 105.0,
            low: 98.0,
            close: 103.0,
            volume: 750_000,
        }
    }

    #[test]
    fn candle_is_sane() {
        assert!(sample_candle().is_sane());
    }

    #[test]
    fn candle_detects_insane_high() {
        let mut candle = sample_candle();
        candle.high = 102.0; // below close
        assert!(!candle.is_sane());
    }

    #[test]
    fn doji_is_not_bullish() {
        let mut candle = sample_candle();
        assert!(candle.is_bullish());
        candle.close = candle.open;
        assert!(!candle.is_bullish());
    }
}
