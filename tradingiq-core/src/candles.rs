//! Synthetic candlestick generator.
//!
//! Produces one candle per calendar day ending on a given date, each an
//! independent bounded draw around a base price:
//!
//! - `open  = base + U(-10, 10)`
//! - `close = open + U(-5, 5)`
//! - `high  = max(open, close) + U(0, 5)`
//! - `low   = min(open, close) - U(0, 5)`
//! - `volume = floor(U(0, 1_000_000)) + 500_000`
//!
//! Prices are rounded to cents. Rounding is monotone, so the wick/body
//! ordering survives it.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::domain::Candle;

/// Trailing window shown on the chart.
pub const CANDLE_DAYS: usize = 30;

/// Longest window accepted from configuration or the command line.
pub const MAX_CANDLE_DAYS: usize = 3650;

/// Base price used when a symbol has no quote.
pub const FALLBACK_BASE_PRICE: f64 = 100.0;

const OPEN_SPREAD: f64 = 10.0;
const CLOSE_SPREAD: f64 = 5.0;
const WICK_MAX: f64 = 5.0;
const VOLUME_RANGE: u64 = 1_000_000;
const VOLUME_FLOOR: u64 = 500_000;

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a single day's candle around `base_price`.
pub fn generate_candle<R: Rng + ?Sized>(base_price: f64, date: NaiveDate, rng: &mut R) -> Candle {
    let open = base_price + rng.gen_range(-OPEN_SPREAD..OPEN_SPREAD);
    let close = open + rng.gen_range(-CLOSE_SPREAD..CLOSE_SPREAD);
    let high = open.max(close) + rng.gen_range(0.0..WICK_MAX);
    let low = open.min(close) - rng.gen_range(0.0..WICK_MAX);
    let volume = rng.gen_range(0..VOLUME_RANGE) + VOLUME_FLOOR;

    Candle {
        date,
        open: round_cents(open),
        high: round_cents(high),
        low: round_cents(low),
        close: round_cents(close),
        volume,
    }
}

/// Generate `days` candles on consecutive dates ending at `end` (inclusive),
/// oldest first. Dates before the start of the calendar are skipped.
pub fn generate_candles<R: Rng + ?Sized>(
    base_price: f64,
    end: NaiveDate,
    days: usize,
    rng: &mut R,
) -> Vec<Candle> {
    (0..days)
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(offset as u64)))
        .map(|date| generate_candle(base_price, date, rng))
        .collect()
}
