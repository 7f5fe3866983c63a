//! Display-only derivations: number formatting, status labels, tone
//! thresholds and chart geometry.
//!
//! Nothing here makes a decision. Colours live in the TUI theme, which maps
//! each [`Tone`] to a concrete terminal colour.

use crate::domain::{Action, Candle, IndicatorSet, PatternKind};

/// Semantic colour class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Negative,
    Caution,
}

/// Presentation attributes for a closed enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

const ACTION_BADGES: [(Action, Badge); 3] = [
    (Action::Buy, Badge { label: "BUY", icon: "▲", tone: Tone::Positive }),
    (Action::Sell, Badge { label: "SELL", icon: "▼", tone: Tone::Negative }),
    (Action::Hold, Badge { label: "HOLD", icon: "■", tone: Tone::Caution }),
];

const PATTERN_BADGES: [(PatternKind, Badge); 3] = [
    (PatternKind::Bullish, Badge { label: "Bullish", icon: "↗", tone: Tone::Positive }),
    (PatternKind::Bearish, Badge { label: "Bearish", icon: "↘", tone: Tone::Negative }),
    (PatternKind::Neutral, Badge { label: "Neutral", icon: "→", tone: Tone::Caution }),
];

pub fn action_badge(action: Action) -> Badge {
    ACTION_BADGES
        .iter()
        .find(|(a, _)| *a == action)
        .map(|(_, badge)| *badge)
        .unwrap_or(ACTION_BADGES[2].1)
}

pub fn pattern_badge(kind: PatternKind) -> Badge {
    PATTERN_BADGES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, badge)| *badge)
        .unwrap_or(PATTERN_BADGES[2].1)
}

/// A status word with its tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub label: &'static str,
    pub tone: Tone,
}

impl Status {
    const fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }
}

// ── Number formatting ────────────────────────────────────────────────

/// `$2.98T`, `$847.00B`, `$45.67M`, `$43.25K`, `$193.42`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1e12 {
        format!("{sign}${:.2}T", abs / 1e12)
    } else if abs >= 1e9 {
        format!("{sign}${:.2}B", abs / 1e9)
    } else if abs >= 1e6 {
        format!("{sign}${:.2}M", abs / 1e6)
    } else if abs >= 1e3 {
        format!("{sign}${:.2}K", abs / 1e3)
    } else {
        format!("{sign}${abs:.2}")
    }
}

/// Chart axis price: `$43.3K` above a thousand, else `$193.42`.
pub fn format_axis_price(price: f64) -> String {
    if price >= 1000.0 {
        format!("${:.1}K", price / 1000.0)
    } else {
        format!("${price:.2}")
    }
}

/// Decision-card price: `$47.58K` above a thousand, else `$212.76`.
pub fn format_level_price(price: f64) -> String {
    if price >= 1000.0 {
        format!("${:.2}K", price / 1000.0)
    } else {
        format!("${price:.2}")
    }
}

/// `+$2.83 (+1.48%)` / `-$5.22 (-2.05%)`.
pub fn format_change(change: f64, change_percent: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!(
        "{sign}{} ({sign}{change_percent:.2}%)",
        format_compact(change)
    )
}

/// Percentage distance from `price` to `level`, one decimal.
pub fn percent_delta(level: f64, price: f64) -> f64 {
    if price == 0.0 {
        return 0.0;
    }
    ((level - price) / price * 100.0 * 10.0).round() / 10.0
}

// ── Indicator statuses ───────────────────────────────────────────────

pub fn rsi_status(rsi: f64) -> Status {
    if rsi > 70.0 {
        Status::new("Overbought", Tone::Negative)
    } else if rsi < 30.0 {
        Status::new("Oversold", Tone::Positive)
    } else {
        Status::new("Neutral", Tone::Caution)
    }
}

pub fn macd_status(histogram: f64) -> Status {
    if histogram > 0.0 {
        Status::new("Bullish", Tone::Positive)
    } else {
        Status::new("Bearish", Tone::Negative)
    }
}

/// Stacking of the 20/50/200-day SMAs.
pub fn moving_average_status(indicators: &IndicatorSet) -> Status {
    let ma = &indicators.moving_averages;
    if ma.sma20 > ma.sma50 && ma.sma50 > ma.sma200 {
        Status::new("Bullish", Tone::Positive)
    } else if ma.sma20 < ma.sma50 && ma.sma50 < ma.sma200 {
        Status::new("Bearish", Tone::Negative)
    } else {
        Status::new("Mixed", Tone::Caution)
    }
}

pub fn stochastic_status(indicators: &IndicatorSet) -> Status {
    let stoch = &indicators.stochastic;
    if stoch.k > 80.0 || stoch.d > 80.0 {
        Status::new("Overbought", Tone::Negative)
    } else if stoch.k < 20.0 || stoch.d < 20.0 {
        Status::new("Oversold", Tone::Positive)
    } else {
        Status::new("Neutral", Tone::Caution)
    }
}

// ── Confidence ───────────────────────────────────────────────────────

pub fn confidence_tone(confidence: u8) -> Tone {
    match confidence {
        c if c >= 80 => Tone::Positive,
        c if c >= 60 => Tone::Caution,
        _ => Tone::Negative,
    }
}

pub fn pattern_strength(confidence: u8) -> &'static str {
    match confidence {
        c if c >= 80 => "Strong",
        c if c >= 60 => "Moderate",
        _ => "Weak",
    }
}

pub fn pattern_priority(confidence: u8) -> &'static str {
    match confidence {
        c if c >= 75 => "High",
        c if c >= 50 => "Med",
        _ => "Low",
    }
}

/// One-sentence summary for the decision card.
pub fn decision_summary(action: Action, confidence: u8, timeframe: &str) -> String {
    format!(
        "Based on technical analysis, the recommendation is to {action} with {confidence}% confidence over the {timeframe} timeframe."
    )
}

pub const RISK_DISCLAIMER: &str = "This analysis is for educational purposes only. Always conduct your own research and consider your risk tolerance before making investment decisions. Past performance does not guarantee future results.";

// ── Chart geometry ───────────────────────────────────────────────────

/// Fraction of the price range added above and below the candles.
pub const CHART_PADDING: f64 = 0.1;

/// Number of horizontal grid levels on the price axis.
pub const GRID_LEVELS: usize = 5;

/// Every n-th candle gets a date label.
pub const DATE_LABEL_EVERY: usize = 5;

/// Linear price → row mapping for a chart of `rows` rows (row 0 at top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    pub top: f64,
    pub bottom: f64,
}

impl PriceScale {
    /// Scale covering all candles with [`CHART_PADDING`] on each side.
    /// `None` for an empty slice.
    pub fn for_candles(candles: &[Candle]) -> Option<Self> {
        let max = candles.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
        let min = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        if !max.is_finite() || !min.is_finite() {
            return None;
        }
        let range = max - min;
        let pad = if range > 0.0 { range * CHART_PADDING } else { 1.0 };
        Some(Self { top: max + pad, bottom: min - pad })
    }

    pub fn span(&self) -> f64 {
        self.top - self.bottom
    }

    /// Row for `price`, clamped to `0..rows`.
    pub fn row(&self, price: f64, rows: u16) -> u16 {
        if rows == 0 || self.span().abs() < 1e-9 {
            return 0;
        }
        let last = rows.saturating_sub(1) as f64;
        let frac = (self.top - price) / self.span();
        (frac * last).round().clamp(0.0, last) as u16
    }

    /// Widen the scale so `price` falls inside it.
    pub fn including(self, price: f64) -> Self {
        if !price.is_finite() {
            return self;
        }
        Self {
            top: self.top.max(price),
            bottom: self.bottom.min(price),
        }
    }

    /// Prices of the [`GRID_LEVELS`] evenly spaced grid lines, top first.
    pub fn grid_prices(&self) -> Vec<f64> {
        let steps = (GRID_LEVELS - 1) as f64;
        (0..GRID_LEVELS)
            .map(|i| self.top - i as f64 * self.span() / steps)
            .collect()
    }
}
