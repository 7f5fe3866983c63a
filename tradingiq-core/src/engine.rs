//! Signal-scoring decision engine.
//!
//! Five ordered rules each cast at most one bullish or bearish vote and
//! explain it with one reasoning line. The tally maps to an action and a
//! confidence:
//!
//! | tally           | action | confidence                 |
//! |-----------------|--------|----------------------------|
//! | `b > r + 1`     | BUY    | `min(95, 60 + (b - r)*10)` |
//! | `r > b + 1`     | SELL   | `min(95, 60 + (r - b)*10)` |
//! | otherwise       | HOLD   | `50 + |b - r|*5`           |
//!
//! BUY and SELL carry a target and a stop at fixed percentages of the
//! current price. The engine is a pure function of its inputs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Action, Decision, IndicatorSet, PatternCall, PatternKind, Quote};

pub const TIMEFRAME: &str = "1-2 weeks";
pub const FALLBACK_TIMEFRAME: &str = "N/A";
pub const INSUFFICIENT_DATA: &str = "Insufficient data";

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;
const RSI_MIDLINE: f64 = 50.0;

const MAX_CONFIDENCE: u32 = 95;
const DIRECTIONAL_BASE: u32 = 60;
const DIRECTIONAL_STEP: u32 = 10;
const HOLD_BASE: u32 = 50;
const HOLD_STEP: u32 = 5;

const BUY_TARGET: f64 = 1.10;
const BUY_STOP: f64 = 0.95;
const SELL_TARGET: f64 = 0.90;
const SELL_STOP: f64 = 1.05;

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Bullish,
    Bearish,
}

/// One rule's contribution: a vote and the line explaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub vote: Vote,
    pub reason: String,
}

impl RuleOutcome {
    fn bullish(reason: impl Into<String>) -> Self {
        Self { vote: Vote::Bullish, reason: reason.into() }
    }

    fn bearish(reason: impl Into<String>) -> Self {
        Self { vote: Vote::Bearish, reason: reason.into() }
    }
}

/// Bullish / bearish vote counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalTally {
    pub bullish: u32,
    pub bearish: u32,
}

impl SignalTally {
    pub fn record(&mut self, vote: Vote) {
        match vote {
            Vote::Bullish => self.bullish += 1,
            Vote::Bearish => self.bearish += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.bullish + self.bearish
    }

    /// Map the tally to an action and confidence.
    pub fn verdict(&self) -> (Action, u8) {
        let (b, r) = (self.bullish, self.bearish);
        let (action, confidence) = if b > r + 1 {
            (Action::Buy, (DIRECTIONAL_BASE + (b - r) * DIRECTIONAL_STEP).min(MAX_CONFIDENCE))
        } else if r > b + 1 {
            (Action::Sell, (DIRECTIONAL_BASE + (r - b) * DIRECTIONAL_STEP).min(MAX_CONFIDENCE))
        } else {
            (Action::Hold, HOLD_BASE + b.abs_diff(r) * HOLD_STEP)
        };
        // HOLD requires |b - r| <= 1, so confidence never exceeds 55 there.
        (action, confidence.min(u8::MAX as u32) as u8)
    }
}

// ── Rules ────────────────────────────────────────────────────────────

/// RSI zone. Exactly 50 falls into bearish momentum.
pub fn rsi_rule(indicators: &IndicatorSet) -> RuleOutcome {
    let rsi = indicators.rsi;
    if rsi > RSI_OVERBOUGHT {
        RuleOutcome::bearish("RSI is overbought (>70)")
    } else if rsi < RSI_OVERSOLD {
        RuleOutcome::bullish("RSI is oversold (<30)")
    } else if rsi > RSI_MIDLINE {
        RuleOutcome::bullish("RSI shows bullish momentum")
    } else {
        RuleOutcome::bearish("RSI shows bearish momentum")
    }
}

/// MACD histogram sign. Zero is bearish.
pub fn macd_rule(indicators: &IndicatorSet) -> RuleOutcome {
    if indicators.macd.histogram > 0.0 {
        RuleOutcome::bullish("MACD histogram is positive")
    } else {
        RuleOutcome::bearish("MACD histogram is negative")
    }
}

/// Price against the 20-day SMA. Equality is bearish.
pub fn trend_rule(indicators: &IndicatorSet, price: f64) -> RuleOutcome {
    if price > indicators.moving_averages.sma20 {
        RuleOutcome::bullish("Price above 20-day SMA")
    } else {
        RuleOutcome::bearish("Price below 20-day SMA")
    }
}

/// Pattern direction. Neutral patterns abstain.
pub fn pattern_rule(pattern: &PatternCall) -> Option<RuleOutcome> {
    match pattern.kind {
        PatternKind::Bullish => Some(RuleOutcome::bullish(format!("Bullish pattern: {}", pattern.name))),
        PatternKind::Bearish => Some(RuleOutcome::bearish(format!("Bearish pattern: {}", pattern.name))),
        PatternKind::Neutral => None,
    }
}

/// Price outside the Bollinger envelope. Inside the bands abstains.
pub fn bollinger_rule(indicators: &IndicatorSet, price: f64) -> Option<RuleOutcome> {
    let bands = &indicators.bollinger;
    if price > bands.upper {
        Some(RuleOutcome::bearish("Price above upper Bollinger Band (overbought)"))
    } else if price < bands.lower {
        Some(RuleOutcome::bullish("Price below lower Bollinger Band (oversold)"))
    } else {
        None
    }
}

/// Evaluate every rule in order. RSI, MACD and trend always vote; the
/// pattern and Bollinger rules may abstain.
pub fn evaluate_rules(
    indicators: &IndicatorSet,
    pattern: &PatternCall,
    price: f64,
) -> Vec<RuleOutcome> {
    let mut outcomes = vec![
        rsi_rule(indicators),
        macd_rule(indicators),
        trend_rule(indicators, price),
    ];
    outcomes.extend(pattern_rule(pattern));
    outcomes.extend(bollinger_rule(indicators, price));
    outcomes
}

// ── Decision ─────────────────────────────────────────────────────────

/// The soft fallback used when any input is missing.
pub fn insufficient_data() -> Decision {
    Decision {
        action: Action::Hold,
        confidence: HOLD_BASE as u8,
        reasoning: vec![INSUFFICIENT_DATA.to_string()],
        target_price: None,
        stop_loss: None,
        timeframe: FALLBACK_TIMEFRAME.to_string(),
    }
}

/// Target and stop for an action at `price`.
pub fn price_levels(action: Action, price: f64) -> (Option<f64>, Option<f64>) {
    match action {
        Action::Buy => (Some(price * BUY_TARGET), Some(price * BUY_STOP)),
        Action::Sell => (Some(price * SELL_TARGET), Some(price * SELL_STOP)),
        Action::Hold => (None, None),
    }
}

/// Score complete inputs into a decision along with the raw tally.
pub fn score(indicators: &IndicatorSet, pattern: &PatternCall, quote: &Quote) -> (Decision, SignalTally) {
    let mut tally = SignalTally::default();
    let mut reasoning = Vec::with_capacity(5);

    for outcome in evaluate_rules(indicators, pattern, quote.price) {
        debug!(symbol = %quote.symbol, vote = ?outcome.vote, reason = %outcome.reason, "rule fired");
        tally.record(outcome.vote);
        reasoning.push(outcome.reason);
    }

    let (action, confidence) = tally.verdict();
    let (target_price, stop_loss) = price_levels(action, quote.price);
    debug!(
        symbol = %quote.symbol,
        bullish = tally.bullish,
        bearish = tally.bearish,
        %action,
        confidence,
        "decision scored"
    );

    let decision = Decision {
        action,
        confidence,
        reasoning,
        target_price,
        stop_loss,
        timeframe: TIMEFRAME.to_string(),
    };
    (decision, tally)
}

/// Produce a decision; any missing input yields [`insufficient_data`].
pub fn decide(
    indicators: Option<&IndicatorSet>,
    pattern: Option<&PatternCall>,
    quote: Option<&Quote>,
) -> Decision {
    match (indicators, pattern, quote) {
        (Some(indicators), Some(pattern), Some(quote)) => score(indicators, pattern, quote).0,
        _ => {
            debug!("decision inputs incomplete, falling back to HOLD");
            insufficient_data()
        }
    }
}
