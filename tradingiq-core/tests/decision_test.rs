//! Integration tests for the decision engine against the built-in fixtures.
//!
//! Tests:
//! 1. Each shipped symbol scores to its expected action, confidence and levels
//! 2. Reasoning lines appear in rule order
//! 3. The soft fallback for missing inputs

use tradingiq_core::data::{Fixtures, MarketDataProvider};
use tradingiq_core::engine::{decide, insufficient_data, score, SignalTally, TIMEFRAME};
use tradingiq_core::{Action, Decision};

fn decision_for(symbol: &str) -> (Decision, SignalTally) {
    let fixtures = Fixtures::builtin();
    let indicators = fixtures.indicators(symbol).unwrap();
    let pattern = fixtures.pattern(symbol).unwrap();
    let quote = fixtures.quote(symbol).unwrap();
    score(&indicators, &pattern, &quote)
}

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("price level present");
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn aapl_is_capped_buy() {
    let (decision, tally) = decision_for("AAPL");
    assert_eq!(tally, SignalTally { bullish: 4, bearish: 0 });
    assert_eq!(decision.action, Action::Buy);
    assert_eq!(decision.confidence, 95);
    assert_close(decision.target_price, 212.76);
    assert_close(decision.stop_loss, 183.75);
    assert_eq!(decision.timeframe, TIMEFRAME);
    assert_eq!(
        decision.reasoning,
        vec![
            "RSI shows bullish momentum",
            "MACD histogram is positive",
            "Price above 20-day SMA",
            "Bullish pattern: Ascending Triangle",
        ]
    );
}

#[test]
fn tsla_is_capped_sell() {
    let (decision, tally) = decision_for("TSLA");
    assert_eq!(tally, SignalTally { bullish: 0, bearish: 4 });
    assert_eq!(decision.action, Action::Sell);
    assert_eq!(decision.confidence, 95);
    assert_close(decision.target_price, 224.08);
    assert_close(decision.stop_loss, 261.43);
    assert_eq!(decision.reasoning[0], "RSI shows bearish momentum");
    assert_eq!(decision.reasoning[3], "Bearish pattern: Head and Shoulders");
}

#[test]
fn btc_is_buy() {
    let (decision, _) = decision_for("BTC");
    assert_eq!(decision.action, Action::Buy);
    assert_eq!(decision.confidence, 95);
    assert_close(decision.target_price, 47_575.825);
    assert_close(decision.stop_loss, 41_088.2125);
}

#[test]
fn eth_bullish_pattern_outvoted() {
    let (decision, tally) = decision_for("ETH");
    assert_eq!(tally, SignalTally { bullish: 1, bearish: 3 });
    assert_eq!(decision.action, Action::Sell);
    assert_eq!(decision.confidence, 80);
    assert_close(decision.target_price, 2_376.288);
    assert_close(decision.stop_loss, 2_772.336);
    assert_eq!(decision.reasoning.len(), 4);
}

#[test]
fn levels_are_exact_multiples_of_price() {
    let fixtures = Fixtures::builtin();
    for symbol in fixtures.symbols() {
        let (decision, _) = decision_for(&symbol);
        let price = fixtures.quote(&symbol).unwrap().price;
        match decision.action {
            Action::Buy => {
                assert_eq!(decision.target_price, Some(price * 1.10));
                assert_eq!(decision.stop_loss, Some(price * 0.95));
            }
            Action::Sell => {
                assert_eq!(decision.target_price, Some(price * 0.90));
                assert_eq!(decision.stop_loss, Some(price * 1.05));
            }
            Action::Hold => {
                assert!(decision.target_price.is_none());
                assert!(decision.stop_loss.is_none());
            }
        }
    }
}

#[test]
fn decide_matches_score_for_complete_inputs() {
    let fixtures = Fixtures::builtin();
    let indicators = fixtures.indicators("ETH");
    let pattern = fixtures.pattern("ETH");
    let quote = fixtures.quote("ETH");
    let via_decide = decide(indicators.as_ref(), pattern.as_ref(), quote.as_ref());
    assert_eq!(via_decide, decision_for("ETH").0);
}

#[test]
fn unknown_symbol_inputs_fall_back_to_hold() {
    let fixtures = Fixtures::builtin();
    let decision = decide(
        fixtures.indicators("XYZ").as_ref(),
        fixtures.pattern("XYZ").as_ref(),
        fixtures.quote("XYZ").as_ref(),
    );
    assert_eq!(decision, insufficient_data());
    assert_eq!(decision.action, Action::Hold);
    assert_eq!(decision.confidence, 50);
    assert_eq!(decision.reasoning, vec!["Insufficient data"]);
    assert_eq!(decision.timeframe, "N/A");
    assert!(decision.target_price.is_none());
    assert!(decision.stop_loss.is_none());
}
