//! Decision: the recommendation emitted by the scoring engine.

use serde::{Deserialize, Serialize};

/// Recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::Hold => "HOLD",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored recommendation for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    /// Confidence percentage.
    pub confidence: u8,
    /// One line per rule that fired, in rule order.
    pub reasoning: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stop_loss: Option<f64>,
    pub timeframe: String,
}

impl Decision {
    /// True when the decision carries price levels to act on.
    pub fn has_levels(&self) -> bool {
        self.target_price.is_some() || self.stop_loss.is_some()
    }
}
