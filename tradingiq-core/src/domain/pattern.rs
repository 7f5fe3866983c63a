//! Chart pattern classification.

use serde::{Deserialize, Serialize};

/// Direction implied by a chart pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Bullish,
    Bearish,
    Neutral,
}

impl PatternKind {
    pub fn label(self) -> &'static str {
        match self {
            PatternKind::Bullish => "Bullish",
            PatternKind::Bearish => "Bearish",
            PatternKind::Neutral => "Neutral",
        }
    }
}

/// A named chart pattern with a confidence score and advice text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCall {
    /// Pattern name, e.g. "Ascending Triangle".
    pub name: String,
    pub kind: PatternKind,
    /// Confidence percentage, 0..=100.
    pub confidence: u8,
    pub description: String,
    pub advice: String,
}
