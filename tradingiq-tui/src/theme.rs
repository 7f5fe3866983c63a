//! Parrot/neon theme tokens for the TradingIQ dashboard
//!
//! Provides a consistent color palette inspired by:
//! - Parrot color scheme (neon accents on dark background)
//! - Terminal aesthetic with high contrast
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (highlights, focus, current price)
//! - **Positive**: Neon green (gains, BUY, bullish candles)
//! - **Negative**: Hot pink (losses, SELL, bearish candles)
//! - **Warning**: Neon orange (HOLD, neutral readings, disclaimers)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (labels, secondary text)
//!
//! Core derivations hand back a [`Tone`]; this module is the only place
//! a tone becomes a terminal colour.

use ratatui::style::{Color, Modifier, Style};
use tradingiq_core::presentation::Tone;

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Parrot/neon theme for widgets that take their palette by reference.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (gains, bullish)
    pub positive: Color,
    /// Hot pink (losses, bearish)
    pub negative: Color,
    /// Neon orange (caution)
    pub warning: Color,
    /// Cool purple (neutral info, secondary)
    pub neutral: Color,
    /// Steel blue (muted text, grid)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
            positive: POSITIVE,
            negative: NEGATIVE,
            warning: WARNING,
            neutral: NEUTRAL,
            muted: MUTED,
            text_primary: Color::White,
            text_secondary: TEXT_SECONDARY,
        }
    }

    /// Concrete colour for a semantic tone.
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Positive => self.positive,
            Tone::Negative => self.negative,
            Tone::Caution => self.warning,
        }
    }

    /// Change colour: zero counts as up.
    pub fn change_color(&self, change: f64) -> Color {
        if change >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Candle colour: only a strictly higher close is bullish.
    pub fn candle_color(&self, open: f64, close: f64) -> Color {
        if close > open {
            self.positive
        } else {
            self.negative
        }
    }
}

// ── Style helpers for the panel renderers ────────────────────────────

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn bold() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn tone(tone: Tone) -> Style {
    Style::default().fg(Theme::default().tone_color(tone))
}

pub fn tone_bold(t: Tone) -> Style {
    tone(t).add_modifier(Modifier::BOLD)
}

pub fn change(value: f64) -> Style {
    Style::default().fg(Theme::default().change_color(value))
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
