//! Candle chart panel - OHLC candle rendering with price-level overlays
//!
//! Renders candlestick chart using direct buffer writes:
//! - Each candle = 1 terminal column, spread evenly across the plot
//! - Body: block char, green if close > open, pink otherwise
//! - Wicks: vertical line chars to high/low
//! - Grid: five dotted price levels with axis labels
//! - Dates: day of month under every fifth candle
//! - Overlays: horizontal dashed lines at target/stop prices

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use tradingiq_core::presentation::{format_axis_price, format_level_price, PriceScale, DATE_LABEL_EVERY};
use tradingiq_core::{Candle, Decision};

use crate::theme::Theme;

/// Columns reserved for the price axis.
const AXIS_WIDTH: u16 = 9;

/// Horizontal price line drawn across the chart.
#[derive(Debug, Clone)]
pub struct LevelOverlay {
    pub price: f64,
    pub label: String,
    pub is_stop: bool, // true = stop (negative color), false = target (positive color)
}

/// Target and stop lines for a decision. HOLD yields none.
pub fn overlays_from_decision(decision: &Decision) -> Vec<LevelOverlay> {
    let mut overlays = Vec::with_capacity(2);
    if let Some(target) = decision.target_price {
        overlays.push(LevelOverlay {
            price: target,
            label: format!("TGT {}", format_level_price(target)),
            is_stop: false,
        });
    }
    if let Some(stop) = decision.stop_loss {
        overlays.push(LevelOverlay {
            price: stop,
            label: format!("STP {}", format_level_price(stop)),
            is_stop: true,
        });
    }
    overlays
}

/// Candle chart panel widget
pub struct CandleChartPanel<'a> {
    candles: &'a [Candle],
    overlays: &'a [LevelOverlay],
    symbol: &'a str,
    theme: &'a Theme,
}

impl<'a> CandleChartPanel<'a> {
    pub fn new(candles: &'a [Candle], symbol: &'a str, theme: &'a Theme) -> Self {
        Self {
            candles,
            overlays: &[],
            symbol,
            theme,
        }
    }

    /// Draw target/stop lines; the price range widens to fit them.
    pub fn overlays(mut self, overlays: &'a [LevelOverlay]) -> Self {
        self.overlays = overlays;
        self
    }

    fn scale(&self) -> Option<PriceScale> {
        let scale = PriceScale::for_candles(self.candles)?;
        Some(
            self.overlays
                .iter()
                .fold(scale, |scale, overlay| scale.including(overlay.price)),
        )
    }
}

impl<'a> Widget for CandleChartPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(scale) = self.scale() else {
            let block = Block::default()
                .title(format!(" {} [No Data] ", self.symbol))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.muted))
                .style(Style::default().bg(self.theme.background));
            block.render(area, buf);
            return;
        };

        let up_count = self.candles.iter().filter(|c| c.is_bullish()).count();
        let down_count = self.candles.len() - up_count;

        let title = format!(
            " {} · Past {} Days | {} up {} down ",
            self.symbol,
            self.candles.len(),
            up_count,
            down_count,
        );

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let inner = block.inner(area);
        block.render(area, buf);

        // Bottom two rows: date labels, then the legend.
        let plot_left = inner.x + AXIS_WIDTH.min(inner.width);
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(AXIS_WIDTH);
        let plot_height = inner.height.saturating_sub(2);

        if plot_width == 0 || plot_height < 2 {
            return;
        }

        // Grid lines and axis labels
        let grid_style = Style::default().fg(self.theme.muted).add_modifier(Modifier::DIM);
        for price in scale.grid_prices() {
            let y = plot_top + scale.row(price, plot_height);
            let label = format!("{:>8}", format_axis_price(price));
            buf.set_string(inner.x, y, &label, Style::default().fg(self.theme.muted));
            for x in plot_left..plot_left + plot_width {
                buf.set_string(x, y, "┈", grid_style);
            }
        }

        // Show the newest candles when the plot is narrower than the series.
        let visible = self.candles.len().min(plot_width as usize);
        let start = self.candles.len() - visible;
        let slot = (plot_width as usize / visible).max(1);
        let date_y = plot_top + plot_height;

        for (i, candle) in self.candles[start..].iter().enumerate() {
            let x = plot_left + (i * slot + slot / 2) as u16;
            if x >= plot_left + plot_width {
                break;
            }

            let style = Style::default().fg(self.theme.candle_color(candle.open, candle.close));

            let high_y = scale.row(candle.high, plot_height);
            let low_y = scale.row(candle.low, plot_height);
            let body_top_y = scale.row(candle.body_top(), plot_height);
            let body_bot_y = scale.row(candle.body_bottom(), plot_height);

            // Upper wick
            for y in high_y..body_top_y {
                buf.set_string(x, plot_top + y, "│", style);
            }

            // Body
            let body_char = if candle.is_bullish() { "\u{2588}" } else { "\u{2593}" }; // full block vs dark shade
            for y in body_top_y..=body_bot_y {
                buf.set_string(x, plot_top + y, body_char, style);
            }

            // Lower wick
            for y in (body_bot_y + 1)..=low_y {
                buf.set_string(x, plot_top + y, "│", style);
            }

            if (start + i) % DATE_LABEL_EVERY == 0 {
                buf.set_string(
                    x,
                    date_y,
                    candle.date.day().to_string(),
                    Style::default().fg(self.theme.text_secondary),
                );
            }
        }

        // Target/stop overlays as horizontal dashed lines
        for overlay in self.overlays {
            let y = plot_top + scale.row(overlay.price, plot_height);
            let color = if overlay.is_stop {
                self.theme.negative
            } else {
                self.theme.positive
            };
            let style = Style::default().fg(color).add_modifier(Modifier::DIM);

            for x in plot_left..plot_left + plot_width {
                if (x - plot_left) % 3 == 0 {
                    buf.set_string(x, y, "-", style);
                }
            }

            let label_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            buf.set_string(plot_left, y, &overlay.label, label_style);
        }

        // Legend
        let legend_y = date_y + 1;
        if legend_y < inner.bottom() {
            let mut x = plot_left;
            for (glyph, label, color) in [
                ("\u{2588}", " Bullish  ", self.theme.positive),
                ("\u{2593}", " Bearish", self.theme.negative),
            ] {
                buf.set_string(x, legend_y, glyph, Style::default().fg(color));
                x += 1;
                let (next_x, _) = buf.set_stringn(
                    x,
                    legend_y,
                    label,
                    (inner.right().saturating_sub(x)) as usize,
                    Style::default().fg(self.theme.muted),
                );
                x = next_x;
            }
        }
    }
}
