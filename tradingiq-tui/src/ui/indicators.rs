//! Technical indicators card: RSI gauge, MACD, moving averages, Bollinger
//! bands and stochastic, each with its status word.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use tradingiq_core::presentation::{
    macd_status, moving_average_status, rsi_status, stochastic_status, Status,
};
use tradingiq_core::IndicatorSet;

use crate::theme;
use crate::ui::{card, meter};

const RSI_METER_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, ind: &IndicatorSet) {
    let block = card("Technical Indicators");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rsi = rsi_status(ind.rsi);
    let macd = macd_status(ind.macd.histogram);
    let ma = &ind.moving_averages;
    let bb = &ind.bollinger;

    let mut lines: Vec<Line> = Vec::new();

    heading(&mut lines, "RSI (14)", Some(rsi));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(meter(ind.rsi, 100.0, RSI_METER_WIDTH), theme::tone(rsi.tone)),
        Span::styled(format!(" {:.1}", ind.rsi), theme::bold()),
    ]));

    heading(&mut lines, "MACD", Some(macd));
    let mut macd_line = values([
        ("MACD", format!("{:.2}", ind.macd.macd)),
        ("Signal", format!("{:.2}", ind.macd.signal)),
    ]);
    macd_line.spans.push(Span::styled("  Hist ", theme::muted()));
    macd_line
        .spans
        .push(Span::styled(format!("{:.2}", ind.macd.histogram), theme::tone(macd.tone)));
    lines.push(macd_line);

    heading(&mut lines, "Moving Averages", Some(moving_average_status(ind)));
    lines.push(values([
        ("SMA20", format!("{:.2}", ma.sma20)),
        ("SMA50", format!("{:.2}", ma.sma50)),
        ("SMA200", format!("{:.2}", ma.sma200)),
    ]));
    lines.push(values([
        ("EMA12", format!("{:.2}", ma.ema12)),
        ("EMA26", format!("{:.2}", ma.ema26)),
    ]));

    heading(&mut lines, "Bollinger Bands", None);
    lines.push(values([
        ("Upper", format!("{:.2}", bb.upper)),
        ("Middle", format!("{:.2}", bb.middle)),
        ("Lower", format!("{:.2}", bb.lower)),
    ]));

    heading(&mut lines, "Stochastic Oscillator", Some(stochastic_status(ind)));
    lines.push(values([
        ("%K", format!("{:.1}", ind.stochastic.k)),
        ("%D", format!("{:.1}", ind.stochastic.d)),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}

fn heading<'a>(lines: &mut Vec<Line<'a>>, title: &'a str, status: Option<Status>) {
    let mut spans = vec![Span::styled(title, theme::accent_bold())];
    if let Some(status) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.label, theme::tone_bold(status.tone)));
    }
    lines.push(Line::from(spans));
}

/// `  LABEL value` pairs: muted labels, plain values.
fn values<'a, const N: usize>(pairs: [(&'a str, String); N]) -> Line<'a> {
    let mut spans = Vec::with_capacity(N * 2);
    for (label, value) in pairs {
        spans.push(Span::styled(format!("  {label} "), theme::muted()));
        spans.push(Span::styled(value, theme::text()));
    }
    Line::from(spans)
}
