//! Application state. Single-owner, main-thread only.
//!
//! Every selection runs inline: lookup, candle generation and scoring are
//! cheap enough that no worker thread is needed.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use tradingiq_core::{Analysis, Analyzer, LookupError};

use crate::logging::LogBuffer;

/// Error records kept for the history overlay.
pub const ERROR_HISTORY_CAP: usize = 50;

/// Which view fills the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Dashboard,
    Chart,
    Help,
}

impl Panel {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            Panel::Dashboard => 0,
            Panel::Chart => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Dashboard),
            1 => Some(Panel::Chart),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Chart => "Chart",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Dashboard)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(Panel::Dashboard)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Search,
    ErrorHistory,
    Logs,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Analysis
    pub analyzer: Analyzer,
    pub analysis: Option<Analysis>,
    pub popular: Vec<String>,
    pub popular_cursor: usize,
    /// Fixed candle end date; `None` means today.
    pub end_date: Option<NaiveDate>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub search_input: String,
    pub logs: Arc<LogBuffer>,
    pub log_scroll: usize,
}

impl AppState {
    pub fn new(analyzer: Analyzer, popular: Vec<String>, logs: Arc<LogBuffer>) -> Self {
        Self {
            active_panel: Panel::Dashboard,
            running: true,
            analyzer,
            analysis: None,
            popular,
            popular_cursor: 0,
            end_date: None,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
            search_input: String::new(),
            logs,
            log_scroll: 0,
        }
    }

    /// Pin the last candle date, for reproducible rendering.
    pub fn with_end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn current_symbol(&self) -> Option<&str> {
        self.analysis.as_ref().map(Analysis::symbol)
    }

    /// Select a symbol. On failure the current analysis stays on screen and
    /// the error goes to the status bar and history.
    pub fn select(&mut self, input: &str) -> bool {
        let end = self.end_date();
        match self.analyzer.analyze(input, end) {
            Ok(analysis) => {
                info!(symbol = %analysis.symbol(), action = %analysis.decision.action, "selected");
                self.set_status(format!(
                    "Analyzing {}: {} ({}%)",
                    analysis.symbol(),
                    analysis.decision.action,
                    analysis.decision.confidence
                ));
                if let Some(pos) = self.popular.iter().position(|s| s == analysis.symbol()) {
                    self.popular_cursor = pos;
                }
                self.analysis = Some(analysis);
                true
            }
            Err(err) => {
                let context = match &err {
                    LookupError::SymbolNotFound { symbol, .. } => format!("search: {symbol}"),
                    LookupError::EmptySymbol => "search".to_string(),
                };
                self.push_error(err.to_string(), context);
                false
            }
        }
    }

    /// Re-run the current symbol: same fixtures, fresh candles.
    pub fn regenerate(&mut self) -> bool {
        match self.current_symbol().map(str::to_owned) {
            Some(symbol) => self.select(&symbol),
            None => {
                self.set_warning("Nothing to regenerate yet");
                false
            }
        }
    }

    /// Analyze the symbol under the popular-bar cursor.
    pub fn select_highlighted(&mut self) -> bool {
        match self.popular.get(self.popular_cursor).cloned() {
            Some(symbol) => self.select(&symbol),
            None => false,
        }
    }

    pub fn cursor_right(&mut self) {
        if !self.popular.is_empty() {
            self.popular_cursor = (self.popular_cursor + 1) % self.popular.len();
        }
    }

    pub fn cursor_left(&mut self) {
        if !self.popular.is_empty() {
            self.popular_cursor = (self.popular_cursor + self.popular.len() - 1) % self.popular.len();
        }
    }

    /// Push an error to the history, capping at [`ERROR_HISTORY_CAP`].
    pub fn push_error(&mut self, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
