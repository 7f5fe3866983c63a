//! In-memory log capture for the log overlay.
//!
//! The terminal owns stdout while the dashboard runs, so the tracing
//! subscriber writes formatted lines into a capped [`LogBuffer`] instead.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Lines kept for the log overlay.
pub const LOG_CAPACITY: usize = 500;

/// Capped ring of formatted log lines.
pub struct LogBuffer {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    // A panic mid-push cannot leave the deque inconsistent, so recover
    // the guard from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push_line(&self, line: String) {
        let mut lines = self.lock();
        lines.push_back(line);
        while lines.len() > self.capacity {
            lines.pop_front();
        }
    }

    /// The most recent lines, oldest first, up to `limit`.
    pub fn recent(&self, limit: usize) -> Vec<String> {
        let lines = self.lock();
        let start = lines.len().saturating_sub(limit);
        lines.iter().skip(start).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits written bytes on newlines into buffer lines.
pub struct LogWriter {
    buffer: Arc<LogBuffer>,
    line: Vec<u8>,
}

impl LogWriter {
    fn flush_line(&mut self) {
        if !self.line.is_empty() {
            let line = String::from_utf8_lossy(&self.line).into_owned();
            self.buffer.push_line(line);
            self.line.clear();
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &b in buf {
            if b == b'\n' {
                self.flush_line();
            } else {
                self.line.push(b);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_line();
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        self.flush_line();
    }
}

/// `MakeWriter` handing the subscriber a writer into a shared buffer.
#[derive(Clone)]
pub struct LogMakeWriter {
    buffer: Arc<LogBuffer>,
}

impl LogMakeWriter {
    pub fn new(buffer: Arc<LogBuffer>) -> Self {
        Self { buffer }
    }
}

impl<'a> MakeWriter<'a> for LogMakeWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            line: Vec::new(),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(buffer: Arc<LogBuffer>, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tradingiq_core={default_level},tradingiq_tui={default_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(LogMakeWriter::new(buffer)),
        )
        .init();
}
