//! Progress output sinks.
//!
//! All human-readable output from the pool flows through a sink so that
//! tests can capture it instead of scraping stdout.

use parking_lot::Mutex;

/// Destination for human-readable progress lines.
pub trait ProgressSink: Send + Sync {
    /// Emit one line.
    fn emit(&self, line: &str);
}

/// Writes progress lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Collects progress lines in memory (for tests).
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl ProgressSink for CaptureSink {
    fn emit(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
