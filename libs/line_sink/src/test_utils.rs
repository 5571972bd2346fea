//! In-memory sinks for exercising filters and sink consumers in tests

use crate::{LineSink, SinkError, SinkMetadata};
use std::collections::VecDeque;

/// A sink that collects emitted lines with bounded storage
#[derive(Debug)]
pub struct CollectorSink {
    /// Bounded line queue; oldest lines drop first at capacity
    lines: VecDeque<String>,
    max_lines: usize,
    emitted: u64,
    failed: u64,
    fail_next: bool,
    closed: bool,
}

impl CollectorSink {
    /// Create a new collector sink with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Create a new collector sink with specific capacity
    pub fn with_capacity(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(max_lines),
            max_lines,
            emitted: 0,
            failed: 0,
            fail_next: false,
            closed: false,
        }
    }

    /// Get all received lines
    pub fn received_lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    /// Get the count of currently stored lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the count of successful emits
    pub fn emit_count(&self) -> u64 {
        self.emitted
    }

    /// Get the count of failed emits
    pub fn failed_count(&self) -> u64 {
        self.failed
    }

    /// Clear all received lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Check if at capacity
    pub fn is_at_capacity(&self) -> bool {
        self.lines.len() >= self.max_lines
    }

    /// Configure to fail on the next emit only
    pub fn fail_next_emit(&mut self) {
        self.fail_next = true;
    }

    /// Mark the sink closed; every further emit fails
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl Default for CollectorSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for CollectorSink {
    fn emit(&mut self, message: &str) -> Result<(), SinkError> {
        if self.closed {
            self.failed += 1;
            return Err(SinkError::Closed);
        }

        if std::mem::take(&mut self.fail_next) {
            self.failed += 1;
            return Err(SinkError::io("simulated failure"));
        }

        if self.lines.len() >= self.max_lines {
            self.lines.pop_front();
        }
        self.lines.push_back(message.to_string());
        self.emitted += 1;

        Ok(())
    }

    fn metadata(&self) -> SinkMetadata {
        SinkMetadata::new("collector").with_endpoint("memory://test")
    }
}

/// A sink that always fails for testing error conditions
#[derive(Debug)]
pub struct FailingSink {
    error: SinkError,
}

impl FailingSink {
    /// Fail every emit with a transport error carrying this message
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error: SinkError::io(error_message),
        }
    }

    /// Fail every emit with a specific error
    pub fn with_error(error: SinkError) -> Self {
        Self { error }
    }
}

impl Default for FailingSink {
    fn default() -> Self {
        Self::new("simulated failure")
    }
}

impl LineSink for FailingSink {
    fn emit(&mut self, _message: &str) -> Result<(), SinkError> {
        Err(self.error.clone())
    }

    fn metadata(&self) -> SinkMetadata {
        SinkMetadata::new("test-failing")
    }
}
