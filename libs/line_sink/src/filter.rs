//! Substring filtering in front of a sink
//!
//! A [`FilteredLogger`] owns exactly one sink and a pattern fixed at
//! construction. Messages containing the pattern are forwarded unmodified;
//! everything else is dropped silently. Filtering policy and emission
//! mechanism stay independently swappable: any [`LineSink`] plugs in.

use crate::{LineSink, SinkError};

/// Gates messages by substring containment before they reach a sink
#[derive(Debug)]
pub struct FilteredLogger<S> {
    /// Case-sensitive substring pattern; empty matches every message
    pattern: String,
    sink: S,
}

impl<S: LineSink> FilteredLogger<S> {
    /// Create a logger filtering on `pattern` over an already-usable sink
    pub fn new(pattern: impl Into<String>, sink: S) -> Self {
        Self {
            pattern: pattern.into(),
            sink,
        }
    }

    /// Log a message: forward it to the sink iff it contains the pattern
    ///
    /// Performs zero or one `emit` calls. Sink failures propagate to the
    /// caller unmodified; there is no retry and no local handling.
    pub fn log(&mut self, message: &str) -> Result<(), SinkError> {
        if self.matches(message) {
            self.sink.emit(message)
        } else {
            Ok(())
        }
    }

    /// Check whether a message would pass the filter
    pub fn matches(&self, message: &str) -> bool {
        message.contains(self.pattern.as_str())
    }

    /// Get the configured pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get a reference to the wrapped sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the wrapped sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the logger, releasing the wrapped sink and its resource
    pub fn into_sink(self) -> S {
        self.sink
    }
}
