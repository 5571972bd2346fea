pub mod config;
pub mod error;
pub mod factory;
pub mod filter;
pub mod sinks;
pub mod test_utils;

use std::fmt::Debug;

pub use config::{LoggerConfig, LoggersConfig, SinkType};
pub use error::SinkError;
pub use factory::SinkFactory;
pub use filter::FilteredLogger;
pub use sinks::{Facility, Severity, SocketSink, StreamSink, SyslogSink};

/// A destination for log lines that abstracts away the output mechanism
pub trait LineSink: Send + Debug {
    /// Emit a single line; the sink appends the newline terminator itself
    fn emit(&mut self, message: &str) -> Result<(), SinkError>;

    /// Get sink metadata for debugging/diagnostics
    fn metadata(&self) -> SinkMetadata {
        SinkMetadata::default()
    }
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn emit(&mut self, message: &str) -> Result<(), SinkError> {
        (**self).emit(message)
    }

    fn metadata(&self) -> SinkMetadata {
        (**self).metadata()
    }
}

/// Boxed sink as produced by [`SinkFactory`]
pub type BoxedSink = Box<dyn LineSink>;

/// Describes a sink's backing resource for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkMetadata {
    /// Sink implementation kind ("stream", "socket", "syslog", ...)
    pub sink_type: String,

    /// Resource endpoint, if the sink targets one
    pub endpoint: Option<String>,
}

impl SinkMetadata {
    /// Create metadata for a sink kind
    pub fn new(sink_type: impl Into<String>) -> Self {
        Self {
            sink_type: sink_type.into(),
            endpoint: None,
        }
    }

    /// Set the resource endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{CollectorSink, FailingSink};

    #[test]
    fn test_emit_collects_lines() {
        let mut sink = CollectorSink::new();

        sink.emit("first").unwrap();
        sink.emit("second").unwrap();

        assert_eq!(sink.emit_count(), 2);
        assert_eq!(sink.received_lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_boxed_sink_forwards_emit() {
        let mut sink: BoxedSink = Box::new(CollectorSink::new());

        sink.emit("through the box").unwrap();

        assert_eq!(sink.metadata().sink_type, "collector");
    }

    #[test]
    fn test_boxed_failing_sink_propagates_error() {
        let mut sink: BoxedSink = Box::new(FailingSink::new("broken pipe"));

        let result = sink.emit("anything");
        assert!(matches!(result.unwrap_err(), SinkError::Io(_)));
    }

    #[test]
    fn test_metadata_builder() {
        let metadata = SinkMetadata::new("socket").with_endpoint("tcp://localhost:6514");

        assert_eq!(metadata.sink_type, "socket");
        assert_eq!(
            metadata.endpoint,
            Some("tcp://localhost:6514".to_string())
        );
    }

    #[test]
    fn test_default_metadata_is_empty() {
        let metadata = SinkMetadata::default();

        assert_eq!(metadata.sink_type, "");
        assert_eq!(metadata.endpoint, None);
    }
}
