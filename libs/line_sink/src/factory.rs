//! SinkFactory for creating sinks and loggers from configuration
//!
//! Bridges the TOML configuration surface and the sink implementations:
//! opens files in append mode, connects sockets, and reaches the syslog
//! daemon, returning boxed sinks ready to wrap in a [`FilteredLogger`].
//! Sinks are exclusively owned by their logger, so the factory hands out
//! fresh instances rather than caching.

use crate::{
    config::{LoggerConfig, SinkType},
    filter::FilteredLogger,
    sinks::{
        syslog::{Facility, Severity},
        SocketSink, StreamSink, SyslogSink,
    },
    BoxedSink, SinkError,
};
use std::fs::OpenOptions;
use std::io;
use std::net::TcpStream;
use std::os::unix::net::UnixStream;

/// Factory for creating sinks from configuration
#[derive(Debug)]
pub struct SinkFactory {
    /// Factory name for debugging
    name: String,
}

impl SinkFactory {
    /// Create a new sink factory
    pub fn new() -> Self {
        Self {
            name: "sink-factory".to_string(),
        }
    }

    /// Create a new factory with name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create a sink for the given logger configuration
    ///
    /// Acquires the backing resource (file handle, connected socket, syslog
    /// datagram socket) and returns it boxed behind the sink contract.
    pub fn create_sink(
        &self,
        logger_name: &str,
        config: &LoggerConfig,
    ) -> Result<BoxedSink, SinkError> {
        let sink: BoxedSink = match config.sink_type {
            SinkType::File => {
                let path = config.path.as_ref().ok_or_else(|| {
                    SinkError::invalid_config(format!(
                        "file sink '{logger_name}' missing path"
                    ))
                })?;
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        SinkError::io(format!("cannot open {}: {e}", path.display()))
                    })?;
                tracing::debug!(logger = logger_name, path = %path.display(), "opened file sink");
                Box::new(StreamSink::new(file))
            }
            SinkType::Stdout => Box::new(StreamSink::new(io::stdout())),
            SinkType::Stderr => Box::new(StreamSink::new(io::stderr())),
            SinkType::Socket => {
                let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                    SinkError::invalid_config(format!(
                        "socket sink '{logger_name}' missing endpoint"
                    ))
                })?;
                self.connect_socket(logger_name, endpoint)?
            }
            SinkType::Syslog => {
                let facility = config.facility.unwrap_or(Facility::User);
                let severity = config.severity.unwrap_or(Severity::Info);
                let tag = config
                    .tag
                    .clone()
                    .unwrap_or_else(|| logger_name.to_string());
                Box::new(SyslogSink::open(facility, severity, tag)?)
            }
        };

        tracing::info!(
            factory = %self.name,
            logger = logger_name,
            sink_type = config.sink_type.name(),
            "created sink"
        );
        Ok(sink)
    }

    /// Create a ready-to-use filtered logger from configuration
    pub fn create_logger(
        &self,
        logger_name: &str,
        config: &LoggerConfig,
    ) -> Result<FilteredLogger<BoxedSink>, SinkError> {
        let sink = self.create_sink(logger_name, config)?;
        Ok(FilteredLogger::new(config.pattern.clone(), sink))
    }

    /// Connect a socket sink to a tcp:// or unix:// endpoint
    fn connect_socket(&self, logger_name: &str, endpoint: &str) -> Result<BoxedSink, SinkError> {
        if let Some(addr) = endpoint.strip_prefix("tcp://") {
            let stream = TcpStream::connect(addr)
                .map_err(|e| SinkError::io(format!("cannot connect {endpoint}: {e}")))?;
            tracing::debug!(logger = logger_name, endpoint, "connected TCP socket sink");
            Ok(Box::new(SocketSink::with_peer(stream, endpoint)))
        } else if let Some(path) = endpoint.strip_prefix("unix://") {
            let stream = UnixStream::connect(path)
                .map_err(|e| SinkError::io(format!("cannot connect {endpoint}: {e}")))?;
            tracing::debug!(logger = logger_name, endpoint, "connected Unix socket sink");
            Ok(Box::new(SocketSink::with_peer(stream, endpoint)))
        } else {
            Err(SinkError::invalid_config(format!(
                "socket sink '{logger_name}' has unsupported endpoint '{endpoint}' \
                 (expected tcp:// or unix://)"
            )))
        }
    }
}

impl Default for SinkFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggersConfig;

    fn config_for(toml: &str, name: &str) -> LoggerConfig {
        LoggersConfig::from_toml(toml)
            .unwrap()
            .get_logger(name)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_file_sink_missing_path_is_config_error() {
        let config = config_for(
            r#"
            [loggers.broken]
            type = "file"
            "#,
            "broken",
        );

        let result = SinkFactory::new().create_sink("broken", &config);
        let err = result.unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_unsupported_endpoint_is_config_error() {
        let config = config_for(
            r#"
            [loggers.audit]
            type = "socket"
            endpoint = "udp://127.0.0.1:514"
            "#,
            "audit",
        );

        let result = SinkFactory::new().create_sink("audit", &config);
        assert!(result.unwrap_err().is_config());
    }

    #[test]
    fn test_unreachable_socket_is_transport_error() {
        let config = config_for(
            r#"
            [loggers.audit]
            type = "socket"
            endpoint = "unix:///nonexistent/collector.sock"
            "#,
            "audit",
        );

        let result = SinkFactory::new().create_sink("audit", &config);
        assert!(result.unwrap_err().is_transport());
    }

    #[test]
    fn test_file_sink_appends_across_factories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let toml = format!(
            r#"
            [loggers.errors]
            pattern = "Error"
            type = "file"
            path = "{}"
            "#,
            path.display()
        );
        let config = config_for(&toml, "errors");
        let factory = SinkFactory::new();

        let mut logger = factory.create_logger("errors", &config).unwrap();
        logger.log("Error: first run").unwrap();
        drop(logger);

        // A second open appends rather than truncating.
        let mut logger = factory.create_logger("errors", &config).unwrap();
        logger.log("Error: second run").unwrap();
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Error: first run\nError: second run\n");
    }

    #[test]
    fn test_created_logger_carries_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let toml = format!(
            r#"
            [loggers.errors]
            pattern = "Error"
            type = "file"
            path = "{}"
            "#,
            path.display()
        );
        let config = config_for(&toml, "errors");

        let logger = SinkFactory::new().create_logger("errors", &config).unwrap();
        assert_eq!(logger.pattern(), "Error");
    }
}
