//! Configuration support for building filtered loggers
//!
//! Provides TOML-based declaration of named loggers, with support for:
//! - Substring filter patterns
//! - Sink type specifications (file, stdout, stderr, socket, syslog)
//! - Socket endpoint definitions (`tcp://host:port`, `unix://path`)
//! - Syslog facility, severity, and tag selection

use crate::error::SinkError;
use crate::sinks::syslog::{Facility, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level loggers configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggersConfig {
    /// Map of logger name to logger configuration
    pub loggers: HashMap<String, LoggerConfig>,
}

/// Configuration for a single filtered logger
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggerConfig {
    /// Substring pattern to filter on; empty (the default) passes everything
    #[serde(default)]
    pub pattern: String,

    /// Type of sink to create
    #[serde(rename = "type")]
    pub sink_type: SinkType,

    /// Target file (file sinks)
    pub path: Option<PathBuf>,

    /// Connection endpoint (socket sinks)
    pub endpoint: Option<String>,

    /// Syslog facility (syslog sinks; defaults to `user`)
    pub facility: Option<Facility>,

    /// Syslog severity (syslog sinks; defaults to `info`)
    pub severity: Option<Severity>,

    /// Syslog tag (syslog sinks; defaults to the logger name)
    pub tag: Option<String>,
}

/// Supported sink types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkType {
    /// Append to a file, flushing every line
    File,
    /// Write to standard output
    Stdout,
    /// Write to standard error
    Stderr,
    /// Write ASCII lines to a connected TCP or Unix socket
    Socket,
    /// Forward to the local syslog facility
    Syslog,
}

impl SinkType {
    /// Get human-readable name for error messages
    pub fn name(self) -> &'static str {
        match self {
            SinkType::File => "file",
            SinkType::Stdout => "stdout",
            SinkType::Stderr => "stderr",
            SinkType::Socket => "socket",
            SinkType::Syslog => "syslog",
        }
    }
}

impl LoggerConfig {
    /// Validate the logger configuration
    pub fn validate(&self) -> Result<(), SinkError> {
        match self.sink_type {
            SinkType::File => {
                if self.path.is_none() {
                    return Err(SinkError::invalid_config("file sink type requires path"));
                }
            }
            SinkType::Socket => match &self.endpoint {
                None => {
                    return Err(SinkError::invalid_config(
                        "socket sink type requires endpoint",
                    ));
                }
                Some(endpoint) => validate_endpoint(endpoint)?,
            },
            SinkType::Stdout | SinkType::Stderr | SinkType::Syslog => {}
        }

        Ok(())
    }
}

/// Validate socket endpoint format
fn validate_endpoint(endpoint: &str) -> Result<(), SinkError> {
    if let Some(addr) = endpoint.strip_prefix("tcp://") {
        if addr.is_empty() {
            return Err(SinkError::invalid_config("TCP endpoint cannot be empty"));
        }
        if !addr.contains(':') {
            return Err(SinkError::invalid_config(
                "TCP endpoint must include port (host:port)",
            ));
        }
    } else if let Some(path) = endpoint.strip_prefix("unix://") {
        if path.is_empty() {
            return Err(SinkError::invalid_config(
                "Unix socket path cannot be empty",
            ));
        }
    } else {
        return Err(SinkError::invalid_config(format!(
            "Unsupported endpoint type. Supported: tcp://, unix://. Got: {endpoint}"
        )));
    }

    Ok(())
}

impl LoggersConfig {
    /// Create from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, SinkError> {
        toml::from_str(toml_str)
            .map_err(|e| SinkError::invalid_config(format!("failed to parse TOML: {e}")))
    }

    /// Create from file path
    pub fn from_file(path: &std::path::Path) -> Result<Self, SinkError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SinkError::invalid_config(format!("failed to read config file: {e}"))
        })?;
        Self::from_toml(&content)
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String, SinkError> {
        toml::to_string_pretty(self)
            .map_err(|e| SinkError::invalid_config(format!("failed to serialize to TOML: {e}")))
    }

    /// Validate all logger configurations
    pub fn validate(&self) -> Result<(), SinkError> {
        for (logger_name, config) in &self.loggers {
            config
                .validate()
                .map_err(|e| SinkError::invalid_config(format!("logger '{logger_name}': {e}")))?;
        }

        Ok(())
    }

    /// Get logger configuration by name
    pub fn get_logger(&self, name: &str) -> Option<&LoggerConfig> {
        self.loggers.get(name)
    }
}
