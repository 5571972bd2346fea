//! Syslog facility sink
//!
//! Forwards lines to the local syslog daemon as RFC 3164 style datagrams
//! (`<priority>tag: message`). The daemon itself is externally owned; the
//! sink only records which facility and severity to target.

use crate::{LineSink, SinkError, SinkMetadata};
use serde::{Deserialize, Serialize};
use std::os::unix::net::UnixDatagram;
use std::path::Path;

/// Datagram socket the local syslog daemon listens on
pub const DEFAULT_SYSLOG_PATH: &str = "/dev/log";

/// Syslog facility codes (RFC 3164 section 4.1.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facility {
    Kern = 0,
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    Authpriv = 10,
    Ftp = 11,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

impl Facility {
    /// Numeric facility code
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Syslog severity levels, most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Err = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Severity {
    /// Numeric severity code
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Encode the RFC 3164 priority value: facility * 8 + severity
pub fn priority(facility: Facility, severity: Severity) -> u8 {
    (facility.code() << 3) | severity.code()
}

/// Sink forwarding lines to a syslog daemon over a Unix datagram socket
#[derive(Debug)]
pub struct SyslogSink {
    socket: UnixDatagram,
    facility: Facility,
    severity: Severity,
    tag: String,
    path: String,
}

impl SyslogSink {
    /// Connect to the local daemon at `/dev/log` with the given priority
    pub fn open(
        facility: Facility,
        severity: Severity,
        tag: impl Into<String>,
    ) -> Result<Self, SinkError> {
        Self::open_path(DEFAULT_SYSLOG_PATH, facility, severity, tag)
    }

    /// Connect to a daemon listening on an explicit datagram socket path
    pub fn open_path(
        path: impl AsRef<Path>,
        facility: Facility,
        severity: Severity,
        tag: impl Into<String>,
    ) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let tag = tag.into();

        let socket = UnixDatagram::unbound()
            .map_err(|e| SinkError::facility(format!("cannot create datagram socket: {e}")))?;
        socket.connect(path).map_err(|e| {
            SinkError::facility(format!("cannot reach syslog at {}: {e}", path.display()))
        })?;

        tracing::debug!(
            path = %path.display(),
            ?facility,
            ?severity,
            tag = %tag,
            "syslog sink connected"
        );

        Ok(Self {
            socket,
            facility,
            severity,
            tag,
            path: path.display().to_string(),
        })
    }

    /// Encoded priority this sink stamps on every message
    pub fn priority(&self) -> u8 {
        priority(self.facility, self.severity)
    }

    /// Tag prefixed to every message
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl LineSink for SyslogSink {
    fn emit(&mut self, message: &str) -> Result<(), SinkError> {
        let frame = format!("<{}>{}: {}", self.priority(), self.tag, message);
        self.socket
            .send(frame.as_bytes())
            .map_err(|e| SinkError::facility(format!("send to {} failed: {e}", self.path)))?;
        Ok(())
    }

    fn metadata(&self) -> SinkMetadata {
        SinkMetadata::new("syslog").with_endpoint(&self.path)
    }
}
