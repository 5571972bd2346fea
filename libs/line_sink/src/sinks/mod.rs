//! Interchangeable sink backends
//!
//! Three emission mechanisms behind the same [`LineSink`](crate::LineSink)
//! contract:
//! - [`StreamSink`] - any writable stream, flushed on every line
//! - [`SocketSink`] - a connected byte stream, ASCII line protocol
//! - [`SyslogSink`] - the local syslog facility, one datagram per line

pub mod socket;
pub mod stream;
pub mod syslog;

pub use socket::SocketSink;
pub use stream::StreamSink;
pub use syslog::{Facility, Severity, SyslogSink};
