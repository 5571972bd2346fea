use crate::{LineSink, SinkError, SinkMetadata};
use std::fmt::Debug;
use std::io::Write;

/// Sink over a connected byte stream, speaking newline-terminated ASCII lines
///
/// The endpoint must already be connected; acquisition and teardown are the
/// caller's responsibility. A full send buffer blocks the emit call.
#[derive(Debug)]
pub struct SocketSink<S: Write> {
    stream: S,
    peer: Option<String>,
}

impl<S: Write> SocketSink<S> {
    /// Create a sink over a connected socket
    pub fn new(stream: S) -> Self {
        Self { stream, peer: None }
    }

    /// Create a sink over a connected socket, recording the peer endpoint
    pub fn with_peer(stream: S, peer: impl Into<String>) -> Self {
        Self {
            stream,
            peer: Some(peer.into()),
        }
    }

    /// Get a reference to the underlying socket
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Get a mutable reference to the underlying socket
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Consume the sink, returning the underlying socket
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Write + Send + Debug> LineSink for SocketSink<S> {
    fn emit(&mut self, message: &str) -> Result<(), SinkError> {
        // Reject before writing: no partial lines, no silent transcoding.
        if let Some(position) = message.bytes().position(|b| !b.is_ascii()) {
            return Err(SinkError::non_ascii(position));
        }

        // One buffer per line so the message and terminator leave together.
        let mut line = Vec::with_capacity(message.len() + 1);
        line.extend_from_slice(message.as_bytes());
        line.push(b'\n');
        self.stream.write_all(&line)?;
        Ok(())
    }

    fn metadata(&self) -> SinkMetadata {
        let metadata = SinkMetadata::new("socket");
        match &self.peer {
            Some(peer) => metadata.with_endpoint(peer),
            None => metadata,
        }
    }
}
