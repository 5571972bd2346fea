use crate::{LineSink, SinkError, SinkMetadata};
use std::fmt::Debug;
use std::io::Write;

/// Sink over a writable stream; no buffering survives past a single emit
#[derive(Debug)]
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    /// Create a sink over an already-open writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the underlying writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the sink, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Debug> LineSink for StreamSink<W> {
    fn emit(&mut self, message: &str) -> Result<(), SinkError> {
        self.writer.write_all(message.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn metadata(&self) -> SinkMetadata {
        SinkMetadata::new("stream")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Writer that counts flushes to verify the per-emit flush discipline
    #[derive(Debug, Default)]
    struct CountingWriter {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_appends_message_and_newline() {
        let mut sink = StreamSink::new(Vec::new());

        sink.emit("Error: message number two").unwrap();

        assert_eq!(sink.into_inner(), b"Error: message number two\n");
    }

    #[test]
    fn test_emits_append_in_order() {
        let mut sink = StreamSink::new(Vec::new());

        sink.emit("one").unwrap();
        sink.emit("two").unwrap();

        assert_eq!(sink.into_inner(), b"one\ntwo\n");
    }

    #[test]
    fn test_exactly_one_flush_per_emit() {
        let mut sink = StreamSink::new(CountingWriter::default());

        sink.emit("first").unwrap();
        assert_eq!(sink.get_ref().flushes, 1);

        sink.emit("second").unwrap();
        assert_eq!(sink.get_ref().flushes, 2);
        assert_eq!(sink.get_ref().data, b"first\nsecond\n");
    }

    #[test]
    fn test_write_failure_surfaces_as_io_error() {
        let mut sink = StreamSink::new(BrokenWriter);

        let result = sink.emit("lost");
        assert!(matches!(result.unwrap_err(), SinkError::Io(_)));
    }

    #[test]
    fn test_non_ascii_passes_through_stream() {
        // Only the socket path enforces ASCII; streams take any text.
        let mut sink = StreamSink::new(Vec::new());

        sink.emit("Error: caf\u{e9}").unwrap();

        assert_eq!(sink.into_inner(), "Error: café\n".as_bytes());
    }

    #[test]
    fn test_metadata_reports_stream() {
        let sink = StreamSink::new(Vec::new());
        assert_eq!(sink.metadata().sink_type, "stream");
    }
}
