//! Socketpair demo: filter on "Error" over one end of a connected pair and
//! read the raw bytes back from the other end.

use anyhow::Result;
use line_sink::{FilteredLogger, SocketSink};
use std::io::Read;
use std::os::unix::net::UnixStream;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let (writer, mut reader) = UnixStream::pair()?;
    let mut logger = FilteredLogger::new("Error", SocketSink::new(writer));

    logger.log("Warning: message number one")?;
    logger.log("Error: message number two")?;

    let mut buf = [0u8; 512];
    let n = reader.read(&mut buf)?;
    println!("The socket received: {:?}", String::from_utf8_lossy(&buf[..n]));

    Ok(())
}
