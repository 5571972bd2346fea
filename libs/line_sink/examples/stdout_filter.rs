//! Stdout demo: the same filtering pattern over a stream sink wrapping
//! standard output.

use anyhow::Result;
use line_sink::{FilteredLogger, StreamSink};
use std::io;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut logger = FilteredLogger::new("Error", StreamSink::new(io::stdout()));

    logger.log("Ignored: this will not be logged")?;
    logger.log("Error: this is important")?;

    Ok(())
}
