//! Text Event Sink
//!
//! Plain-text output: one notice line per attribute, then the digest alone
//! on its own line so scripts can capture it.

use crate::domain::ports::{PushEvent, PushEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints human-readable lines
pub struct TextEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TextEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl PushEventSink for TextEventSink {
    fn on_event(&self, event: PushEvent) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("event writer poisoned"))?;

        match event {
            PushEvent::AttributeApplied {
                pattern,
                key,
                value,
            } => writeln!(
                writer,
                "Adding attributes {}={} to file pattern {}",
                key, value, pattern
            )?,
            PushEvent::Published { digest } => writeln!(writer, "{}", digest)?,
        }

        writer.flush()
    }
}
