//! JSON Event Sink
//!
//! Outputs push events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PushEvent, PushEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("event writer poisoned"))?;
        writeln!(writer, "{}", event)?;
        writer.flush()
    }
}

impl PushEventSink for JsonEventSink {
    fn on_event(&self, event: PushEvent) -> io::Result<()> {
        let json = match event {
            PushEvent::AttributeApplied {
                pattern,
                key,
                value,
            } => {
                serde_json::json!({
                    "event": "attribute",
                    "command": "push",
                    "pattern": pattern,
                    "key": key,
                    "kind": value.kind(),
                    "value": value.to_json(),
                })
            }

            PushEvent::Published { digest } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "push",
                    "status": "success",
                    "digest": digest.as_str(),
                })
            }
        };

        self.write_event(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AttributeValue;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        String::from_utf8(buffer.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_attribute_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PushEvent::AttributeApplied {
            pattern: "*.jpg".to_string(),
            key: "image".to_string(),
            value: AttributeValue::Bool(true),
        })
        .unwrap();

        let events = lines(&buffer);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "attribute");
        assert_eq!(events[0]["pattern"], "*.jpg");
        assert_eq!(events[0]["kind"], "bool");
        assert_eq!(events[0]["value"], true);
    }

    #[test]
    fn json_sink_outputs_one_line_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(PushEvent::AttributeApplied {
            pattern: "*.json".to_string(),
            key: "tags".to_string(),
            value: AttributeValue::List(vec![AttributeValue::from("a"), AttributeValue::Number(2.0)]),
        })
        .unwrap();
        sink.on_event(PushEvent::Published {
            digest: "sha256:deadbeef".into(),
        })
        .unwrap();

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["value"], serde_json::json!(["a", 2]));
        assert_eq!(events[1]["event"], "complete");
        assert_eq!(events[1]["digest"], "sha256:deadbeef");
    }
}
