use std::{cell::RefCell, fmt, io::Write};

use crate::events::LibraryEvent;

/// Trait for engine event observation
pub trait LibraryObserver {
    /// Called after the engine handled an operation
    fn on_event(&self, event: &LibraryEvent);
}

/// Forwards every event to `tracing`
#[derive(Debug)]
pub struct TracingObserver;

impl LibraryObserver for TracingObserver {
    fn on_event(&self, event: &LibraryEvent) {
        match event {
            LibraryEvent::LoginRejected { username } => {
                tracing::warn!(%username, "login rejected");
            }
            LibraryEvent::FinishedBook { username, isbn } => {
                tracing::info!(%username, %isbn, "book finished");
            }
            _ => tracing::info!("{}", event.describe()),
        }
    }
}

/// Appends each event as one JSON line to a writer
pub struct JsonLinesObserver<W: Write> {
    /// Destination for the encoded events
    sink: RefCell<W>,
}

impl<W: Write> JsonLinesObserver<W> {
    /// Wrap a writer
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self { sink: RefCell::new(sink) }
    }

    /// Recover the writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write> fmt::Debug for JsonLinesObserver<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonLinesObserver").finish_non_exhaustive()
    }
}

impl<W: Write> LibraryObserver for JsonLinesObserver<W> {
    fn on_event(&self, event: &LibraryEvent) {
        if let Err(e) = write_line(&mut *self.sink.borrow_mut(), event) {
            tracing::warn!(error = %e, "failed to write event log entry");
        }
    }
}

/// Encode one event followed by a newline
fn write_line<W: Write>(sink: &mut W, event: &LibraryEvent) -> std::io::Result<()> {
    serde_json::to_writer(&mut *sink, event)?;
    sink.write_all(b"\n")?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_lines_one_event_per_line() -> Result<(), Box<dyn std::error::Error>> {
        let observer = JsonLinesObserver::new(Vec::new());
        observer.on_event(&LibraryEvent::SignedUp { username: "alice".into() });
        observer.on_event(&LibraryEvent::LoggedIn { username: "alice".into() });

        let output = String::from_utf8(observer.into_inner())?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: LibraryEvent = serde_json::from_str(lines.first().copied().unwrap_or_default())?;
        assert_eq!(first, LibraryEvent::SignedUp { username: "alice".into() });
        assert!(output.contains(r#""event":"logged_in""#));
        Ok(())
    }
}
