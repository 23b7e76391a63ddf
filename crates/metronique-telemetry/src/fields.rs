//! Flattening of `tracing` events into single console lines.
//!
//! # Design
//! - Render `target: message key=value ...` so browser consoles stay greppable.
//! - Keep the visitor target-agnostic so it is exercised on native test runs.

use std::fmt::{self, Write};

use tracing::Event;
use tracing::field::{Field, Visit};

/// Collects the message and structured fields of a single event.
#[derive(Debug, Default)]
pub struct FieldCollector {
    message: Option<String>,
    fields: String,
}

impl FieldCollector {
    /// Render the collected values behind the supplied target prefix.
    #[must_use]
    pub fn finish(self, target: &str) -> String {
        let mut line = String::with_capacity(target.len() + self.fields.len() + 16);
        line.push_str(target);
        line.push(':');
        if let Some(message) = self.message {
            line.push(' ');
            line.push_str(&message);
        }
        line.push_str(&self.fields);
        line
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

/// Render an event as a single console line.
#[must_use]
pub fn render_event(event: &Event<'_>) -> String {
    let mut collector = FieldCollector::default();
    event.record(&mut collector);
    collector.finish(event.metadata().target())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct Capture(Arc<Mutex<Vec<String>>>);

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0
                .lock()
                .expect("capture lock poisoned")
                .push(render_event(event));
        }
    }

    fn capture(emit: impl FnOnce()) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(Capture(Arc::clone(&lines)));
        tracing::subscriber::with_default(subscriber, emit);
        let captured = lines.lock().expect("capture lock poisoned").clone();
        captured
    }

    #[test]
    fn renders_target_message_and_fields() {
        let lines = capture(|| {
            tracing::info!(target: "overlay", id = 7, kind = "error", "alert dismissed");
        });
        assert_eq!(lines, vec!["overlay: alert dismissed id=7 kind=error".to_string()]);
    }

    #[test]
    fn renders_events_without_message() {
        let lines = capture(|| {
            tracing::warn!(target: "config", field = "gap");
        });
        assert_eq!(lines, vec!["config: field=gap".to_string()]);
    }
}
