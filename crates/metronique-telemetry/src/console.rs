//! Browser console sink for `tracing` events.

use gloo::console;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::fields::render_event;

/// Layer forwarding every event to the matching `console.*` method.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = render_event(event);
        match *event.metadata().level() {
            Level::ERROR => console::error!(line),
            Level::WARN => console::warn!(line),
            Level::INFO => console::info!(line),
            Level::DEBUG => console::debug!(line),
            Level::TRACE => console::log!(line),
        }
    }
}
