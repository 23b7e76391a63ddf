#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]
//! Logging primitives shared across the Metronique workspace.
//!
//! Installs a single `tracing` subscriber: a fmt subscriber (pretty or JSON) on native targets
//! and a browser-console layer when compiled for `wasm32`.

#[cfg(target_arch = "wasm32")]
pub mod console;
pub mod error;
pub mod fields;
pub mod init;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
