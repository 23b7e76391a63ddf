//! Calendar date picker and the date range registry.
//!
//! # Design
//! - `logic` holds the month grid, search parsing and picker model so they run in native tests.
//! - `state` is the session-lifetime registry: one start/end range plus keyed picker entries.
//! - Pickers publish into the registry only when given a key.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
