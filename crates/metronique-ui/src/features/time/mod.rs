//! Time picker and the time range registry.
//!
//! # Design
//! - The draft keeps hours in display form (1..=12 or 0..=23) and converts only on confirm.
//! - Range bookkeeping mirrors the calendar registry with minute-level durations.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
