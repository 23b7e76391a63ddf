//! Single confirmation dialog.
//!
//! # Design
//! - One dialog at a time; a second request replaces the first.
//! - Confirm never closes on its own so callers can show progress with `set_loading`.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
