//! Feature slices: reducer state per registry plus the Yew views that render it.

pub mod auth;
pub mod calendar;
pub mod confirm;
pub mod home;
pub mod notifications;
#[cfg(target_arch = "wasm32")]
pub(crate) mod showcase;
pub mod time;
pub mod tooltip;
