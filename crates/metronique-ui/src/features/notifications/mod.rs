//! Transient alert notifications.
//!
//! # Design
//! - The queue is an ordered reducer state owned by the app root; no severity reordering.
//! - Each rendered alert owns its timers through a `DismissalState`, so teardown cancels them.
//! - Removal is idempotent: an unknown id leaves the queue untouched.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
