//! Singleton tooltip overlay.
//!
//! # Design
//! - Targets register explicitly through `TooltipTarget`; nothing scans the DOM.
//! - One descriptor is shown at a time; showing a new one replaces the old.
//! - Hover intent is delayed and cancelled on leave, click or scroll.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
