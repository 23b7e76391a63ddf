//! Landing page.
//!
//! # Design
//! - Copy lives in `content` as static tables so the page renders from data.
//! - The page is static; only the sign-in button navigates.

pub mod content;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
