//! Auth callback and sign-in placeholder pages.
//!
//! Query parsing lives in `core::auth`; this slice only renders status and schedules the redirect.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
