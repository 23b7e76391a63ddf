//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod config;
pub mod duration;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod particles;
pub mod placement;
pub mod positioner;
pub mod tone;
