#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (calendar and viewport fixtures), timers.rs (virtual-clock timer queue).

pub mod fixtures;
pub mod timers;
