//! Component showcase served at `/app`.
//!
//! Every overlay and picker is mounted here against the live registries, so the page doubles as a
//! manual test bench.

pub(crate) mod view;
