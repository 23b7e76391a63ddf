//! Browser-bound building blocks shared by the feature views.

pub(crate) mod clock;
pub(crate) mod floating;
