//! Error types surfaced by the UI core.

use thiserror::Error;

/// A context hook was called outside the provider that supplies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No matching provider in the component ancestry.
    #[error("{hook} must be used within {provider}")]
    Missing {
        /// Hook that was called.
        hook: &'static str,
        /// Provider component that must wrap the caller.
        provider: &'static str,
    },
}

/// Convert an optional context lookup into a [`ProviderError`].
///
/// # Errors
///
/// Returns [`ProviderError::Missing`] when `value` is `None`.
pub fn require<T>(
    value: Option<T>,
    hook: &'static str,
    provider: &'static str,
) -> Result<T, ProviderError> {
    value.ok_or(ProviderError::Missing { hook, provider })
}

/// Errors raised while loading the UI configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`UiConfig`](crate::core::config::UiConfig).
    #[error("failed to parse ui configuration")]
    Parse {
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
    /// A field holds a value outside its allowed range.
    #[error("invalid {section}.{field}: {message}")]
    InvalidField {
        /// Configuration section.
        section: &'static str,
        /// Field within the section.
        field: &'static str,
        /// Constraint that was violated.
        message: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_provider_names_hook_and_provider() {
        let err = require::<u8>(None, "use_notifications", "NotificationProvider")
            .expect_err("missing provider");
        assert_eq!(
            err.to_string(),
            "use_notifications must be used within NotificationProvider"
        );
        assert_eq!(require(Some(3), "use_x", "X"), Ok(3));
    }

    #[test]
    fn invalid_field_renders_path() {
        let err = ConfigError::InvalidField {
            section: "overlay",
            field: "gap",
            message: "must be non-negative",
        };
        assert_eq!(err.to_string(), "invalid overlay.gap: must be non-negative");
    }
}
