//! Error types for telemetry operations.

use thiserror::Error;

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Errors raised by telemetry helpers.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Installing the tracing subscriber failed.
    #[error("failed to install tracing subscriber")]
    SubscriberInstall {
        /// Underlying tracing subscriber error.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::util::SubscriberInitExt;

    #[test]
    fn subscriber_install_error_reports_source() {
        let first = tracing_subscriber::registry().try_init();
        let second = tracing_subscriber::registry().try_init();
        // Only one global subscriber can be installed per process.
        let failure = first.err().or_else(|| second.err());
        if let Some(source) = failure {
            let err = TelemetryError::SubscriberInstall { source };
            assert_eq!(err.to_string(), "failed to install tracing subscriber");
            assert!(std::error::Error::source(&err).is_some());
        }
    }
}
