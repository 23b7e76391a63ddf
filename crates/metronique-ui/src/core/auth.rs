//! Interpretation of the auth callback query string.

use crate::core::config::AuthConfig;
use crate::core::tone::NotificationKind;

/// `LocalStorage` key of the access token.
pub const TOKEN_KEY: &str = "metronique.token";
/// `LocalStorage` key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "metronique.refresh_token";

/// Path visited after a successful sign-in.
pub const SUCCESS_PATH: &str = "/app";
/// Path visited after a failed sign-in.
pub const FAILURE_PATH: &str = "/auth";

/// Credentials handed over by the auth collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// Access token.
    pub access_token: String,
    /// Optional refresh token.
    pub refresh_token: Option<String>,
}

/// Result of the callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// `success=true` with a non-empty token.
    Success(Credentials),
    /// Anything else.
    Failure,
}

impl CallbackOutcome {
    /// Build the outcome from already-decoded parameters.
    #[must_use]
    pub fn from_params(
        success: Option<&str>,
        token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Self {
        match (success, token) {
            (Some("true"), Some(token)) if !token.is_empty() => Self::Success(Credentials {
                access_token: token.to_string(),
                refresh_token: refresh_token
                    .filter(|value| !value.is_empty())
                    .map(str::to_string),
            }),
            _ => Self::Failure,
        }
    }

    /// Parse `location.search` (with or without the leading `?`).
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut success = None;
        let mut token = None;
        let mut refresh_token = None;
        for pair in query.trim_start_matches('?').split('&') {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(raw);
            match key {
                "success" if success.is_none() => success = Some(value),
                "token" if token.is_none() => token = Some(value),
                "refreshToken" if refresh_token.is_none() => refresh_token = Some(value),
                _ => {}
            }
        }
        Self::from_params(
            success.as_deref(),
            token.as_deref(),
            refresh_token.as_deref(),
        )
    }

    /// Whether sign-in succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Route to visit once the redirect delay elapses.
    #[must_use]
    pub const fn redirect_path(&self) -> &'static str {
        match self {
            Self::Success(_) => SUCCESS_PATH,
            Self::Failure => FAILURE_PATH,
        }
    }

    /// Delay before redirecting.
    #[must_use]
    pub const fn redirect_delay_ms(&self, config: &AuthConfig) -> u32 {
        match self {
            Self::Success(_) => config.success_redirect_ms,
            Self::Failure => config.failure_redirect_ms,
        }
    }

    /// Alert announcing the outcome.
    #[must_use]
    pub const fn alert(&self) -> (NotificationKind, &'static str) {
        match self {
            Self::Success(_) => (
                NotificationKind::Success,
                "Authentication successful! Redirecting...",
            ),
            Self::Failure => (
                NotificationKind::Error,
                "Authentication failed. Please try again.",
            ),
        }
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(
        |_| {
            tracing::warn!(value = raw, "callback parameter is not valid utf-8");
            spaced.clone()
        },
        std::borrow::Cow::into_owned,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_tokens_decodes_values() {
        let outcome =
            CallbackOutcome::from_query("?success=true&token=abc%2B1&refreshToken=r%20t");
        assert_eq!(
            outcome,
            CallbackOutcome::Success(Credentials {
                access_token: "abc+1".to_string(),
                refresh_token: Some("r t".to_string()),
            })
        );
        assert_eq!(outcome.redirect_path(), "/app");
        assert_eq!(outcome.redirect_delay_ms(&AuthConfig::default()), 1_500);
        assert_eq!(outcome.alert().0, NotificationKind::Success);
    }

    #[test]
    fn success_without_token_fails() {
        let outcome = CallbackOutcome::from_query("success=true&token=");
        assert_eq!(outcome, CallbackOutcome::Failure);
        assert_eq!(outcome.redirect_path(), "/auth");
        assert_eq!(outcome.redirect_delay_ms(&AuthConfig::default()), 2_000);
        assert_eq!(outcome.alert().1, "Authentication failed. Please try again.");
    }

    #[test]
    fn explicit_failure_and_empty_query_fail() {
        assert!(!CallbackOutcome::from_query("?success=false&token=abc").is_success());
        assert!(!CallbackOutcome::from_query("").is_success());
    }

    #[test]
    fn missing_refresh_token_is_optional() {
        let outcome = CallbackOutcome::from_params(Some("true"), Some("abc"), None);
        assert!(matches!(
            outcome,
            CallbackOutcome::Success(Credentials {
                refresh_token: None,
                ..
            })
        ));
    }
}
