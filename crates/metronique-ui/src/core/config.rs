//! Runtime configuration for the UI shell.
//!
//! # Design
//! - Every field has a default, so a partial (or absent) document is always usable.
//! - Validation rejects values that would break timers or geometry; callers log and fall back.

use metronique_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::positioner::OverlayMetrics;

/// Element id of the embedded JSON configuration document.
pub const CONFIG_ELEMENT_ID: &str = "metronique-config";

/// Alert timing and effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Time an alert stays visible before closing on its own.
    pub visible_ms: u32,
    /// Length of the exit animation.
    pub exit_ms: u32,
    /// Particles scattered while closing.
    pub particle_count: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            visible_ms: 6_000,
            exit_ms: 300,
            particle_count: 50,
        }
    }
}

/// Floating panel spacing and tooltip delay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Distance between trigger and overlay.
    pub gap: f64,
    /// Edge padding for dropdown panels.
    pub dropdown_padding: f64,
    /// Edge padding for tooltips.
    pub tooltip_padding: f64,
    /// Hover time before a tooltip appears.
    pub hover_delay_ms: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            gap: OverlayMetrics::DROPDOWN.gap,
            dropdown_padding: OverlayMetrics::DROPDOWN.padding,
            tooltip_padding: OverlayMetrics::TOOLTIP.padding,
            hover_delay_ms: 500,
        }
    }
}

/// Redirect delays after the auth callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Delay before leaving for the app after a successful sign-in.
    pub success_redirect_ms: u32,
    /// Delay before returning to sign-in after a failure.
    pub failure_redirect_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            success_redirect_ms: 1_500,
            failure_redirect_ms: 2_000,
        }
    }
}

/// Logger settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive.
    pub level: String,
    /// `json` or `pretty`; inferred from the build when absent.
    pub format: Option<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: None,
        }
    }
}

/// Complete UI configuration document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Alert settings.
    pub notifications: NotificationConfig,
    /// Overlay settings.
    pub overlay: OverlayConfig,
    /// Auth callback settings.
    pub auth: AuthConfig,
    /// Logger settings.
    pub logging: LoggingSection,
}

fn non_zero(value: u32, section: &'static str, field: &'static str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidField {
            section,
            field,
            message: "must be greater than zero",
        });
    }
    Ok(())
}

fn non_negative(value: f64, section: &'static str, field: &'static str) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidField {
            section,
            field,
            message: "must be a finite, non-negative number",
        });
    }
    Ok(())
}

impl UiConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::InvalidField`] when
    /// validation fails.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a document, logging and falling back to defaults on failure.
    #[must_use]
    pub fn from_json_or_default(document: &str) -> Self {
        Self::from_json(document).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid ui configuration");
            Self::default()
        })
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidField`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_zero(self.notifications.visible_ms, "notifications", "visible_ms")?;
        non_zero(self.notifications.exit_ms, "notifications", "exit_ms")?;
        non_negative(self.overlay.gap, "overlay", "gap")?;
        non_negative(self.overlay.dropdown_padding, "overlay", "dropdown_padding")?;
        non_negative(self.overlay.tooltip_padding, "overlay", "tooltip_padding")?;
        non_zero(self.auth.success_redirect_ms, "auth", "success_redirect_ms")?;
        non_zero(self.auth.failure_redirect_ms, "auth", "failure_redirect_ms")?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                section: "logging",
                field: "level",
                message: "must not be empty",
            });
        }
        Ok(())
    }

    /// Spacing for date/time dropdown panels.
    #[must_use]
    pub const fn dropdown_metrics(&self) -> OverlayMetrics {
        OverlayMetrics {
            gap: self.overlay.gap,
            padding: self.overlay.dropdown_padding,
        }
    }

    /// Spacing for tooltips.
    #[must_use]
    pub const fn tooltip_metrics(&self) -> OverlayMetrics {
        OverlayMetrics {
            gap: self.overlay.gap,
            padding: self.overlay.tooltip_padding,
        }
    }

    /// Logger settings in the shape expected by the telemetry crate.
    #[must_use]
    pub fn logging_config(&self) -> LoggingConfig<'_> {
        LoggingConfig {
            level: &self.logging.level,
            format: self
                .logging
                .format
                .as_deref()
                .map_or_else(LogFormat::infer, LogFormat::from_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = UiConfig::from_json("{}").expect("empty document");
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.notifications.visible_ms, 6_000);
        assert_eq!(config.notifications.exit_ms, 300);
        assert_eq!(config.auth.failure_redirect_ms, 2_000);
        assert_eq!(config.dropdown_metrics(), OverlayMetrics::DROPDOWN);
        assert_eq!(config.tooltip_metrics(), OverlayMetrics::TOOLTIP);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = UiConfig::from_json(r#"{"notifications":{"visible_ms":2500}}"#)
            .expect("partial document");
        assert_eq!(config.notifications.visible_ms, 2_500);
        assert_eq!(config.notifications.particle_count, 50);
        assert!((config.overlay.gap - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = UiConfig::from_json(r#"{"notifications":{"exit_ms":0}}"#)
            .expect_err("zero exit duration");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                section: "notifications",
                field: "exit_ms",
                ..
            }
        ));
    }

    #[test]
    fn negative_geometry_is_rejected() {
        let err = UiConfig::from_json(r#"{"overlay":{"tooltip_padding":-1}}"#)
            .expect_err("negative padding");
        assert_eq!(
            err.to_string(),
            "invalid overlay.tooltip_padding: must be a finite, non-negative number"
        );
    }

    #[test]
    fn malformed_document_falls_back_to_defaults() {
        assert!(matches!(
            UiConfig::from_json("{not json"),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(UiConfig::from_json_or_default("{not json"), UiConfig::default());
    }

    #[test]
    fn logging_section_maps_onto_telemetry_config() {
        let config = UiConfig::from_json(r#"{"logging":{"level":"debug","format":"json"}}"#)
            .expect("logging document");
        let logging = config.logging_config();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, LogFormat::Json);
    }
}
