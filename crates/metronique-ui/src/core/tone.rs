//! Closed kind enums for alerts and confirmation dialogs, each mapped to a style table.

use serde::{Deserialize, Serialize};

/// Severity of a transient alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Needs attention.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

/// Presentation of a notification kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertStyle {
    /// Single-character glyph standing in for the icon.
    pub glyph: &'static str,
    /// Surface background class.
    pub surface: &'static str,
    /// Border class.
    pub border: &'static str,
    /// Message text class.
    pub text: &'static str,
    /// Glyph colour class.
    pub icon_tone: &'static str,
    /// CSS colour of the closing particles.
    pub particle_color: &'static str,
}

impl NotificationKind {
    /// All kinds in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Success, Self::Error, Self::Warning, Self::Info]
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a kind name; unknown names are treated as info.
    #[must_use]
    pub fn from_name(value: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .unwrap_or_default()
    }

    /// Style table entry for this kind.
    #[must_use]
    pub const fn style(self) -> AlertStyle {
        match self {
            Self::Success => AlertStyle {
                glyph: "✓",
                surface: "bg-green-50",
                border: "border-green-200",
                text: "text-green-900",
                icon_tone: "text-green-600",
                particle_color: "#10b981",
            },
            Self::Error => AlertStyle {
                glyph: "✕",
                surface: "bg-red-50",
                border: "border-red-200",
                text: "text-red-900",
                icon_tone: "text-red-600",
                particle_color: "#ef4444",
            },
            Self::Warning => AlertStyle {
                glyph: "!",
                surface: "bg-yellow-50",
                border: "border-yellow-200",
                text: "text-yellow-900",
                icon_tone: "text-yellow-600",
                particle_color: "#f59e0b",
            },
            Self::Info => AlertStyle {
                glyph: "i",
                surface: "bg-sky-50",
                border: "border-sky-200",
                text: "text-sky-900",
                icon_tone: "text-sky-600",
                particle_color: "#0ea5e9",
            },
        }
    }
}

/// Visual intent of a confirmation dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmKind {
    /// Neutral question.
    #[default]
    Default,
    /// Positive action.
    Success,
    /// Destructive action.
    Danger,
    /// Risky action.
    Warning,
    /// Informational acknowledgement.
    Info,
}

/// Presentation of a confirmation kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmStyle {
    /// Single-character glyph standing in for the icon.
    pub glyph: &'static str,
    /// Icon badge background class.
    pub icon_surface: &'static str,
    /// Icon colour class.
    pub icon_tone: &'static str,
    /// Confirm button classes.
    pub confirm_button: &'static str,
}

impl ConfirmKind {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Style table entry for this kind.
    #[must_use]
    pub const fn style(self) -> ConfirmStyle {
        match self {
            Self::Default => ConfirmStyle {
                glyph: "?",
                icon_surface: "bg-gray-100",
                icon_tone: "text-gray-600",
                confirm_button: "bg-gray-900 hover:bg-gray-800",
            },
            Self::Success => ConfirmStyle {
                glyph: "✓",
                icon_surface: "bg-green-100",
                icon_tone: "text-green-600",
                confirm_button: "bg-green-600 hover:bg-green-700",
            },
            Self::Danger => ConfirmStyle {
                glyph: "!",
                icon_surface: "bg-red-100",
                icon_tone: "text-red-600",
                confirm_button: "bg-red-600 hover:bg-red-700",
            },
            Self::Warning => ConfirmStyle {
                glyph: "⚠",
                icon_surface: "bg-yellow-100",
                icon_tone: "text-yellow-600",
                confirm_button: "bg-yellow-600 hover:bg-yellow-700",
            },
            Self::Info => ConfirmStyle {
                glyph: "i",
                icon_surface: "bg-sky-100",
                icon_tone: "text-sky-600",
                confirm_button: "bg-sky-600 hover:bg-sky-700",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_names_fall_back_to_info() {
        assert_eq!(NotificationKind::from_name("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::from_name("fatal"), NotificationKind::Info);
    }

    #[test]
    fn particle_colours_match_kind() {
        assert_eq!(NotificationKind::Success.style().particle_color, "#10b981");
        assert_eq!(NotificationKind::Error.style().particle_color, "#ef4444");
        assert_eq!(NotificationKind::Warning.style().particle_color, "#f59e0b");
        assert_eq!(NotificationKind::Info.style().particle_color, "#0ea5e9");
    }

    #[test]
    fn confirm_kinds_deserialize_from_lowercase() {
        let kind: ConfirmKind = serde_json::from_str("\"danger\"").expect("valid kind");
        assert_eq!(kind, ConfirmKind::Danger);
        assert_eq!(kind.style().confirm_button, "bg-red-600 hover:bg-red-700");
        assert_eq!(ConfirmKind::default().as_str(), "default");
    }
}
