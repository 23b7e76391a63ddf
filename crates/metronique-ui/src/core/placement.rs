//! Named overlay placements relative to an anchor element.

/// Side of the anchor an overlay is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

/// Requested anchor side and cross-axis alignment for a tooltip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Above, centered.
    Top,
    /// Above, aligned to the anchor's left edge.
    TopLeft,
    /// Above, aligned to the anchor's right edge.
    TopRight,
    /// Below, centered.
    #[default]
    Bottom,
    /// Below, aligned to the anchor's left edge.
    BottomLeft,
    /// Below, aligned to the anchor's right edge.
    BottomRight,
    /// Left, vertically centered.
    Left,
    /// Left, aligned to the anchor's top edge.
    LeftTop,
    /// Left, aligned to the anchor's bottom edge.
    LeftBottom,
    /// Right, vertically centered.
    Right,
    /// Right, aligned to the anchor's top edge.
    RightTop,
    /// Right, aligned to the anchor's bottom edge.
    RightBottom,
}

impl Placement {
    /// Every placement in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 12] {
        [
            Self::Top,
            Self::TopLeft,
            Self::TopRight,
            Self::Bottom,
            Self::BottomLeft,
            Self::BottomRight,
            Self::Left,
            Self::LeftTop,
            Self::LeftBottom,
            Self::Right,
            Self::RightTop,
            Self::RightBottom,
        ]
    }

    /// Kebab-case name used in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Left => "left",
            Self::LeftTop => "left-top",
            Self::LeftBottom => "left-bottom",
            Self::Right => "right",
            Self::RightTop => "right-top",
            Self::RightBottom => "right-bottom",
        }
    }

    /// Parse a kebab-case placement name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|placement| placement.as_str() == value.trim())
    }

    /// Parse a markup attribute, falling back to [`Placement::Bottom`].
    #[must_use]
    pub fn from_attr(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Anchor side the placement attaches to.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Side::Top,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Side::Bottom,
            Self::Left | Self::LeftTop | Self::LeftBottom => Side::Left,
            Self::Right | Self::RightTop | Self::RightBottom => Side::Right,
        }
    }

    /// Same alignment mirrored onto the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::TopLeft => Self::BottomLeft,
            Self::TopRight => Self::BottomRight,
            Self::Bottom => Self::Top,
            Self::BottomLeft => Self::TopLeft,
            Self::BottomRight => Self::TopRight,
            Self::Left => Self::Right,
            Self::LeftTop => Self::RightTop,
            Self::LeftBottom => Self::RightBottom,
            Self::Right => Self::Left,
            Self::RightTop => Self::LeftTop,
            Self::RightBottom => Self::LeftBottom,
        }
    }
}

/// Resolved vertical side of a dropdown panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalPlacement {
    /// Panel opens above the trigger.
    Top,
    /// Panel opens below the trigger.
    #[default]
    Bottom,
}

impl VerticalPlacement {
    /// Name used in `data-placement` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}
