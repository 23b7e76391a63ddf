//! Viewport geometry snapshots consumed by the overlay positioner.
//!
//! Every value is a point-in-time measurement: rects go stale on scroll or resize, so callers
//! re-measure on demand instead of caching.

/// Viewport-relative bounding box of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Distance from the viewport top to the element's top edge.
    pub top: f64,
    /// Distance from the viewport left to the element's left edge.
    pub left: f64,
    /// Distance from the viewport left to the element's right edge.
    pub right: f64,
    /// Distance from the viewport top to the element's bottom edge.
    pub bottom: f64,
    /// Element width.
    pub width: f64,
    /// Element height.
    pub height: f64,
}

impl Rect {
    /// Build a rect from its top-left corner and size.
    #[must_use]
    pub fn from_origin(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Width and height of the rect.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Horizontal midpoint.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Measured overlay dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

/// Inner dimensions of the browser window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// `window.innerWidth`.
    pub width: f64,
    /// `window.innerHeight`.
    pub height: f64,
}

/// Absolute (`position: fixed`) placement of an overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Top offset in CSS pixels.
    pub top: f64,
    /// Left offset in CSS pixels.
    pub left: f64,
}

impl Coordinate {
    /// Inline style fragment for a fixed-position overlay.
    #[must_use]
    pub fn to_style(self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_origin_derives_edges() {
        let rect = Rect::from_origin(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.right, 110.0);
        assert_eq!(rect.bottom, 60.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 40.0);
        assert_eq!(
            rect.size(),
            Size {
                width: 100.0,
                height: 40.0
            }
        );
    }

    #[test]
    fn coordinate_renders_inline_style() {
        let coordinate = Coordinate {
            top: 148.0,
            left: 12.5,
        };
        assert_eq!(coordinate.to_style(), "top: 148px; left: 12.5px;");
    }
}
