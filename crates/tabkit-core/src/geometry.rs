#![forbid(unsafe_code)]

//! Geometric primitives in host pixel space.
//!
//! The host measures nav items and the nav container (bounding boxes,
//! computed padding) and feeds the results in as [`Rect`]s. All math is
//! `f64` because fractional pixel sizes are common under DPI scaling.

/// A rectangle in host pixels, origin at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Leading edge along an axis: left for horizontal, top for vertical.
    #[inline]
    #[must_use]
    pub const fn leading(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Extent along an axis: width for horizontal, height for vertical.
    #[inline]
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Trailing edge along an axis.
    #[inline]
    #[must_use]
    pub fn trailing(&self, axis: Axis) -> f64 {
        self.leading(axis) + self.extent(axis)
    }
}

/// Sides for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// Create new sides with equal values.
    #[must_use]
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with specific values.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Padding at the start of an axis: left for horizontal, top for
    /// vertical. Inline padding shifts the coordinate origin of items
    /// inside a container, so indicator math subtracts this.
    #[inline]
    #[must_use]
    pub const fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }
}

/// The direction nav items are laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Where the nav strip sits relative to the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum TabPosition {
    /// Nav strip above the content.
    #[default]
    Top,
    /// Nav strip below the content.
    Bottom,
    /// Nav strip to the left of the content.
    Left,
    /// Nav strip to the right of the content.
    Right,
}

impl TabPosition {
    /// The axis items are laid out along for this position.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Horizontal,
            Self::Left | Self::Right => Axis::Vertical,
        }
    }
}
