//! Core types for spark-flex.
//!
//! Geometry primitives shared by the element tree and the layout engine.
//! All coordinates are absolute pixels on the target surface.

use serde::{Deserialize, Serialize};

/// Pixel coordinate. Signed so that overflowing layouts can go negative.
pub type Coord = i32;

// =============================================================================
// Point
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Area - inclusive rectangle
// =============================================================================

/// A rectangle with inclusive corners.
///
/// `width() == x2 - x1 + 1`, so an area of width 0 has `x2 == x1 - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Area {
    pub x1: Coord,
    pub y1: Coord,
    pub x2: Coord,
    pub y2: Coord,
}

impl Area {
    /// Create an area from its corners.
    pub const fn new(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create an area from a top-left corner and a size.
    pub const fn from_size(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width - 1,
            y2: y + height - 1,
        }
    }

    #[inline]
    pub const fn width(&self) -> Coord {
        self.x2 - self.x1 + 1
    }

    #[inline]
    pub const fn height(&self) -> Coord {
        self.y2 - self.y1 + 1
    }

    /// Resize horizontally, keeping `x1`.
    #[inline]
    pub fn set_width(&mut self, width: Coord) {
        self.x2 = self.x1 + width - 1;
    }

    /// Resize vertically, keeping `y1`.
    #[inline]
    pub fn set_height(&mut self, height: Coord) {
        self.y2 = self.y1 + height - 1;
    }

    #[inline]
    pub fn translate(&mut self, dx: Coord, dy: Coord) {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
    }

    /// True if the two areas differ in width or height (position ignored).
    #[inline]
    pub const fn size_differs(&self, other: &Area) -> bool {
        self.width() != other.width() || self.height() != other.height()
    }

    /// True if the area covers at least one pixel.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
}

// =============================================================================
// Dimension - requested size along one axis
// =============================================================================

/// Requested size of an element along one axis.
///
/// `Grow` is only meaningful on the main axis of a flex container's child:
/// the element receives `weight` shares of the track's free space. On any
/// other axis the current extent is kept.
///
/// ```
/// use spark_flex::types::Dimension;
///
/// let fixed = Dimension::Px(120);
/// let half = Dimension::Percent(50);
/// let fill = Dimension::Grow(1);
/// assert_eq!(fill.grow_weight(), Some(1));
/// assert_eq!(fixed.grow_weight(), None);
/// assert_ne!(half, Dimension::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    /// Fit the children plus padding.
    #[default]
    Auto,
    /// Absolute size in pixels.
    Px(Coord),
    /// Percentage of the parent's content box (0-100, larger values allowed).
    Percent(u16),
    /// Share of the free main-axis space of the parent's flex track.
    Grow(u16),
}

impl Dimension {
    /// Growth weight, if this is a growing size with a non-zero weight.
    #[inline]
    pub const fn grow_weight(&self) -> Option<Coord> {
        match *self {
            Self::Grow(weight) if weight > 0 => Some(weight as Coord),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    #[inline]
    pub const fn is_percent(&self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

impl From<Coord> for Dimension {
    fn from(value: Coord) -> Self {
        Self::Px(value)
    }
}

// =============================================================================
// Base direction
// =============================================================================

/// Base text direction of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseDir {
    Ltr,
    Rtl,
    /// Detect from content. Elements carry no text here, so this resolves to `Ltr`.
    Auto,
    /// Use the nearest ancestor's direction.
    #[default]
    Inherit,
}

impl BaseDir {
    /// Check if this is a concrete direction that stops inheritance.
    pub const fn is_explicit(&self) -> bool {
        !matches!(self, Self::Inherit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_size() {
        let area = Area::from_size(10, 20, 30, 40);
        assert_eq!(area.x2, 39);
        assert_eq!(area.y2, 59);
        assert_eq!(area.width(), 30);
        assert_eq!(area.height(), 40);
    }

    #[test]
    fn test_area_zero_size() {
        let area = Area::from_size(5, 5, 0, 0);
        assert_eq!(area.width(), 0);
        assert_eq!(area.height(), 0);
        assert!(!area.is_visible());
    }

    #[test]
    fn test_area_set_size_keeps_origin() {
        let mut area = Area::from_size(10, 10, 20, 20);
        area.set_width(50);
        area.set_height(5);
        assert_eq!(area, Area::from_size(10, 10, 50, 5));
    }

    #[test]
    fn test_area_translate() {
        let mut area = Area::from_size(0, 0, 10, 10);
        area.translate(-3, 7);
        assert_eq!(area, Area::new(-3, 7, 6, 16));
        assert!(!area.size_differs(&Area::from_size(100, 100, 10, 10)));
        assert!(area.size_differs(&Area::from_size(0, 0, 11, 10)));
    }

    #[test]
    fn test_dimension_grow_weight() {
        assert_eq!(Dimension::Grow(3).grow_weight(), Some(3));
        assert_eq!(Dimension::Grow(0).grow_weight(), None);
        assert_eq!(Dimension::Px(3).grow_weight(), None);
        assert_eq!(Dimension::Auto.grow_weight(), None);
    }

    #[test]
    fn test_dimension_from_coord() {
        assert_eq!(Dimension::from(42), Dimension::Px(42));
        assert_eq!(Dimension::default(), Dimension::Auto);
    }
}
