//! Element - Persistent node of the element tree.
//!
//! Each element lives in one arena slot for its whole lifetime. It carries the
//! size request, resolved style and flags the layout engine reads, and the
//! rectangle the engine writes.

use serde::{Deserialize, Serialize};

use crate::layout::FlexLayout;
use crate::types::{Area, BaseDir, Coord, Dimension, Point};

use super::ElementId;

// =============================================================================
// Flags
// =============================================================================

bitflags::bitflags! {
    /// Per-element behavior flags.
    ///
    /// Combine with bitwise OR: `ElementFlags::HIDDEN | ElementFlags::IGNORE_LAYOUT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct ElementFlags: u8 {
        const NONE = 0;
        /// Not drawn and not laid out.
        const HIDDEN = 1 << 0;
        /// Drawn, but positioned manually instead of by the parent's layout.
        const IGNORE_LAYOUT = 1 << 1;
    }
}

// =============================================================================
// Style
// =============================================================================

/// Resolved style values the layout reads.
///
/// The cascade that produces these lives outside this crate; the tree only
/// stores the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub pad_top: Coord,
    pub pad_bottom: Coord,
    pub pad_left: Coord,
    pub pad_right: Coord,
    /// Gap between rows: between tracks of a row flow, between items of a column flow.
    pub row_gap: Coord,
    /// Gap between columns: between items of a row flow, between tracks of a column flow.
    pub column_gap: Coord,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            pad_top: 0,
            pad_bottom: 0,
            pad_left: 0,
            pad_right: 0,
            row_gap: 0,
            column_gap: 0,
        }
    }

    /// Same padding on all four sides.
    pub const fn with_padding(mut self, pad: Coord) -> Self {
        self.pad_top = pad;
        self.pad_bottom = pad;
        self.pad_left = pad;
        self.pad_right = pad;
        self
    }

    pub const fn with_gap(mut self, row_gap: Coord, column_gap: Coord) -> Self {
        self.row_gap = row_gap;
        self.column_gap = column_gap;
        self
    }

    #[inline]
    pub const fn pad_horizontal(&self) -> Coord {
        self.pad_left + self.pad_right
    }

    #[inline]
    pub const fn pad_vertical(&self) -> Coord {
        self.pad_top + self.pad_bottom
    }
}

// =============================================================================
// Element
// =============================================================================

/// One node of the element tree.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) coords: Area,
    pub(crate) width: Dimension,
    pub(crate) height: Dimension,
    /// Requested position relative to the parent's content origin.
    pub(crate) pos: Point,
    pub(crate) style: Style,
    pub(crate) flags: ElementFlags,
    pub(crate) base_dir: BaseDir,
    pub(crate) scroll: Point,
    pub(crate) layout: Option<FlexLayout>,
}

impl Element {
    pub(crate) fn new(parent: Option<ElementId>, origin: Point) -> Self {
        Self {
            parent,
            children: Vec::new(),
            coords: Area::from_size(origin.x, origin.y, 0, 0),
            width: Dimension::Auto,
            height: Dimension::Auto,
            pos: Point::default(),
            style: Style::new(),
            flags: ElementFlags::NONE,
            base_dir: BaseDir::Inherit,
            scroll: Point::default(),
            layout: None,
        }
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Current absolute rectangle.
    pub fn coords(&self) -> Area {
        self.coords
    }

    /// Requested width.
    pub fn width(&self) -> Dimension {
        self.width
    }

    /// Requested height.
    pub fn height(&self) -> Dimension {
        self.height
    }

    /// Position last requested with `set_pos`.
    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn flags(&self) -> ElementFlags {
        self.flags
    }

    pub fn has_flag(&self, flag: ElementFlags) -> bool {
        self.flags.intersects(flag)
    }

    /// The direction set on this element, before inheritance is resolved.
    pub fn own_base_dir(&self) -> BaseDir {
        self.base_dir
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }

    pub fn layout(&self) -> Option<&FlexLayout> {
        self.layout.as_ref()
    }

    /// Whether the parent's layout positions this element.
    pub fn participates_in_layout(&self) -> bool {
        !self.flags.intersects(ElementFlags::HIDDEN | ElementFlags::IGNORE_LAYOUT)
    }

    /// Content box: coords minus padding, shifted by the scroll offset.
    pub fn content_area(&self) -> Area {
        Area::from_size(
            self.coords.x1 + self.style.pad_left - self.scroll.x,
            self.coords.y1 + self.style.pad_top - self.scroll.y,
            self.coords.width() - self.style.pad_horizontal(),
            self.coords.height() - self.style.pad_vertical(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_creation() {
        let el = Element::new(None, Point::new(4, 8));
        assert_eq!(el.coords().x1, 4);
        assert_eq!(el.coords().y1, 8);
        assert_eq!(el.coords().width(), 0);
        assert_eq!(el.width(), Dimension::Auto);
        assert_eq!(el.own_base_dir(), BaseDir::Inherit);
        assert!(el.participates_in_layout());
    }

    #[test]
    fn test_element_flags_opt_out() {
        let mut el = Element::new(None, Point::default());
        el.flags = ElementFlags::IGNORE_LAYOUT;
        assert!(!el.participates_in_layout());

        el.flags = ElementFlags::HIDDEN;
        assert!(!el.participates_in_layout());
        assert!(el.has_flag(ElementFlags::HIDDEN | ElementFlags::IGNORE_LAYOUT));
    }

    #[test]
    fn test_content_area() {
        let mut el = Element::new(None, Point::default());
        el.coords = Area::from_size(10, 20, 100, 50);
        el.style = Style::new().with_padding(5);
        el.scroll = Point::new(0, 3);

        let content = el.content_area();
        assert_eq!(content.x1, 15);
        assert_eq!(content.y1, 22);
        assert_eq!(content.width(), 90);
        assert_eq!(content.height(), 40);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::new().with_padding(2).with_gap(4, 6);
        assert_eq!(style.pad_horizontal(), 4);
        assert_eq!(style.pad_vertical(), 4);
        assert_eq!(style.row_gap, 4);
        assert_eq!(style.column_gap, 6);
    }
}
