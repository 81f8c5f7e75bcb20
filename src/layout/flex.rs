//! Flex descriptor - What a container asks of its layout.
//!
//! A container with a [`FlexLayout`] positions its participating children in
//! tracks. The descriptor is plain data; it can be built in code, taken from
//! one of the presets or deserialized from a theme document.

use serde::{Deserialize, Serialize};

use crate::types::{Area, Coord, Dimension};

// =============================================================================
// Direction
// =============================================================================

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    #[inline]
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row)
    }

    /// Extent of `area` along the main axis.
    #[inline]
    pub const fn main_size(&self, area: &Area) -> Coord {
        match self {
            Self::Row => area.width(),
            Self::Column => area.height(),
        }
    }

    /// Extent of `area` along the cross axis.
    #[inline]
    pub const fn cross_size(&self, area: &Area) -> Coord {
        match self {
            Self::Row => area.height(),
            Self::Column => area.width(),
        }
    }

    /// Resize `area` along the main axis, keeping its origin.
    #[inline]
    pub fn set_main_size(&self, area: &mut Area, size: Coord) {
        match self {
            Self::Row => area.set_width(size),
            Self::Column => area.set_height(size),
        }
    }

    /// Pick the main-axis entry of a `(width, height)` pair.
    #[inline]
    pub const fn main_dimension(&self, width: Dimension, height: Dimension) -> Dimension {
        match self {
            Self::Row => width,
            Self::Column => height,
        }
    }

    /// Pick the cross-axis entry of a `(width, height)` pair.
    #[inline]
    pub const fn cross_dimension(&self, width: Dimension, height: Dimension) -> Dimension {
        match self {
            Self::Row => height,
            Self::Column => width,
        }
    }
}

// =============================================================================
// Placement
// =============================================================================

/// How free space along an axis is handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexPlace {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl FlexPlace {
    /// Modes that spread free space between items instead of moving the block.
    pub const fn distributes(&self) -> bool {
        matches!(self, Self::SpaceBetween | Self::SpaceAround | Self::SpaceEvenly)
    }

    /// Swap `Start` and `End`; other modes are symmetric.
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
            other => other,
        }
    }
}

// =============================================================================
// Flow word
// =============================================================================

bitflags::bitflags! {
    /// Packed flow setting: direction plus wrap and reverse modifiers.
    ///
    /// `ROW` is the empty set, so `FlexFlow::ROW_WRAP == FlexFlow::WRAP`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct FlexFlow: u8 {
        const ROW = 0;
        const COLUMN = 1 << 0;
        const WRAP = 1 << 2;
        const REVERSE = 1 << 3;

        const ROW_WRAP = Self::ROW.bits() | Self::WRAP.bits();
        const ROW_REVERSE = Self::ROW.bits() | Self::REVERSE.bits();
        const ROW_WRAP_REVERSE = Self::ROW_WRAP.bits() | Self::REVERSE.bits();
        const COLUMN_WRAP = Self::COLUMN.bits() | Self::WRAP.bits();
        const COLUMN_REVERSE = Self::COLUMN.bits() | Self::REVERSE.bits();
        const COLUMN_WRAP_REVERSE = Self::COLUMN_WRAP.bits() | Self::REVERSE.bits();
    }
}

// =============================================================================
// Layout descriptor
// =============================================================================

/// Flex settings of one container.
///
/// ```
/// use spark_flex::layout::{FlexFlow, FlexLayout, FlexPlace};
///
/// let toolbar = FlexLayout::new()
///     .with_flow(FlexFlow::ROW_WRAP)
///     .with_place(FlexPlace::SpaceBetween, FlexPlace::Center, FlexPlace::Start);
/// assert!(toolbar.wrap);
/// assert_eq!(toolbar.flow(), FlexFlow::ROW_WRAP);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexLayout {
    pub direction: FlexDirection,
    pub wrap: bool,
    /// Walk children last to first.
    pub reverse: bool,
    /// Placement of items along the main axis of their track.
    pub item_main_place: FlexPlace,
    /// Placement of each item across its track.
    pub item_cross_place: FlexPlace,
    /// Placement of the tracks along the container's cross axis.
    pub track_place: FlexPlace,
}

impl FlexLayout {
    /// Centered wrapping row.
    pub const CENTER: Self = Self {
        direction: FlexDirection::Row,
        wrap: true,
        reverse: false,
        item_main_place: FlexPlace::Center,
        item_cross_place: FlexPlace::Center,
        track_place: FlexPlace::Center,
    };

    /// Column stacked from the top.
    pub const STACKED: Self = Self {
        direction: FlexDirection::Column,
        wrap: false,
        reverse: false,
        item_main_place: FlexPlace::Start,
        item_cross_place: FlexPlace::Start,
        track_place: FlexPlace::Start,
    };

    /// Evenly spaced wrapping row.
    pub const EVEN: Self = Self {
        direction: FlexDirection::Row,
        wrap: true,
        reverse: false,
        item_main_place: FlexPlace::SpaceEvenly,
        item_cross_place: FlexPlace::Center,
        track_place: FlexPlace::Center,
    };

    /// Row, no wrap, everything at the start.
    pub const fn new() -> Self {
        Self {
            direction: FlexDirection::Row,
            wrap: false,
            reverse: false,
            item_main_place: FlexPlace::Start,
            item_cross_place: FlexPlace::Start,
            track_place: FlexPlace::Start,
        }
    }

    pub fn set_flow(&mut self, flow: FlexFlow) {
        self.direction = if flow.contains(FlexFlow::COLUMN) {
            FlexDirection::Column
        } else {
            FlexDirection::Row
        };
        self.wrap = flow.contains(FlexFlow::WRAP);
        self.reverse = flow.contains(FlexFlow::REVERSE);
    }

    pub fn with_flow(mut self, flow: FlexFlow) -> Self {
        self.set_flow(flow);
        self
    }

    /// Packed flow word of this layout.
    pub fn flow(&self) -> FlexFlow {
        let mut flow = FlexFlow::ROW;
        flow.set(FlexFlow::COLUMN, !self.direction.is_row());
        flow.set(FlexFlow::WRAP, self.wrap);
        flow.set(FlexFlow::REVERSE, self.reverse);
        flow
    }

    pub const fn with_place(
        mut self,
        item_main_place: FlexPlace,
        item_cross_place: FlexPlace,
        track_place: FlexPlace,
    ) -> Self {
        self.item_main_place = item_main_place;
        self.item_cross_place = item_cross_place;
        self.track_place = track_place;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = FlexLayout::default();
        assert_eq!(layout, FlexLayout::new());
        assert_eq!(layout.flow(), FlexFlow::ROW);
        assert_eq!(layout.track_place, FlexPlace::Start);
    }

    #[test]
    fn test_flow_word() {
        let mut layout = FlexLayout::new();
        layout.set_flow(FlexFlow::COLUMN_WRAP_REVERSE);
        assert_eq!(layout.direction, FlexDirection::Column);
        assert!(layout.wrap);
        assert!(layout.reverse);
        assert_eq!(layout.flow(), FlexFlow::COLUMN_WRAP_REVERSE);

        layout.set_flow(FlexFlow::ROW_WRAP);
        assert!(layout.direction.is_row());
        assert!(!layout.reverse);
        assert_eq!(layout.flow(), FlexFlow::WRAP);
    }

    #[test]
    fn test_presets() {
        assert_eq!(FlexLayout::CENTER.flow(), FlexFlow::ROW_WRAP);
        assert_eq!(FlexLayout::CENTER.item_main_place, FlexPlace::Center);

        assert_eq!(FlexLayout::STACKED.flow(), FlexFlow::COLUMN);
        assert_eq!(FlexLayout::STACKED.item_cross_place, FlexPlace::Start);

        assert_eq!(FlexLayout::EVEN.item_main_place, FlexPlace::SpaceEvenly);
        assert_eq!(FlexLayout::EVEN.track_place, FlexPlace::Center);
    }

    #[test]
    fn test_place_mirrored() {
        assert_eq!(FlexPlace::Start.mirrored(), FlexPlace::End);
        assert_eq!(FlexPlace::End.mirrored(), FlexPlace::Start);
        assert_eq!(FlexPlace::Center.mirrored(), FlexPlace::Center);
        assert!(FlexPlace::SpaceAround.distributes());
        assert!(!FlexPlace::End.distributes());
    }

    #[test]
    fn test_direction_axes() {
        let area = Area::from_size(0, 0, 40, 10);
        assert_eq!(FlexDirection::Row.main_size(&area), 40);
        assert_eq!(FlexDirection::Column.main_size(&area), 10);
        assert_eq!(FlexDirection::Column.cross_size(&area), 40);

        let mut area = area;
        FlexDirection::Column.set_main_size(&mut area, 25);
        assert_eq!(area.height(), 25);
        assert_eq!(area.width(), 40);
    }
}
