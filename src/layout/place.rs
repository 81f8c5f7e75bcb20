//! Content placement - Split free space into a leading offset and a gap.
//!
//! Used for items along the main axis of a track and for tracks along the
//! cross axis of a container. Integer division truncates; the remainder is
//! not redistributed.

use crate::types::Coord;

use super::flex::FlexPlace;

/// Leading offset and extra gap produced by [`place_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub offset: Coord,
    /// Added between neighbours on top of the configured gap.
    pub gap: Coord,
}

/// Place `item_count` items of total `content_size` in `axis_size`.
///
/// With one item or none, the distributing modes behave like `Center`.
/// Negative free space is passed through, so overflowing content gets a
/// negative offset or gap.
pub fn place_content(
    place: FlexPlace,
    axis_size: Coord,
    content_size: Coord,
    item_count: usize,
) -> Placement {
    let place = if item_count <= 1 && place.distributes() {
        FlexPlace::Center
    } else {
        place
    };

    let free = axis_size - content_size;
    let count = item_count as Coord;
    match place {
        FlexPlace::Start => Placement::default(),
        FlexPlace::Center => Placement { offset: free / 2, gap: 0 },
        FlexPlace::End => Placement { offset: free, gap: 0 },
        FlexPlace::SpaceBetween => Placement {
            offset: 0,
            gap: free / (count - 1),
        },
        FlexPlace::SpaceAround => {
            let gap = free / count;
            Placement { offset: gap / 2, gap }
        }
        FlexPlace::SpaceEvenly => {
            let gap = free / (count + 1);
            Placement { offset: gap, gap }
        }
    }
}
