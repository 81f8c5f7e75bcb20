//! Track builder - Split a container's children into tracks.
//!
//! A track is one row (or column) of items bounded by a wrap break. Tracks
//! are rebuilt on every pass; nothing here is cached between passes.

use crate::engine::{ElementId, ElementTree};
use crate::types::Coord;

use super::flex::FlexLayout;

/// Aggregate metrics of one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Track {
    pub item_count: usize,
    /// Fixed extents plus the gaps between them. Equals the available main
    /// size when the track has growing items.
    pub main_size: Coord,
    /// Largest cross extent of the track's items.
    pub cross_size: Coord,
    pub grow_sum: Coord,
    /// Pixels per unit of grow weight.
    pub grow_unit: Coord,
}

/// Collect the track that starts at child `start` of `cont`.
///
/// Returns the track and the index of the first child of the next track, or
/// `None` when the children are exhausted. Children that do not participate
/// in layout are skipped. A track always takes at least one item, even one
/// larger than `max_main`.
pub fn build_track(
    tree: &ElementTree,
    cont: ElementId,
    start: usize,
    main_gap: Coord,
    max_main: Coord,
) -> (Track, Option<usize>) {
    let Some(layout) = tree.get(cont).and_then(|el| el.layout().copied()) else {
        return (Track::default(), None);
    };
    let children = tree.children(cont);
    let dir = layout.direction;

    let mut track = Track::default();
    let mut fixed_items = 0;
    let mut grow_items = 0;

    let mut cursor = seek(tree, children, &layout, Some(start));
    while let Some(index) = cursor {
        let Some(item) = tree.get(children[index]) else {
            break;
        };
        let area = item.coords();

        match dir.main_dimension(item.width(), item.height()).grow_weight() {
            Some(weight) => {
                track.grow_sum += weight;
                grow_items += 1;
            }
            None => {
                // The item's own gap counts against the space when wrapping
                let size = dir.main_size(&area) + main_gap;
                if layout.wrap && track.item_count > 0 && track.main_size + size > max_main {
                    break;
                }
                track.main_size += size;
                fixed_items += 1;
            }
        }

        track.cross_size = track.cross_size.max(dir.cross_size(&area));
        track.item_count += 1;
        cursor = seek(tree, children, &layout, step(children, &layout, index));
    }

    // No gap after the last fixed item
    if fixed_items > 0 {
        track.main_size -= main_gap;
    }

    if track.grow_sum > 0 {
        let free = max_main - track.main_size - grow_items * main_gap;
        track.grow_unit = free / track.grow_sum;
        track.main_size = max_main;
    }

    (track, cursor)
}

/// Index of the first child in flow order.
pub(crate) fn first_index(children: &[ElementId], layout: &FlexLayout) -> Option<usize> {
    if children.is_empty() {
        None
    } else if layout.reverse {
        Some(children.len() - 1)
    } else {
        Some(0)
    }
}

/// Next index in flow order, participating or not.
pub(crate) fn step(children: &[ElementId], layout: &FlexLayout, index: usize) -> Option<usize> {
    if layout.reverse {
        index.checked_sub(1)
    } else {
        Some(index + 1).filter(|&next| next < children.len())
    }
}

/// First participating child at or after `cursor` in flow order.
pub(crate) fn seek(
    tree: &ElementTree,
    children: &[ElementId],
    layout: &FlexLayout,
    mut cursor: Option<usize>,
) -> Option<usize> {
    while let Some(index) = cursor {
        let participates = children
            .get(index)
            .and_then(|&id| tree.get(id))
            .is_some_and(|el| el.participates_in_layout());
        if participates {
            return Some(index);
        }
        cursor = if index < children.len() {
            step(children, layout, index)
        } else {
            None
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ElementFlags;
    use crate::layout::FlexFlow;
    use crate::types::Dimension;

    /// Container without a layout, so building tracks does not move anything.
    fn container(tree: &mut ElementTree, sizes: &[Dimension]) -> (ElementId, Vec<ElementId>) {
        let cont = tree.create(None).unwrap();
        tree.set_size(cont, Dimension::Px(100), Dimension::Px(100)).unwrap();
        let kids = sizes
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let kid = tree.create(Some(cont)).unwrap();
                tree.set_size(kid, width, Dimension::Px(10 + i as Coord)).unwrap();
                kid
            })
            .collect();
        (cont, kids)
    }

    fn with_layout(tree: &mut ElementTree, cont: ElementId, flow: FlexFlow) {
        // Store the layout without running it
        if let Some(el) = tree.get_mut(cont) {
            el.layout = Some(FlexLayout::new().with_flow(flow));
        }
    }

    #[test]
    fn test_single_track_without_wrap() {
        let mut tree = ElementTree::new();
        let (cont, _) = container(&mut tree, &[Dimension::Px(60); 3]);
        with_layout(&mut tree, cont, FlexFlow::ROW);

        let (track, next) = build_track(&tree, cont, 0, 5, 100);
        assert_eq!(next, None);
        assert_eq!(track.item_count, 3);
        assert_eq!(track.main_size, 60 * 3 + 5 * 2);
        assert_eq!(track.cross_size, 12);
    }

    #[test]
    fn test_wrap_breaks_before_overflowing_item() {
        let mut tree = ElementTree::new();
        let (cont, _) = container(&mut tree, &[Dimension::Px(40); 5]);
        with_layout(&mut tree, cont, FlexFlow::ROW_WRAP);

        let (first, next) = build_track(&tree, cont, 0, 10, 100);
        assert_eq!(first.item_count, 2);
        assert_eq!(first.main_size, 90);
        assert_eq!(next, Some(2));

        let (second, next) = build_track(&tree, cont, 2, 10, 100);
        assert_eq!(second.item_count, 2);
        assert_eq!(second.cross_size, 13);
        assert_eq!(next, Some(4));

        let (last, next) = build_track(&tree, cont, 4, 10, 100);
        assert_eq!(last.item_count, 1);
        assert_eq!(last.main_size, 40);
        assert_eq!(next, None);
    }

    #[test]
    fn test_wrap_counts_trailing_gap() {
        let mut tree = ElementTree::new();
        let (cont, _) = container(&mut tree, &[Dimension::Px(100); 3]);
        with_layout(&mut tree, cont, FlexFlow::ROW_WRAP);

        // 110 + 110 + 110 = 330 does not fit in 320
        let (first, next) = build_track(&tree, cont, 0, 10, 320);
        assert_eq!(first.item_count, 2);
        assert_eq!(first.main_size, 210);
        assert_eq!(next, Some(2));

        let (second, next) = build_track(&tree, cont, 2, 10, 320);
        assert_eq!(second.item_count, 1);
        assert_eq!(next, None);

        // Exactly 330 fits
        let (all, next) = build_track(&tree, cont, 0, 10, 330);
        assert_eq!(all.item_count, 3);
        assert_eq!(next, None);
    }

    #[test]
    fn test_oversized_item_forms_its_own_track() {
        let mut tree = ElementTree::new();
        let (cont, _) = container(&mut tree, &[Dimension::Px(150), Dimension::Px(20)]);
        with_layout(&mut tree, cont, FlexFlow::ROW_WRAP);

        let (track, next) = build_track(&tree, cont, 0, 0, 100);
        assert_eq!(track.item_count, 1);
        assert_eq!(track.main_size, 150);
        assert_eq!(next, Some(1));
    }

    #[test]
    fn test_grow_fills_remaining_space() {
        let mut tree = ElementTree::new();
        let (cont, _) = container(
            &mut tree,
            &[Dimension::Px(20), Dimension::Grow(1), Dimension::Grow(3)],
        );
        with_layout(&mut tree, cont, FlexFlow::ROW);

        let (track, _) = build_track(&tree, cont, 0, 4, 100);
        assert_eq!(track.grow_sum, 4);
        // 100 - 20 - 2 * 4 = 72 over 4 units
        assert_eq!(track.grow_unit, 18);
        assert_eq!(track.main_size, 100);
    }

    #[test]
    fn test_reverse_walks_backwards() {
        let mut tree = ElementTree::new();
        let (cont, _) = container(&mut tree, &[Dimension::Px(40); 3]);
        with_layout(&mut tree, cont, FlexFlow::ROW_WRAP_REVERSE);

        let (track, next) = build_track(&tree, cont, 2, 0, 80);
        assert_eq!(track.item_count, 2);
        assert_eq!(track.cross_size, 12);
        assert_eq!(next, Some(0));
    }

    #[test]
    fn test_skips_non_participating_children() {
        let mut tree = ElementTree::new();
        let (cont, kids) = container(&mut tree, &[Dimension::Px(30); 4]);
        tree.add_flag(kids[0], ElementFlags::HIDDEN).unwrap();
        tree.add_flag(kids[2], ElementFlags::IGNORE_LAYOUT).unwrap();
        with_layout(&mut tree, cont, FlexFlow::ROW);

        let (track, next) = build_track(&tree, cont, 0, 0, 100);
        assert_eq!(track.item_count, 2);
        assert_eq!(track.main_size, 60);
        assert_eq!(next, None);
    }

    #[test]
    fn test_no_participating_children() {
        let mut tree = ElementTree::new();
        let (cont, kids) = container(&mut tree, &[Dimension::Px(30)]);
        tree.add_flag(kids[0], ElementFlags::HIDDEN).unwrap();
        with_layout(&mut tree, cont, FlexFlow::ROW_WRAP);

        let (track, next) = build_track(&tree, cont, 0, 0, 100);
        assert_eq!(track, Track::default());
        assert_eq!(next, None);
    }
}
