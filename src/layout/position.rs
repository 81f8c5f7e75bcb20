//! Item positioner - Give every item of a track its final rectangle.

use crate::engine::{ElementId, ElementTree};
use crate::types::{Area, Coord};

use super::flex::{FlexLayout, FlexPlace};
use super::place::place_content;
use super::track::{Track, seek, step};

/// Per-container values shared by every track of one layout pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlexPass {
    pub layout: FlexLayout,
    /// Content box of the container, scroll applied.
    pub content: Area,
    pub max_main: Coord,
    pub max_cross: Coord,
    pub item_gap: Coord,
    pub track_gap: Coord,
    /// Row flow under a right-to-left base direction: mirror the main axis.
    pub rtl_row: bool,
    /// Column flow under a right-to-left base direction: mirror the cross axis.
    pub mirror_cross: bool,
}

/// Place the `track.item_count` participating items starting at child
/// `first`. `cross_pos` is the track's offset from the content origin along
/// the cross axis, already mirrored if needed.
pub(crate) fn reposition_track(
    tree: &mut ElementTree,
    pass: &FlexPass,
    children: &[ElementId],
    first: usize,
    cross_pos: Coord,
    track: &Track,
) {
    let layout = &pass.layout;
    let dir = layout.direction;
    let placement = place_content(
        layout.item_main_place,
        pass.max_main,
        track.main_size,
        track.item_count,
    );

    let mut main_pos = placement.offset;
    let mut cursor = seek(tree, children, layout, Some(first));
    let mut placed = 0;
    while placed < track.item_count {
        let Some(index) = cursor else { break };
        let id = children[index];
        let Some(item) = tree.get(id) else { break };
        let old = item.coords();

        let grow = dir.main_dimension(item.width(), item.height()).grow_weight();
        let mut area = old;
        if let Some(weight) = grow {
            dir.set_main_size(&mut area, weight * track.grow_unit);
        }
        let item_main = dir.main_size(&area);
        let item_cross = dir.cross_size(&area);

        let cross_place = if pass.mirror_cross {
            layout.item_cross_place.mirrored()
        } else {
            layout.item_cross_place
        };
        let cross_offset = match cross_place {
            FlexPlace::Center => (track.cross_size - item_cross) / 2,
            FlexPlace::End => track.cross_size - item_cross,
            _ => 0,
        };

        let (x, y) = if dir.is_row() {
            let main = if pass.rtl_row {
                pass.max_main - main_pos - item_main
            } else {
                main_pos
            };
            (pass.content.x1 + main, pass.content.y1 + cross_pos + cross_offset)
        } else {
            (pass.content.x1 + cross_pos + cross_offset, pass.content.y1 + main_pos)
        };

        if area != old {
            if let Some(item) = tree.get_mut(id) {
                item.coords = area;
            }
        }
        tree.translate_subtree(id, x - area.x1, y - area.y1);
        tree.notify_geometry(id, old);

        main_pos += item_main + pass.item_gap + placement.gap;
        placed += 1;
        cursor = seek(tree, children, layout, step(children, layout, index));
    }
}
