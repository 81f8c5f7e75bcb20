//! Track positioner - The two-pass layout of one flex container.
//!
//! 1. **Pass 1**: Sum the cross sizes of all tracks and place the block of
//!    tracks along the cross axis (skipped when nothing depends on it)
//! 2. **Pass 2**: Rebuild each track and position its items

use crate::engine::{ElementId, ElementTree};
use crate::types::BaseDir;

use super::flex::FlexPlace;
use super::place::{Placement, place_content};
use super::position::{FlexPass, reposition_track};
use super::track::{build_track, first_index};

/// Lay out the children of `cont`. Does nothing if it has no flex layout.
pub(crate) fn flex_update(tree: &mut ElementTree, cont: ElementId) {
    let Some(el) = tree.get(cont) else { return };
    let Some(layout) = el.layout().copied() else { return };

    let dir = layout.direction;
    let content = el.content_area();
    let style = *el.style();
    let cross_auto = dir.cross_dimension(el.width(), el.height()).is_auto();
    let rtl = tree.base_dir(cont) == BaseDir::Rtl;

    // Row flows space items by column gap and tracks by row gap
    let (item_gap, track_gap) = if dir.is_row() {
        (style.column_gap, style.row_gap)
    } else {
        (style.row_gap, style.column_gap)
    };

    let pass = FlexPass {
        layout,
        content,
        max_main: dir.main_size(&content),
        max_cross: dir.cross_size(&content),
        item_gap,
        track_gap,
        rtl_row: rtl && dir.is_row(),
        mirror_cross: rtl && !dir.is_row(),
    };

    // An auto-sized cross axis wraps its tracks; there is nothing to place
    let track_place = if cross_auto {
        FlexPlace::Start
    } else {
        layout.track_place
    };

    let children = tree.children(cont).to_vec();
    let start = first_index(&children, &layout);

    // =========================================================================
    // Pass 1: total track size and cross-axis placement
    // =========================================================================

    let mut total_cross = 0;
    let mut track_count = 0;
    if track_place != FlexPlace::Start || pass.mirror_cross {
        let mut cursor = start;
        while let Some(index) = cursor {
            let (track, next) = build_track(tree, cont, index, item_gap, pass.max_main);
            if track.item_count == 0 {
                break;
            }
            total_cross += track.cross_size + track_gap;
            track_count += 1;
            cursor = next;
        }
        if track_count > 0 {
            total_cross -= track_gap;
        }
    }

    // Overflowing tracks stay at the start with no extra gap
    let placement = if track_place != FlexPlace::Start && total_cross < pass.max_cross {
        place_content(track_place, pass.max_cross, total_cross, track_count)
    } else {
        Placement::default()
    };
    let extent = pass.max_cross.max(total_cross);

    tracing::debug!(
        container = %cont,
        flow = ?layout.flow(),
        rtl,
        tracks = track_count,
        total_cross,
        "flex layout"
    );

    // =========================================================================
    // Pass 2: position tracks and items
    // =========================================================================

    let mut cross_pos = placement.offset;
    let mut cursor = start;
    while let Some(index) = cursor {
        let (track, next) = build_track(tree, cont, index, item_gap, pass.max_main);
        if track.item_count == 0 {
            break;
        }
        tracing::trace!(
            container = %cont,
            first = index,
            items = track.item_count,
            main = track.main_size,
            cross = track.cross_size,
            grow_unit = track.grow_unit,
            "track"
        );

        let track_pos = if pass.mirror_cross {
            extent - cross_pos - track.cross_size
        } else {
            cross_pos
        };
        reposition_track(tree, &pass, &children, index, track_pos, &track);

        cross_pos += track.cross_size + track_gap + placement.gap;
        cursor = next;
    }

    tree.refresh_auto_size(cont);
}
