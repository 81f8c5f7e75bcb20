//! Layout Module - Flex layout of element tree containers.
//!
//! # Architecture
//!
//! - `flex` - The per-container descriptor, flow word and presets
//! - `place` - Split free space into an offset and a gap
//! - `track` - Partition children into tracks and size them
//! - `position` - Assign item rectangles within a track
//! - `update` - Two-pass orchestration over the tracks
//!
//! The tree requests a pass whenever something a container's layout depends
//! on changes (children, sizes, style, direction, flags) and runs it while
//! settling. [`layout_update`] runs a pass on demand.
//!
//! # Example
//!
//! ```
//! use spark_flex::engine::ElementTree;
//! use spark_flex::layout::{FlexLayout, FlexPlace};
//! use spark_flex::types::Dimension;
//!
//! let mut tree = ElementTree::new();
//! let row = tree.create(None).unwrap();
//! tree.set_size(row, Dimension::Px(300), Dimension::Px(40)).unwrap();
//! tree.set_layout(
//!     row,
//!     Some(FlexLayout::new().with_place(FlexPlace::End, FlexPlace::Start, FlexPlace::Start)),
//! )
//! .unwrap();
//!
//! let button = tree.create(Some(row)).unwrap();
//! tree.set_size(button, Dimension::Px(100), Dimension::Px(40)).unwrap();
//! assert_eq!(tree.coords(button).unwrap().x1, 200);
//! ```

mod flex;
mod place;
mod position;
mod track;
mod update;

pub use flex::{FlexDirection, FlexFlow, FlexLayout, FlexPlace};
pub use place::{Placement, place_content};
pub use track::{Track, build_track};

use crate::engine::{ElementId, ElementTree};
use crate::error::{Result, TreeError};

/// Recompute the layout of `cont` and deliver the resulting events.
///
/// `changed` names the child that triggered the update, if any. The whole
/// container is always recomputed.
pub fn layout_update(
    tree: &mut ElementTree,
    cont: ElementId,
    changed: Option<ElementId>,
) -> Result<()> {
    if !tree.contains(cont) {
        return Err(TreeError::UnknownElement(cont));
    }
    tracing::trace!(container = %cont, changed = ?changed, "layout update");

    tree.pending_layout.retain(|&pending| pending != cont);
    run_layout(tree, cont);
    tree.settle();
    Ok(())
}

pub(crate) fn run_layout(tree: &mut ElementTree, cont: ElementId) {
    update::flex_update(tree, cont);
}
