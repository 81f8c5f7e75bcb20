//! # spark-flex
//!
//! Retained-mode flex layout for trees of rectangular UI elements.
//!
//! ## Architecture
//!
//! Elements live in an [`ElementTree`] arena and are addressed by
//! generational [`ElementId`]s. A container with a [`FlexLayout`] places its
//! children in tracks:
//! ```text
//! tree mutation → pending layout → track builder → item positioner → geometry events
//! ```
//!
//! Geometry events are queued while a pass runs and delivered once it is done.
//! Listeners may mutate the tree; the resulting work is settled before the
//! mutating call returns.
//!
//! ## Modules
//!
//! - [`types`] - Geometry primitives (Area, Dimension, BaseDir)
//! - [`engine`] - Element tree, styles, flags, geometry events
//! - [`layout`] - Flex descriptor, track builder, positioners
//! - [`error`] - Errors raised by tree operations

pub mod engine;
pub mod error;
pub mod layout;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Result, TreeError};

pub use engine::{
    Element, ElementFlags, ElementId, ElementTree, GeometryEvent, GeometryListener, Style,
};

pub use layout::{
    FlexDirection, FlexFlow, FlexLayout, FlexPlace, Placement, Track, build_track,
    layout_update, place_content,
};
