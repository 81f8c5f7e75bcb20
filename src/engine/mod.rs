//! Engine Module - The retained element tree.
//!
//! - `tree` - Arena of elements with generational ids and the mutators
//! - `element` - Per-element data the layout reads and writes
//! - `events` - Geometry change notifications and the settle loop

mod element;
mod events;
mod tree;

pub use element::{Element, ElementFlags, Style};
pub use events::{GeometryEvent, GeometryListener};
pub use tree::{ElementId, ElementTree};
