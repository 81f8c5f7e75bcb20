//! Errors raised by the element tree.
//!
//! The flex algorithm itself has no failure channel; only tree operations
//! handed a stale id or an impossible parent can fail.

use crate::engine::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("element {0} does not exist")]
    UnknownElement(ElementId),

    #[error("cannot move element {child} under its own descendant {parent}")]
    CyclicParent { child: ElementId, parent: ElementId },
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
