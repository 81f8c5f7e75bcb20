//! Element Tree - Arena of elements addressed by generational ids.
//!
//! Manages the lifecycle of elements:
//! - Slot allocation with a free pool for O(1) reuse
//! - Generation counters so ids of deleted elements are rejected
//! - Parent/child storage (child order is the flex order)
//! - Mutators that request a re-layout of every container they affect
//!
//! Every mutator finishes by settling the tree: pending layouts run and the
//! geometry events they queue are flushed before the call returns.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{Result, TreeError};
use crate::layout::FlexLayout;
use crate::types::{Area, BaseDir, Coord, Dimension, Point};

use super::element::{Element, ElementFlags, Style};
use super::events::{GeometryEvent, GeometryListener};

// =============================================================================
// Element ids
// =============================================================================

/// Handle to an element of an [`ElementTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    index: u32,
    generation: u32,
}

impl ElementId {
    /// Slot index inside the arena.
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

struct Slot {
    generation: u32,
    element: Option<Element>,
}

// =============================================================================
// Tree
// =============================================================================

/// Retained tree of rectangular elements.
#[derive(Default)]
pub struct ElementTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    pub(crate) events: VecDeque<GeometryEvent>,
    pub(crate) pending_layout: Vec<ElementId>,
    pub(crate) listeners: Vec<GeometryListener>,
    pub(crate) invalidated: Vec<Area>,
    pub(crate) settling: bool,
}

impl fmt::Debug for ElementTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementTree")
            .field("live", &self.live)
            .field("capacity", &self.slots.len())
            .field("pending_layout", &self.pending_layout)
            .field("queued_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    fn require(&self, id: ElementId) -> Result<&Element> {
        self.get(id).ok_or(TreeError::UnknownElement(id))
    }

    fn require_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.get_mut(id).ok_or(TreeError::UnknownElement(id))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(Element::parent)
    }

    /// Children in flex order. Empty for unknown ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(Element::children).unwrap_or(&[])
    }

    pub fn child(&self, id: ElementId, index: usize) -> Option<ElementId> {
        self.children(id).get(index).copied()
    }

    /// Position of `id` among its siblings.
    pub fn child_index(&self, id: ElementId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&child| child == id)
    }

    pub fn coords(&self, id: ElementId) -> Option<Area> {
        self.get(id).map(Element::coords)
    }

    pub fn content_area(&self, id: ElementId) -> Option<Area> {
        self.get(id).map(Element::content_area)
    }

    /// Resolved base direction: `Ltr` or `Rtl`.
    ///
    /// Walks up through `Inherit` ancestors. `Auto` and an unresolved root
    /// both resolve to `Ltr`.
    pub fn base_dir(&self, id: ElementId) -> BaseDir {
        let mut cursor = self.get(id);
        while let Some(el) = cursor {
            match el.base_dir {
                BaseDir::Rtl => return BaseDir::Rtl,
                BaseDir::Ltr | BaseDir::Auto => return BaseDir::Ltr,
                BaseDir::Inherit => cursor = el.parent.and_then(|p| self.get(p)),
            }
        }
        BaseDir::Ltr
    }

    /// True if `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Create an element as the last child of `parent`, or a root if `None`.
    ///
    /// The element starts at the parent's content origin with `Auto` size.
    pub fn create(&mut self, parent: Option<ElementId>) -> Result<ElementId> {
        let origin = match parent {
            Some(p) => {
                let content = self.require(p)?.content_area();
                Point::new(content.x1, content.y1)
            }
            None => Point::default(),
        };

        let element = Element::new(parent, origin);
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.element = Some(element);
                ElementId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    element: Some(element),
                });
                ElementId {
                    index,
                    generation: 0,
                }
            }
        };
        self.live += 1;

        if let Some(p) = parent {
            if let Some(parent_el) = self.get_mut(p) {
                parent_el.children.push(id);
            }
            self.child_changed(p, Some(id));
        }

        tracing::trace!(element = %id, parent = ?parent, "element created");
        self.settle();
        Ok(id)
    }

    /// Delete an element and all of its descendants.
    pub fn delete(&mut self, id: ElementId) -> Result<()> {
        let el = self.require(id)?;
        let parent = el.parent;
        let area = el.coords;

        self.release(id);
        if let Some(p) = parent {
            if let Some(parent_el) = self.get_mut(p) {
                parent_el.children.retain(|&child| child != id);
            }
            self.child_changed(p, None);
        }
        self.invalidate(area);

        let slots = &self.slots;
        self.pending_layout.retain(|pending| {
            slots
                .get(pending.index())
                .is_some_and(|slot| slot.generation == pending.generation && slot.element.is_some())
        });

        self.settle();
        Ok(())
    }

    /// Free `id` and its subtree. Children first.
    fn release(&mut self, id: ElementId) {
        let children = match self.get_mut(id) {
            Some(el) => std::mem::take(&mut el.children),
            None => return,
        };
        for child in children {
            self.release(child);
        }

        let slot = &mut self.slots[id.index()];
        slot.element = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
    }

    /// Move `id` to the end of `parent`'s children, keeping its offset from
    /// the content origin.
    pub fn set_parent(&mut self, id: ElementId, parent: ElementId) -> Result<()> {
        let old_parent = self.require(id)?.parent;
        let new_content = self.require(parent)?.content_area();
        if self.is_ancestor_or_self(id, parent) {
            return Err(TreeError::CyclicParent { child: id, parent });
        }
        if old_parent == Some(parent) {
            return Ok(());
        }

        let old_origin = match old_parent.and_then(|p| self.content_area(p)) {
            Some(content) => Point::new(content.x1, content.y1),
            None => Point::default(),
        };

        if let Some(p) = old_parent {
            if let Some(old_el) = self.get_mut(p) {
                old_el.children.retain(|&child| child != id);
            }
        }
        if let Some(new_el) = self.get_mut(parent) {
            new_el.children.push(id);
        }
        if let Some(el) = self.get_mut(id) {
            el.parent = Some(parent);
        }

        let old = self.coords(id).unwrap_or_default();
        self.translate_subtree(id, new_content.x1 - old_origin.x, new_content.y1 - old_origin.y);
        self.notify_geometry(id, old);

        if let Some(p) = old_parent {
            self.child_changed(p, None);
        }
        self.child_changed(parent, Some(id));
        self.refresh_size(id);
        self.settle();
        Ok(())
    }

    /// Move `id` to position `index` among its siblings (clamped).
    pub fn move_to_index(&mut self, id: ElementId, index: usize) -> Result<()> {
        let Some(parent) = self.require(id)?.parent else {
            return Ok(());
        };
        let Some(parent_el) = self.get_mut(parent) else {
            return Ok(());
        };
        let Some(current) = parent_el.children.iter().position(|&child| child == id) else {
            return Ok(());
        };
        let child = parent_el.children.remove(current);
        let index = index.min(parent_el.children.len());
        parent_el.children.insert(index, child);

        if current != index {
            self.child_changed(parent, Some(id));
            self.settle();
        }
        Ok(())
    }

    // =========================================================================
    // Size and position
    // =========================================================================

    pub fn set_size(&mut self, id: ElementId, width: Dimension, height: Dimension) -> Result<()> {
        let el = self.require_mut(id)?;
        if el.width == width && el.height == height {
            return Ok(());
        }
        el.width = width;
        el.height = height;
        let parent = el.parent;

        self.refresh_size(id);
        if let Some(p) = parent {
            self.child_changed(p, Some(id));
        }
        self.settle();
        Ok(())
    }

    pub fn set_width(&mut self, id: ElementId, width: Dimension) -> Result<()> {
        let height = self.require(id)?.height;
        self.set_size(id, width, height)
    }

    pub fn set_height(&mut self, id: ElementId, height: Dimension) -> Result<()> {
        let width = self.require(id)?.width;
        self.set_size(id, width, height)
    }

    /// Place `id` at `(x, y)` relative to its parent's content origin.
    ///
    /// Elements positioned by their parent's layout are moved back by the
    /// next layout pass.
    pub fn set_pos(&mut self, id: ElementId, x: Coord, y: Coord) -> Result<()> {
        let el = self.require_mut(id)?;
        el.pos = Point::new(x, y);
        let parent = el.parent;
        let participates = el.participates_in_layout();
        let old = el.coords;

        let origin = match parent.and_then(|p| self.content_area(p)) {
            Some(content) => Point::new(content.x1, content.y1),
            None => Point::default(),
        };
        self.translate_subtree(id, origin.x + x - old.x1, origin.y + y - old.y1);
        self.notify_geometry(id, old);

        if let Some(p) = parent {
            let laid_out = self.get(p).is_some_and(|pe| pe.layout.is_some());
            if participates && laid_out {
                self.child_changed(p, Some(id));
            } else {
                self.refresh_auto_size(p);
            }
        }
        self.settle();
        Ok(())
    }

    /// Shift `id` and all of its descendants. No layout runs and no event is
    /// queued: descendants keep their layout relative to `id`.
    pub fn translate_subtree(&mut self, id: ElementId, dx: Coord, dy: Coord) {
        if dx == 0 && dy == 0 {
            return;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(el) = self.get_mut(current) {
                el.coords.translate(dx, dy);
                stack.extend(el.children.iter().copied());
            }
        }
    }

    /// Scroll the content of `id`. Children shift by the opposite amount.
    pub fn scroll_by(&mut self, id: ElementId, dx: Coord, dy: Coord) -> Result<()> {
        let el = self.require_mut(id)?;
        el.scroll.x += dx;
        el.scroll.y += dy;
        let children = el.children.clone();
        let area = el.coords;

        for child in children {
            self.translate_subtree(child, -dx, -dy);
        }
        self.invalidate(area);
        Ok(())
    }

    // =========================================================================
    // Style, layout, direction, flags
    // =========================================================================

    pub fn set_style(&mut self, id: ElementId, style: Style) -> Result<()> {
        let el = self.require_mut(id)?;
        if el.style == style {
            return Ok(());
        }
        el.style = style;

        self.refresh_percent_children(id);
        self.refresh_auto_size(id);
        self.request_layout(id);
        self.settle();
        Ok(())
    }

    pub fn set_layout(&mut self, id: ElementId, layout: Option<FlexLayout>) -> Result<()> {
        self.require_mut(id)?.layout = layout;
        self.request_layout(id);
        self.settle();
        Ok(())
    }

    /// Set the base direction and re-lay out every element that inherits it.
    pub fn set_base_dir(&mut self, id: ElementId, dir: BaseDir) -> Result<()> {
        self.require_mut(id)?.base_dir = dir;

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(el) = self.get(current) else { continue };
            let inheriting: Vec<ElementId> = el
                .children
                .iter()
                .copied()
                .filter(|&child| self.get(child).is_some_and(|c| !c.base_dir.is_explicit()))
                .collect();
            if el.layout.is_some() {
                self.request_layout(current);
            }
            stack.extend(inheriting);
        }
        self.settle();
        Ok(())
    }

    pub fn add_flag(&mut self, id: ElementId, flags: ElementFlags) -> Result<()> {
        let el = self.require_mut(id)?;
        let updated = el.flags | flags;
        self.update_flags(id, updated)
    }

    pub fn clear_flag(&mut self, id: ElementId, flags: ElementFlags) -> Result<()> {
        let el = self.require_mut(id)?;
        let updated = el.flags - flags;
        self.update_flags(id, updated)
    }

    pub fn has_flag(&self, id: ElementId, flags: ElementFlags) -> bool {
        self.get(id).is_some_and(|el| el.has_flag(flags))
    }

    fn update_flags(&mut self, id: ElementId, flags: ElementFlags) -> Result<()> {
        let el = self.require_mut(id)?;
        if el.flags == flags {
            return Ok(());
        }
        el.flags = flags;
        let parent = el.parent;
        let area = el.coords;

        self.invalidate(area);
        if let Some(p) = parent {
            self.child_changed(p, Some(id));
        }
        self.settle();
        Ok(())
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    /// Drain the areas that need redrawing.
    pub fn take_invalidated(&mut self) -> Vec<Area> {
        std::mem::take(&mut self.invalidated)
    }

    pub(crate) fn invalidate(&mut self, area: Area) {
        if area.is_visible() {
            self.invalidated.push(area);
        }
    }

    // =========================================================================
    // Layout requests and size resolution
    // =========================================================================

    /// Queue a layout pass for `id` if it has a layout.
    pub(crate) fn request_layout(&mut self, id: ElementId) {
        let has_layout = self.get(id).is_some_and(|el| el.layout.is_some());
        if has_layout && !self.pending_layout.contains(&id) {
            self.pending_layout.push(id);
        }
    }

    /// A child of `parent` was added, removed, resized, reordered or flagged.
    fn child_changed(&mut self, parent: ElementId, hint: Option<ElementId>) {
        tracing::trace!(container = %parent, changed = ?hint, "child changed");
        self.request_layout(parent);
        self.refresh_auto_size(parent);
    }

    pub(crate) fn refresh_auto_size(&mut self, id: ElementId) {
        let is_auto = self
            .get(id)
            .is_some_and(|el| el.width.is_auto() || el.height.is_auto());
        if is_auto {
            self.refresh_size(id);
        }
    }

    pub(crate) fn refresh_percent_children(&mut self, id: ElementId) {
        let percent: Vec<ElementId> = self
            .children(id)
            .iter()
            .copied()
            .filter(|&child| {
                self.get(child)
                    .is_some_and(|c| c.width.is_percent() || c.height.is_percent())
            })
            .collect();
        for child in percent {
            self.refresh_size(child);
        }
    }

    /// Resolve the requested size of `id` and apply it, queueing an event if
    /// the rectangle changed.
    pub(crate) fn refresh_size(&mut self, id: ElementId) {
        let Some(el) = self.get(id) else { return };
        let parent_content = el.parent.and_then(|p| self.content_area(p));
        let current = el.coords;

        let width = match el.width {
            Dimension::Px(px) => px,
            Dimension::Percent(pct) => match parent_content {
                Some(content) => percent_of(content.width(), pct),
                None => current.width(),
            },
            Dimension::Auto => self.auto_width(el),
            Dimension::Grow(_) => current.width(),
        };
        let height = match el.height {
            Dimension::Px(px) => px,
            Dimension::Percent(pct) => match parent_content {
                Some(content) => percent_of(content.height(), pct),
                None => current.height(),
            },
            Dimension::Auto => self.auto_height(el),
            Dimension::Grow(_) => current.height(),
        };

        if width == current.width() && height == current.height() {
            return;
        }
        if let Some(el) = self.get_mut(id) {
            el.coords.set_width(width);
            el.coords.set_height(height);
        }
        self.notify_geometry(id, current);
    }

    fn auto_width(&self, el: &Element) -> Coord {
        let content_x1 = el.coords.x1 + el.style.pad_left - el.scroll.x;
        let extent = el
            .children
            .iter()
            .filter_map(|&child| self.get(child))
            .filter(|child| !child.has_flag(ElementFlags::HIDDEN))
            .map(|child| child.coords.x2 - content_x1 + 1)
            .max()
            .unwrap_or(0);
        extent.max(0) + el.style.pad_horizontal()
    }

    fn auto_height(&self, el: &Element) -> Coord {
        let content_y1 = el.coords.y1 + el.style.pad_top - el.scroll.y;
        let extent = el
            .children
            .iter()
            .filter_map(|&child| self.get(child))
            .filter(|child| !child.has_flag(ElementFlags::HIDDEN))
            .map(|child| child.coords.y2 - content_y1 + 1)
            .max()
            .unwrap_or(0);
        extent.max(0) + el.style.pad_vertical()
    }
}

/// `pct` percent of `size`, computed wide and clamped back into a `Coord`.
fn percent_of(size: Coord, pct: u16) -> Coord {
    let scaled = i64::from(size) * i64::from(pct) / 100;
    scaled.clamp(i64::from(Coord::MIN), i64::from(Coord::MAX)) as Coord
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(tree: &mut ElementTree, parent: Option<ElementId>, w: Coord, h: Coord) -> ElementId {
        let id = tree.create(parent).unwrap();
        tree.set_size(id, Dimension::Px(w), Dimension::Px(h)).unwrap();
        id
    }

    #[test]
    fn test_create_and_lookup() {
        let mut tree = ElementTree::new();
        let root = tree.create(None).unwrap();
        let a = tree.create(Some(root)).unwrap();
        let b = tree.create(Some(root)).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.child(root, 1), Some(b));
        assert_eq!(tree.child_index(b), Some(1));
    }

    #[test]
    fn test_delete_is_recursive_and_ids_go_stale() {
        let mut tree = ElementTree::new();
        let root = tree.create(None).unwrap();
        let a = tree.create(Some(root)).unwrap();
        let a_child = tree.create(Some(a)).unwrap();

        tree.delete(a).unwrap();
        assert!(!tree.contains(a));
        assert!(!tree.contains(a_child));
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.len(), 1);

        // Slot is reused, the old id is not resurrected
        let reused = tree.create(Some(root)).unwrap();
        assert!(tree.contains(reused));
        assert!(!tree.contains(a) || reused == a);
        assert_eq!(tree.delete(a_child), Err(TreeError::UnknownElement(a_child)));
    }

    #[test]
    fn test_set_parent_rejects_cycles() {
        let mut tree = ElementTree::new();
        let root = tree.create(None).unwrap();
        let a = tree.create(Some(root)).unwrap();
        let b = tree.create(Some(a)).unwrap();

        assert_eq!(
            tree.set_parent(a, b),
            Err(TreeError::CyclicParent { child: a, parent: b })
        );
        assert_eq!(
            tree.set_parent(a, a),
            Err(TreeError::CyclicParent { child: a, parent: a })
        );

        tree.set_parent(b, root).unwrap();
        assert_eq!(tree.children(root), &[a, b]);
        assert!(tree.children(a).is_empty());
    }

    #[test]
    fn test_move_to_index() {
        let mut tree = ElementTree::new();
        let root = tree.create(None).unwrap();
        let a = tree.create(Some(root)).unwrap();
        let b = tree.create(Some(root)).unwrap();
        let c = tree.create(Some(root)).unwrap();

        tree.move_to_index(c, 0).unwrap();
        assert_eq!(tree.children(root), &[c, a, b]);

        tree.move_to_index(c, 99).unwrap();
        assert_eq!(tree.children(root), &[a, b, c]);
    }

    #[test]
    fn test_pixel_and_percent_sizes() {
        let mut tree = ElementTree::new();
        let root = sized(&mut tree, None, 200, 100);
        let child = tree.create(Some(root)).unwrap();
        tree.set_size(child, Dimension::Percent(50), Dimension::Percent(25)).unwrap();

        let coords = tree.coords(child).unwrap();
        assert_eq!(coords.width(), 100);
        assert_eq!(coords.height(), 25);

        // Percent children follow the parent's size
        tree.set_size(root, Dimension::Px(400), Dimension::Px(100)).unwrap();
        assert_eq!(tree.coords(child).unwrap().width(), 200);

        // ...and its padding
        tree.set_style(root, Style::new().with_padding(50)).unwrap();
        assert_eq!(tree.coords(child).unwrap().width(), 150);
    }

    #[test]
    fn test_auto_size_fits_children() {
        let mut tree = ElementTree::new();
        let root = tree.create(None).unwrap();
        tree.set_style(root, Style::new().with_padding(5)).unwrap();
        let child = sized(&mut tree, Some(root), 30, 20);
        tree.set_pos(child, 10, 0).unwrap();

        let coords = tree.coords(root).unwrap();
        assert_eq!(coords.width(), 5 + 10 + 30 + 5);
        assert_eq!(coords.height(), 5 + 20 + 5);
    }

    #[test]
    fn test_set_pos_is_relative_to_content_origin() {
        let mut tree = ElementTree::new();
        let root = sized(&mut tree, None, 100, 100);
        tree.set_pos(root, 10, 10).unwrap();
        tree.set_style(root, Style::new().with_padding(4)).unwrap();
        let child = sized(&mut tree, Some(root), 10, 10);
        let grandchild = sized(&mut tree, Some(child), 2, 2);

        tree.set_pos(child, 6, 7).unwrap();
        assert_eq!(tree.coords(child).unwrap().x1, 10 + 4 + 6);
        assert_eq!(tree.coords(child).unwrap().y1, 10 + 4 + 7);
        // Descendants move along
        assert_eq!(tree.coords(grandchild).unwrap().x1, 20);
    }

    #[test]
    fn test_scroll_shifts_children() {
        let mut tree = ElementTree::new();
        let root = sized(&mut tree, None, 100, 100);
        let child = sized(&mut tree, Some(root), 10, 10);

        tree.scroll_by(root, 0, 15).unwrap();
        assert_eq!(tree.coords(child).unwrap().y1, -15);
        assert_eq!(tree.content_area(root).unwrap().y1, -15);
    }

    #[test]
    fn test_base_dir_inheritance() {
        let mut tree = ElementTree::new();
        let root = tree.create(None).unwrap();
        let mid = tree.create(Some(root)).unwrap();
        let leaf = tree.create(Some(mid)).unwrap();

        assert_eq!(tree.base_dir(leaf), BaseDir::Ltr);

        tree.set_base_dir(root, BaseDir::Rtl).unwrap();
        assert_eq!(tree.base_dir(leaf), BaseDir::Rtl);

        tree.set_base_dir(mid, BaseDir::Auto).unwrap();
        assert_eq!(tree.base_dir(leaf), BaseDir::Ltr);
        assert_eq!(tree.base_dir(root), BaseDir::Rtl);
    }

    #[test]
    fn test_flags() {
        let mut tree = ElementTree::new();
        let root = tree.create(None).unwrap();
        let child = tree.create(Some(root)).unwrap();

        tree.add_flag(child, ElementFlags::HIDDEN | ElementFlags::IGNORE_LAYOUT).unwrap();
        assert!(tree.has_flag(child, ElementFlags::HIDDEN));

        tree.clear_flag(child, ElementFlags::HIDDEN).unwrap();
        assert!(!tree.has_flag(child, ElementFlags::HIDDEN));
        assert!(tree.has_flag(child, ElementFlags::IGNORE_LAYOUT));
    }

    #[test]
    fn test_large_percent_does_not_overflow() {
        let mut tree = ElementTree::new();
        let root = sized(&mut tree, None, 40_000, 10);
        let child = tree.create(Some(root)).unwrap();
        tree.set_size(child, Dimension::Percent(60_000), Dimension::Px(1)).unwrap();

        assert_eq!(tree.coords(child).unwrap().width(), 24_000_000);
        assert_eq!(percent_of(Coord::MAX, u16::MAX), Coord::MAX);
    }

    #[test]
    fn test_unknown_element_errors() {
        let mut tree = ElementTree::new();
        let root = tree.create(None).unwrap();
        tree.delete(root).unwrap();

        assert_eq!(tree.create(Some(root)), Err(TreeError::UnknownElement(root)));
        assert_eq!(
            tree.set_size(root, Dimension::Px(1), Dimension::Px(1)),
            Err(TreeError::UnknownElement(root))
        );
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.coords(root), None);
    }
}
