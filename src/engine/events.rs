//! Geometry events - Notifications queued when an element's rectangle changes.
//!
//! Events are queued while a mutation or layout pass runs and delivered by
//! [`ElementTree::settle`] once the pass is done, so a listener never
//! observes a half-positioned track. Listeners receive the tree mutably and
//! may change it; whatever they change is settled in the same loop.

use crate::types::Area;

use super::{ElementId, ElementTree};

/// An element's rectangle moved or was resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryEvent {
    pub id: ElementId,
    pub old: Area,
    pub new: Area,
}

impl GeometryEvent {
    /// True if the width or height changed, not just the position.
    pub fn size_changed(&self) -> bool {
        self.old.size_differs(&self.new)
    }
}

/// Callback invoked for every delivered geometry event.
pub type GeometryListener = Box<dyn FnMut(&mut ElementTree, &GeometryEvent)>;

/// Settle budget per live element. Each element may legitimately be laid
/// out a few times while a change ripples up and down the tree.
const SETTLE_ROUNDS_PER_ELEMENT: usize = 8;

impl ElementTree {
    /// Register a listener for geometry events.
    pub fn on_geometry_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&mut ElementTree, &GeometryEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Queue an event if `id` no longer occupies `old`.
    pub(crate) fn notify_geometry(&mut self, id: ElementId, old: Area) {
        let Some(new) = self.coords(id) else { return };
        if new != old {
            self.events.push_back(GeometryEvent { id, old, new });
        }
    }

    /// Deliver queued events and run pending layouts until both queues are
    /// empty.
    ///
    /// Re-entrant calls (from a listener or from inside a layout pass) return
    /// immediately; the outermost call drains everything.
    pub(crate) fn settle(&mut self) {
        if self.settling {
            return;
        }
        self.settling = true;

        let budget = (self.len() + 1) * SETTLE_ROUNDS_PER_ELEMENT;
        let mut rounds = 0;
        loop {
            if let Some(event) = self.events.pop_front() {
                self.dispatch(event);
            } else if !self.pending_layout.is_empty() {
                let cont = self.pending_layout.remove(0);
                crate::layout::run_layout(self, cont);
            } else {
                break;
            }

            rounds += 1;
            if rounds > budget {
                tracing::warn!(
                    rounds,
                    pending = self.pending_layout.len(),
                    queued = self.events.len(),
                    "layout did not settle, dropping pending work"
                );
                self.pending_layout.clear();
                self.events.clear();
                break;
            }
        }

        self.settling = false;
    }

    fn dispatch(&mut self, event: GeometryEvent) {
        if !self.contains(event.id) {
            return;
        }
        tracing::trace!(
            element = %event.id,
            old = ?event.old,
            new = ?event.new,
            "geometry changed"
        );

        self.invalidate(event.old);

        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in listeners.iter_mut() {
            listener(self, &event);
        }
        // Listeners registered during dispatch were pushed onto the empty list
        listeners.append(&mut self.listeners);
        self.listeners = listeners;

        if let Some(new) = self.coords(event.id) {
            self.invalidate(new);
        }

        if event.size_changed() {
            self.refresh_percent_children(event.id);
            self.request_layout(event.id);
            if let Some(parent) = self.parent(event.id) {
                self.refresh_auto_size(parent);
            }
        }
    }
}
