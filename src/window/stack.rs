//! Z-ordered window stack
//!
//! Windows live in an id-keyed arena; a separate order vector is the
//! z-order (index 0 = back, last = front). The stack upholds two
//! invariants at the exit of every public method: exactly one window is
//! active whenever the stack is non-empty, and the active window is the
//! last in order.

use std::collections::HashMap;

use crate::math::{Size, Vec2};
use super::{HitZone, Window, WindowId};

/// Window arena plus z-order
pub struct WindowStack {
    /// All windows by id
    windows: HashMap<WindowId, Window>,
    /// Z-order, back to front; the last entry is the active window
    order: Vec<WindowId>,
    /// Next window id
    next_id: WindowId,
}

impl WindowStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a new window at the front and activate it
    pub fn insert(&mut self, title: String, position: Vec2, size: Size) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        self.windows.insert(
            id,
            Window {
                id,
                title,
                position,
                size,
                active: false,
            },
        );
        self.order.push(id);
        self.activate(id);

        id
    }

    /// Remove a window; no-op on an unknown id
    ///
    /// If the removed window was active, the new frontmost window becomes
    /// active. No other window's order changes.
    pub fn close(&mut self, id: WindowId) {
        let removed = match self.windows.remove(&id) {
            Some(window) => window,
            None => return,
        };
        self.order.retain(|&wid| wid != id);

        if removed.active {
            if let Some(&front) = self.order.last() {
                if let Some(window) = self.windows.get_mut(&front) {
                    window.active = true;
                }
            }
        }
    }

    /// Activate a window: move it to the front and give it the exclusive
    /// active flag
    ///
    /// Idempotent; no-op on an unknown id.
    pub fn activate(&mut self, id: WindowId) {
        match self.windows.get(&id) {
            Some(window) if window.active => return,
            Some(_) => {}
            None => return,
        }

        self.order.retain(|&wid| wid != id);
        for window in self.windows.values_mut() {
            window.active = false;
        }

        if let Some(window) = self.windows.get_mut(&id) {
            window.active = true;
        }
        self.order.push(id);
    }

    /// Get a window by id
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Get a mutable window by id
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Id of the active window, if any
    pub fn active(&self) -> Option<WindowId> {
        self.order
            .last()
            .copied()
            .filter(|id| self.windows.get(id).is_some_and(|w| w.active))
    }

    /// Z-order, back to front
    pub fn order(&self) -> &[WindowId] {
        &self.order
    }

    /// Iterate windows back to front (paint order)
    pub fn iter_back_to_front(&self) -> impl Iterator<Item = &Window> {
        self.order.iter().filter_map(|id| self.windows.get(id))
    }

    /// Find the topmost window and zone under a canvas-space point
    ///
    /// Searches front to back so overlapping windows resolve to the
    /// visually topmost; the border tolerance around each frame counts as
    /// part of the window.
    pub fn zone_at(&self, pos: Vec2) -> Option<(WindowId, HitZone)> {
        for id in self.order.iter().rev() {
            if let Some(window) = self.windows.get(id) {
                if let Some(zone) = window.hit_test(pos - window.position) {
                    return Some((*id, zone));
                }
            }
        }
        None
    }

    /// Number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Check whether the stack is empty
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new()
    }
}
