//! Pointer event handling and the drag state machine
//!
//! The gesture lifecycle is press → (optional) drag → release. A press
//! on its own mutates nothing; activation happens either when the drag
//! threshold is crossed or on release, and a close happens only on
//! release over the close button.

use crate::input::{drag_adjust, InputResult};
use crate::math::{Vec2, THEME};
use crate::window::HitZone;
use super::WindowManager;

/// Primary pointer button id
const PRIMARY_BUTTON: u8 = 0;

impl WindowManager {
    /// Handle pointer down
    ///
    /// Only the primary button starts a gesture. Records which window
    /// and zone were pressed; all side effects are deferred.
    pub fn on_pointer_down(&mut self, button: u8, pos: Vec2) -> InputResult {
        if button != PRIMARY_BUTTON {
            return InputResult::Unhandled;
        }

        let (id, zone) = match self.windows.zone_at(pos) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        self.input.press(id, pos, zone);
        InputResult::Handled
    }

    /// Handle pointer move
    ///
    /// With a gesture in progress this drives the drag; otherwise it
    /// reports the cursor hint for whatever is under the pointer.
    pub fn on_pointer_move(&mut self, pos: Vec2) -> InputResult {
        if self.input.is_pressed() {
            return self.drag_to(pos);
        }

        let cursor = match self.windows.zone_at(pos) {
            Some((_, zone)) => zone.cursor(),
            None => "default",
        };
        InputResult::Cursor { cursor }
    }

    /// Handle pointer up
    ///
    /// Release over the close button closes the pressed window; any
    /// other release activates it (a no-op when a drag already did).
    /// The gesture is cleared either way.
    pub fn on_pointer_up(&mut self) -> InputResult {
        let gesture = match self.input.take() {
            Some(gesture) => gesture,
            None => return InputResult::Unhandled,
        };

        match gesture.zone {
            HitZone::CloseButton => {
                self.close_window(gesture.window_id);
                InputResult::Cursor { cursor: "default" }
            }
            _ => {
                self.windows.activate(gesture.window_id);
                InputResult::Handled
            }
        }
    }

    /// Handle the pointer leaving the drawing surface
    ///
    /// Abandons any gesture without completing it; deltas already
    /// applied stay applied.
    pub fn on_pointer_leave(&mut self) -> InputResult {
        if self.input.is_pressed() {
            self.input.cancel();
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Advance an in-progress gesture to a new pointer position
    fn drag_to(&mut self, pos: Vec2) -> InputResult {
        let (id, zone, anchor, dragging) = match self.input.gesture() {
            Some(g) => (g.window_id, g.zone, g.anchor, g.dragging),
            None => return InputResult::Unhandled,
        };

        let delta = pos - anchor;

        if !dragging {
            // Hysteresis: a press stays a click until the pointer moves
            // at least the threshold on some axis. The anchor is not
            // reset while suppressed, so the eventual first drag applies
            // the full distance from the press.
            if delta.max_component_abs() < THEME.drag_threshold {
                return InputResult::Handled;
            }

            if let Some(gesture) = self.input.gesture_mut() {
                gesture.dragging = true;
            }
            self.windows.activate(id);
        }

        let (position, size) = match self.windows.get(id) {
            Some(window) => (window.position, window.size),
            None => {
                // Pressed window was closed by the embedder mid-gesture.
                self.input.cancel();
                return InputResult::Unhandled;
            }
        };

        let (new_pos, new_size) =
            drag_adjust(zone, position, size, delta, THEME.min_window_size());

        if let Some(window) = self.windows.get_mut(id) {
            window.position = new_pos;
            window.size = new_size;
        }
        if let Some(gesture) = self.input.gesture_mut() {
            gesture.anchor = pos;
        }

        InputResult::Handled
    }
}
