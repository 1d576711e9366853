//! Window lifecycle and painter attachment

use crate::math::{Size, Vec2, THEME};
use crate::render::ContentPainter;
use crate::window::{WindowConfig, WindowId};
use super::WindowManager;

impl WindowManager {
    /// Create a window
    ///
    /// Unset config fields are filled in: an auto-numbered title, a
    /// randomized size within the theme ranges, and a random position
    /// keeping the window fully on the surface. The new window arrives
    /// frontmost and active.
    pub fn add_window(&mut self, config: WindowConfig) -> WindowId {
        let title = config.title.unwrap_or_else(|| {
            let n = self.title_counter;
            self.title_counter += 1;
            format!("Window {}", n)
        });

        let size = config.size.unwrap_or_else(|| {
            let (w_min, w_max) = THEME.default_width_range;
            let (h_min, h_max) = THEME.default_height_range;
            Size::new(random_in(w_min, w_max), random_in(h_min, h_max))
        });

        let position = config.position.unwrap_or_else(|| {
            Vec2::new(
                random_in(0.0, (self.surface.width - size.width).max(0.0)),
                random_in(0.0, (self.surface.height - size.height).max(0.0)),
            )
        });

        self.windows.insert(title, position, size)
    }

    /// Close a window; no-op on an unknown id
    ///
    /// Drops the window's content painter and abandons any gesture that
    /// was pressing it.
    pub fn close_window(&mut self, id: WindowId) {
        if self.input.gesture().map(|g| g.window_id) == Some(id) {
            self.input.cancel();
        }
        self.painters.remove(&id);
        self.windows.close(id);
    }

    /// Bring a window to the front and make it active; no-op on an
    /// unknown id, idempotent on the active window
    pub fn activate_window(&mut self, id: WindowId) {
        self.windows.activate(id);
    }

    /// Attach a content painter to a window
    ///
    /// Replaces any previous painter. Ignored for unknown ids.
    pub fn set_content_painter(&mut self, id: WindowId, painter: Box<dyn ContentPainter>) {
        if self.windows.get(id).is_some() {
            self.painters.insert(id, painter);
        }
    }

    /// Detach a window's content painter, if any
    pub fn clear_content_painter(&mut self, id: WindowId) {
        self.painters.remove(&id);
    }

    /// Check whether a window has a content painter attached
    pub fn has_content_painter(&self, id: WindowId) -> bool {
        self.painters.contains_key(&id)
    }

    pub(super) fn painter_mut(
        &mut self,
        id: WindowId,
    ) -> Option<&mut Box<dyn ContentPainter>> {
        self.painters.get_mut(&id)
    }
}

/// Random value in `[min, max]`, stepped up to whole units
///
/// Falls back to the midpoint if the entropy source fails; placement
/// stays valid either way.
fn random_in(min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }

    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => {
            let unit = u32::from_le_bytes(buf) as f32 / u32::MAX as f32;
            min + (unit * (max - min)).ceil().min(max - min)
        }
        Err(_) => (min + max) * 0.5,
    }
}
