//! Window manager coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle and painter attachment
//! - `input`: Pointer event handling and the drag state machine
//! - `paint`: Back-to-front compositing

mod windows;
mod input;
mod paint;

use std::collections::HashMap;

use crate::input::InputRouter;
use crate::math::Size;
use crate::render::ContentPainter;
use crate::window::{WindowId, WindowStack};

/// Window manager for one drawing surface
///
/// Owned explicitly by the embedding application; all lifecycle is
/// construction and teardown by the caller, with no process-wide state.
/// The host feeds it pointer events and calls [`paint`](Self::paint) on
/// its repaint tick.
pub struct WindowManager {
    /// Z-ordered window arena
    pub windows: WindowStack,
    /// Pointer gesture state
    pub input: InputRouter,
    /// Content painters keyed by window id
    painters: HashMap<WindowId, Box<dyn ContentPainter>>,
    /// Drawing surface extent; bounds the backdrop and random placement
    surface: Size,
    /// Counter behind auto-numbered titles
    title_counter: u32,
}

impl WindowManager {
    /// Create a manager for a surface of the given extent
    pub fn new(surface: Size) -> Self {
        Self {
            windows: WindowStack::new(),
            input: InputRouter::new(),
            painters: HashMap::new(),
            surface,
            title_counter: 1,
        }
    }

    /// Current drawing surface extent
    #[inline]
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Record a new surface extent after the host canvas resized
    ///
    /// Existing windows are left where they are.
    pub fn resize_surface(&mut self, surface: Size) {
        self.surface = surface;
    }
}
