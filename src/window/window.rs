//! Window data and frame geometry

use crate::math::{Rect, Size, Vec2, THEME};
use super::{hit, HitZone, WindowId};

/// A window on the canvas
///
/// Plain data: all mutation goes through the manager, which is what
/// upholds the z-order and activation invariants.
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Position of the top-left corner in canvas space
    pub position: Vec2,
    /// Outer size including the title bar
    pub size: Size,
    /// Whether this window is the active (frontmost) one
    pub active: bool,
}

impl Window {
    /// Get the window's bounding rectangle in canvas space
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the window's bounding rectangle in its own local space
    #[inline]
    pub fn local_rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.size)
    }

    /// Get the title bar rectangle in local space
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, THEME.title_height)
    }

    /// Get the client area rectangle in local space (below the title bar)
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            0.0,
            THEME.title_height,
            self.size.width,
            self.size.height - THEME.title_height,
        )
    }

    /// Extent of the client area as seen by a content painter
    #[inline]
    pub fn client_area(&self) -> Size {
        Size::new(self.size.width, self.size.height - THEME.title_height)
    }

    /// Classify a point in window-local coordinates into a hit zone
    #[inline]
    pub fn hit_test(&self, local: Vec2) -> Option<HitZone> {
        hit::classify(self.size, local)
    }
}
