//! Gesture state for an in-progress pointer interaction

use crate::math::Vec2;
use crate::window::{HitZone, WindowId};

/// Transient state between a pointer-down on a window and the matching
/// pointer-up or pointer-leave
#[derive(Clone, Debug)]
pub struct Gesture {
    /// Window that was pressed
    pub window_id: WindowId,
    /// Last pointer position the drag was applied from; deltas are
    /// frame-to-frame, not cumulative from the press
    pub anchor: Vec2,
    /// Zone that was hit on pointer-down; fixed for the whole gesture
    pub zone: HitZone,
    /// Whether the movement threshold has been crossed
    pub dragging: bool,
}

impl Gesture {
    /// Record a fresh press (not yet a drag)
    pub fn press(window_id: WindowId, anchor: Vec2, zone: HitZone) -> Self {
        Self {
            window_id,
            anchor,
            zone,
            dragging: false,
        }
    }
}
