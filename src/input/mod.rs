//! Pointer input module
//!
//! Provides the gesture state machine for drag/resize operations and the
//! pure geometry of applying a drag delta to a window frame.

mod router;
mod gesture;
mod result;

pub use router::InputRouter;
pub use gesture::Gesture;
pub use result::InputResult;

use crate::math::{Size, Vec2};
use crate::window::HitZone;

/// Apply a frame-to-frame drag delta to a window frame
///
/// A title drag translates the window. Resize zones adjust the edges
/// named by the zone's flags; each axis is gated independently by the
/// minimum size, so a corner drag may update one axis while the other is
/// rejected in the same move. A rejected axis is skipped entirely rather
/// than clamped.
pub fn drag_adjust(
    zone: HitZone,
    position: Vec2,
    size: Size,
    delta: Vec2,
    min: Size,
) -> (Vec2, Size) {
    let mut new_pos = position;
    let mut new_size = size;

    if zone == HitZone::Title {
        return (position + delta, size);
    }

    if zone.resizes_north() && size.height - delta.y >= min.height {
        new_pos.y += delta.y;
        new_size.height -= delta.y;
    }
    if zone.resizes_east() && size.width + delta.x >= min.width {
        new_size.width += delta.x;
    }
    if zone.resizes_south() && size.height + delta.y >= min.height {
        new_size.height += delta.y;
    }
    if zone.resizes_west() && size.width - delta.x >= min.width {
        new_pos.x += delta.x;
        new_size.width -= delta.x;
    }

    (new_pos, new_size)
}
