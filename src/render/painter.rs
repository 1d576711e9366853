//! Client-area content painting capability

use crate::math::Size;
use crate::window::WindowId;
use super::Canvas;

/// Paints the content of a window's client area
///
/// Invoked once per repaint per window it is attached to. The context is
/// already translated so the client area's top-left is (0, 0) and
/// clipped so nothing can paint outside it. Implementations own whatever
/// per-window state they need, keyed by the window id; the same painter
/// instance sees the same id across repaints until the window closes.
pub trait ContentPainter {
    /// Paint one frame of client content
    fn paint(&mut self, window: WindowId, ctx: &mut dyn Canvas, area: Size);
}

impl<F> ContentPainter for F
where
    F: FnMut(WindowId, &mut dyn Canvas, Size),
{
    fn paint(&mut self, window: WindowId, ctx: &mut dyn Canvas, area: Size) {
        self(window, ctx, area)
    }
}
