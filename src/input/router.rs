//! Gesture holder for the pointer state machine

use crate::math::Vec2;
use crate::window::{HitZone, WindowId};
use super::Gesture;

/// Holds the current pointer gesture, if any
///
/// Idle means no gesture; a press creates one; pointer-up takes it;
/// pointer-leave cancels it.
#[derive(Default)]
pub struct InputRouter {
    gesture: Option<Gesture>,
}

impl InputRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self { gesture: None }
    }

    /// Record a press on a window
    pub fn press(&mut self, window_id: WindowId, anchor: Vec2, zone: HitZone) {
        self.gesture = Some(Gesture::press(window_id, anchor, zone));
    }

    /// Current gesture
    #[inline]
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Current gesture, mutable
    #[inline]
    pub fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        self.gesture.as_mut()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_some()
    }

    /// Take the gesture, returning the router to idle
    pub fn take(&mut self) -> Option<Gesture> {
        self.gesture.take()
    }

    /// Abandon the gesture without completing it
    #[inline]
    pub fn cancel(&mut self) {
        self.gesture = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_take() {
        let mut router = InputRouter::new();
        assert!(!router.is_pressed());

        router.press(1, Vec2::new(10.0, 10.0), HitZone::Title);
        assert!(router.is_pressed());

        let gesture = router.take().unwrap();
        assert_eq!(gesture.window_id, 1);
        assert!(!router.is_pressed());
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut router = InputRouter::new();
        router.press(1, Vec2::new(10.0, 10.0), HitZone::ResizeSE);
        router.cancel();
        assert!(!router.is_pressed());
        assert!(router.take().is_none());
    }

    #[test]
    fn test_gesture_mut_updates_in_place() {
        let mut router = InputRouter::new();
        router.press(1, Vec2::new(10.0, 10.0), HitZone::Title);

        if let Some(gesture) = router.gesture_mut() {
            gesture.dragging = true;
            gesture.anchor = Vec2::new(20.0, 20.0);
        }

        let gesture = router.gesture().unwrap();
        assert!(gesture.dragging);
        assert!((gesture.anchor.x - 20.0).abs() < 0.001);
    }
}
