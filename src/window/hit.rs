//! Local-space hit testing against a window frame

use crate::math::{Size, Vec2, THEME};
use super::HitZone;

/// Classify a point in window-local coordinates into a hit zone
///
/// The point is relative to the window's top-left corner. Returns `None`
/// when the point is outside the window and not within border tolerance
/// of any edge.
///
/// Zones overlap by raw distance, so classification order is part of the
/// contract: corners before single edges (a near-corner point must never
/// degrade to an edge), borders before the interior, close button before
/// the rest of the title band.
pub fn classify(size: Size, p: Vec2) -> Option<HitZone> {
    let d = THEME.border_tolerance;

    let dist_n = p.y.abs();
    let dist_e = (p.x - size.width).abs();
    let dist_s = (p.y - size.height).abs();
    let dist_w = p.x.abs();

    if dist_n < d && dist_e < d {
        return Some(HitZone::ResizeNE);
    }
    if dist_e < d && dist_s < d {
        return Some(HitZone::ResizeSE);
    }
    if dist_w < d && dist_s < d {
        return Some(HitZone::ResizeSW);
    }
    if dist_n < d && dist_w < d {
        return Some(HitZone::ResizeNW);
    }

    if dist_n < d {
        return Some(HitZone::ResizeN);
    }
    if dist_e < d {
        return Some(HitZone::ResizeE);
    }
    if dist_s < d {
        return Some(HitZone::ResizeS);
    }
    if dist_w < d {
        return Some(HitZone::ResizeW);
    }

    if p.x < 0.0 || p.x >= size.width || p.y < 0.0 || p.y >= size.height {
        return None;
    }

    if p.x > size.width - THEME.close_button_width && p.y < THEME.title_height {
        return Some(HitZone::CloseButton);
    }

    if p.y < THEME.title_height {
        return Some(HitZone::Title);
    }

    Some(HitZone::Content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(300.0, 200.0);

    #[test]
    fn test_corners_win_over_edges() {
        // Within tolerance of both north and west: corner, never an edge
        // or the title band.
        assert_eq!(classify(SIZE, Vec2::new(2.0, 2.0)), Some(HitZone::ResizeNW));
        assert_eq!(classify(SIZE, Vec2::new(298.0, 2.0)), Some(HitZone::ResizeNE));
        assert_eq!(classify(SIZE, Vec2::new(298.0, 198.0)), Some(HitZone::ResizeSE));
        assert_eq!(classify(SIZE, Vec2::new(2.0, 198.0)), Some(HitZone::ResizeSW));
    }

    #[test]
    fn test_edges() {
        assert_eq!(classify(SIZE, Vec2::new(150.0, 2.0)), Some(HitZone::ResizeN));
        assert_eq!(classify(SIZE, Vec2::new(298.0, 100.0)), Some(HitZone::ResizeE));
        assert_eq!(classify(SIZE, Vec2::new(150.0, 198.0)), Some(HitZone::ResizeS));
        assert_eq!(classify(SIZE, Vec2::new(2.0, 100.0)), Some(HitZone::ResizeW));
    }

    #[test]
    fn test_edges_extend_outside_bounds() {
        // Border tolerance reaches slightly past the frame.
        assert_eq!(classify(SIZE, Vec2::new(150.0, -3.0)), Some(HitZone::ResizeN));
        assert_eq!(classify(SIZE, Vec2::new(-3.0, 100.0)), Some(HitZone::ResizeW));
        assert_eq!(classify(SIZE, Vec2::new(302.0, 100.0)), Some(HitZone::ResizeE));
    }

    #[test]
    fn test_outside_misses() {
        assert_eq!(classify(SIZE, Vec2::new(-20.0, 100.0)), None);
        assert_eq!(classify(SIZE, Vec2::new(150.0, 250.0)), None);
        assert_eq!(classify(SIZE, Vec2::new(400.0, 400.0)), None);
    }

    #[test]
    fn test_close_button_band() {
        assert_eq!(
            classify(SIZE, Vec2::new(290.0, 15.0)),
            Some(HitZone::CloseButton)
        );
        // Exactly at width - close_button_width belongs to the title.
        assert_eq!(classify(SIZE, Vec2::new(275.0, 15.0)), Some(HitZone::Title));
    }

    #[test]
    fn test_title_and_content() {
        assert_eq!(classify(SIZE, Vec2::new(100.0, 15.0)), Some(HitZone::Title));
        assert_eq!(classify(SIZE, Vec2::new(100.0, 29.9)), Some(HitZone::Title));
        assert_eq!(classify(SIZE, Vec2::new(100.0, 30.0)), Some(HitZone::Content));
        assert_eq!(classify(SIZE, Vec2::new(150.0, 120.0)), Some(HitZone::Content));
    }

    #[test]
    fn test_exact_tolerance_is_exclusive() {
        // Distance exactly equal to the tolerance does not hit the border.
        assert_eq!(classify(SIZE, Vec2::new(150.0, 4.0)), Some(HitZone::Title));
    }
}
