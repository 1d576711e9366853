//! Integration tests for the window manager
//!
//! These tests verify the full desktop workflow including:
//! - Window lifecycle (create, activate, close) and z-order
//! - The pointer gesture state machine (click, drag, resize, abandon)
//! - Frame hit testing through the manager surface
//! - Compositing order and client-area isolation

use std::cell::RefCell;
use std::rc::Rc;

use canvas_desktop::{
    Canvas, CanvasOp, ContentPainter, HitZone, InputResult, RecordingCanvas, Rect, Size, Vec2,
    WindowConfig, WindowId, WindowManager, THEME,
};

fn manager() -> WindowManager {
    WindowManager::new(Size::new(1280.0, 720.0))
}

fn window_at(manager: &mut WindowManager, title: &str, x: f32, y: f32) -> WindowId {
    manager.add_window(WindowConfig {
        title: Some(title.to_string()),
        position: Some(Vec2::new(x, y)),
        size: Some(Size::new(300.0, 200.0)),
    })
}

fn assert_invariants(manager: &WindowManager) {
    let order = manager.windows.order();
    let mut active_ids = Vec::new();
    for &id in order {
        let window = manager.windows.get(id).unwrap();
        assert!(window.size.width >= THEME.min_window_width);
        assert!(window.size.height >= THEME.min_window_height);
        if window.active {
            active_ids.push(id);
        }
    }
    if order.is_empty() {
        assert!(active_ids.is_empty());
    } else {
        assert_eq!(active_ids.len(), 1);
        assert_eq!(active_ids[0], *order.last().unwrap());
    }
}

// =============================================================================
// Lifecycle and z-order
// =============================================================================

#[test]
fn click_in_title_brings_window_to_front() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    let b = window_at(&mut mgr, "B", 500.0, 100.0);
    assert_eq!(mgr.windows.active(), Some(b));

    // Click (press + release without movement) inside A's title bar.
    mgr.on_pointer_down(0, Vec2::new(150.0, 115.0));
    mgr.on_pointer_up();

    assert_eq!(mgr.windows.active(), Some(a));
    assert_eq!(mgr.windows.order(), &[b, a]);
    assert!(!mgr.windows.get(b).unwrap().active);
    assert_invariants(&mgr);
}

#[test]
fn activation_is_idempotent() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    let _b = window_at(&mut mgr, "B", 500.0, 100.0);

    mgr.activate_window(a);
    let order_once = mgr.windows.order().to_vec();
    mgr.activate_window(a);

    assert_eq!(mgr.windows.order(), order_once.as_slice());
    assert_eq!(mgr.windows.active(), Some(a));
    assert_invariants(&mgr);
}

#[test]
fn closing_active_window_promotes_next_in_order() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    let b = window_at(&mut mgr, "B", 500.0, 100.0);
    let c = window_at(&mut mgr, "C", 100.0, 400.0);

    mgr.close_window(c);
    assert_eq!(mgr.windows.active(), Some(b));
    assert_eq!(mgr.windows.order(), &[a, b]);
    assert_invariants(&mgr);
}

#[test]
fn closing_inactive_window_preserves_order_and_active_flags() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    let b = window_at(&mut mgr, "B", 500.0, 100.0);
    let c = window_at(&mut mgr, "C", 100.0, 400.0);

    mgr.close_window(a);
    assert_eq!(mgr.windows.active(), Some(c));
    assert_eq!(mgr.windows.order(), &[b, c]);
    assert_invariants(&mgr);
}

#[test]
fn closing_the_only_window_leaves_manager_usable() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);

    mgr.close_window(a);
    assert!(mgr.windows.is_empty());
    assert_invariants(&mgr);

    let b = window_at(&mut mgr, "B", 100.0, 100.0);
    assert_eq!(mgr.windows.active(), Some(b));

    let mut canvas = RecordingCanvas::new();
    mgr.paint(&mut canvas);
    assert!(canvas.is_balanced());
}

#[test]
fn close_button_click_closes_through_the_gesture() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    let b = window_at(&mut mgr, "B", 500.0, 100.0);

    // A's close band: canvas x in (375, 400), y in the title band.
    mgr.on_pointer_down(0, Vec2::new(390.0, 110.0));
    let result = mgr.on_pointer_up();

    assert_eq!(result, InputResult::Cursor { cursor: "default" });
    assert!(mgr.windows.get(a).is_none());
    assert_eq!(mgr.windows.active(), Some(b));
    assert_invariants(&mgr);
}

// =============================================================================
// Hit testing through the manager
// =============================================================================

#[test]
fn corner_wins_over_edges_and_title() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 0.0, 0.0);

    let (id, zone) = mgr.windows.zone_at(Vec2::new(2.0, 2.0)).unwrap();
    assert_eq!(id, a);
    assert_eq!(zone, HitZone::ResizeNW);
}

#[test]
fn overlapping_windows_hit_the_topmost() {
    let mut mgr = manager();
    let _a = window_at(&mut mgr, "A", 100.0, 100.0);
    let b = window_at(&mut mgr, "B", 200.0, 150.0);

    let (id, _) = mgr.windows.zone_at(Vec2::new(250.0, 250.0)).unwrap();
    assert_eq!(id, b);
}

// =============================================================================
// Gestures
// =============================================================================

#[test]
fn drag_hysteresis_then_move_and_activate() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    let b = window_at(&mut mgr, "B", 500.0, 100.0);

    mgr.on_pointer_down(0, Vec2::new(150.0, 115.0));

    mgr.on_pointer_move(Vec2::new(152.0, 117.0));
    let w = mgr.windows.get(a).unwrap();
    assert!((w.position.x - 100.0).abs() < 0.001);
    assert!((w.position.y - 100.0).abs() < 0.001);
    assert_eq!(mgr.windows.active(), Some(b));

    mgr.on_pointer_move(Vec2::new(156.0, 121.0));
    let w = mgr.windows.get(a).unwrap();
    assert!((w.position.x - 106.0).abs() < 0.001);
    assert!((w.position.y - 106.0).abs() < 0.001);
    assert_eq!(mgr.windows.active(), Some(a));
    assert_invariants(&mgr);
}

#[test]
fn corner_resize_never_violates_minimum_size() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);

    mgr.on_pointer_down(0, Vec2::new(102.0, 102.0));

    // Walk the NW corner inward far past both minimums, in steps.
    for step in 1..=30 {
        mgr.on_pointer_move(Vec2::new(
            102.0 + (step as f32) * 10.0,
            102.0 + (step as f32) * 10.0,
        ));
        assert_invariants(&mgr);
    }

    let w = mgr.windows.get(a).unwrap();
    assert!((w.size.width - THEME.min_window_width).abs() < 0.001);
    assert!((w.size.height - THEME.min_window_height).abs() < 0.001);
}

#[test]
fn corner_resize_gates_axes_independently() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);

    // SE corner at canvas (400, 300): grow width, shrink height below
    // the minimum in one move. Width applies, height is rejected.
    mgr.on_pointer_down(0, Vec2::new(398.0, 298.0));
    mgr.on_pointer_move(Vec2::new(448.0, 148.0));

    let w = mgr.windows.get(a).unwrap();
    assert!((w.size.width - 350.0).abs() < 0.001);
    assert!((w.size.height - 200.0).abs() < 0.001);
    assert_invariants(&mgr);
}

#[test]
fn abandoned_gesture_keeps_applied_deltas() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);

    mgr.on_pointer_down(0, Vec2::new(150.0, 115.0));
    mgr.on_pointer_move(Vec2::new(180.0, 115.0));
    mgr.on_pointer_leave();

    let w = mgr.windows.get(a).unwrap();
    assert!((w.position.x - 130.0).abs() < 0.001);

    // The next press starts a fresh gesture from scratch.
    assert_eq!(mgr.on_pointer_up(), InputResult::Unhandled);
    mgr.on_pointer_move(Vec2::new(400.0, 400.0));
    let w = mgr.windows.get(a).unwrap();
    assert!((w.position.x - 130.0).abs() < 0.001);
}

#[test]
fn hover_cursor_tracks_zones() {
    let mut mgr = manager();
    window_at(&mut mgr, "A", 100.0, 100.0);

    assert_eq!(
        mgr.on_pointer_move(Vec2::new(150.0, 115.0)).cursor(),
        Some("move")
    );
    assert_eq!(
        mgr.on_pointer_move(Vec2::new(390.0, 110.0)).cursor(),
        Some("pointer")
    );
    assert_eq!(
        mgr.on_pointer_move(Vec2::new(250.0, 298.0)).cursor(),
        Some("ns-resize")
    );
    assert_eq!(
        mgr.on_pointer_move(Vec2::new(800.0, 600.0)).cursor(),
        Some("default")
    );
}

#[test]
fn cursor_hint_serializes_for_the_host() {
    let mut mgr = manager();
    window_at(&mut mgr, "A", 100.0, 100.0);

    let result = mgr.on_pointer_move(Vec2::new(150.0, 115.0));
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"type":"cursor","cursor":"move"}"#);
}

// =============================================================================
// Compositing
// =============================================================================

/// Painter that remembers a per-window tick count across repaints.
struct TickPainter {
    ticks: std::collections::HashMap<WindowId, u32>,
    log: Rc<RefCell<Vec<(WindowId, u32)>>>,
}

impl ContentPainter for TickPainter {
    fn paint(&mut self, window: WindowId, ctx: &mut dyn Canvas, area: Size) {
        let tick = self.ticks.entry(window).or_insert(0);
        *tick += 1;
        ctx.begin_path();
        ctx.set_fill_style("hsl(200, 95%, 50%)");
        ctx.arc(
            Vec2::new(area.width / 2.0, area.height / 2.0),
            10.0,
            0.0,
            2.0 * std::f32::consts::PI,
        );
        ctx.fill();
        self.log.borrow_mut().push((window, *tick));
    }
}

#[test]
fn painter_state_persists_across_repaints() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    let log = Rc::new(RefCell::new(Vec::new()));
    mgr.set_content_painter(
        a,
        Box::new(TickPainter {
            ticks: std::collections::HashMap::new(),
            log: Rc::clone(&log),
        }),
    );

    let mut canvas = RecordingCanvas::new();
    mgr.paint(&mut canvas);
    mgr.paint(&mut canvas);
    mgr.paint(&mut canvas);

    assert_eq!(log.borrow().as_slice(), &[(a, 1), (a, 2), (a, 3)]);
}

#[test]
fn paint_order_matches_z_order_after_activation() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    let _b = window_at(&mut mgr, "B", 500.0, 100.0);

    // Activate A; it should now paint last (frontmost).
    mgr.activate_window(a);

    let mut canvas = RecordingCanvas::new();
    mgr.paint(&mut canvas);

    let translates: Vec<Vec2> = canvas
        .ops
        .iter()
        .filter_map(|op| match op {
            CanvasOp::Translate(v) => Some(*v),
            _ => None,
        })
        .collect();
    assert_eq!(*translates.last().unwrap(), Vec2::new(100.0, 100.0));
}

#[test]
fn painter_context_is_scoped_to_the_client_area() {
    let mut mgr = manager();
    let a = window_at(&mut mgr, "A", 100.0, 100.0);
    mgr.set_content_painter(
        a,
        Box::new(|_: WindowId, ctx: &mut dyn Canvas, area: Size| {
            ctx.fill_rect(Rect::new(-50.0, -50.0, area.width + 100.0, area.height + 100.0));
        }),
    );

    let mut canvas = RecordingCanvas::new();
    mgr.paint(&mut canvas);

    // The overflowing fill is preceded by a clip to exactly the client
    // area within the same save scope.
    let clip_pos = canvas
        .ops
        .iter()
        .position(|op| {
            *op == CanvasOp::Clip(Rect::new(0.0, 0.0, 300.0, 200.0 - THEME.title_height))
        })
        .expect("client-area clip missing");
    let fill_pos = canvas
        .ops
        .iter()
        .position(|op| {
            matches!(op, CanvasOp::FillRect(r) if r.x < 0.0)
        })
        .expect("painter fill missing");
    assert!(clip_pos < fill_pos);
    assert!(canvas.is_balanced());
}

// =============================================================================
// Randomized defaults
// =============================================================================

#[test]
fn defaulted_windows_respect_surface_and_ranges() {
    let mut mgr = manager();
    for _ in 0..10 {
        mgr.add_window(WindowConfig::default());
    }

    for window in mgr.windows.iter_back_to_front() {
        let (w_min, w_max) = THEME.default_width_range;
        let (h_min, h_max) = THEME.default_height_range;
        assert!(window.size.width >= w_min && window.size.width <= w_max);
        assert!(window.size.height >= h_min && window.size.height <= h_max);
        assert!(window.position.x >= 0.0);
        assert!(window.position.y >= 0.0);
        assert!(window.rect().right() <= 1280.0 + 0.001);
        assert!(window.rect().bottom() <= 720.0 + 0.001);
    }
    assert_invariants(&mgr);
}
