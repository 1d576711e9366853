//! WASM exports for the window manager
//!
//! Provides wasm-bindgen exports so a browser host can drive the
//! manager directly: pointer events in, cursor hints and canvas 2D
//! drawing out.

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::manager::WindowManager;
use crate::math::{Rect, Size, Vec2};
use crate::render::{Canvas, TextBaseline};
use crate::window::WindowConfig;

/// `Canvas` backend over the browser 2D context
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    /// Wrap a browser 2D context
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Canvas for Canvas2d {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.ctx.set_text_baseline(baseline.as_str());
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ctx
            .stroke_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start_angle as f64,
            end_angle as f64,
        );
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.ctx
            .rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
        self.ctx.clip();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

/// Window manager controller for WASM - wraps `WindowManager` with a
/// JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    manager: WindowManager,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller for a surface of the given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            manager: WindowManager::new(Size::new(width, height)),
        }
    }

    /// Record a new surface size after the host canvas resized
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.manager.resize_surface(Size::new(width, height));
    }

    /// Create a window; non-positive dimensions are randomized
    #[wasm_bindgen]
    pub fn add_window(&mut self, title: Option<String>, width: f32, height: f32) -> u64 {
        let size = if width > 0.0 && height > 0.0 {
            Some(Size::new(width, height))
        } else {
            None
        };
        self.manager.add_window(WindowConfig {
            title,
            position: None,
            size,
        })
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) {
        self.manager.close_window(id);
    }

    /// Bring a window to the front and make it active
    #[wasm_bindgen]
    pub fn activate_window(&mut self, id: u64) {
        self.manager.activate_window(id);
    }

    /// Number of open windows
    #[wasm_bindgen]
    pub fn window_count(&self) -> usize {
        self.manager.windows.count()
    }

    /// Id of the active window, or u64::MAX when none
    #[wasm_bindgen]
    pub fn active_window(&self) -> u64 {
        self.manager.windows.active().unwrap_or(u64::MAX)
    }

    /// Handle pointer down; returns the input result as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> String {
        to_json(&self.manager.on_pointer_down(button, Vec2::new(x, y)))
    }

    /// Handle pointer move; returns the input result (with any cursor
    /// hint) as JSON
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        to_json(&self.manager.on_pointer_move(Vec2::new(x, y)))
    }

    /// Handle pointer up; returns the input result as JSON
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        to_json(&self.manager.on_pointer_up())
    }

    /// Handle the pointer leaving the canvas
    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) {
        self.manager.on_pointer_leave();
    }

    /// Composite all windows onto the given 2D context
    #[wasm_bindgen]
    pub fn paint(&mut self, ctx: CanvasRenderingContext2d) {
        let mut canvas = Canvas2d::new(ctx);
        self.manager.paint(&mut canvas);
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
