//! Recording canvas for headless use
//!
//! Logs every drawing call instead of rasterizing. This is the test
//! backend for the pure core; hosts can also use it for golden testing
//! of paint output.

use crate::math::{Rect, Vec2};
use super::{Canvas, TextBaseline};

/// One recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    BeginPath,
    FillStyle(String),
    StrokeStyle(String),
    Font(String),
    Baseline(TextBaseline),
    FillRect(Rect),
    StrokeRect(Rect),
    FillText(String, Vec2),
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Fill,
    Stroke,
    Translate(Vec2),
    Clip(Rect),
    Save,
    Restore,
}

/// Canvas backend that records operations instead of drawing
#[derive(Default)]
pub struct RecordingCanvas {
    /// Every call, in order
    pub ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Discard the recorded operations
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Count operations matching a predicate
    pub fn count_ops(&self, predicate: impl Fn(&CanvasOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }

    /// Check whether saves and restores are balanced
    pub fn is_balanced(&self) -> bool {
        let mut depth: i32 = 0;
        for op in &self.ops {
            match op {
                CanvasOp::Save => depth += 1,
                CanvasOp::Restore => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl Canvas for RecordingCanvas {
    fn begin_path(&mut self) {
        self.ops.push(CanvasOp::BeginPath);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(CanvasOp::FillStyle(style.to_string()));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(CanvasOp::StrokeStyle(style.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(CanvasOp::Font(font.to_string()));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.ops.push(CanvasOp::Baseline(baseline));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(CanvasOp::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(CanvasOp::StrokeRect(rect));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        self.ops.push(CanvasOp::FillText(text.to_string(), pos));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        self.ops.push(CanvasOp::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) {
        self.ops.push(CanvasOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(CanvasOp::Stroke);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(CanvasOp::Translate(offset));
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.ops.push(CanvasOp::Clip(rect));
    }

    fn save(&mut self) {
        self.ops.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(CanvasOp::Restore);
    }
}
