//! 2D immediate-mode drawing trait

use crate::math::{Rect, Vec2};

/// Text baseline for `fill_text`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    #[default]
    Alphabetic,
    Middle,
    Bottom,
}

impl TextBaseline {
    /// Canvas-API baseline keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        }
    }
}

/// Immediate-mode 2D drawing surface
///
/// Mirrors the small slice of a canvas 2D context the window manager
/// needs. Styles and fonts are CSS strings passed through untouched.
/// `save`/`restore` bracket the current transform, clip, and styles;
/// `translate` and `clip_rect` compose with whatever is already in
/// effect, which is what gives each window (and each client painter) its
/// own local coordinate space.
pub trait Canvas {
    /// Start a new path, discarding any pending one
    fn begin_path(&mut self);

    /// Set the fill style (CSS color string)
    fn set_fill_style(&mut self, style: &str);

    /// Set the stroke style (CSS color string)
    fn set_stroke_style(&mut self, style: &str);

    /// Set the font (CSS font string)
    fn set_font(&mut self, font: &str);

    /// Set the text baseline for subsequent `fill_text` calls
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Fill a rectangle with the current fill style
    fn fill_rect(&mut self, rect: Rect);

    /// Stroke a rectangle outline with the current stroke style
    fn stroke_rect(&mut self, rect: Rect);

    /// Draw filled text at a position
    fn fill_text(&mut self, text: &str, pos: Vec2);

    /// Add a circular arc to the current path (angles in radians)
    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32);

    /// Fill the current path
    fn fill(&mut self);

    /// Stroke the current path
    fn stroke(&mut self);

    /// Translate the coordinate system
    fn translate(&mut self, offset: Vec2);

    /// Intersect the clip region with a rectangle
    fn clip_rect(&mut self, rect: Rect);

    /// Push the current graphics state
    fn save(&mut self);

    /// Pop to the previously saved graphics state
    fn restore(&mut self);
}
