//! Theme constants for window chrome and interaction

use super::Size;

/// Theme constants for window chrome
///
/// Colors and fonts are CSS strings passed straight through to the
/// drawing backend.
pub struct Theme {
    pub title_background_active: &'static str,
    pub title_foreground_active: &'static str,
    pub title_background_inactive: &'static str,
    pub title_foreground_inactive: &'static str,
    pub border_active: &'static str,
    pub border_inactive: &'static str,
    pub client_area_background: &'static str,
    pub canvas_backdrop: &'static str,
    pub font_title: &'static str,
    pub font_close_button: &'static str,
    /// Title bar height, also the top of the client area
    pub title_height: f32,
    /// Width of the close-button band at the right end of the title bar
    pub close_button_width: f32,
    /// Distance from an edge within which a point still hits that edge
    pub border_tolerance: f32,
    /// Pointer movement (on either axis) required before a press becomes
    /// a drag
    pub drag_threshold: f32,
    pub min_window_width: f32,
    pub min_window_height: f32,
    /// Ranges for randomized default window dimensions
    pub default_width_range: (f32, f32),
    pub default_height_range: (f32, f32),
}

impl Theme {
    /// Minimum window size as a `Size`
    #[inline]
    pub const fn min_window_size(&self) -> Size {
        Size::new(self.min_window_width, self.min_window_height)
    }
}

/// Default theme matching the classic desktop look
pub const THEME: Theme = Theme {
    title_background_active: "mediumblue",
    title_foreground_active: "white",
    title_background_inactive: "darkgrey",
    title_foreground_inactive: "black",
    border_active: "black",
    border_inactive: "grey",
    client_area_background: "white",
    canvas_backdrop: "#EEEEEE",
    font_title: "18px serif",
    font_close_button: "16px sans-serif",
    title_height: 30.0,
    close_button_width: 25.0,
    border_tolerance: 4.0,
    drag_threshold: 5.0,
    min_window_width: 200.0,
    min_window_height: 100.0,
    default_width_range: (300.0, 500.0),
    default_height_range: (150.0, 300.0),
};
