//! Core geometry types for the window manager
//!
//! These types provide basic 2D math operations for positioning and
//! sizing, plus the theme constants that drive frame metrics.

mod vec2;
mod rect;
mod size;
mod theme;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use theme::{Theme, THEME};
