//! Window configuration for creation

use crate::math::{Size, Vec2};

/// Configuration for creating a window
///
/// Every field is optional; the manager fills in a counter-derived title,
/// a randomized size within the theme ranges, and a random on-surface
/// position for anything left unset.
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Window title (None = auto-numbered)
    pub title: Option<String>,
    /// Initial position (None = random placement on the surface)
    pub position: Option<Vec2>,
    /// Initial size (None = randomized within theme ranges)
    pub size: Option<Size>,
}
