//! Window management module
//!
//! Provides window data, frame hit testing, and the z-ordered window
//! stack.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod zone;
mod hit;
mod stack;

pub use window::Window;
pub use config::WindowConfig;
pub use zone::HitZone;
pub use stack::WindowStack;

/// Unique window identifier
pub type WindowId = u64;
