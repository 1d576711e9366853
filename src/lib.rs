//! Window manager for a single 2D canvas surface
//!
//! This crate provides a minimal desktop-style window manager rendered onto
//! one immediate-mode 2D drawing surface:
//! - Window lifecycle (create, close, activate, z-order)
//! - Pointer-driven dragging and 8-direction resizing
//! - Hit testing against window frames (borders, corners, title, close)
//! - Back-to-front compositing with per-window translated + clipped
//!   client-area painting
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`) and the theme
//! - [`window`]: Window data, hit zones, and the z-ordered window stack
//! - [`input`]: Pointer gesture state machine and drag geometry
//! - [`render`]: The `Canvas` drawing boundary and content painters
//! - The `WindowManager` tying everything together
//!
//! ## Example
//!
//! ```rust
//! use canvas_desktop::{Size, Vec2, WindowConfig, WindowManager};
//!
//! let mut manager = WindowManager::new(Size::new(1280.0, 720.0));
//!
//! let id = manager.add_window(WindowConfig {
//!     title: Some("My Window".to_string()),
//!     position: Some(Vec2::new(100.0, 100.0)),
//!     size: Some(Size::new(300.0, 200.0)),
//! });
//!
//! assert_eq!(manager.windows.active(), Some(id));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable
//!    without a browser
//! 2. **Explicit Instances**: No process-wide singleton; the embedding
//!    application owns the manager
//! 3. **Stable Handles**: Windows are addressed by opaque ids, never by
//!    reference identity
//! 4. **Minimal Dependencies**: Core types have no browser dependencies

pub mod math;
pub mod window;
pub mod input;
pub mod render;

mod manager;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Theme, Vec2, THEME};
pub use window::{HitZone, Window, WindowConfig, WindowId, WindowStack};
pub use input::{Gesture, InputResult, InputRouter};
pub use render::{Canvas, CanvasOp, ContentPainter, RecordingCanvas, TextBaseline};

pub use manager::WindowManager;
