//! Drawing boundary
//!
//! The manager never talks to a concrete backend; it paints through the
//! [`Canvas`] trait, and client content comes in through the
//! [`ContentPainter`] capability.

mod canvas;
mod painter;
mod recording;

pub use canvas::{Canvas, TextBaseline};
pub use painter::ContentPainter;
pub use recording::{CanvasOp, RecordingCanvas};
