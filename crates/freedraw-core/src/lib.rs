//! FreeDraw Core Library
//!
//! Platform-agnostic data model and input handling for the FreeDraw
//! canvas widget: strokes, the committed stroke log, stroke style, and
//! the pointer-capture state machine. Rendering lives in
//! `freedraw-render`; this crate has no raster dependencies.

pub mod input;
pub mod options;
pub mod stroke;
pub mod style;

pub use input::{PointerEvent, Segment, StrokeRecorder};
pub use options::SurfaceOptions;
pub use stroke::{Stroke, StrokeLog};
pub use style::{Color, ParseColorError, StrokeStyle};
