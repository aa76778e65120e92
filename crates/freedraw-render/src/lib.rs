//! FreeDraw Render Library
//!
//! CPU rasterization of the stroke log onto a tiny-skia pixmap, plus the
//! two export paths: a PNG data URI snapshot of the raster surface and an
//! SVG document reconstructed from the stroke log.

mod export;
mod raster;
mod svg;

pub use export::{ExportError, RasterFormat, decode_png, export_raster};
pub use raster::{RasterError, RasterSurface};
pub use svg::{PathData, VectorDocument};
