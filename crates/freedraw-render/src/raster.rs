//! Raster surface backed by a tiny-skia pixmap.
//!
//! The pixmap is a derived cache of the stroke log: segments are painted
//! onto it immediately while a gesture is in progress, and [`replay`]
//! rebuilds it from scratch whenever the log changes out from under it
//! (undo) or the style demands a clean slate.
//!
//! [`replay`]: RasterSurface::replay

use freedraw_core::{Color, Segment, Stroke, StrokeLog, StrokeStyle};
use thiserror::Error;

/// Raster surface errors.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid surface dimensions {0}x{1}")]
    InvalidDimensions(u32, u32),
}

/// A pixel buffer that strokes are painted onto with round caps and
/// joins, matching the feel of a 2D canvas pen.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixmap: tiny_skia::Pixmap,
    background: Option<Color>,
}

impl RasterSurface {
    /// Allocate a surface of the given dimensions, cleared to the
    /// background color (or fully transparent).
    pub fn new(width: u32, height: u32, background: Option<Color>) -> Result<Self, RasterError> {
        let pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RasterError::InvalidDimensions(width, height))?;

        let mut surface = Self { pixmap, background };
        surface.clear();
        Ok(surface)
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reset every pixel to the background.
    pub fn clear(&mut self) {
        self.pixmap.fill(match self.background {
            Some(c) => tiny_skia::Color::from_rgba8(c.r, c.g, c.b, 255),
            None => tiny_skia::Color::TRANSPARENT,
        });
    }

    /// Paint one segment of an in-progress gesture.
    pub fn paint_segment(&mut self, segment: Segment, style: &StrokeStyle) {
        let mut builder = tiny_skia::PathBuilder::new();
        builder.move_to(segment.from.x as f32, segment.from.y as f32);
        builder.line_to(segment.to.x as f32, segment.to.y as f32);
        self.stroke_path(builder, style);
    }

    /// Paint a committed stroke as a single polyline.
    pub fn paint_stroke(&mut self, stroke: &Stroke, style: &StrokeStyle) {
        let points = stroke.points();
        if points.len() < 2 {
            return;
        }

        let mut builder = tiny_skia::PathBuilder::new();
        builder.move_to(points[0].x as f32, points[0].y as f32);
        for point in &points[1..] {
            builder.line_to(point.x as f32, point.y as f32);
        }
        self.stroke_path(builder, style);
    }

    /// Clear the surface and repaint every stroke in log order.
    /// Deterministic given the log and style.
    pub fn replay(&mut self, log: &StrokeLog, style: &StrokeStyle) {
        self.clear();
        for stroke in log.iter() {
            self.paint_stroke(stroke, style);
        }
    }

    /// Reallocate at new dimensions, redrawing the previous content
    /// scaled to fit. Best-effort visual preservation; the stroke log is
    /// not consulted and not modified.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RasterError> {
        let snapshot = std::mem::replace(
            &mut self.pixmap,
            tiny_skia::Pixmap::new(width, height)
                .ok_or(RasterError::InvalidDimensions(width, height))?,
        );
        self.clear();

        let sx = width as f32 / snapshot.width() as f32;
        let sy = height as f32 / snapshot.height() as f32;
        self.pixmap.draw_pixmap(
            0,
            0,
            snapshot.as_ref(),
            &tiny_skia::PixmapPaint::default(),
            tiny_skia::Transform::from_scale(sx, sy),
            None,
        );
        Ok(())
    }

    /// Straight (unpremultiplied) RGBA8 copy of the pixel buffer.
    pub fn data(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    /// Check whether any pixel differs from the cleared background.
    pub fn is_blank(&self) -> bool {
        // Opaque backgrounds premultiply to themselves; transparent is
        // all zeroes.
        let (r, g, b, a) = match self.background {
            Some(c) => (c.r, c.g, c.b, 255),
            None => (0, 0, 0, 0),
        };
        self.pixmap
            .pixels()
            .iter()
            .all(|p| p.red() == r && p.green() == g && p.blue() == b && p.alpha() == a)
    }

    fn stroke_path(&mut self, builder: tiny_skia::PathBuilder, style: &StrokeStyle) {
        let Some(path) = builder.finish() else {
            log::debug!("skipping degenerate stroke path");
            return;
        };

        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(style.color.r, style.color.g, style.color.b, 255);
        paint.anti_alias = true;

        let stroke = tiny_skia::Stroke {
            width: style.width() as f32,
            line_cap: tiny_skia::LineCap::Round,
            line_join: tiny_skia::LineJoin::Round,
            ..tiny_skia::Stroke::default()
        };

        self.pixmap.stroke_path(
            &path,
            &paint,
            &stroke,
            tiny_skia::Transform::identity(),
            None,
        );
    }
}
