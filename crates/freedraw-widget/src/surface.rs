//! The drawing surface widget.

use crate::host::HostResolver;
use freedraw_core::{Color, PointerEvent, StrokeLog, StrokeRecorder, StrokeStyle, SurfaceOptions};
use freedraw_render::{RasterFormat, RasterSurface, VectorDocument, export_raster};
use kurbo::Point;

/// A freehand drawing overlay bound to one host container for its whole
/// life.
///
/// Construction failures (unresolvable host, degenerate dimensions) do
/// not propagate: the error is reported once and the instance stays
/// inert, turning every subsequent operation into a no-op. Nothing here
/// panics past the widget boundary.
///
/// The committed stroke log is the source of truth; the raster pixmap is
/// a derived cache rebuilt by [`DrawingSurface::undo`] and kept current
/// segment-by-segment while a gesture is in progress.
#[derive(Debug)]
pub struct DrawingSurface {
    inner: Option<Inner>,
}

#[derive(Debug)]
struct Inner {
    raster: RasterSurface,
    log: StrokeLog,
    style: StrokeStyle,
    recorder: StrokeRecorder,
    visible: bool,
}

impl DrawingSurface {
    /// Mount a surface onto the host container `host_id`, sized to the
    /// host's current bounding box.
    pub fn mount(resolver: &dyn HostResolver, host_id: &str, options: SurfaceOptions) -> Self {
        let Some(rect) = resolver.resolve(host_id) else {
            log::error!("host container {host_id:?} not found; surface is inert");
            return Self { inner: None };
        };

        let raster = match RasterSurface::new(rect.width, rect.height, options.background) {
            Ok(raster) => raster,
            Err(e) => {
                log::error!("cannot allocate surface for {host_id:?}: {e}; surface is inert");
                return Self { inner: None };
            }
        };

        Self {
            inner: Some(Inner {
                raster,
                log: StrokeLog::new(),
                style: options.style(),
                recorder: StrokeRecorder::new(),
                visible: true,
            }),
        }
    }

    /// Check if construction failed and all operations are no-ops.
    pub fn is_inert(&self) -> bool {
        self.inner.is_none()
    }

    /// Feed a pointer event into the capture state machine. Moves while
    /// drawing paint their segment immediately; up/leave commits the
    /// gesture to the log (gestures under two points are dropped).
    ///
    /// Events are ignored while the surface is hidden, matching an
    /// overlay that is not hit-testable when not displayed.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let Some(inner) = &mut self.inner else { return };
        if !inner.visible {
            return;
        }

        let event = inner.clamp(event);
        let (segment, finished) = inner.recorder.handle(event);

        if let Some(segment) = segment {
            inner.raster.paint_segment(segment, &inner.style);
        }
        if let Some(stroke) = finished {
            inner.log.commit(stroke);
        }
    }

    /// Update the stroke color for subsequent rendering. Already-painted
    /// pixels are not recolored in place.
    pub fn set_color(&mut self, color: Color) {
        if let Some(inner) = &mut self.inner {
            inner.style.color = color;
        }
    }

    /// Update the line width for subsequent rendering.
    pub fn set_line_width(&mut self, width: f64) {
        if let Some(inner) = &mut self.inner {
            inner.style.set_width(width);
        }
    }

    /// Empty the stroke log and blank the surface.
    pub fn clear(&mut self) {
        if let Some(inner) = &mut self.inner {
            inner.log.clear();
            inner.raster.clear();
        }
    }

    /// Remove the most recently committed stroke and rebuild the raster
    /// from the log. No-op when the log is empty.
    pub fn undo(&mut self) {
        if let Some(inner) = &mut self.inner {
            if inner.log.undo() {
                inner.redraw();
            }
        }
    }

    /// Encoded snapshot of the current raster surface as a data URI.
    /// Pure read. `None` when inert or the format is unrecognized.
    pub fn export_raster(&self, format: &str, quality: f64) -> Option<String> {
        let inner = self.inner.as_ref()?;

        let format = match RasterFormat::parse(format) {
            Ok(format) => format,
            Err(e) => {
                log::error!("raster export failed: {e}");
                return None;
            }
        };

        match export_raster(&inner.raster, format, quality) {
            Ok(uri) => Some(uri),
            Err(e) => {
                log::error!("raster export failed: {e}");
                None
            }
        }
    }

    /// Vector reconstruction of the stroke log, sized to the surface and
    /// styled with the current style. Does not consult the raster.
    pub fn export_vector(&self) -> Option<VectorDocument> {
        let inner = self.inner.as_ref()?;
        Some(VectorDocument::from_log(
            &inner.log,
            &inner.style,
            inner.raster.width(),
            inner.raster.height(),
        ))
    }

    /// Show or hide the surface without touching its state.
    pub fn toggle_visibility(&mut self, show: bool) {
        if let Some(inner) = &mut self.inner {
            inner.visible = show;
        }
    }

    /// Check whether the surface is currently shown.
    pub fn is_visible(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.visible)
    }

    /// Track a host container dimension change: reallocate the raster at
    /// the new size with the old content scaled to fit. The stroke log
    /// is unaffected.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(inner) = &mut self.inner {
            if let Err(e) = inner.raster.resize(width, height) {
                log::error!("surface resize rejected: {e}");
            }
        }
    }

    /// Number of committed strokes.
    pub fn stroke_count(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| inner.log.len())
    }

    /// Straight RGBA copy of the raster pixels, for diffing.
    pub fn raster_data(&self) -> Option<Vec<u8>> {
        self.inner.as_ref().map(|inner| inner.raster.data())
    }

    /// Surface dimensions, when mounted.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.inner
            .as_ref()
            .map(|inner| (inner.raster.width(), inner.raster.height()))
    }
}

impl Inner {
    /// Clear and replay the whole log with the current style.
    fn redraw(&mut self) {
        self.raster.replay(&self.log, &self.style);
    }

    /// Keep recorded points non-negative and bounded by the surface.
    fn clamp(&self, event: PointerEvent) -> PointerEvent {
        let clamp = |p: Point| {
            Point::new(
                p.x.clamp(0.0, self.raster.width() as f64),
                p.y.clamp(0.0, self.raster.height() as f64),
            )
        };
        match event {
            PointerEvent::Down { position } => PointerEvent::Down {
                position: clamp(position),
            },
            PointerEvent::Move { position } => PointerEvent::Move {
                position: clamp(position),
            },
            PointerEvent::Up { position } => PointerEvent::Up {
                position: clamp(position),
            },
            PointerEvent::Leave => PointerEvent::Leave,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostRect, StaticHosts};

    fn hosts() -> StaticHosts {
        StaticHosts::new().with("preview", HostRect::new(64, 64))
    }

    fn mounted() -> DrawingSurface {
        DrawingSurface::mount(&hosts(), "preview", SurfaceOptions::default())
    }

    fn draw_line(surface: &mut DrawingSurface, from: (f64, f64), to: (f64, f64)) {
        surface.handle_pointer(PointerEvent::Down {
            position: Point::new(from.0, from.1),
        });
        surface.handle_pointer(PointerEvent::Move {
            position: Point::new(to.0, to.1),
        });
        surface.handle_pointer(PointerEvent::Up {
            position: Point::new(to.0, to.1),
        });
    }

    #[test]
    fn test_mount_resolves_host_dimensions() {
        let surface = mounted();
        assert!(!surface.is_inert());
        assert_eq!(surface.size(), Some((64, 64)));
        assert!(surface.is_visible());
    }

    #[test]
    fn test_unresolvable_host_is_inert() {
        let mut surface = DrawingSurface::mount(&hosts(), "nope", SurfaceOptions::default());
        assert!(surface.is_inert());

        // Every operation is a no-op on an inert surface.
        draw_line(&mut surface, (0.0, 0.0), (10.0, 10.0));
        surface.set_color(Color::white());
        surface.set_line_width(5.0);
        surface.clear();
        surface.undo();
        surface.toggle_visibility(true);
        assert_eq!(surface.stroke_count(), 0);
        assert!(surface.export_raster("image/png", 1.0).is_none());
        assert!(surface.export_vector().is_none());
        assert!(!surface.is_visible());
    }

    #[test]
    fn test_gesture_commits_one_stroke() {
        let mut surface = mounted();
        draw_line(&mut surface, (5.0, 5.0), (30.0, 30.0));
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn test_tap_commits_nothing() {
        let mut surface = mounted();
        surface.handle_pointer(PointerEvent::Down {
            position: Point::new(5.0, 5.0),
        });
        surface.handle_pointer(PointerEvent::Up {
            position: Point::new(5.0, 5.0),
        });
        assert_eq!(surface.stroke_count(), 0);
    }

    #[test]
    fn test_points_clamped_to_surface() {
        let mut surface = mounted();
        draw_line(&mut surface, (-10.0, 5.0), (200.0, 30.0));
        assert_eq!(surface.stroke_count(), 1);

        let doc = surface.export_vector().unwrap();
        assert_eq!(doc.paths()[0].data(), "M0,5L64,30");
    }

    #[test]
    fn test_hidden_surface_ignores_input() {
        let mut surface = mounted();
        surface.toggle_visibility(false);
        draw_line(&mut surface, (5.0, 5.0), (30.0, 30.0));
        assert_eq!(surface.stroke_count(), 0);

        surface.toggle_visibility(true);
        draw_line(&mut surface, (5.0, 5.0), (30.0, 30.0));
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn test_hide_preserves_state() {
        let mut surface = mounted();
        draw_line(&mut surface, (5.0, 5.0), (30.0, 30.0));
        let before = surface.raster_data();

        surface.toggle_visibility(false);
        surface.toggle_visibility(true);

        assert_eq!(surface.stroke_count(), 1);
        assert_eq!(surface.raster_data(), before);
    }

    #[test]
    fn test_clear_empties_log_and_raster() {
        let mut surface = mounted();
        draw_line(&mut surface, (5.0, 5.0), (30.0, 30.0));
        surface.clear();

        assert_eq!(surface.stroke_count(), 0);
        let blank = DrawingSurface::mount(&hosts(), "preview", SurfaceOptions::default());
        assert_eq!(surface.raster_data(), blank.raster_data());
    }

    #[test]
    fn test_undo_on_empty_log_is_noop() {
        let mut surface = mounted();
        surface.undo();
        assert_eq!(surface.stroke_count(), 0);
    }

    #[test]
    fn test_resize_keeps_log() {
        let mut surface = mounted();
        draw_line(&mut surface, (5.0, 5.0), (30.0, 30.0));

        surface.resize(128, 32);
        assert_eq!(surface.size(), Some((128, 32)));
        assert_eq!(surface.stroke_count(), 1);
    }
}
