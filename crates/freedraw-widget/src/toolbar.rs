//! Toolbar controller: the glue controls that drive a drawing surface.
//!
//! Models the injected toolbar as data instead of a concrete UI: a draw
//! toggle, a color picker, a line-width slider (1–20), clear, undo, and
//! the two export buttons. The surface is mounted lazily on the first
//! draw toggle, then shown/hidden on later toggles, exactly as the
//! original button behaves.

use crate::host::HostResolver;
use crate::surface::DrawingSurface;
use freedraw_core::{Color, SurfaceOptions};
use freedraw_render::VectorDocument;

/// Line-width slider range.
const MIN_LINE_WIDTH: f64 = 1.0;
const MAX_LINE_WIDTH: f64 = 20.0;

/// One toolbar interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolbarAction {
    /// Enter/leave drawing mode; mounts the surface on first use.
    ToggleDraw,
    SetColor(Color),
    SetLineWidth(f64),
    Clear,
    Undo,
    ExportSvg,
    ExportPng,
}

/// Payload produced by an export action.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarOutput {
    Svg(VectorDocument),
    /// PNG data URI.
    Png(String),
}

/// Drives one drawing surface from toolbar interactions.
#[derive(Debug)]
pub struct Toolbar<R> {
    hosts: R,
    host_id: String,
    options: SurfaceOptions,
    surface: Option<DrawingSurface>,
    drawing_mode: bool,
}

impl<R: HostResolver> Toolbar<R> {
    /// Create a toolbar bound to a host container. Nothing is mounted
    /// until the first draw toggle.
    pub fn new(hosts: R, host_id: impl Into<String>, options: SurfaceOptions) -> Self {
        Self {
            hosts,
            host_id: host_id.into(),
            options,
            surface: None,
            drawing_mode: false,
        }
    }

    /// Whether drawing mode is currently active.
    pub fn drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    /// The mounted surface, if any.
    pub fn surface(&self) -> Option<&DrawingSurface> {
        self.surface.as_ref()
    }

    /// Mutable access to the mounted surface, for routing pointer events.
    pub fn surface_mut(&mut self) -> Option<&mut DrawingSurface> {
        self.surface.as_mut()
    }

    /// Apply a toolbar interaction. Export actions yield a payload.
    pub fn apply(&mut self, action: ToolbarAction) -> Option<ToolbarOutput> {
        match action {
            ToolbarAction::ToggleDraw => {
                self.drawing_mode = !self.drawing_mode;
                match &mut self.surface {
                    None if self.drawing_mode => {
                        self.surface = Some(DrawingSurface::mount(
                            &self.hosts,
                            &self.host_id,
                            self.options,
                        ));
                    }
                    Some(surface) => surface.toggle_visibility(self.drawing_mode),
                    None => {}
                }
                None
            }
            ToolbarAction::SetColor(color) => {
                self.options.color = color;
                if let Some(surface) = &mut self.surface {
                    surface.set_color(color);
                }
                None
            }
            ToolbarAction::SetLineWidth(width) => {
                let width = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
                self.options.line_width = width;
                if let Some(surface) = &mut self.surface {
                    surface.set_line_width(width);
                }
                None
            }
            ToolbarAction::Clear => {
                if let Some(surface) = &mut self.surface {
                    surface.clear();
                }
                None
            }
            ToolbarAction::Undo => {
                if let Some(surface) = &mut self.surface {
                    surface.undo();
                }
                None
            }
            ToolbarAction::ExportSvg => self
                .surface
                .as_ref()
                .and_then(DrawingSurface::export_vector)
                .map(ToolbarOutput::Svg),
            ToolbarAction::ExportPng => self
                .surface
                .as_ref()
                .and_then(|s| s.export_raster("image/png", 1.0))
                .map(ToolbarOutput::Png),
        }
    }
}
