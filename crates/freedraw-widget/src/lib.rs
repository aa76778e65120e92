//! FreeDraw Widget Library
//!
//! The embeddable drawing surface: a raster overlay mounted onto a host
//! container, driven by pointer events, with undo, clear, style changes,
//! and raster/vector export. The toolbar module models the glue controls
//! that drive a surface.

pub mod host;
pub mod surface;
pub mod toolbar;

pub use host::{HostRect, HostResolver, StaticHosts};
pub use surface::DrawingSurface;
pub use toolbar::{Toolbar, ToolbarAction, ToolbarOutput};
