//! Stroke style: color and line width.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color: {0:?}")]
pub struct ParseColorError(pub String);

/// Opaque RGB color (RGBA is out of scope; strokes are always opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rgb` and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError(s.to_string()))?
            .trim();
        if !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }

        let byte = |slice: &str| u8::from_str_radix(slice, 16);

        match hex.len() {
            3 => {
                // #rgb expands each nibble: #f0a -> #ff00aa
                let r = byte(&hex[0..1]).map_err(|_| ParseColorError(s.to_string()))? * 17;
                let g = byte(&hex[1..2]).map_err(|_| ParseColorError(s.to_string()))? * 17;
                let b = byte(&hex[2..3]).map_err(|_| ParseColorError(s.to_string()))? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = byte(&hex[0..2]).map_err(|_| ParseColorError(s.to_string()))?;
                let g = byte(&hex[2..4]).map_err(|_| ParseColorError(s.to_string()))?;
                let b = byte(&hex[4..6]).map_err(|_| ParseColorError(s.to_string()))?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Style applied to strokes as they are rendered. A single mutable style
/// governs the whole surface: a full redraw replays every committed
/// stroke with the style current at that moment, not the style each
/// stroke was drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Line width in pixels. Always positive.
    width: f64,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        let mut style = Self { color, width: 2.0 };
        style.set_width(width);
        style
    }

    /// Get the line width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the line width. Non-positive values are rejected and the
    /// previous width kept.
    pub fn set_width(&mut self, width: f64) {
        if width > 0.0 && width.is_finite() {
            self.width = width;
        } else {
            log::warn!("ignoring non-positive line width {width}");
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::black(),
            width: 2.0,
        }
    }
}
