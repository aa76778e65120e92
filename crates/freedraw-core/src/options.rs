//! Surface construction options.

use crate::style::{Color, StrokeStyle};
use serde::{Deserialize, Serialize};

/// Configuration recognized at surface construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceOptions {
    /// Initial line width in pixels.
    pub line_width: f64,
    /// Initial stroke color.
    pub color: Color,
    /// Surface background; `None` means transparent.
    pub background: Option<Color>,
}

impl SurfaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// The initial stroke style these options describe.
    pub fn style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.line_width)
    }
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            color: Color::black(),
            background: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SurfaceOptions::default();
        assert_eq!(options.line_width, 2.0);
        assert_eq!(options.color, Color::black());
        assert!(options.background.is_none());
    }

    #[test]
    fn test_builder() {
        let options = SurfaceOptions::new()
            .with_line_width(4.0)
            .with_color(Color::new(255, 0, 0))
            .with_background(Color::white());

        let style = options.style();
        assert_eq!(style.width(), 4.0);
        assert_eq!(style.color, Color::new(255, 0, 0));
        assert_eq!(options.background, Some(Color::white()));
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let options: SurfaceOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SurfaceOptions::default());
    }
}
