//! Vector export: SVG reconstruction of the stroke log.
//!
//! The document is rebuilt purely from the committed strokes and the
//! current style; the raster surface is never consulted. One `<path>`
//! per stroke, with `M x,y` for the first point and `L x,y` for each
//! subsequent one.

use freedraw_core::{StrokeLog, StrokeStyle};
use kurbo::Point;
use std::fmt;

/// Path data for a single stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    points: Vec<Point>,
}

impl PathData {
    /// Number of points on the polyline.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// The SVG path-data string, e.g. `M0,0L10,0L10,10`.
    pub fn data(&self) -> String {
        let mut out = String::new();
        for (i, point) in self.points.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            // f64 Display drops trailing zeros, matching the source output.
            out.push(command);
            out.push_str(&format!("{},{}", point.x, point.y));
        }
        out
    }
}

/// An SVG document sized to the surface, one path per committed stroke,
/// all styled with the current stroke style.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    width: u32,
    height: u32,
    style: StrokeStyle,
    paths: Vec<PathData>,
}

impl VectorDocument {
    /// Build a document from the stroke log. Strokes in the log are
    /// always committable, but sub-2-point entries are skipped for
    /// robustness against hand-built logs.
    pub fn from_log(log: &StrokeLog, style: &StrokeStyle, width: u32, height: u32) -> Self {
        let paths = log
            .iter()
            .filter(|stroke| stroke.len() >= 2)
            .map(|stroke| PathData {
                points: stroke.points().to_vec(),
            })
            .collect();

        Self {
            width,
            height,
            style: *style,
            paths,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The per-stroke paths, in commit order.
    pub fn paths(&self) -> &[PathData] {
        &self.paths
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        write!(
            f,
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height
        )?;

        for path in &self.paths {
            write!(
                f,
                "\n    <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
                path.data(),
                self.style.color,
                self.style.width()
            )?;
        }

        write!(f, "\n</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freedraw_core::{Color, Stroke};

    fn log_with(points: Vec<Vec<(f64, f64)>>) -> StrokeLog {
        let mut log = StrokeLog::new();
        for stroke in points {
            log.commit(Stroke::from_points(
                stroke.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
            ));
        }
        log
    }

    #[test]
    fn test_empty_log_is_well_formed() {
        let doc = VectorDocument::from_log(&StrokeLog::new(), &StrokeStyle::default(), 100, 50);
        let xml = doc.to_string();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<svg width="100" height="50""#));
        assert!(xml.ends_with("</svg>"));
        assert!(!xml.contains("<path"));
    }

    #[test]
    fn test_one_path_per_stroke_in_order() {
        let log = log_with(vec![
            vec![(0.0, 0.0), (1.0, 1.0)],
            vec![(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)],
        ]);
        let doc = VectorDocument::from_log(&log, &StrokeStyle::default(), 10, 10);

        assert_eq!(doc.paths().len(), 2);
        assert_eq!(doc.paths()[0].point_count(), 2);
        assert_eq!(doc.paths()[1].point_count(), 3);
    }

    #[test]
    fn test_scenario_red_three_point_stroke() {
        let log = log_with(vec![vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]]);
        let style = StrokeStyle::new(Color::new(255, 0, 0), 4.0);
        let doc = VectorDocument::from_log(&log, &style, 200, 200);

        assert_eq!(doc.paths()[0].data(), "M0,0L10,0L10,10");

        let xml = doc.to_string();
        assert!(xml.contains(r#"d="M0,0L10,0L10,10""#));
        assert!(xml.contains(r##"stroke="#ff0000""##));
        assert!(xml.contains(r#"stroke-width="4""#));
        assert!(xml.contains(r#"stroke-linecap="round""#));
        assert!(xml.contains(r#"stroke-linejoin="round""#));
    }

    #[test]
    fn test_fractional_coordinates_keep_precision() {
        let log = log_with(vec![vec![(0.5, 1.25), (2.0, 3.0)]]);
        let doc = VectorDocument::from_log(&log, &StrokeStyle::default(), 10, 10);

        assert_eq!(doc.paths()[0].data(), "M0.5,1.25L2,3");
    }
}
