//! Strokes and the committed stroke log.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// Minimum number of points for a stroke to leave a visible mark.
/// A bare tap records a single point and is discarded on commit.
const MIN_COMMIT_POINTS: usize = 2;

/// One continuous freehand gesture, stored as an ordered point sequence
/// in surface-local pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Create an empty stroke.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append a point to the gesture.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The recorded points, in gesture order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// A stroke below two points produces no visible mark and is not
    /// retained by the log.
    pub fn is_committable(&self) -> bool {
        self.points.len() >= MIN_COMMIT_POINTS
    }

    /// Bounding box of the recorded points.
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Rect::new(min_x, min_y, max_x, max_y)
    }

    /// Polyline path through the points: move to the first, line to each
    /// subsequent one.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        if self.points.is_empty() {
            return path;
        }

        path.move_to(self.points[0]);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }

        path
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered history of committed strokes, insertion order = chronological
/// order. This is the sole source of truth for undo, full redraw, and
/// vector export; the raster surface is a derived cache of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrokeLog {
    strokes: Vec<Stroke>,
}

impl StrokeLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished stroke. Strokes with fewer than two points are
    /// discarded silently. Returns whether the stroke was retained.
    pub fn commit(&mut self, stroke: Stroke) -> bool {
        if !stroke.is_committable() {
            return false;
        }
        self.strokes.push(stroke);
        true
    }

    /// Remove the most recently committed stroke.
    /// Returns false when the log is empty (no-op).
    pub fn undo(&mut self) -> bool {
        self.strokes.pop().is_some()
    }

    /// Remove all strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Iterate strokes in commit order.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    /// Get the number of committed strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Get a committed stroke by index.
    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }
}
