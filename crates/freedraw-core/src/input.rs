//! Pointer capture state machine for freehand drawing.
//!
//! Mouse and touch input are unified by the embedder into [`PointerEvent`]s
//! (touch uses the first active contact). The [`StrokeRecorder`] turns the
//! event stream into line segments for immediate painting and a finished
//! [`Stroke`] per down-to-up gesture.

use crate::stroke::Stroke;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event, unified over mouse and touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Button press or first touch contact.
    Down { position: Point },
    /// Pointer motion.
    Move { position: Point },
    /// Button release or touch contact end.
    Up { position: Point },
    /// Pointer left the surface; ends a gesture in progress.
    Leave,
}

/// One line segment of an in-progress stroke, painted immediately for
/// visual feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Recorder phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Drawing,
}

/// Records pointer gestures into strokes.
///
/// States: `Idle` and `Drawing`. Pointer-down starts a gesture, each move
/// while drawing yields the segment from the last position, and up/leave
/// finishes the gesture. Whether a finished gesture is retained is the
/// stroke log's decision, not the recorder's.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
    phase: Phase,
    last_point: Option<Point>,
    buffer: Stroke,
}

impl StrokeRecorder {
    /// Create an idle recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.phase == Phase::Drawing
    }

    /// Start a gesture at `position`.
    pub fn begin(&mut self, position: Point) {
        self.phase = Phase::Drawing;
        self.last_point = Some(position);
        self.buffer = Stroke::from_points(vec![position]);
    }

    /// Extend the gesture to `position`. Returns the segment from the
    /// previous position for immediate painting, or `None` when idle.
    pub fn update(&mut self, position: Point) -> Option<Segment> {
        if self.phase != Phase::Drawing {
            return None;
        }

        let from = self.last_point?;
        self.buffer.push(position);
        self.last_point = Some(position);

        Some(Segment { from, to: position })
    }

    /// Finish the gesture and return the buffered stroke.
    /// Returns `None` when no gesture was in progress.
    pub fn finish(&mut self) -> Option<Stroke> {
        if self.phase != Phase::Drawing {
            return None;
        }

        self.phase = Phase::Idle;
        self.last_point = None;
        Some(std::mem::take(&mut self.buffer))
    }

    /// Drive the state machine with a pointer event. Returns the segment
    /// to paint (on move) and the finished stroke (on up/leave).
    pub fn handle(&mut self, event: PointerEvent) -> (Option<Segment>, Option<Stroke>) {
        match event {
            PointerEvent::Down { position } => {
                self.begin(position);
                (None, None)
            }
            PointerEvent::Move { position } => (self.update(position), None),
            PointerEvent::Up { position } => {
                // The up position itself is not recorded; the gesture ends
                // at the last move, matching the source behavior.
                let _ = position;
                (None, self.finish())
            }
            PointerEvent::Leave => (None, self.finish()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_move_up_records_all_points() {
        let mut recorder = StrokeRecorder::new();

        recorder.handle(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
        });
        recorder.handle(PointerEvent::Move {
            position: Point::new(10.0, 0.0),
        });
        recorder.handle(PointerEvent::Move {
            position: Point::new(10.0, 10.0),
        });
        let (_, stroke) = recorder.handle(PointerEvent::Up {
            position: Point::new(10.0, 10.0),
        });

        // k moves yield k+1 points.
        let stroke = stroke.unwrap();
        assert_eq!(stroke.len(), 3);
        assert!(stroke.is_committable());
        assert!(!recorder.is_drawing());
    }

    #[test]
    fn test_tap_yields_single_point() {
        let mut recorder = StrokeRecorder::new();

        recorder.handle(PointerEvent::Down {
            position: Point::new(5.0, 5.0),
        });
        let (_, stroke) = recorder.handle(PointerEvent::Up {
            position: Point::new(5.0, 5.0),
        });

        let stroke = stroke.unwrap();
        assert_eq!(stroke.len(), 1);
        assert!(!stroke.is_committable());
    }

    #[test]
    fn test_move_yields_segment_from_last_point() {
        let mut recorder = StrokeRecorder::new();

        recorder.begin(Point::new(0.0, 0.0));
        let segment = recorder.update(Point::new(4.0, 3.0)).unwrap();
        assert_eq!(segment.from, Point::new(0.0, 0.0));
        assert_eq!(segment.to, Point::new(4.0, 3.0));

        let segment = recorder.update(Point::new(8.0, 6.0)).unwrap();
        assert_eq!(segment.from, Point::new(4.0, 3.0));
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut recorder = StrokeRecorder::new();

        assert!(recorder.update(Point::new(1.0, 1.0)).is_none());
        assert!(recorder.finish().is_none());
    }

    #[test]
    fn test_leave_ends_gesture() {
        let mut recorder = StrokeRecorder::new();

        recorder.begin(Point::new(0.0, 0.0));
        recorder.update(Point::new(20.0, 20.0));
        let (_, stroke) = recorder.handle(PointerEvent::Leave);

        assert_eq!(stroke.unwrap().len(), 2);
        assert!(!recorder.is_drawing());
    }

    #[test]
    fn test_recorder_resets_between_gestures() {
        let mut recorder = StrokeRecorder::new();

        recorder.begin(Point::new(0.0, 0.0));
        recorder.update(Point::new(1.0, 1.0));
        recorder.finish();

        recorder.begin(Point::new(50.0, 50.0));
        recorder.update(Point::new(51.0, 51.0));
        let stroke = recorder.finish().unwrap();

        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.points()[0], Point::new(50.0, 50.0));
    }
}
