//! Pointer-gesture accumulation.
//!
//! A completed press/release pair produces exactly one shape. The in-flight
//! start coordinate lives in an explicit two-state machine rather than in UI
//! state, so gesture handling can be tested without constructing a window.

use super::shape::{Point, Shape};

/// The shape kind the next completed gesture will produce.
///
/// Mirrors the editor's shape-selection control; exactly one mode is active
/// at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Dot,
    Line,
    Rect,
}

/// Internal gesture state: either between gestures, or holding the press
/// coordinate of a drag in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum GestureState {
    #[default]
    Idle,
    Armed(Point),
}

/// Accumulates a press/release pair into one [`Shape`].
///
/// The tracker is `Idle` between gestures and `Armed` with the press
/// coordinate while a drag is in progress; every release returns it to
/// `Idle`.
///
/// # Examples
///
/// ```
/// use vellum::model::{DrawMode, GestureTracker, Point, Shape};
///
/// let mut tracker = GestureTracker::new();
/// tracker.press(Point::new(0, 0));
/// let shape = tracker.release(Point::new(10, 10), DrawMode::Line);
/// assert_eq!(shape, Some(Shape::Line { x1: 0, y1: 0, x2: 10, y2: 10 }));
/// assert!(!tracker.is_armed());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-down event, arming the tracker with its coordinate.
    ///
    /// A press while already armed re-arms with the new coordinate (the
    /// matching release event was never delivered, e.g. it landed outside
    /// the canvas).
    pub fn press(&mut self, point: Point) {
        self.state = GestureState::Armed(point);
    }

    /// Record a pointer-up event, completing the gesture.
    ///
    /// Returns the produced shape when the tracker was armed, `None` for a
    /// release without a matching press. Either way the tracker is idle
    /// afterwards.
    ///
    /// Shape construction per mode:
    /// - `Dot`: placed at the release coordinate. For a true single click
    ///   press and release coincide, so this also covers click-to-place.
    /// - `Line`: from the press coordinate to the release coordinate,
    ///   unchanged. Direction is part of the value and is never normalized.
    /// - `Rect`: the axis-aligned bounding box of the two coordinates,
    ///   regardless of drag direction (see [`Shape::rect_between`]).
    pub fn release(&mut self, point: Point, mode: DrawMode) -> Option<Shape> {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => None,
            GestureState::Armed(start) => Some(match mode {
                DrawMode::Dot => Shape::Dot {
                    x: point.x,
                    y: point.y,
                },
                DrawMode::Line => Shape::Line {
                    x1: start.x,
                    y1: start.y,
                    x2: point.x,
                    y2: point.y,
                },
                DrawMode::Rect => Shape::rect_between(start, point),
            }),
        }
    }

    /// Whether a drag is currently in progress
    pub fn is_armed(&self) -> bool {
        matches!(self.state, GestureState::Armed(_))
    }
}
