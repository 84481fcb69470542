//! Drawable primitives.
//!
//! `Shape` is a closed variant over the three primitives the editor can
//! place. Consumers dispatch by exhaustive pattern matching, so adding a
//! variant forces every consumption site (rendering, encoding) to handle it.

/// A coordinate pair on the canvas.
///
/// Also the element type of the point-only document variant, and the start
/// coordinate recorded by an armed [`GestureTracker`](super::GestureTracker).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point from raw event coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One drawable primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single dot at `(x, y)`
    Dot { x: i32, y: i32 },
    /// A line segment from `(x1, y1)` to `(x2, y2)`; direction is preserved
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// An axis-aligned rectangle; `(x, y)` is the top-left corner and
    /// `width`/`height` are always non-negative
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

impl Shape {
    /// Build the axis-aligned bounding-box rectangle of two drag corners.
    ///
    /// The corners may come in any drag direction; the result is normalized
    /// so `(x, y)` is the top-left corner and `width`/`height` are the
    /// absolute coordinate differences.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum::model::{Point, Shape};
    ///
    /// let down = Shape::rect_between(Point::new(50, 50), Point::new(10, 30));
    /// let up = Shape::rect_between(Point::new(10, 30), Point::new(50, 50));
    /// assert_eq!(down, Shape::Rect { x: 10, y: 30, width: 40, height: 20 });
    /// assert_eq!(down, up);
    /// ```
    pub fn rect_between(a: Point, b: Point) -> Self {
        Shape::Rect {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_between_normalizes_any_drag_direction() {
        let expected = Shape::Rect {
            x: 10,
            y: 30,
            width: 40,
            height: 20,
        };
        assert_eq!(
            Shape::rect_between(Point::new(50, 50), Point::new(10, 30)),
            expected
        );
        assert_eq!(
            Shape::rect_between(Point::new(10, 30), Point::new(50, 50)),
            expected
        );
        // Mixed directions: down-left and up-right drags
        assert_eq!(
            Shape::rect_between(Point::new(50, 30), Point::new(10, 50)),
            expected
        );
        assert_eq!(
            Shape::rect_between(Point::new(10, 50), Point::new(50, 30)),
            expected
        );
    }

    #[test]
    fn test_rect_between_degenerate_click() {
        assert_eq!(
            Shape::rect_between(Point::new(7, 9), Point::new(7, 9)),
            Shape::Rect {
                x: 7,
                y: 9,
                width: 0,
                height: 0
            }
        );
    }
}
