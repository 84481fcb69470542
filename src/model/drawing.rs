//! The ordered shape collection backing the canvas.

use super::shape::Shape;

/// The full ordered collection of shapes currently on the canvas.
///
/// Order is render order (painter's algorithm, back-to-front by insertion)
/// and survives an encode/decode round trip exactly. The collection owns all
/// shape values; mutation is append-only, plus a bulk replace used when a
/// document is loaded.
///
/// # Examples
///
/// ```
/// use vellum::model::{Drawing, Shape};
///
/// let mut drawing = Drawing::new();
/// drawing.append(Shape::Dot { x: 12, y: 34 });
/// drawing.append(Shape::Line { x1: 1, y1: 2, x2: 3, y2: 4 });
/// assert_eq!(drawing.len(), 2);
/// assert_eq!(drawing.snapshot()[0], Shape::Dot { x: 12, y: 34 });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drawing {
    shapes: Vec<Shape>,
}

impl Drawing {
    /// Create an empty drawing
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add one shape to the end of the drawing.
    ///
    /// No validation is performed; rectangle normalization is the gesture
    /// layer's job and has already happened by the time a shape exists.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Discard the current content and adopt `shapes` in the given order.
    ///
    /// This is the load path: callers decode a document into a temporary
    /// sequence first and call this only on success, so a failed load never
    /// touches the drawing.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    /// Remove every shape
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// The current ordered content, as a read-only view.
    ///
    /// Used for repainting and for encoding. The borrow rules guarantee no
    /// caller observes the drawing mid-mutation.
    pub fn snapshot(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes in the drawing
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the drawing holds no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over the shapes in render order
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }
}

impl FromIterator<Shape> for Drawing {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let s1 = Shape::Dot { x: 1, y: 2 };
        let s2 = Shape::Line {
            x1: 0,
            y1: 0,
            x2: 10,
            y2: 10,
        };
        let s3 = Shape::Rect {
            x: 5,
            y: 5,
            width: 10,
            height: 20,
        };

        let mut drawing = Drawing::new();
        drawing.append(s1);
        drawing.append(s2);
        drawing.append(s3);

        assert_eq!(drawing.snapshot(), &[s1, s2, s3]);
    }

    #[test]
    fn test_replace_all_adopts_given_order() {
        let mut drawing = Drawing::new();
        drawing.append(Shape::Dot { x: 9, y: 9 });

        let loaded = vec![
            Shape::Rect {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            },
            Shape::Dot { x: 3, y: 4 },
        ];
        drawing.replace_all(loaded.clone());

        assert_eq!(drawing.snapshot(), loaded.as_slice());
    }

    #[test]
    fn test_clear_empties_the_drawing() {
        let mut drawing: Drawing = [Shape::Dot { x: 1, y: 1 }].into_iter().collect();
        assert!(!drawing.is_empty());

        drawing.clear();
        assert!(drawing.is_empty());
        assert_eq!(drawing.len(), 0);
    }
}
