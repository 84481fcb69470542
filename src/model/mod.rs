//! The shape model: drawable primitives, the ordered drawing they live in,
//! and the gesture state machine that produces them from pointer events.

// Submodule declarations
pub mod drawing;
pub mod gesture;
pub mod shape;

// Re-exports for convenience
pub use drawing::Drawing;
pub use gesture::{DrawMode, GestureTracker};
pub use shape::{Point, Shape};
