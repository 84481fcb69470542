//! Vellum - shape model and markup codec for a minimal drawing editor
//!
//! This library provides the core of a click-and-drag drawing tool: a closed
//! set of drawable primitives, the ordered collection they live in, a
//! gesture state machine that turns pointer events into shapes, and the
//! tag-based markup codec that persists a drawing and restores it with full
//! fidelity.
//!
//! # Features
//!
//! - **Shape Model**: `Dot`, `Line`, and `Rect` primitives in an
//!   append-only, render-ordered [`Drawing`](model::Drawing)
//! - **Gesture tracking**: an explicit `Idle`/`Armed` state machine turning
//!   press/release pairs into shapes, testable without any UI
//! - **PXML codec**: the enhanced editor's `<dot>`/`<line>`/`<rect>`
//!   document format, with exact round-trip fidelity
//! - **Point-list codec**: the simple editor's `<point>`-only format with
//!   its fixed file name
//!
//! The UI layer (window, canvas painting, file pickers) is deliberately
//! absent: it constructs shapes from raw input via the gesture tracker and
//! invokes the codec, nothing more.
//!
//! # Example - Recording gestures and saving
//!
//! ```
//! use vellum::model::{DrawMode, Drawing, GestureTracker, Point};
//! use vellum::pxml;
//!
//! let mut drawing = Drawing::new();
//! let mut tracker = GestureTracker::new();
//!
//! // A drag from (50, 50) to (10, 30) in rectangle mode
//! tracker.press(Point::new(50, 50));
//! if let Some(shape) = tracker.release(Point::new(10, 30), DrawMode::Rect) {
//!     drawing.append(shape);
//! }
//!
//! let text = pxml::encode(&drawing);
//! assert!(text.contains(r#"<rect x="10" y="30" width="40" height="20"/>"#));
//! ```
//!
//! # Example - Loading a drawing
//!
//! ```no_run
//! use vellum::model::Drawing;
//! use vellum::pxml;
//!
//! # fn main() -> vellum::Result<()> {
//! let mut drawing = Drawing::new();
//!
//! // Decode fully before touching the drawing: a failed load leaves the
//! // current content untouched.
//! let shapes = pxml::decode_file("sketch.pxml")?;
//! drawing.replace_all(shapes);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod common;
pub mod model;
pub mod pointlist;
pub mod pxml;

// Re-exports for convenience
pub use common::{Error, Result};
pub use model::{DrawMode, Drawing, GestureTracker, Point, Shape};
