//! Pure math/data for the nubos phone shell
//!
//! Geometry primitives and colors shared by the gesture recognizer,
//! the navigation resolver and the view layer.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
