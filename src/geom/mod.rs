//! Geometry primitives and bounds derivation
//!
//! Pure value types; nothing here allocates beyond polygon vertex lists and
//! nothing is shared between entities.

pub mod polygon;
pub mod rect;
pub mod rotated_rect;
pub mod rotation;
pub mod transform;

pub use polygon::Polygon;
pub use rect::Rect;
pub use rotated_rect::RotatedRectangle;
pub use rotation::{rotate_point, rotate_rectangle};
pub use transform::{Bounds, Transform, compute_bounds, compute_outline_bounds};
