//! Debug visualization of bounds
//!
//! Configuration is an explicit value handed to the overlay builder; there is
//! no global toggle.

pub mod overlay;
pub mod vertex;

pub use overlay::{DebugOverlayConfig, overlay_lines};
pub use vertex::{Vertex, colors};
