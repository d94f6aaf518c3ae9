//! Camera and visibility culling
//!
//! Consumed once per frame by the scene to build the drawable list.

pub mod camera;
pub mod culler;

pub use camera::Camera;
pub use culler::ViewCuller;
