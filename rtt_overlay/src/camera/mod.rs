//! Camera module - passive view/projection container.
//!
//! The overlay reads the camera when it renders; the application owns it
//! and updates it between frames.

mod camera;

pub use camera::Camera;
