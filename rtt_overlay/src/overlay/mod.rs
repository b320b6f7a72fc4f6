//! Overlay module - render-to-texture target and the corner quad that shows it.

mod overlay;
mod overlay_config;
mod overlay_state;
mod world_constant_buffer;

pub use overlay::Overlay;
pub use overlay_config::{OverlayConfig, NAVY};
pub use overlay_state::{OverlayState, OverlayResource};
pub use world_constant_buffer::WorldConstantBuffer;
