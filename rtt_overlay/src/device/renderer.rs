/// Renderer trait - what the overlay needs from the application's renderer

use crate::device::{Device, DeviceContext};

/// Device and context provider
///
/// Owned by the application. The overlay only borrows the device to create
/// its resources and the context to record commands.
pub trait Renderer: Send + Sync {
    /// Resource factory
    fn device(&self) -> &dyn Device;

    /// Immediate command context
    fn device_context(&self) -> &dyn DeviceContext;

    /// Number of quality levels the device supports for the overlay's
    /// sample count. Must be at least 1; the highest level is `quality - 1`.
    fn msaa_quality(&self) -> u32;
}
