/// Device module - GPU resource contracts consumed by the overlay
///
/// The overlay never talks to a graphics API directly. A backend provides a
/// `Renderer` exposing a resource factory (`Device`) and an immediate-mode
/// command context (`DeviceContext`).

// Module declarations
pub mod renderer;
pub mod device;
pub mod device_context;
pub mod texture;
pub mod view;
pub mod buffer;

// Re-export everything
pub use renderer::*;
pub use device::*;
pub use device_context::*;
pub use texture::*;
pub use view::*;
pub use buffer::*;
