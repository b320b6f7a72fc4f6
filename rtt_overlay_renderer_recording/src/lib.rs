/*!
# RTT Overlay - Recording Renderer Backend

Headless implementation of the `rtt_overlay` device traits.

Nothing is drawn. The device validates descriptors the way a D3D11-class
device would and registers every resource it creates; the context records
each call as a typed `Command`. Tests and the demo binary read the command
log and the resource registry back.
*/

mod command;
mod recording_config;
mod recording_resources;
mod recording_texture;
mod recording_buffer;
mod recording_view;
mod recording_device;
mod recording_context;
mod recording_renderer;

/// Recording backend namespace
pub mod rtt {
    pub use crate::recording_renderer::RecordingRenderer;
    pub use crate::recording_config::RecordingConfig;
    pub use crate::recording_resources::{ResourceId, ResourceKind, ResourceRecord};
    pub use crate::command::{BoundState, Command, IndexBufferBinding, VertexBufferSlot};

    /// Concrete resource types, for downcasting handles
    pub mod resources {
        pub use crate::recording_texture::Texture as RecordingTexture;
        pub use crate::recording_buffer::Buffer as RecordingBuffer;
        pub use crate::recording_view::{
            RenderTargetView as RecordingRenderTargetView,
            ShaderResourceView as RecordingShaderResourceView,
            DepthStencilView as RecordingDepthStencilView,
        };
        pub use crate::recording_device::Device as RecordingDevice;
        pub use crate::recording_context::DeviceContext as RecordingDeviceContext;
    }
}
