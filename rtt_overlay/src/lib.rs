/*!
# RTT Overlay

Render-to-texture overlay for graphics demos.

The scene is rendered into an off-screen, multisampled float target; a
quarter-size quad textured with that target is then composited into a corner
of the main output.

## Architecture

- **Renderer**: Application-owned provider of a `Device` and `DeviceContext`
- **Device**: Factory trait for textures, views and buffers
- **DeviceContext**: Immediate-mode command submission
- **Camera**: Passive view/projection container read each frame
- **Overlay**: Owns the off-screen target and the quad, drives both passes

Backends (e.g. the headless recording backend) implement the device traits.
*/

// Internal modules
mod error;
pub mod log;
pub mod device;
pub mod camera;
pub mod geometry;
pub mod overlay;

// Main rtt namespace module
pub mod rtt {
    // Error types
    pub use crate::error::{Error, Result};

    // Overlay and its collaborators
    pub use crate::overlay::{
        Overlay, OverlayConfig, OverlayResource, OverlayState, WorldConstantBuffer, NAVY,
    };
    pub use crate::camera::Camera;
    pub use crate::device::Renderer;

    // Logging sub-module (types and logger control)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger,
        };
    }

    // Device sub-module with all resource and command types
    pub mod device {
        pub use crate::device::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }
}

// Re-export math library at crate root
pub use glam;
