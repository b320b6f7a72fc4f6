/// RecordingRenderer - headless implementation of the Renderer trait
///
/// Owns one device and one context sharing a resource registry. Tests and
/// the demo inspect the registry and the command log through it.

use std::sync::Arc;

use rtt_overlay::rtt::Renderer;
use rtt_overlay::rtt::device::{Device as RendererDevice, DeviceContext as RendererDeviceContext};
use rtt_overlay::rtt_info;

use crate::command::{BoundState, Command};
use crate::recording_config::RecordingConfig;
use crate::recording_context::DeviceContext;
use crate::recording_device::Device;
use crate::recording_resources::{ResourceId, ResourceKind, ResourceRecord, ResourceRegistry};
use crate::recording_view::recording_id;

/// Headless renderer that validates and records instead of drawing
pub struct RecordingRenderer {
    config: RecordingConfig,
    registry: Arc<ResourceRegistry>,
    device: Device,
    context: DeviceContext,
}

impl RecordingRenderer {
    pub fn new(config: RecordingConfig) -> Self {
        let registry = Arc::new(ResourceRegistry::new());
        rtt_info!(
            "rtt::recording",
            "Recording renderer created (msaa quality levels {}, max texture {})",
            config.msaa_quality,
            config.max_texture_dimension
        );
        Self {
            device: Device::new(config.clone(), registry.clone()),
            context: DeviceContext::new(registry.clone()),
            registry,
            config,
        }
    }

    pub fn config(&self) -> &RecordingConfig {
        &self.config
    }

    // ===== COMMAND LOG =====

    pub fn commands(&self) -> Vec<Command> {
        self.context.commands()
    }

    pub fn take_commands(&self) -> Vec<Command> {
        self.context.take_commands()
    }

    pub fn clear_commands(&self) {
        self.context.clear_commands()
    }

    pub fn bound_state(&self) -> BoundState {
        self.context.bound_state()
    }

    // ===== RESOURCES =====

    pub fn resource(&self, id: ResourceId) -> Option<ResourceRecord> {
        self.registry.get(id)
    }

    /// Registry id of a texture, view or buffer handle from this backend
    pub fn id_of(&self, object: &dyn std::any::Any) -> Option<ResourceId> {
        recording_id(object)
    }

    /// Number of resources not yet released
    pub fn live_resources(&self) -> usize {
        self.registry.len()
    }

    pub fn count_of(&self, kind: ResourceKind) -> usize {
        self.registry.count_of(kind)
    }

    pub fn bytes_in_use(&self) -> u64 {
        self.registry.bytes_in_use()
    }

    /// Current contents of a live buffer
    pub fn buffer_contents(&self, id: ResourceId) -> Option<Vec<u8>> {
        self.registry.with_buffer(id, |_, contents| contents.clone())
    }

    // ===== FAILURE INJECTION =====

    /// Make the next creation of `kind` fail with `Error::BackendError`
    pub fn fail_next(&self, kind: ResourceKind) {
        self.device.fail_after(kind, 0);
    }

    /// Let `skip` creations of `kind` succeed, then fail the next one
    pub fn fail_after(&self, kind: ResourceKind, skip: u32) {
        self.device.fail_after(kind, skip);
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new(RecordingConfig::default())
    }
}

impl Renderer for RecordingRenderer {
    fn device(&self) -> &dyn RendererDevice {
        &self.device
    }

    fn device_context(&self) -> &dyn RendererDeviceContext {
        &self.context
    }

    fn msaa_quality(&self) -> u32 {
        self.config.msaa_quality
    }
}
