/// Resource registry - bookkeeping for every object the recording device creates

use std::sync::Mutex;

use slotmap::{new_key_type, SlotMap};
use rtt_overlay::rtt::device::{
    BufferDesc, TextureDesc,
    RenderTargetViewDesc, ShaderResourceViewDesc, DepthStencilViewDesc,
};
use rtt_overlay::rtt_warn;

new_key_type! {
    /// Stable identifier of a resource created by a `RecordingDevice`.
    ///
    /// Keys of released resources are never reused for a live resource.
    pub struct ResourceId;
}

/// Resource category, used for failure injection and queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Texture,
    RenderTargetView,
    ShaderResourceView,
    DepthStencilView,
    Buffer,
}

/// What was created, with the effective descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceRecord {
    Texture(TextureDesc),
    RenderTargetView { texture: ResourceId, desc: RenderTargetViewDesc },
    ShaderResourceView { texture: ResourceId, desc: ShaderResourceViewDesc },
    DepthStencilView { texture: ResourceId, desc: DepthStencilViewDesc },
    Buffer { desc: BufferDesc, contents: Vec<u8> },
}

impl ResourceRecord {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceRecord::Texture(_) => ResourceKind::Texture,
            ResourceRecord::RenderTargetView { .. } => ResourceKind::RenderTargetView,
            ResourceRecord::ShaderResourceView { .. } => ResourceKind::ShaderResourceView,
            ResourceRecord::DepthStencilView { .. } => ResourceKind::DepthStencilView,
            ResourceRecord::Buffer { .. } => ResourceKind::Buffer,
        }
    }

    /// Bytes of GPU memory the resource occupies (views occupy none)
    pub fn byte_size(&self) -> u64 {
        match self {
            ResourceRecord::Texture(desc) => desc.byte_size(),
            ResourceRecord::Buffer { desc, .. } => desc.size,
            _ => 0,
        }
    }
}

/// Live resources, shared between the device, the context and every handle
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    entries: Mutex<SlotMap<ResourceId, ResourceRecord>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&self, record: ResourceRecord) -> ResourceId {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(record)
    }

    /// Called from the handles' `Drop`
    pub(crate) fn release(&self, id: ResourceId) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.remove(id).is_none() {
            rtt_warn!("rtt::recording", "Released unknown resource {:?}", id);
        }
    }

    pub fn get(&self, id: ResourceId) -> Option<ResourceRecord> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(id).cloned()
    }

    /// Run `f` on a live buffer's contents
    pub(crate) fn with_buffer<R>(
        &self,
        id: ResourceId,
        f: impl FnOnce(&BufferDesc, &mut Vec<u8>) -> R,
    ) -> Option<R> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get_mut(id) {
            Some(ResourceRecord::Buffer { desc, contents }) => Some(f(desc, contents)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count_of(&self, kind: ResourceKind) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.values().filter(|r| r.kind() == kind).count()
    }

    /// Total bytes held by live textures and buffers
    pub fn bytes_in_use(&self) -> u64 {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.values().map(ResourceRecord::byte_size).sum()
    }
}

#[cfg(test)]
#[path = "recording_resources_tests.rs"]
mod tests;
