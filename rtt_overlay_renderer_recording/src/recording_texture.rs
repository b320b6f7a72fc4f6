/// Texture - recording implementation of the Texture trait

use std::any::Any;
use std::sync::Arc;

use rtt_overlay::rtt::device::{Texture as RendererTexture, TextureInfo};

use crate::recording_resources::{ResourceId, ResourceRegistry};

/// Recording texture: descriptor only, no pixel storage
pub struct Texture {
    pub(crate) id: ResourceId,
    pub(crate) info: TextureInfo,
    registry: Arc<ResourceRegistry>,
}

impl Texture {
    pub(crate) fn new(id: ResourceId, info: TextureInfo, registry: Arc<ResourceRegistry>) -> Self {
        Self { id, info, registry }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }
}

impl RendererTexture for Texture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}
