/// Buffer - recording implementation of the Buffer trait

use std::any::Any;
use std::sync::Arc;

use rtt_overlay::rtt::device::{Buffer as RendererBuffer, BufferDesc};

use crate::recording_resources::{ResourceId, ResourceRegistry};

/// Recording buffer. Contents live in the registry so the context can
/// update them and tests can read them back.
pub struct Buffer {
    pub(crate) id: ResourceId,
    pub(crate) desc: BufferDesc,
    registry: Arc<ResourceRegistry>,
}

impl Buffer {
    pub(crate) fn new(id: ResourceId, desc: BufferDesc, registry: Arc<ResourceRegistry>) -> Self {
        Self { id, desc, registry }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }
}

impl RendererBuffer for Buffer {
    fn desc(&self) -> &BufferDesc {
        &self.desc
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}
