/// Buffer trait and buffer descriptor

use std::any::Any;

/// Buffer usage (bind point)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    /// Vertex buffer
    Vertex,
    /// Index buffer
    Index,
    /// Constant (uniform) buffer
    Constant,
}

/// How the buffer contents may change after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferAccess {
    /// GPU read/write, updatable through `DeviceContext::update_subresource`
    Default,
    /// Initialized at creation, never written again
    Immutable,
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDesc {
    /// Size in bytes
    pub size: u64,
    /// Buffer usage
    pub usage: BufferUsage,
    /// Update policy
    pub access: BufferAccess,
}

/// Index element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    U16,
    U32,
}

impl IndexFormat {
    /// Size of one index in bytes
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types.
/// The buffer is released when the last handle is dropped.
pub trait Buffer: Send + Sync {
    /// Descriptor the buffer was created with
    fn desc(&self) -> &BufferDesc;

    /// Backend downcast hook
    fn as_any(&self) -> &dyn Any;
}
