/// Resource views - how a texture is bound to a pipeline stage

use std::any::Any;
use std::sync::Arc;

use crate::device::{Texture, TextureFormat};

/// Shape a view interprets its texture as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewDimension {
    /// Single-sampled 2D texture
    Texture2D,
    /// Multisampled 2D texture
    Texture2DMs,
}

impl ViewDimension {
    /// Dimension matching a texture's sample count
    pub fn for_sample_count(count: u32) -> Self {
        if count > 1 {
            ViewDimension::Texture2DMs
        } else {
            ViewDimension::Texture2D
        }
    }
}

/// Descriptor for a render-target view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTargetViewDesc {
    pub format: TextureFormat,
    pub dimension: ViewDimension,
    /// Mip level written to (ignored for multisampled views)
    pub mip_slice: u32,
}

/// Descriptor for a shader-resource view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderResourceViewDesc {
    pub format: TextureFormat,
    pub dimension: ViewDimension,
    pub most_detailed_mip: u32,
    pub mip_levels: u32,
}

/// Descriptor for a depth-stencil view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStencilViewDesc {
    pub format: TextureFormat,
    pub dimension: ViewDimension,
    pub mip_slice: u32,
}

/// Color output binding of a texture
pub trait RenderTargetView: Send + Sync {
    /// Texture this view points at
    fn texture(&self) -> &Arc<dyn Texture>;

    /// Effective view descriptor
    fn desc(&self) -> &RenderTargetViewDesc;

    /// Backend downcast hook
    fn as_any(&self) -> &dyn Any;
}

/// Sampled binding of a texture
pub trait ShaderResourceView: Send + Sync {
    /// Texture this view points at
    fn texture(&self) -> &Arc<dyn Texture>;

    /// Effective view descriptor
    fn desc(&self) -> &ShaderResourceViewDesc;

    /// Backend downcast hook
    fn as_any(&self) -> &dyn Any;
}

/// Depth/stencil output binding of a texture
pub trait DepthStencilView: Send + Sync {
    /// Texture this view points at
    fn texture(&self) -> &Arc<dyn Texture>;

    /// Effective view descriptor
    fn desc(&self) -> &DepthStencilViewDesc;

    /// Backend downcast hook
    fn as_any(&self) -> &dyn Any;
}
