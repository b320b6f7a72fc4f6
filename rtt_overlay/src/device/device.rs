/// Device trait - GPU resource factory

use std::sync::Arc;

use crate::error::Result;
use crate::device::{
    Texture, TextureDesc, Buffer, BufferDesc,
    RenderTargetView, RenderTargetViewDesc,
    ShaderResourceView, ShaderResourceViewDesc,
    DepthStencilView, DepthStencilViewDesc,
};

/// Resource creation interface
///
/// Every call either returns a live resource or an error; a backend never
/// hands out a half-initialized object. Passing `None` as a view descriptor
/// derives the view from the texture (same format, dimension from its
/// sample count, full mip range).
pub trait Device: Send + Sync {
    /// Create a 2D texture
    fn create_texture(&self, desc: &TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create a render-target view of `texture`
    fn create_render_target_view(
        &self,
        texture: &Arc<dyn Texture>,
        desc: Option<&RenderTargetViewDesc>,
    ) -> Result<Arc<dyn RenderTargetView>>;

    /// Create a shader-resource view of `texture`
    fn create_shader_resource_view(
        &self,
        texture: &Arc<dyn Texture>,
        desc: Option<&ShaderResourceViewDesc>,
    ) -> Result<Arc<dyn ShaderResourceView>>;

    /// Create a depth-stencil view of `texture`
    fn create_depth_stencil_view(
        &self,
        texture: &Arc<dyn Texture>,
        desc: Option<&DepthStencilViewDesc>,
    ) -> Result<Arc<dyn DepthStencilView>>;

    /// Create a buffer, optionally filled with `initial_data`
    ///
    /// `initial_data`, when present, must be exactly `desc.size` bytes.
    /// Immutable buffers require it.
    fn create_buffer(&self, desc: &BufferDesc, initial_data: Option<&[u8]>) -> Result<Arc<dyn Buffer>>;
}
