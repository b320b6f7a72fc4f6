/// DeviceContext trait - immediate-mode command submission

use std::sync::Arc;
use bitflags::bitflags;

use crate::device::{
    Buffer, IndexFormat,
    RenderTargetView, ShaderResourceView, DepthStencilView,
};

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport covering a `width`×`height` surface with the full depth range
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

bitflags! {
    /// Which parts of a depth-stencil view a clear touches
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        const DEPTH = 1 << 0;
        const STENCIL = 1 << 1;
    }
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    PointList,
    LineList,
    LineStrip,
    TriangleList,
    TriangleStrip,
}

/// One vertex buffer slot binding
#[derive(Clone, Copy)]
pub struct VertexBufferBinding<'a> {
    pub buffer: &'a Arc<dyn Buffer>,
    /// Distance between consecutive vertices in bytes
    pub stride: u32,
    /// Offset of the first vertex in bytes
    pub offset: u32,
}

/// Immediate command context
///
/// Calls are recorded or executed in order on the rendering thread and do not
/// report failure; a broken device surfaces later through the renderer
/// (device-lost), not here.
pub trait DeviceContext: Send + Sync {
    /// Fill a color target with `color` (RGBA)
    fn clear_render_target_view(&self, view: &Arc<dyn RenderTargetView>, color: [f32; 4]);

    /// Clear the depth and/or stencil planes of a depth-stencil target
    fn clear_depth_stencil_view(
        &self,
        view: &Arc<dyn DepthStencilView>,
        flags: ClearFlags,
        depth: f32,
        stencil: u8,
    );

    /// Bind color targets and an optional depth-stencil target as output
    fn set_render_targets(
        &self,
        color: &[Arc<dyn RenderTargetView>],
        depth_stencil: Option<&Arc<dyn DepthStencilView>>,
    );

    /// Install rasterizer viewports
    fn set_viewports(&self, viewports: &[Viewport]);

    /// Bind vertex buffers starting at `start_slot`
    fn set_vertex_buffers(&self, start_slot: u32, bindings: &[VertexBufferBinding<'_>]);

    /// Bind the index buffer
    fn set_index_buffer(&self, buffer: &Arc<dyn Buffer>, format: IndexFormat, offset: u32);

    /// Set how vertices are assembled into primitives
    fn set_primitive_topology(&self, topology: PrimitiveTopology);

    /// Bind constant buffers to the vertex stage
    fn vs_set_constant_buffers(&self, start_slot: u32, buffers: &[Arc<dyn Buffer>]);

    /// Bind constant buffers to the pixel stage
    fn ps_set_constant_buffers(&self, start_slot: u32, buffers: &[Arc<dyn Buffer>]);

    /// Overwrite the whole contents of a default-access buffer
    fn update_subresource(&self, buffer: &Arc<dyn Buffer>, data: &[u8]);

    /// Bind sampled textures to the pixel stage
    fn ps_set_shader_resources(&self, start_slot: u32, views: &[Arc<dyn ShaderResourceView>]);

    /// Draw indexed primitives
    fn draw_indexed(&self, index_count: u32, start_index: u32, base_vertex: i32);
}
