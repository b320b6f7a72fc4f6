/// Overlay lifecycle state and resource identifiers

use std::fmt;

/// Where the overlay is in its lifecycle
///
/// `Uninitialized → Loaded → {OffscreenActive → Composited}*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayState {
    /// Constructed, no GPU resources yet
    Uninitialized,
    /// Resources created, no frame recorded yet
    Loaded,
    /// Off-screen target bound as output for the current frame
    OffscreenActive,
    /// Quad drawn for the current frame
    Composited,
}

impl OverlayState {
    /// Returns true once `load` has succeeded
    pub fn is_loaded(&self) -> bool {
        !matches!(self, OverlayState::Uninitialized)
    }
}

/// GPU resources owned by an overlay, in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayResource {
    ColorTexture,
    RenderTargetView,
    DepthStencilTexture,
    DepthStencilView,
    ShaderResourceView,
    VertexBuffer,
    IndexBuffer,
    ConstantBuffer,
}

impl OverlayResource {
    /// All resources in the order `Overlay::load` creates them
    pub const ALL: [OverlayResource; 8] = [
        OverlayResource::ColorTexture,
        OverlayResource::RenderTargetView,
        OverlayResource::DepthStencilTexture,
        OverlayResource::DepthStencilView,
        OverlayResource::ShaderResourceView,
        OverlayResource::VertexBuffer,
        OverlayResource::IndexBuffer,
        OverlayResource::ConstantBuffer,
    ];
}

impl fmt::Display for OverlayResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverlayResource::ColorTexture => "off-screen color texture",
            OverlayResource::RenderTargetView => "render-target view",
            OverlayResource::DepthStencilTexture => "depth-stencil texture",
            OverlayResource::DepthStencilView => "depth-stencil view",
            OverlayResource::ShaderResourceView => "shader-resource view",
            OverlayResource::VertexBuffer => "vertex buffer",
            OverlayResource::IndexBuffer => "index buffer",
            OverlayResource::ConstantBuffer => "constant buffer",
        };
        f.write_str(name)
    }
}
