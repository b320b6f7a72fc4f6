/// Views - recording implementations of the render-target, shader-resource
/// and depth-stencil view traits
///
/// A view keeps its texture alive for as long as the view exists.

use std::any::Any;
use std::sync::Arc;

use rtt_overlay::rtt::device::{
    Texture as RendererTexture,
    RenderTargetView as RendererRenderTargetView, RenderTargetViewDesc,
    ShaderResourceView as RendererShaderResourceView, ShaderResourceViewDesc,
    DepthStencilView as RendererDepthStencilView, DepthStencilViewDesc,
};

use crate::recording_resources::{ResourceId, ResourceRegistry};

macro_rules! recording_view {
    ($name:ident, $trait_name:ident, $desc:ty) => {
        pub struct $name {
            pub(crate) id: ResourceId,
            texture: Arc<dyn RendererTexture>,
            desc: $desc,
            registry: Arc<ResourceRegistry>,
        }

        impl $name {
            pub(crate) fn new(
                id: ResourceId,
                texture: Arc<dyn RendererTexture>,
                desc: $desc,
                registry: Arc<ResourceRegistry>,
            ) -> Self {
                Self { id, texture, desc, registry }
            }

            pub fn id(&self) -> ResourceId {
                self.id
            }
        }

        impl $trait_name for $name {
            fn texture(&self) -> &Arc<dyn RendererTexture> {
                &self.texture
            }

            fn desc(&self) -> &$desc {
                &self.desc
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                self.registry.release(self.id);
            }
        }
    };
}

recording_view!(RenderTargetView, RendererRenderTargetView, RenderTargetViewDesc);
recording_view!(ShaderResourceView, RendererShaderResourceView, ShaderResourceViewDesc);
recording_view!(DepthStencilView, RendererDepthStencilView, DepthStencilViewDesc);

/// Registry id of any object created by a recording device
pub fn recording_id(object: &dyn Any) -> Option<ResourceId> {
    if let Some(texture) = object.downcast_ref::<crate::recording_texture::Texture>() {
        return Some(texture.id);
    }
    if let Some(buffer) = object.downcast_ref::<crate::recording_buffer::Buffer>() {
        return Some(buffer.id);
    }
    if let Some(view) = object.downcast_ref::<RenderTargetView>() {
        return Some(view.id);
    }
    if let Some(view) = object.downcast_ref::<ShaderResourceView>() {
        return Some(view.id);
    }
    object.downcast_ref::<DepthStencilView>().map(|view| view.id)
}
