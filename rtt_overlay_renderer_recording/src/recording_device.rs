/// Device - recording implementation of the Device trait
///
/// Validates descriptors the way a D3D11-class device does and registers
/// every accepted resource. Nothing is allocated on a GPU.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;
use rtt_overlay::rtt::{Error, Result};
use rtt_overlay::rtt::device::{
    Device as RendererDevice,
    Texture as RendererTexture, TextureDesc, TextureUsage,
    Buffer as RendererBuffer, BufferAccess, BufferDesc, BufferUsage,
    RenderTargetView as RendererRenderTargetView, RenderTargetViewDesc,
    ShaderResourceView as RendererShaderResourceView, ShaderResourceViewDesc,
    DepthStencilView as RendererDepthStencilView, DepthStencilViewDesc,
    TextureFormat, ViewDimension,
};
use rtt_overlay::{rtt_bail, rtt_debug, rtt_err, rtt_error};

use crate::recording_buffer::Buffer;
use crate::recording_config::RecordingConfig;
use crate::recording_resources::{ResourceId, ResourceKind, ResourceRecord, ResourceRegistry};
use crate::recording_texture::Texture;
use crate::recording_view::{DepthStencilView, RenderTargetView, ShaderResourceView};

const LOG_SOURCE: &str = "rtt::recording";

/// Sample counts every device supports
const SUPPORTED_SAMPLE_COUNTS: [u32; 4] = [1, 2, 4, 8];

/// Recording resource factory
pub struct Device {
    config: RecordingConfig,
    registry: Arc<ResourceRegistry>,
    /// Remaining successful creations before an injected failure, per kind
    pending_failures: Mutex<FxHashMap<ResourceKind, u32>>,
}

impl Device {
    pub(crate) fn new(config: RecordingConfig, registry: Arc<ResourceRegistry>) -> Self {
        Self {
            config,
            registry,
            pending_failures: Mutex::new(FxHashMap::default()),
        }
    }

    /// Make a creation of `kind` fail after `skip` more successful ones
    pub(crate) fn fail_after(&self, kind: ResourceKind, skip: u32) {
        let mut pending = self.pending_failures.lock().unwrap_or_else(|e| e.into_inner());
        pending.insert(kind, skip);
    }

    fn check_injected_failure(&self, kind: ResourceKind) -> Result<()> {
        let mut pending = self.pending_failures.lock().unwrap_or_else(|e| e.into_inner());
        let Some(remaining) = pending.get_mut(&kind) else {
            return Ok(());
        };
        if *remaining > 0 {
            *remaining -= 1;
            return Ok(());
        }
        pending.remove(&kind);
        Err(rtt_err!(LOG_SOURCE, "Injected {:?} creation failure", kind))
    }

    fn check_budget(&self, bytes: u64) -> Result<()> {
        let in_use = self.registry.bytes_in_use();
        if in_use.saturating_add(bytes) > self.config.memory_budget {
            rtt_error!(
                LOG_SOURCE,
                "Out of memory: {} bytes requested, {} of {} in use",
                bytes,
                in_use,
                self.config.memory_budget
            );
            return Err(Error::OutOfMemory);
        }
        Ok(())
    }

    fn validate_texture(&self, desc: &TextureDesc) -> Result<()> {
        let max = self.config.max_texture_dimension;
        if desc.width == 0 || desc.height == 0 || desc.width > max || desc.height > max {
            return Err(Error::InvalidResource(format!(
                "texture size {}x{} outside 1..={}",
                desc.width, desc.height, max
            )));
        }
        if desc.mip_levels == 0 || desc.array_layers == 0 {
            return Err(Error::InvalidResource(
                "texture needs at least one mip level and one layer".to_string(),
            ));
        }
        if desc.usage.is_empty() {
            return Err(Error::InvalidResource("texture has no bind flags".to_string()));
        }

        let samples = desc.samples;
        if !SUPPORTED_SAMPLE_COUNTS.contains(&samples.count) {
            return Err(Error::InvalidResource(format!(
                "unsupported sample count {}",
                samples.count
            )));
        }
        if samples.is_multisampled() {
            if samples.quality >= self.config.msaa_quality {
                rtt_bail!(
                    LOG_SOURCE,
                    "sample quality {} not supported (device reports {} levels)",
                    samples.quality,
                    self.config.msaa_quality
                );
            }
            if desc.mip_levels != 1 {
                return Err(Error::InvalidResource(
                    "multisampled textures have exactly one mip level".to_string(),
                ));
            }
        } else if samples.quality != 0 {
            return Err(Error::InvalidResource(format!(
                "single-sampled texture with quality {}",
                samples.quality
            )));
        }

        let wants_depth = desc.usage.contains(TextureUsage::DEPTH_STENCIL);
        if wants_depth != desc.format.is_depth() {
            return Err(Error::InvalidResource(format!(
                "format {:?} does not match bind flags {:?}",
                desc.format, desc.usage
            )));
        }
        if wants_depth && desc.usage != TextureUsage::DEPTH_STENCIL {
            return Err(Error::InvalidResource(
                "depth textures cannot also be color targets or shader inputs".to_string(),
            ));
        }
        Ok(())
    }

    /// Find the registry id of a texture created by this backend
    fn texture_id(texture: &Arc<dyn RendererTexture>) -> Result<ResourceId> {
        texture
            .as_any()
            .downcast_ref::<Texture>()
            .map(Texture::id)
            .ok_or_else(|| Error::InvalidResource("texture was not created by the recording device".to_string()))
    }

    fn check_view_shape(
        texture: &TextureDesc,
        format: TextureFormat,
        dimension: ViewDimension,
    ) -> Result<()> {
        if format != texture.format {
            return Err(Error::InvalidResource(format!(
                "view format {:?} differs from texture format {:?}",
                format, texture.format
            )));
        }
        let expected = ViewDimension::for_sample_count(texture.samples.count);
        if dimension != expected {
            return Err(Error::InvalidResource(format!(
                "view dimension {:?} on a texture with {} samples (expected {:?})",
                dimension, texture.samples.count, expected
            )));
        }
        Ok(())
    }
}

impl RendererDevice for Device {
    fn create_texture(&self, desc: &TextureDesc) -> Result<Arc<dyn RendererTexture>> {
        self.check_injected_failure(ResourceKind::Texture)?;
        self.validate_texture(desc)?;
        self.check_budget(desc.byte_size())?;

        let id = self.registry.register(ResourceRecord::Texture(desc.clone()));
        rtt_debug!(
            LOG_SOURCE,
            "Texture {:?}: {}x{} {:?} samples {}/{}",
            id,
            desc.width,
            desc.height,
            desc.format,
            desc.samples.count,
            desc.samples.quality
        );
        Ok(Arc::new(Texture::new(id, desc.clone(), self.registry.clone())))
    }

    fn create_render_target_view(
        &self,
        texture: &Arc<dyn RendererTexture>,
        desc: Option<&RenderTargetViewDesc>,
    ) -> Result<Arc<dyn RendererRenderTargetView>> {
        self.check_injected_failure(ResourceKind::RenderTargetView)?;
        let texture_id = Self::texture_id(texture)?;
        let info = texture.info();

        if !info.usage.contains(TextureUsage::RENDER_TARGET) {
            return Err(Error::InvalidResource(
                "render-target view of a texture without RENDER_TARGET".to_string(),
            ));
        }
        let desc = desc.copied().unwrap_or(RenderTargetViewDesc {
            format: info.format,
            dimension: ViewDimension::for_sample_count(info.samples.count),
            mip_slice: 0,
        });
        Self::check_view_shape(info, desc.format, desc.dimension)?;
        if desc.mip_slice >= info.mip_levels {
            return Err(Error::InvalidResource(format!("mip slice {} out of range", desc.mip_slice)));
        }

        let id = self.registry.register(ResourceRecord::RenderTargetView { texture: texture_id, desc });
        rtt_debug!(LOG_SOURCE, "RenderTargetView {:?} -> texture {:?}", id, texture_id);
        Ok(Arc::new(RenderTargetView::new(id, texture.clone(), desc, self.registry.clone())))
    }

    fn create_shader_resource_view(
        &self,
        texture: &Arc<dyn RendererTexture>,
        desc: Option<&ShaderResourceViewDesc>,
    ) -> Result<Arc<dyn RendererShaderResourceView>> {
        self.check_injected_failure(ResourceKind::ShaderResourceView)?;
        let texture_id = Self::texture_id(texture)?;
        let info = texture.info();

        if !info.usage.contains(TextureUsage::SHADER_RESOURCE) {
            return Err(Error::InvalidResource(
                "shader-resource view of a texture without SHADER_RESOURCE".to_string(),
            ));
        }
        let desc = desc.copied().unwrap_or(ShaderResourceViewDesc {
            format: info.format,
            dimension: ViewDimension::for_sample_count(info.samples.count),
            most_detailed_mip: 0,
            mip_levels: info.mip_levels,
        });
        Self::check_view_shape(info, desc.format, desc.dimension)?;
        if desc.mip_levels == 0 || desc.most_detailed_mip + desc.mip_levels > info.mip_levels {
            return Err(Error::InvalidResource(format!(
                "mip range {}+{} outside texture's {} levels",
                desc.most_detailed_mip, desc.mip_levels, info.mip_levels
            )));
        }

        let id = self.registry.register(ResourceRecord::ShaderResourceView { texture: texture_id, desc });
        rtt_debug!(LOG_SOURCE, "ShaderResourceView {:?} -> texture {:?}", id, texture_id);
        Ok(Arc::new(ShaderResourceView::new(id, texture.clone(), desc, self.registry.clone())))
    }

    fn create_depth_stencil_view(
        &self,
        texture: &Arc<dyn RendererTexture>,
        desc: Option<&DepthStencilViewDesc>,
    ) -> Result<Arc<dyn RendererDepthStencilView>> {
        self.check_injected_failure(ResourceKind::DepthStencilView)?;
        let texture_id = Self::texture_id(texture)?;
        let info = texture.info();

        if !info.usage.contains(TextureUsage::DEPTH_STENCIL) {
            return Err(Error::InvalidResource(
                "depth-stencil view of a texture without DEPTH_STENCIL".to_string(),
            ));
        }
        let desc = desc.copied().unwrap_or(DepthStencilViewDesc {
            format: info.format,
            dimension: ViewDimension::for_sample_count(info.samples.count),
            mip_slice: 0,
        });
        Self::check_view_shape(info, desc.format, desc.dimension)?;
        if desc.mip_slice >= info.mip_levels {
            return Err(Error::InvalidResource(format!("mip slice {} out of range", desc.mip_slice)));
        }

        let id = self.registry.register(ResourceRecord::DepthStencilView { texture: texture_id, desc });
        rtt_debug!(LOG_SOURCE, "DepthStencilView {:?} -> texture {:?}", id, texture_id);
        Ok(Arc::new(DepthStencilView::new(id, texture.clone(), desc, self.registry.clone())))
    }

    fn create_buffer(&self, desc: &BufferDesc, initial_data: Option<&[u8]>) -> Result<Arc<dyn RendererBuffer>> {
        self.check_injected_failure(ResourceKind::Buffer)?;

        if desc.size == 0 {
            return Err(Error::InvalidResource("buffer size must be non-zero".to_string()));
        }
        if desc.usage == BufferUsage::Constant && desc.size % 16 != 0 {
            return Err(Error::InvalidResource(format!(
                "constant buffer size {} is not a multiple of 16",
                desc.size
            )));
        }
        let contents = match initial_data {
            Some(data) if data.len() as u64 != desc.size => {
                return Err(Error::InvalidResource(format!(
                    "initial data is {} bytes, buffer is {}",
                    data.len(),
                    desc.size
                )));
            }
            Some(data) => data.to_vec(),
            None if desc.access == BufferAccess::Immutable => {
                return Err(Error::InvalidResource(
                    "immutable buffer created without initial data".to_string(),
                ));
            }
            None => vec![0; desc.size as usize],
        };
        self.check_budget(desc.size)?;

        let id = self.registry.register(ResourceRecord::Buffer { desc: *desc, contents });
        rtt_debug!(LOG_SOURCE, "Buffer {:?}: {:?} {} bytes ({:?})", id, desc.usage, desc.size, desc.access);
        Ok(Arc::new(Buffer::new(id, *desc, self.registry.clone())))
    }
}
