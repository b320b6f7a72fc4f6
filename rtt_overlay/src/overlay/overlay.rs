/// Overlay - renders the scene into an off-screen target and composites
/// that target as a small quad on top of the main output.
///
/// Typical frame:
///
/// ```text
/// overlay.set_render_target_view()?;   // scene now draws off-screen
/// draw_scene();
/// bind_back_buffer();                  // caller restores the main target
/// overlay.render()?;                   // quad textured with the scene
/// ```

use std::sync::{Arc, RwLock};

use glam::Mat4;
use winit::dpi::PhysicalSize;

use crate::camera::Camera;
use crate::device::{
    Buffer, BufferAccess, BufferDesc, BufferUsage, ClearFlags, DepthStencilView,
    IndexFormat, PrimitiveTopology, RenderTargetView,
    RenderTargetViewDesc, Renderer, SampleDesc, ShaderResourceView,
    ShaderResourceViewDesc, Texture, TextureDesc, TextureUsage, VertexBufferBinding,
    ViewDimension, Viewport,
};
use crate::error::{Error, Result};
use crate::geometry::{self, MeshData, Vertex};
use crate::overlay::{OverlayConfig, OverlayResource, OverlayState, WorldConstantBuffer};
use crate::{rtt_debug, rtt_error, rtt_info, rtt_trace};

const LOG_SOURCE: &str = "rtt::Overlay";

/// Attribute a device error to the overlay resource being created
fn failed(resource: OverlayResource) -> impl FnOnce(Error) -> Error {
    move |error| Error::creation_failed(resource, error)
}

/// GPU objects created by `Overlay::load`
struct OverlayResources {
    mesh: MeshData,
    vertex_buffer: Arc<dyn Buffer>,
    index_buffer: Arc<dyn Buffer>,
    constant_buffer: Arc<dyn Buffer>,

    color_texture: Arc<dyn Texture>,
    render_target_view: Arc<dyn RenderTargetView>,
    shader_resource_view: Arc<dyn ShaderResourceView>,
    depth_texture: Arc<dyn Texture>,
    depth_stencil_view: Arc<dyn DepthStencilView>,

    viewport: Viewport,
}

/// Render-to-texture overlay
///
/// Holds shared handles to the application's renderer and camera, and
/// exclusively owns every GPU resource it creates. Resources are released
/// when the overlay is dropped.
pub struct Overlay {
    renderer: Arc<dyn Renderer>,
    camera: Arc<RwLock<Camera>>,
    config: OverlayConfig,
    state: OverlayState,
    resources: Option<OverlayResources>,
}

impl Overlay {
    /// Create an overlay with the default configuration. No GPU work.
    pub fn new(renderer: Arc<dyn Renderer>, camera: Arc<RwLock<Camera>>) -> Self {
        Self::with_config(renderer, camera, OverlayConfig::default())
    }

    /// Create an overlay with a custom configuration. No GPU work.
    pub fn with_config(
        renderer: Arc<dyn Renderer>,
        camera: Arc<RwLock<Camera>>,
        config: OverlayConfig,
    ) -> Self {
        Self {
            renderer,
            camera,
            config,
            state: OverlayState::Uninitialized,
            resources: None,
        }
    }

    /// Log an error before handing it back to the caller
    fn log_and_return_error(error: Error) -> Error {
        rtt_error!(LOG_SOURCE, "{}", error);
        error
    }

    // ===== LOAD =====

    /// Create every GPU resource for a `width`×`height` window.
    ///
    /// Must be called exactly once, after the renderer's device is live.
    /// Any creation failure aborts the load with
    /// `Error::ResourceCreationFailed`; the overlay then stays
    /// `Uninitialized` and whatever was already created is released.
    pub fn load(&mut self, width: u32, height: u32) -> Result<()> {
        if self.state.is_loaded() {
            return Err(Self::log_and_return_error(Error::InvalidState {
                operation: "load",
                state: self.state,
            }));
        }
        if width == 0 || height == 0 {
            return Err(Self::log_and_return_error(Error::InvalidResource(format!(
                "overlay target size must be non-zero, got {}x{}",
                width, height
            ))));
        }

        let resources = self.create_resources(width, height).map_err(Self::log_and_return_error)?;
        self.resources = Some(resources);
        self.state = OverlayState::Loaded;

        rtt_info!(
            LOG_SOURCE,
            "Loaded {}x{} off-screen target ({:?}, {}x MSAA)",
            width,
            height,
            self.config.color_format,
            self.config.sample_count
        );
        Ok(())
    }

    /// `load` using a window's inner size
    pub fn load_for_window(&mut self, size: PhysicalSize<u32>) -> Result<()> {
        self.load(size.width, size.height)
    }

    fn sample_desc(&self) -> Result<SampleDesc> {
        if self.config.sample_count <= 1 {
            return Ok(SampleDesc::SINGLE);
        }

        let quality_levels = self.renderer.msaa_quality();
        if quality_levels == 0 {
            return Err(Error::InitializationFailed(format!(
                "renderer reports no quality levels for {}x MSAA",
                self.config.sample_count
            )));
        }

        Ok(SampleDesc {
            count: self.config.sample_count,
            quality: quality_levels - 1,
        })
    }

    fn create_resources(&self, width: u32, height: u32) -> Result<OverlayResources> {
        let device = self.renderer.device();
        let samples = self.sample_desc()?;
        let dimension = ViewDimension::for_sample_count(samples.count);

        // Off-screen color target, written by the scene and sampled by the quad
        let color_desc = TextureDesc::new_2d(
            width,
            height,
            self.config.color_format,
            TextureUsage::RENDER_TARGET | TextureUsage::SHADER_RESOURCE,
        )
        .with_samples(samples);
        let color_texture = device
            .create_texture(&color_desc)
            .map_err(failed(OverlayResource::ColorTexture))?;

        let render_target_view = device
            .create_render_target_view(
                &color_texture,
                Some(&RenderTargetViewDesc {
                    format: color_desc.format,
                    dimension,
                    mip_slice: 0,
                }),
            )
            .map_err(failed(OverlayResource::RenderTargetView))?;

        // Depth/stencil
        let depth_desc = TextureDesc::new_2d(
            width,
            height,
            self.config.depth_format,
            TextureUsage::DEPTH_STENCIL,
        )
        .with_samples(samples);
        let depth_texture = device
            .create_texture(&depth_desc)
            .map_err(failed(OverlayResource::DepthStencilTexture))?;
        let depth_stencil_view = device
            .create_depth_stencil_view(&depth_texture, None)
            .map_err(failed(OverlayResource::DepthStencilView))?;

        let shader_resource_view = device
            .create_shader_resource_view(
                &color_texture,
                Some(&ShaderResourceViewDesc {
                    format: color_desc.format,
                    dimension,
                    most_detailed_mip: 0,
                    mip_levels: 1,
                }),
            )
            .map_err(failed(OverlayResource::ShaderResourceView))?;

        let viewport = Viewport::full(width, height);

        // Quad geometry
        let mesh = geometry::create_fullscreen_quad();

        let vertex_bytes = mesh.vertex_bytes();
        let vertex_buffer = device
            .create_buffer(
                &BufferDesc {
                    size: vertex_bytes.len() as u64,
                    usage: BufferUsage::Vertex,
                    access: BufferAccess::Immutable,
                },
                Some(vertex_bytes),
            )
            .map_err(failed(OverlayResource::VertexBuffer))?;

        let index_bytes = mesh.index_bytes();
        let index_buffer = device
            .create_buffer(
                &BufferDesc {
                    size: index_bytes.len() as u64,
                    usage: BufferUsage::Index,
                    access: BufferAccess::Immutable,
                },
                Some(index_bytes),
            )
            .map_err(failed(OverlayResource::IndexBuffer))?;

        // Rewritten every frame, so not immutable
        let constant_buffer = device
            .create_buffer(
                &BufferDesc {
                    size: WorldConstantBuffer::SIZE,
                    usage: BufferUsage::Constant,
                    access: BufferAccess::Default,
                },
                None,
            )
            .map_err(failed(OverlayResource::ConstantBuffer))?;

        rtt_debug!(
            LOG_SOURCE,
            "Created overlay resources: {} vertices, {} indices, samples {:?}",
            mesh.vertices.len(),
            mesh.indices.len(),
            samples
        );

        Ok(OverlayResources {
            mesh,
            vertex_buffer,
            index_buffer,
            constant_buffer,
            color_texture,
            render_target_view,
            shader_resource_view,
            depth_texture,
            depth_stencil_view,
            viewport,
        })
    }

    fn loaded(&self, operation: &'static str) -> Result<&OverlayResources> {
        self.resources.as_ref().ok_or_else(|| {
            Self::log_and_return_error(Error::InvalidState {
                operation,
                state: self.state,
            })
        })
    }

    // ===== PER FRAME =====

    /// Redirect output to the off-screen target.
    ///
    /// Clears color to the configured clear color and depth/stencil to the
    /// configured values, binds both views as output and installs the
    /// overlay viewport. The previous targets are not restored: the caller
    /// rebinds its main target once the off-screen pass is done.
    pub fn set_render_target_view(&mut self) -> Result<()> {
        let resources = self.loaded("set_render_target_view")?;
        let context = self.renderer.device_context();

        context.clear_render_target_view(&resources.render_target_view, self.config.clear_color);
        context.clear_depth_stencil_view(
            &resources.depth_stencil_view,
            ClearFlags::DEPTH,
            self.config.clear_depth,
            self.config.clear_stencil,
        );

        context.set_render_targets(
            std::slice::from_ref(&resources.render_target_view),
            Some(&resources.depth_stencil_view),
        );
        context.set_viewports(&[resources.viewport]);

        rtt_trace!(LOG_SOURCE, "Off-screen target bound");
        self.state = OverlayState::OffscreenActive;
        Ok(())
    }

    /// Draw the quad textured with the off-screen target onto whatever
    /// target is currently bound.
    pub fn render(&mut self) -> Result<()> {
        let resources = self.loaded("render")?;
        let record = self.constant_buffer_record()?;
        let context = self.renderer.device_context();

        context.set_vertex_buffers(
            0,
            &[VertexBufferBinding {
                buffer: &resources.vertex_buffer,
                stride: Vertex::STRIDE,
                offset: 0,
            }],
        );
        context.set_index_buffer(&resources.index_buffer, IndexFormat::U32, 0);
        context.set_primitive_topology(PrimitiveTopology::TriangleList);

        let constant_buffers = std::slice::from_ref(&resources.constant_buffer);
        context.vs_set_constant_buffers(0, constant_buffers);
        context.ps_set_constant_buffers(0, constant_buffers);
        context.update_subresource(&resources.constant_buffer, record.as_bytes());

        context.ps_set_shader_resources(0, std::slice::from_ref(&resources.shader_resource_view));

        context.draw_indexed(resources.mesh.index_count(), 0, 0);

        rtt_trace!(LOG_SOURCE, "Overlay quad drawn ({} indices)", resources.mesh.index_count());
        self.state = OverlayState::Composited;
        Ok(())
    }

    // ===== ACCESSORS =====

    /// Current lifecycle state
    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Viewport installed by `set_render_target_view` (after `load`)
    pub fn viewport(&self) -> Option<Viewport> {
        self.resources.as_ref().map(|r| r.viewport)
    }

    /// Quad mesh (after `load`)
    pub fn mesh(&self) -> Option<&MeshData> {
        self.resources.as_ref().map(|r| &r.mesh)
    }

    /// World matrix of the quad. Depends only on the configuration.
    pub fn world_transform(&self) -> Mat4 {
        self.config.world_transform()
    }

    /// Record that `render` would upload right now
    pub fn constant_buffer_record(&self) -> Result<WorldConstantBuffer> {
        let camera = self
            .camera
            .read()
            .map_err(|_| Error::BackendError("Camera lock poisoned".to_string()))?;

        Ok(WorldConstantBuffer::transposed(
            self.world_transform(),
            camera.view(),
            camera.projection(),
        ))
    }

    /// Off-screen color texture (after `load`)
    pub fn color_texture(&self) -> Option<&Arc<dyn Texture>> {
        self.resources.as_ref().map(|r| &r.color_texture)
    }

    /// Off-screen depth-stencil texture (after `load`)
    pub fn depth_texture(&self) -> Option<&Arc<dyn Texture>> {
        self.resources.as_ref().map(|r| &r.depth_texture)
    }

    /// View the quad samples (after `load`)
    pub fn shader_resource_view(&self) -> Option<&Arc<dyn ShaderResourceView>> {
        self.resources.as_ref().map(|r| &r.shader_resource_view)
    }

    /// View bound as color output by `set_render_target_view` (after `load`)
    pub fn render_target_view(&self) -> Option<&Arc<dyn RenderTargetView>> {
        self.resources.as_ref().map(|r| &r.render_target_view)
    }

    /// View bound as depth output by `set_render_target_view` (after `load`)
    pub fn depth_stencil_view(&self) -> Option<&Arc<dyn DepthStencilView>> {
        self.resources.as_ref().map(|r| &r.depth_stencil_view)
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        if self.resources.take().is_some() {
            rtt_debug!(LOG_SOURCE, "Overlay resources released");
        }
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
