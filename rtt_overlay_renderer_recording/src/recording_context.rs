/// DeviceContext - recording implementation of the DeviceContext trait
///
/// Every call is appended to the command log. Calls a real device would
/// drop or flag are recorded as `Command::Rejected` and logged at WARN.

use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard};

use rtt_overlay::rtt::device::{
    Buffer as RendererBuffer, BufferAccess, ClearFlags, DeviceContext as RendererDeviceContext,
    DepthStencilView as RendererDepthStencilView, IndexFormat, PrimitiveTopology,
    RenderTargetView as RendererRenderTargetView,
    ShaderResourceView as RendererShaderResourceView, VertexBufferBinding, Viewport,
};
use rtt_overlay::{rtt_trace, rtt_warn};

use crate::command::{BoundState, Command, IndexBufferBinding, VertexBufferSlot};
use crate::recording_resources::{ResourceId, ResourceKind, ResourceRegistry};
use crate::recording_view::recording_id;

const LOG_SOURCE: &str = "rtt::recording";

#[derive(Default)]
struct ContextState {
    commands: Vec<Command>,
    bound: BoundState,
}

/// Recording command context
pub struct DeviceContext {
    registry: Arc<ResourceRegistry>,
    state: Mutex<ContextState>,
}

impl DeviceContext {
    pub(crate) fn new(registry: Arc<ResourceRegistry>) -> Self {
        Self {
            registry,
            state: Mutex::new(ContextState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ContextState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy of the command log
    pub fn commands(&self) -> Vec<Command> {
        self.lock().commands.clone()
    }

    /// Drain the command log, keeping the bound state
    pub fn take_commands(&self) -> Vec<Command> {
        std::mem::take(&mut self.lock().commands)
    }

    pub fn clear_commands(&self) {
        self.lock().commands.clear();
    }

    /// Bindings currently in effect
    pub fn bound_state(&self) -> BoundState {
        self.lock().bound.clone()
    }

    fn push(&self, command: Command) {
        rtt_trace!(LOG_SOURCE, "{:?}", command);
        self.lock().commands.push(command);
    }

    fn reject(&self, call: &'static str, reason: String) {
        rtt_warn!(LOG_SOURCE, "Rejected {}: {}", call, reason);
        self.lock().commands.push(Command::Rejected { call, reason });
    }

    /// Resolve a handle to a live registry entry of the expected kind
    fn resolve(&self, object: &dyn Any, kind: ResourceKind) -> Result<ResourceId, String> {
        let id = recording_id(object)
            .ok_or_else(|| "handle was not created by the recording device".to_string())?;
        match self.registry.get(id) {
            Some(record) if record.kind() == kind => Ok(id),
            Some(record) => Err(format!("expected a {:?}, got a {:?}", kind, record.kind())),
            None => Err(format!("resource {:?} is no longer alive", id)),
        }
    }

    fn resolve_all<'a, I>(&self, objects: I, kind: ResourceKind) -> Result<Vec<ResourceId>, String>
    where
        I: IntoIterator<Item = &'a dyn Any>,
    {
        objects.into_iter().map(|object| self.resolve(object, kind)).collect()
    }

    /// Why a draw with the current bindings cannot run, if it cannot
    fn draw_problem(&self, bound: &BoundState, index_count: u32, start_index: u32) -> Option<String> {
        let Some(index) = bound.index_buffer else {
            return Some("no index buffer bound".to_string());
        };
        if bound.topology.is_none() {
            return Some("no primitive topology set".to_string());
        }
        if bound.render_targets.is_empty() {
            return Some("no render target bound".to_string());
        }
        if bound.viewports.is_empty() {
            return Some("no viewport set".to_string());
        }
        let size = match self.registry.get(index.buffer) {
            Some(record) => record.byte_size(),
            None => return Some("bound index buffer was released".to_string()),
        };
        let last = u64::from(index.offset)
            + (u64::from(start_index) + u64::from(index_count)) * u64::from(index.format.size_bytes());
        if last > size {
            return Some(format!(
                "indices {}..{} read past the {}-byte index buffer",
                start_index,
                u64::from(start_index) + u64::from(index_count),
                size
            ));
        }
        None
    }
}

impl RendererDeviceContext for DeviceContext {
    fn clear_render_target_view(&self, view: &Arc<dyn RendererRenderTargetView>, color: [f32; 4]) {
        match self.resolve(view.as_any(), ResourceKind::RenderTargetView) {
            Ok(view) => self.push(Command::ClearRenderTargetView { view, color }),
            Err(reason) => self.reject("clear_render_target_view", reason),
        }
    }

    fn clear_depth_stencil_view(
        &self,
        view: &Arc<dyn RendererDepthStencilView>,
        flags: ClearFlags,
        depth: f32,
        stencil: u8,
    ) {
        if !(0.0..=1.0).contains(&depth) {
            return self.reject("clear_depth_stencil_view", format!("depth {} outside [0, 1]", depth));
        }
        match self.resolve(view.as_any(), ResourceKind::DepthStencilView) {
            Ok(view) => self.push(Command::ClearDepthStencilView { view, flags, depth, stencil }),
            Err(reason) => self.reject("clear_depth_stencil_view", reason),
        }
    }

    fn set_render_targets(
        &self,
        color: &[Arc<dyn RendererRenderTargetView>],
        depth_stencil: Option<&Arc<dyn RendererDepthStencilView>>,
    ) {
        let color_ids = match self.resolve_all(color.iter().map(|v| v.as_any()), ResourceKind::RenderTargetView) {
            Ok(ids) => ids,
            Err(reason) => return self.reject("set_render_targets", reason),
        };
        let depth_id = match depth_stencil.map(|v| self.resolve(v.as_any(), ResourceKind::DepthStencilView)) {
            Some(Err(reason)) => return self.reject("set_render_targets", reason),
            Some(Ok(id)) => Some(id),
            None => None,
        };

        // All bound targets must share one size and sample count
        let mut shapes = color
            .iter()
            .map(|v| v.texture().info())
            .chain(depth_stencil.map(|v| v.texture().info()))
            .map(|info| (info.width, info.height, info.samples.count));
        if let Some(first) = shapes.next() {
            if let Some(other) = shapes.find(|shape| *shape != first) {
                return self.reject(
                    "set_render_targets",
                    format!("target shapes differ: {:?} vs {:?}", first, other),
                );
            }
        }

        self.lock().bound.render_targets = color_ids.clone();
        self.lock().bound.depth_stencil = depth_id;
        self.push(Command::SetRenderTargets { color: color_ids, depth_stencil: depth_id });
    }

    fn set_viewports(&self, viewports: &[Viewport]) {
        if let Some(bad) = viewports.iter().find(|v| v.width <= 0.0 || v.height <= 0.0 || v.min_depth > v.max_depth) {
            return self.reject("set_viewports", format!("degenerate viewport {:?}", bad));
        }
        self.lock().bound.viewports = viewports.to_vec();
        self.push(Command::SetViewports(viewports.to_vec()));
    }

    fn set_vertex_buffers(&self, start_slot: u32, bindings: &[VertexBufferBinding<'_>]) {
        let mut slots = Vec::with_capacity(bindings.len());
        for binding in bindings {
            let buffer = match self.resolve(binding.buffer.as_any(), ResourceKind::Buffer) {
                Ok(id) => id,
                Err(reason) => return self.reject("set_vertex_buffers", reason),
            };
            slots.push(VertexBufferSlot { buffer, stride: binding.stride, offset: binding.offset });
        }
        {
            let mut state = self.lock();
            for (slot, binding) in (start_slot..).zip(&slots) {
                state.bound.vertex_buffers.insert(slot, *binding);
            }
        }
        self.push(Command::SetVertexBuffers { start_slot, bindings: slots });
    }

    fn set_index_buffer(&self, buffer: &Arc<dyn RendererBuffer>, format: IndexFormat, offset: u32) {
        if offset % format.size_bytes() != 0 {
            return self.reject("set_index_buffer", format!("offset {} not aligned to {:?}", offset, format));
        }
        match self.resolve(buffer.as_any(), ResourceKind::Buffer) {
            Ok(id) => {
                let binding = IndexBufferBinding { buffer: id, format, offset };
                self.lock().bound.index_buffer = Some(binding);
                self.push(Command::SetIndexBuffer(binding));
            }
            Err(reason) => self.reject("set_index_buffer", reason),
        }
    }

    fn set_primitive_topology(&self, topology: PrimitiveTopology) {
        self.lock().bound.topology = Some(topology);
        self.push(Command::SetPrimitiveTopology(topology));
    }

    fn vs_set_constant_buffers(&self, start_slot: u32, buffers: &[Arc<dyn RendererBuffer>]) {
        match self.resolve_all(buffers.iter().map(|b| b.as_any()), ResourceKind::Buffer) {
            Ok(ids) => {
                {
                    let mut state = self.lock();
                    for (slot, id) in (start_slot..).zip(&ids) {
                        state.bound.vs_constant_buffers.insert(slot, *id);
                    }
                }
                self.push(Command::VsSetConstantBuffers { start_slot, buffers: ids });
            }
            Err(reason) => self.reject("vs_set_constant_buffers", reason),
        }
    }

    fn ps_set_constant_buffers(&self, start_slot: u32, buffers: &[Arc<dyn RendererBuffer>]) {
        match self.resolve_all(buffers.iter().map(|b| b.as_any()), ResourceKind::Buffer) {
            Ok(ids) => {
                {
                    let mut state = self.lock();
                    for (slot, id) in (start_slot..).zip(&ids) {
                        state.bound.ps_constant_buffers.insert(slot, *id);
                    }
                }
                self.push(Command::PsSetConstantBuffers { start_slot, buffers: ids });
            }
            Err(reason) => self.reject("ps_set_constant_buffers", reason),
        }
    }

    fn update_subresource(&self, buffer: &Arc<dyn RendererBuffer>, data: &[u8]) {
        let id = match self.resolve(buffer.as_any(), ResourceKind::Buffer) {
            Ok(id) => id,
            Err(reason) => return self.reject("update_subresource", reason),
        };

        let outcome = self.registry.with_buffer(id, |desc, contents| {
            if desc.access == BufferAccess::Immutable {
                return Err("buffer is immutable".to_string());
            }
            if data.len() as u64 != desc.size {
                return Err(format!("{} bytes written to a {}-byte buffer", data.len(), desc.size));
            }
            contents.copy_from_slice(data);
            Ok(())
        });

        match outcome {
            Some(Ok(())) => self.push(Command::UpdateSubresource { buffer: id, data: data.to_vec() }),
            Some(Err(reason)) => self.reject("update_subresource", reason),
            None => self.reject("update_subresource", format!("buffer {:?} is no longer alive", id)),
        }
    }

    fn ps_set_shader_resources(&self, start_slot: u32, views: &[Arc<dyn RendererShaderResourceView>]) {
        let ids = match self.resolve_all(views.iter().map(|v| v.as_any()), ResourceKind::ShaderResourceView) {
            Ok(ids) => ids,
            Err(reason) => return self.reject("ps_set_shader_resources", reason),
        };
        {
            let mut state = self.lock();
            for (slot, id) in (start_slot..).zip(&ids) {
                state.bound.ps_shader_resources.insert(slot, *id);
            }
        }
        self.push(Command::PsSetShaderResources { start_slot, views: ids });
    }

    fn draw_indexed(&self, index_count: u32, start_index: u32, base_vertex: i32) {
        let bound = self.bound_state();
        if let Some(reason) = self.draw_problem(&bound, index_count, start_index) {
            return self.reject("draw_indexed", reason);
        }
        self.push(Command::DrawIndexed {
            index_count,
            start_index,
            base_vertex,
            state: Box::new(bound),
        });
    }
}
