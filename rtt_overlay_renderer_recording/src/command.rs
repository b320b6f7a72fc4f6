/// Command log entries recorded by the recording context

use std::collections::BTreeMap;

use rtt_overlay::rtt::device::{ClearFlags, IndexFormat, PrimitiveTopology, Viewport};

use crate::recording_resources::ResourceId;

/// Vertex buffer bound to one input slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBufferSlot {
    pub buffer: ResourceId,
    pub stride: u32,
    pub offset: u32,
}

/// Index buffer binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexBufferBinding {
    pub buffer: ResourceId,
    pub format: IndexFormat,
    pub offset: u32,
}

/// Pipeline bindings in effect at the time of a draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundState {
    pub render_targets: Vec<ResourceId>,
    pub depth_stencil: Option<ResourceId>,
    pub viewports: Vec<Viewport>,
    pub vertex_buffers: BTreeMap<u32, VertexBufferSlot>,
    pub index_buffer: Option<IndexBufferBinding>,
    pub topology: Option<PrimitiveTopology>,
    pub vs_constant_buffers: BTreeMap<u32, ResourceId>,
    pub ps_constant_buffers: BTreeMap<u32, ResourceId>,
    pub ps_shader_resources: BTreeMap<u32, ResourceId>,
}

/// One accepted (or rejected) context call
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ClearRenderTargetView {
        view: ResourceId,
        color: [f32; 4],
    },
    ClearDepthStencilView {
        view: ResourceId,
        flags: ClearFlags,
        depth: f32,
        stencil: u8,
    },
    SetRenderTargets {
        color: Vec<ResourceId>,
        depth_stencil: Option<ResourceId>,
    },
    SetViewports(Vec<Viewport>),
    SetVertexBuffers {
        start_slot: u32,
        bindings: Vec<VertexBufferSlot>,
    },
    SetIndexBuffer(IndexBufferBinding),
    SetPrimitiveTopology(PrimitiveTopology),
    VsSetConstantBuffers {
        start_slot: u32,
        buffers: Vec<ResourceId>,
    },
    PsSetConstantBuffers {
        start_slot: u32,
        buffers: Vec<ResourceId>,
    },
    UpdateSubresource {
        buffer: ResourceId,
        data: Vec<u8>,
    },
    PsSetShaderResources {
        start_slot: u32,
        views: Vec<ResourceId>,
    },
    DrawIndexed {
        index_count: u32,
        start_index: u32,
        base_vertex: i32,
        /// Snapshot of the bindings the draw consumed
        state: Box<BoundState>,
    },
    /// A call the device would have ignored or flagged in debug mode
    Rejected {
        call: &'static str,
        reason: String,
    },
}

impl Command {
    /// Name of the context call that produced this entry
    pub fn name(&self) -> &'static str {
        match self {
            Command::ClearRenderTargetView { .. } => "clear_render_target_view",
            Command::ClearDepthStencilView { .. } => "clear_depth_stencil_view",
            Command::SetRenderTargets { .. } => "set_render_targets",
            Command::SetViewports(_) => "set_viewports",
            Command::SetVertexBuffers { .. } => "set_vertex_buffers",
            Command::SetIndexBuffer(_) => "set_index_buffer",
            Command::SetPrimitiveTopology(_) => "set_primitive_topology",
            Command::VsSetConstantBuffers { .. } => "vs_set_constant_buffers",
            Command::PsSetConstantBuffers { .. } => "ps_set_constant_buffers",
            Command::UpdateSubresource { .. } => "update_subresource",
            Command::PsSetShaderResources { .. } => "ps_set_shader_resources",
            Command::DrawIndexed { .. } => "draw_indexed",
            Command::Rejected { call, .. } => *call,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Command::Rejected { .. })
    }
}
