//! Geometry utility - CPU-side mesh data for the overlay quad.

use bytemuck::{Pod, Zeroable};

/// Vertex with position and texture coordinate
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in normalized device coordinates
    pub position: [f32; 3],
    /// Texture coordinate (origin top-left)
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Byte stride of one vertex in a vertex buffer
    pub const STRIDE: u32 = std::mem::size_of::<Vertex>() as u32;

    pub const fn new(x: f32, y: f32, z: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y, z],
            tex_coord: [u, v],
        }
    }
}

/// Ordered vertices and triangle-list indices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Vertex data as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of triangles when drawn as a triangle list
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }
}

/// Two triangles covering the whole [-1, 1] clip-space square at z = 0.
///
/// ```text
/// 1 ----- 2
/// |     / |
/// |   /   |
/// | /     |
/// 0 ----- 3
/// ```
pub fn create_fullscreen_quad() -> MeshData {
    MeshData {
        vertices: vec![
            Vertex::new(-1.0, -1.0, 0.0, 0.0, 1.0),
            Vertex::new(-1.0, 1.0, 0.0, 0.0, 0.0),
            Vertex::new(1.0, 1.0, 0.0, 1.0, 0.0),
            Vertex::new(1.0, -1.0, 0.0, 1.0, 1.0),
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
