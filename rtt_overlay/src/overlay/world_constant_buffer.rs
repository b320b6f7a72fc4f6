/// Per-draw transform record uploaded to the overlay's constant buffer

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// World, view and projection matrices as the shaders read them.
///
/// Each matrix is stored transposed: the overlay shaders consume row-major
/// matrices, glam keeps them column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct WorldConstantBuffer {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

// Constant buffers are sized in 16-byte registers
const _: () = assert!(std::mem::size_of::<WorldConstantBuffer>() % 16 == 0);

impl WorldConstantBuffer {
    /// Size in bytes (192)
    pub const SIZE: u64 = std::mem::size_of::<WorldConstantBuffer>() as u64;

    /// Build the record from untransposed matrices
    pub fn transposed(world: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            world: world.transpose(),
            view: view.transpose(),
            projection: projection.transpose(),
        }
    }

    /// Raw bytes for `update_subresource`
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
