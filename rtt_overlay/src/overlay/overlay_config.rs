/// Overlay placement, clear values and target formats

use glam::{Mat4, Vec3};

use crate::device::TextureFormat;

/// Navy blue, (0, 0, 128/255) opaque
pub const NAVY: [f32; 4] = [0.0, 0.0, 0.501_960_8, 1.0];

/// Overlay configuration
///
/// Defaults reproduce the demo: a quarter-size quad in the top-right corner,
/// off-screen target cleared to navy, 4x MSAA float color target.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Scale applied to the fullscreen quad
    pub scale: Vec3,
    /// Translation applied after scaling
    pub translation: Vec3,
    /// Off-screen color clear value (RGBA)
    pub clear_color: [f32; 4],
    /// Off-screen depth clear value
    pub clear_depth: f32,
    /// Off-screen stencil clear value
    pub clear_stencil: u8,
    /// Samples per pixel of the off-screen targets
    pub sample_count: u32,
    /// Off-screen color format
    pub color_format: TextureFormat,
    /// Off-screen depth/stencil format
    pub depth_format: TextureFormat,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            scale: Vec3::new(0.25, 0.25, 1.0),
            translation: Vec3::new(0.70, 0.70, 0.0),
            clear_color: NAVY,
            clear_depth: 1.0,
            clear_stencil: 0,
            sample_count: 4,
            color_format: TextureFormat::R32G32B32A32_FLOAT,
            depth_format: TextureFormat::D24_UNORM_S8_UINT,
        }
    }
}

impl OverlayConfig {
    /// World matrix of the quad: scale first, then translate
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * Mat4::from_scale(self.scale)
    }
}
