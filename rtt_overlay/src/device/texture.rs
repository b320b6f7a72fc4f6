/// Texture trait, texture descriptor, and texture info

use std::any::Any;
use bitflags::bitflags;

/// Texture pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    // Color formats
    R8G8B8A8_UNORM,
    B8G8R8A8_UNORM,
    R16G16B16A16_FLOAT,
    R32G32B32A32_FLOAT,

    // Depth/stencil formats
    D32_FLOAT,
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    /// Returns true for depth or depth/stencil formats
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D32_FLOAT | TextureFormat::D24_UNORM_S8_UINT)
    }

    /// Returns true if the format carries a stencil channel
    pub fn has_stencil(&self) -> bool {
        matches!(self, TextureFormat::D24_UNORM_S8_UINT)
    }

    /// Size of one texel (one sample) in bytes
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8G8B8A8_UNORM
            | TextureFormat::B8G8R8A8_UNORM
            | TextureFormat::D32_FLOAT
            | TextureFormat::D24_UNORM_S8_UINT => 4,
            TextureFormat::R16G16B16A16_FLOAT => 8,
            TextureFormat::R32G32B32A32_FLOAT => 16,
        }
    }
}

bitflags! {
    /// Pipeline stages a texture may be bound to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureUsage: u32 {
        /// Can be bound as a color output
        const RENDER_TARGET = 1 << 0;
        /// Can be sampled in shaders
        const SHADER_RESOURCE = 1 << 1;
        /// Can be bound as a depth/stencil output
        const DEPTH_STENCIL = 1 << 2;
    }
}

/// Multisample count and device-specific quality level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleDesc {
    /// Samples per pixel (1 = no MSAA)
    pub count: u32,
    /// Quality index, must be below the device's reported quality levels
    pub quality: u32,
}

impl SampleDesc {
    /// One sample, quality 0
    pub const SINGLE: SampleDesc = SampleDesc { count: 1, quality: 0 };

    /// Returns true if more than one sample per pixel is used
    pub fn is_multisampled(&self) -> bool {
        self.count > 1
    }
}

impl Default for SampleDesc {
    fn default() -> Self {
        Self::SINGLE
    }
}

/// Descriptor for creating a 2D texture
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Number of mip levels
    pub mip_levels: u32,
    /// Number of array layers
    pub array_layers: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Multisampling
    pub samples: SampleDesc,
    /// Bind flags
    pub usage: TextureUsage,
}

impl TextureDesc {
    /// Single-mip, single-layer 2D texture
    pub fn new_2d(width: u32, height: u32, format: TextureFormat, usage: TextureUsage) -> Self {
        Self {
            width,
            height,
            mip_levels: 1,
            array_layers: 1,
            format,
            samples: SampleDesc::SINGLE,
            usage,
        }
    }

    /// Same descriptor with the given multisampling
    pub fn with_samples(mut self, samples: SampleDesc) -> Self {
        self.samples = samples;
        self
    }

    /// Memory footprint of mip 0 over all layers and samples
    pub fn byte_size(&self) -> u64 {
        self.width as u64
            * self.height as u64
            * self.array_layers as u64
            * self.samples.count as u64
            * self.format.bytes_per_pixel() as u64
    }
}

/// Read-only properties of a created texture
pub type TextureInfo = TextureDesc;

/// Texture resource trait
///
/// Implemented by backend-specific texture types.
/// The texture is released when the last handle is dropped.
pub trait Texture: Send + Sync {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;

    /// Backend downcast hook
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
