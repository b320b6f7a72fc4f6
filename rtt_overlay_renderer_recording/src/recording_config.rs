/// Recording backend configuration

/// Capabilities the recording device reports and enforces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingConfig {
    /// Quality levels supported for multisampled textures.
    /// Valid qualities are `0..msaa_quality`.
    pub msaa_quality: u32,
    /// Largest allowed texture width or height
    pub max_texture_dimension: u32,
    /// Bytes of textures and buffers that may be live at once
    pub memory_budget: u64,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            msaa_quality: 16,
            max_texture_dimension: 16384,
            memory_budget: 2 * 1024 * 1024 * 1024,
        }
    }
}
