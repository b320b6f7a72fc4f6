use super::*;

#[test]
fn test_depth_formats() {
    assert!(TextureFormat::D24_UNORM_S8_UINT.is_depth());
    assert!(TextureFormat::D24_UNORM_S8_UINT.has_stencil());
    assert!(TextureFormat::D32_FLOAT.is_depth());
    assert!(!TextureFormat::D32_FLOAT.has_stencil());
    assert!(!TextureFormat::R32G32B32A32_FLOAT.is_depth());
}

#[test]
fn test_bytes_per_pixel() {
    assert_eq!(TextureFormat::R32G32B32A32_FLOAT.bytes_per_pixel(), 16);
    assert_eq!(TextureFormat::R16G16B16A16_FLOAT.bytes_per_pixel(), 8);
    assert_eq!(TextureFormat::D24_UNORM_S8_UINT.bytes_per_pixel(), 4);
}

#[test]
fn test_usage_flags_combine() {
    let usage = TextureUsage::RENDER_TARGET | TextureUsage::SHADER_RESOURCE;
    assert!(usage.contains(TextureUsage::RENDER_TARGET));
    assert!(usage.contains(TextureUsage::SHADER_RESOURCE));
    assert!(!usage.contains(TextureUsage::DEPTH_STENCIL));
}

#[test]
fn test_sample_desc() {
    assert!(!SampleDesc::default().is_multisampled());
    assert!(SampleDesc { count: 4, quality: 15 }.is_multisampled());
}

#[test]
fn test_texture_desc_builder_and_size() {
    let desc = TextureDesc::new_2d(
        1920,
        1080,
        TextureFormat::R32G32B32A32_FLOAT,
        TextureUsage::RENDER_TARGET,
    )
    .with_samples(SampleDesc { count: 4, quality: 0 });

    assert_eq!(desc.mip_levels, 1);
    assert_eq!(desc.array_layers, 1);
    assert_eq!(desc.samples.count, 4);
    assert_eq!(desc.byte_size(), 1920 * 1080 * 4 * 16);
}
