//! Unit tests for the overlay's device-independent parts.
//!
//! Resource creation and per-frame commands are covered by
//! tests/overlay_integration_tests.rs against the recording backend.

use glam::{Mat4, Vec3, Vec4};

use crate::device::TextureFormat;
use crate::overlay::{OverlayConfig, OverlayResource, OverlayState, WorldConstantBuffer, NAVY};

// ============================================================================
// OverlayConfig
// ============================================================================

#[test]
fn test_default_config_matches_demo_values() {
    let config = OverlayConfig::default();

    assert_eq!(config.scale, Vec3::new(0.25, 0.25, 1.0));
    assert_eq!(config.translation, Vec3::new(0.70, 0.70, 0.0));
    assert_eq!(config.clear_color, NAVY);
    assert_eq!(config.clear_depth, 1.0);
    assert_eq!(config.clear_stencil, 0);
    assert_eq!(config.sample_count, 4);
    assert_eq!(config.color_format, TextureFormat::R32G32B32A32_FLOAT);
    assert_eq!(config.depth_format, TextureFormat::D24_UNORM_S8_UINT);
}

#[test]
fn test_world_transform_scales_then_translates() {
    let world = OverlayConfig::default().world_transform();

    // Quad corners land in the top-right corner of clip space
    let top_right = world * Vec4::new(1.0, 1.0, 0.0, 1.0);
    let bottom_left = world * Vec4::new(-1.0, -1.0, 0.0, 1.0);

    assert!((top_right - Vec4::new(0.95, 0.95, 0.0, 1.0)).abs().max_element() < 1e-6);
    assert!((bottom_left - Vec4::new(0.45, 0.45, 0.0, 1.0)).abs().max_element() < 1e-6);
}

#[test]
fn test_world_transform_is_deterministic() {
    let a = OverlayConfig::default().world_transform();
    let b = OverlayConfig::default().world_transform();
    assert_eq!(a, b);

    let expected = Mat4::from_translation(Vec3::new(0.70, 0.70, 0.0))
        * Mat4::from_scale(Vec3::new(0.25, 0.25, 1.0));
    assert_eq!(a, expected);
}

#[test]
fn test_custom_placement() {
    let config = OverlayConfig {
        scale: Vec3::new(0.5, 0.5, 1.0),
        translation: Vec3::new(-0.5, 0.5, 0.0),
        ..OverlayConfig::default()
    };

    let center = config.world_transform() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(center, Vec4::new(-0.5, 0.5, 0.0, 1.0));
}

// ============================================================================
// WorldConstantBuffer
// ============================================================================

#[test]
fn test_constant_buffer_size() {
    assert_eq!(WorldConstantBuffer::SIZE, 192);
    assert_eq!(WorldConstantBuffer::SIZE % 16, 0);
}

#[test]
fn test_constant_buffer_stores_transposes() {
    let world = OverlayConfig::default().world_transform();
    let view = Mat4::look_at_rh(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);

    let record = WorldConstantBuffer::transposed(world, view, projection);

    assert_eq!(record.world, world.transpose());
    assert_eq!(record.view, view.transpose());
    assert_eq!(record.projection, projection.transpose());
}

#[test]
fn test_constant_buffer_bytes_are_row_major() {
    let world = OverlayConfig::default().world_transform();
    let record = WorldConstantBuffer::transposed(world, Mat4::IDENTITY, Mat4::IDENTITY);

    let bytes = record.as_bytes();
    assert_eq!(bytes.len(), 192);

    let floats: &[f32] = bytemuck::cast_slice(&bytes[..64]);
    // First row of the world matrix: scale x, then translation x in the last column
    assert_eq!(floats[0], 0.25);
    assert_eq!(floats[3], 0.70);
    assert_eq!(floats[15], 1.0);
}

// ============================================================================
// State and resource names
// ============================================================================

#[test]
fn test_state_is_loaded() {
    assert!(!OverlayState::Uninitialized.is_loaded());
    assert!(OverlayState::Loaded.is_loaded());
    assert!(OverlayState::OffscreenActive.is_loaded());
    assert!(OverlayState::Composited.is_loaded());
}

#[test]
fn test_resource_order_starts_with_color_target() {
    assert_eq!(OverlayResource::ALL[0], OverlayResource::ColorTexture);
    assert_eq!(OverlayResource::ALL[7], OverlayResource::ConstantBuffer);
}

#[test]
fn test_resource_display_names() {
    assert_eq!(OverlayResource::ColorTexture.to_string(), "off-screen color texture");
    assert_eq!(OverlayResource::ConstantBuffer.to_string(), "constant buffer");
}
