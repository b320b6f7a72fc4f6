use glam::{Mat4, Vec3};
use super::*;

fn test_view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
}

fn test_projection() -> Mat4 {
    Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new() {
    let camera = Camera::new(test_view(), test_projection());

    assert_eq!(camera.view(), test_view());
    assert_eq!(camera.projection(), test_projection());
}

#[test]
fn test_camera_default_is_identity() {
    let camera = Camera::default();
    assert_eq!(camera.view(), Mat4::IDENTITY);
    assert_eq!(camera.projection(), Mat4::IDENTITY);
}

// ============================================================================
// view_projection
// ============================================================================

#[test]
fn test_view_projection_matrix() {
    let camera = Camera::new(test_view(), test_projection());
    assert_eq!(camera.view_projection(), test_projection() * test_view());
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_set_view_leaves_projection() {
    let mut camera = Camera::new(test_view(), test_projection());
    let moved = Mat4::look_at_rh(Vec3::new(3.0, 1.0, 5.0), Vec3::ZERO, Vec3::Y);

    camera.set_view(moved);

    assert_eq!(camera.view(), moved);
    assert_eq!(camera.projection(), test_projection());
}

#[test]
fn test_set_projection_leaves_view() {
    let mut camera = Camera::new(test_view(), test_projection());
    let ortho = Mat4::orthographic_rh(-1.0, 1.0, -1.0, 1.0, 0.0, 1.0);

    camera.set_projection(ortho);

    assert_eq!(camera.view(), test_view());
    assert_eq!(camera.projection(), ortho);
}
