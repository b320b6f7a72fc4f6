/// Camera - view and projection the overlay reads when it draws its quad.
///
/// Nothing is derived here. The application updates both matrices between
/// frames, typically through the `Arc<RwLock<Camera>>` it shares with the
/// overlay.

use glam::Mat4;

/// Current view and projection matrices of the scene camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view(&self) -> Mat4 {
        self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== SETTERS - store, compute nothing =====

    /// Set the view matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
