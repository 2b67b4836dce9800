//! World-to-Screen View Transform
//!
//! `projection * camera * model`, plus its inverse for mapping pointer input
//! back into polygon coordinates. A candidate transform that cannot be
//! inverted is rejected so the last valid pair stays in effect.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::transform::ModelTransform;
use super::viewport::Viewport;

/// Smallest accepted |det| relative to the product of the linear column lengths.
const SINGULAR_EPSILON: f32 = 1e-6;

/// Everything a view recomputation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewInputs {
    /// Camera translation in world units.
    pub camera: Vec2,
    /// User model transform.
    pub model: ModelTransform,
    /// Surface size in pixels.
    pub viewport: Viewport,
}

impl Default for ViewInputs {
    fn default() -> Self {
        Self {
            camera: Vec2::ZERO,
            model: ModelTransform::IDENTITY,
            viewport: Viewport::default(),
        }
    }
}

/// Forward (world → screen) and inverse (screen → world) matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    world_to_screen: Mat4,
    screen_to_world: Mat4,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            world_to_screen: Mat4::IDENTITY,
            screen_to_world: Mat4::IDENTITY,
        }
    }
}

impl ViewTransform {
    /// Orthographic projection spanning `[-w, w] x [-h, h]`.
    pub fn projection(viewport: Viewport) -> Mat4 {
        let (w, h) = (viewport.width, viewport.height);
        Mat4::orthographic_rh_gl(-w, w, -h, h, 0.0, 1.0)
    }

    /// Compose the transform for `inputs`.
    ///
    /// Returns `None` when the composed matrix is singular or not finite.
    pub fn compose(inputs: &ViewInputs) -> Option<Self> {
        let projection = Self::projection(inputs.viewport);
        let camera = Mat4::from_translation(Vec3::new(inputs.camera.x, inputs.camera.y, 0.0));
        Self::from_matrix(projection * camera * inputs.model.to_mat4())
    }

    /// Wrap an affine forward matrix, inverting it.
    pub fn from_matrix(world_to_screen: Mat4) -> Option<Self> {
        if !world_to_screen.is_finite() {
            return None;
        }
        // Affine matrices only: |det| is bounded by the product of the
        // linear column lengths
        let bound = world_to_screen.x_axis.truncate().length()
            * world_to_screen.y_axis.truncate().length()
            * world_to_screen.z_axis.truncate().length();
        let det = world_to_screen.determinant();
        if !(det.abs() > bound * SINGULAR_EPSILON) {
            return None;
        }
        let screen_to_world = world_to_screen.inverse();
        if !screen_to_world.is_finite() {
            return None;
        }
        Some(Self {
            world_to_screen,
            screen_to_world,
        })
    }

    pub fn world_to_screen(&self) -> Mat4 {
        self.world_to_screen
    }

    pub fn screen_to_world(&self) -> Mat4 {
        self.screen_to_world
    }

    /// Map a world-space point to normalized screen coordinates.
    pub fn project(&self, world: Vec2) -> Vec2 {
        self.world_to_screen.transform_point3(world.extend(0.0)).truncate()
    }

    /// Map a normalized screen point back into world space.
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        self.screen_to_world.transform_point3(screen.extend(0.0)).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_spans_twice_the_viewport() {
        let inputs = ViewInputs {
            viewport: Viewport::new(400.0, 300.0),
            ..Default::default()
        };
        let view = ViewTransform::compose(&inputs).unwrap();
        let corner = view.project(Vec2::new(400.0, 300.0));
        assert!((corner - Vec2::ONE).length() < 1e-5);
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let mut inputs = ViewInputs::default();
        inputs.model.set_scale_x(0.0);
        assert!(ViewTransform::compose(&inputs).is_none());
    }

    #[test]
    fn test_empty_viewport_is_rejected() {
        let inputs = ViewInputs {
            viewport: Viewport::new(0.0, 300.0),
            ..Default::default()
        };
        assert!(ViewTransform::compose(&inputs).is_none());
    }

    #[test]
    fn test_camera_translates_before_projection() {
        let inputs = ViewInputs {
            camera: Vec2::new(100.0, 0.0),
            viewport: Viewport::new(200.0, 200.0),
            ..Default::default()
        };
        let view = ViewTransform::compose(&inputs).unwrap();
        let p = view.project(Vec2::ZERO);
        assert!((p - Vec2::new(0.5, 0.0)).length() < 1e-5);
    }
}
