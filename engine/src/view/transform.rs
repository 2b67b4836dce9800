//! User Model Transform
//!
//! The affine transform the user dials in from the editor controls. Each
//! control owns one component (translation, rotation, scale, shear) and
//! setting it replaces that component instead of compounding onto the
//! existing matrix. Reflection is the exception: it toggles.

use glam::{Affine2, Mat2, Mat4, Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Reflection across the line `y = -x`.
const REFLECT: Mat2 = Mat2::from_cols(Vec2::new(0.0, -1.0), Vec2::new(-1.0, 0.0));

/// Component-wise affine model transform.
///
/// Composed as `translate * rotate * shear * scale * reflect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelTransform {
    /// Translation in world units.
    pub translation: Vec2,
    /// Counter-clockwise rotation in radians.
    pub rotation: f32,
    /// Per-axis scale factors.
    pub scale: Vec2,
    /// Shear factors: `x` shears horizontally (x += shear.x * y),
    /// `y` shears vertically (y += shear.y * x).
    pub shear: Vec2,
    /// Whether the reflection is applied.
    pub reflected: bool,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ModelTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
        shear: Vec2::ZERO,
        reflected: false,
    };

    pub fn set_translate_x(&mut self, x: f32) {
        self.translation.x = x;
    }

    pub fn set_translate_y(&mut self, y: f32) {
        self.translation.y = y;
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation = degrees.to_radians();
    }

    pub fn set_scale_x(&mut self, x: f32) {
        self.scale.x = x;
    }

    pub fn set_scale_y(&mut self, y: f32) {
        self.scale.y = y;
    }

    pub fn set_shear_x(&mut self, x: f32) {
        self.shear.x = x;
    }

    pub fn set_shear_y(&mut self, y: f32) {
        self.shear.y = y;
    }

    /// Toggle the reflection.
    pub fn reflect(&mut self) {
        self.reflected = !self.reflected;
    }

    /// The composed 2D affine transform.
    pub fn to_affine(&self) -> Affine2 {
        let shear = Mat2::from_cols(Vec2::new(1.0, self.shear.y), Vec2::new(self.shear.x, 1.0));
        let mut linear = Mat2::from_angle(self.rotation) * shear * Mat2::from_diagonal(self.scale);
        if self.reflected {
            linear *= REFLECT;
        }
        Affine2::from_mat2_translation(linear, self.translation)
    }

    /// The transform embedded in the z = 0 plane of a 4x4 matrix.
    pub fn to_mat4(&self) -> Mat4 {
        affine_to_mat4(self.to_affine())
    }
}

/// Embed a 2D affine transform into a 4x4 matrix acting on the xy plane.
pub fn affine_to_mat4(affine: Affine2) -> Mat4 {
    let m = affine.matrix2;
    let t = affine.translation;
    Mat4::from_cols(
        m.x_axis.extend(0.0).extend(0.0),
        m.y_axis.extend(0.0).extend(0.0),
        Vec4::Z,
        t.extend(0.0).extend(1.0),
    )
}
