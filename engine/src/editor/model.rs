//! Editable Model
//!
//! A named polygon together with its camera position and model transform.
//! Transform controls are applied as [`TransformOp`]s, each replacing one
//! component of the model transform.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::polygon::Polygon;
use crate::view::{ModelTransform, ViewInputs, Viewport};

/// One transform control change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
    TranslateX(f32),
    TranslateY(f32),
    RotateDegrees(f32),
    ScaleX(f32),
    ScaleY(f32),
    ShearX(f32),
    ShearY(f32),
    Reflect,
}

impl TransformOp {
    pub fn apply(self, transform: &mut ModelTransform) {
        match self {
            TransformOp::TranslateX(x) => transform.set_translate_x(x),
            TransformOp::TranslateY(y) => transform.set_translate_y(y),
            TransformOp::RotateDegrees(d) => transform.set_rotation_degrees(d),
            TransformOp::ScaleX(x) => transform.set_scale_x(x),
            TransformOp::ScaleY(y) => transform.set_scale_y(y),
            TransformOp::ShearX(x) => transform.set_shear_x(x),
            TransformOp::ShearY(y) => transform.set_shear_y(y),
            TransformOp::Reflect => transform.reflect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditableModel {
    pub name: String,
    pub polygon: Polygon,
    /// Camera translation in world units
    pub camera: Vec2,
    pub transform: ModelTransform,
}

impl EditableModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_polygon(name: impl Into<String>, polygon: Polygon) -> Self {
        Self {
            name: name.into(),
            polygon,
            ..Default::default()
        }
    }

    /// View inputs for this model on a surface of `viewport` size.
    pub fn view_inputs(&self, viewport: Viewport) -> ViewInputs {
        ViewInputs {
            camera: self.camera,
            model: self.transform,
            viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ops_replace_components() {
        let mut transform = ModelTransform::default();
        TransformOp::ScaleX(2.0).apply(&mut transform);
        TransformOp::ScaleX(3.0).apply(&mut transform);
        TransformOp::RotateDegrees(180.0).apply(&mut transform);
        assert_eq!(transform.scale, Vec2::new(3.0, 1.0));
        assert!((transform.rotation - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_view_inputs_carry_camera_and_transform() {
        let mut model = EditableModel::new("kite");
        model.camera = Vec2::new(4.0, -2.0);
        TransformOp::Reflect.apply(&mut model.transform);

        let inputs = model.view_inputs(Viewport::new(320.0, 200.0));
        assert_eq!(inputs.camera, Vec2::new(4.0, -2.0));
        assert!(inputs.model.reflected);
        assert_eq!(inputs.viewport, Viewport::new(320.0, 200.0));
    }
}
