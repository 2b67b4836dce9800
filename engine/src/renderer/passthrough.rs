//! Vertex Pass-Through Renderer
//!
//! The hardware-path counterpart of the software rasterizer: uploads the
//! polygon's vertices unchanged and leaves rasterization to the surface
//! (line loop for the outline, triangle fan for the interior). Uses the same
//! simplicity test and color policy as the software path.

use glam::Vec2;

use super::{ColorRole, DrawCommand, Primitive};
use crate::config::RasterConfig;
use crate::raster::{PixelVertex, Recompute, is_simple};
use crate::view::{ViewInputs, ViewState, ViewTransform};

#[derive(Debug, Clone, Default)]
pub struct VertexPassthrough {
    vertices: Vec<PixelVertex>,
    simple: bool,
    view: ViewState,
    dirty: bool,
}

impl VertexPassthrough {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_geometry(&mut self, vertices: &[Vec2]) {
        self.vertices.clear();
        self.vertices
            .extend(vertices.iter().map(|v| PixelVertex { position: v.to_array() }));
        self.simple = is_simple(vertices);
        self.dirty = true;
    }

    pub fn submit_view(&mut self, inputs: ViewInputs) {
        self.view.submit(inputs);
    }

    /// Vertex data is ready as soon as it is submitted; only the view needs
    /// recomposing.
    pub fn update(&mut self) -> Recompute {
        let retraced = std::mem::take(&mut self.dirty);
        Recompute {
            retraced,
            view: self.view.recompute(),
        }
    }

    pub fn vertices(&self) -> &[PixelVertex] {
        &self.vertices
    }

    pub fn is_fillable(&self) -> bool {
        self.simple
    }

    pub fn view(&self) -> &ViewTransform {
        self.view.transform()
    }

    pub fn draw_commands(&self, config: &RasterConfig) -> Vec<DrawCommand> {
        let count = self.vertices.len();
        if count == 0 {
            return Vec::new();
        }

        let mut commands = Vec::with_capacity(2);
        if self.simple {
            commands.push(DrawCommand::new(
                ColorRole::Fill,
                config,
                Primitive::TriangleFan,
                0,
                count,
            ));
        }
        let role = if self.simple {
            ColorRole::OutlineSimple
        } else {
            ColorRole::OutlineComplex
        };
        commands.push(DrawCommand::new(role, config, Primitive::LineLoop, 0, count));
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_polygon_gets_fan_and_loop() {
        let mut pass = VertexPassthrough::new();
        pass.submit_geometry(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
        ]);
        let result = pass.update();
        assert!(result.retraced);

        let commands = pass.draw_commands(&RasterConfig::default());
        let primitives: Vec<Primitive> = commands.iter().map(|c| c.primitive).collect();
        assert_eq!(primitives, vec![Primitive::TriangleFan, Primitive::LineLoop]);
        assert_eq!(commands[1].role, ColorRole::OutlineSimple);
    }

    #[test]
    fn test_two_vertices_draw_complex_loop_only() {
        let mut pass = VertexPassthrough::new();
        pass.submit_geometry(&[Vec2::ZERO, Vec2::ONE]);
        pass.update();

        let commands = pass.draw_commands(&RasterConfig::default());
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].role, ColorRole::OutlineComplex);
        assert_eq!(pass.vertices()[1].position, [1.0, 1.0]);
    }
}
