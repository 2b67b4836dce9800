//! Renderer Strategies
//!
//! Two interchangeable ways of turning a polygon into draw calls, selected
//! by [`RenderMode`]:
//!
//! - `Software` - the CPU rasterizer in [`crate::raster`]; every outline and
//!   interior pixel is uploaded and drawn as a point.
//! - `Hardware` - [`VertexPassthrough`]; the raw vertices are uploaded and the
//!   surface draws them as a line loop and a triangle fan.
//!
//! Both expose the same contract: submit geometry, submit view, update, then
//! read back a vertex buffer and a draw list.

pub mod passthrough;
pub mod surface;

pub use passthrough::VertexPassthrough;
pub use surface::{PixelSurface, SurfaceError};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::RasterConfig;
use crate::raster::{PixelVertex, RasterState, Recompute};
use crate::view::{ViewInputs, ViewTransform};

// ============================================================================
// DRAW LIST
// ============================================================================

/// Which renderer strategy is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// CPU midpoint/scanline rasterizer.
    #[default]
    Software,
    /// Raw vertices, rasterized by the surface.
    Hardware,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Software => write!(f, "Software"),
            RenderMode::Hardware => write!(f, "Hardware"),
        }
    }
}

/// Semantic color of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    OutlineSimple,
    OutlineComplex,
    Fill,
}

impl ColorRole {
    /// Resolve the role against the configured palette.
    pub fn color(self, config: &RasterConfig) -> [f32; 4] {
        match self {
            ColorRole::OutlineSimple => config.outline_color,
            ColorRole::OutlineComplex => config.complex_outline_color,
            ColorRole::Fill => config.fill_color,
        }
    }
}

/// How the surface should interpret a buffer region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Points,
    LineLoop,
    TriangleFan,
}

/// One draw call against the renderer's vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub role: ColorRole,
    /// RGBA color resolved from `role`
    pub color: [f32; 4],
    pub primitive: Primitive,
    /// Byte offset of the first vertex
    pub offset: usize,
    /// Number of vertices
    pub count: usize,
}

impl DrawCommand {
    pub fn new(
        role: ColorRole,
        config: &RasterConfig,
        primitive: Primitive,
        offset: usize,
        count: usize,
    ) -> Self {
        Self {
            role,
            color: role.color(config),
            primitive,
            offset,
            count,
        }
    }
}

// ============================================================================
// RENDERER
// ============================================================================

/// The active renderer strategy.
#[derive(Debug, Clone)]
pub enum Renderer {
    Software(RasterState),
    Hardware(VertexPassthrough),
}

impl Renderer {
    pub fn new(mode: RenderMode, config: &RasterConfig) -> Self {
        match mode {
            RenderMode::Software => Renderer::Software(RasterState::new(config)),
            RenderMode::Hardware => Renderer::Hardware(VertexPassthrough::new()),
        }
    }

    pub fn mode(&self) -> RenderMode {
        match self {
            Renderer::Software(_) => RenderMode::Software,
            Renderer::Hardware(_) => RenderMode::Hardware,
        }
    }

    pub fn submit_geometry(&mut self, vertices: &[Vec2]) {
        match self {
            Renderer::Software(state) => state.submit_geometry(vertices),
            Renderer::Hardware(pass) => pass.submit_geometry(vertices),
        }
    }

    pub fn submit_view(&mut self, inputs: ViewInputs) {
        match self {
            Renderer::Software(state) => state.submit_view(inputs),
            Renderer::Hardware(pass) => pass.submit_view(inputs),
        }
    }

    pub fn update(&mut self) -> Recompute {
        match self {
            Renderer::Software(state) => state.update(),
            Renderer::Hardware(pass) => pass.update(),
        }
    }

    pub fn vertices(&self) -> &[PixelVertex] {
        match self {
            Renderer::Software(state) => state.vertices(),
            Renderer::Hardware(pass) => pass.vertices(),
        }
    }

    /// Vertex buffer as raw bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices())
    }

    pub fn draw_commands(&self, config: &RasterConfig) -> Vec<DrawCommand> {
        match self {
            Renderer::Software(state) => state.draw_commands(config),
            Renderer::Hardware(pass) => pass.draw_commands(config),
        }
    }

    pub fn view(&self) -> &ViewTransform {
        match self {
            Renderer::Software(state) => state.view(),
            Renderer::Hardware(pass) => pass.view(),
        }
    }

    pub fn is_fillable(&self) -> bool {
        match self {
            Renderer::Software(state) => state.is_fillable(),
            Renderer::Hardware(pass) => pass.is_fillable(),
        }
    }

    pub fn project(&self, world: Vec2) -> Vec2 {
        self.view().project(world)
    }

    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        self.view().unproject(screen)
    }

    /// The software rasterizer, when active.
    pub fn raster(&self) -> Option<&RasterState> {
        match self {
            Renderer::Software(state) => Some(state),
            Renderer::Hardware(_) => None,
        }
    }
}
