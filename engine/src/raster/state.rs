//! Raster State Machine
//!
//! Owns everything derived from one editable polygon on the software path:
//! the crossing table, outline and fill pixels, the concatenated upload
//! buffer and the view transform pair.
//!
//! Two flags drive recomputation:
//! - topology dirty: vertices changed, so every edge is re-traced, the
//!   polygon re-validated and the interior re-filled. The view is recomposed
//!   in the same pass.
//! - view dirty: only the camera, model transform or viewport changed, so
//!   only the transform is recomposed.

use glam::{IVec2, Vec2};

use super::buffer::{BufferLayout, PixelBuffer, PixelVertex};
use super::crossing::CrossingTable;
use super::line_tracer::trace_polygon;
use super::scanline::fill_into;
use super::validator::is_simple;
use crate::config::RasterConfig;
use crate::renderer::{ColorRole, DrawCommand, Primitive};
use crate::view::{ViewInputs, ViewState, ViewTransform, ViewUpdate};

/// How the polygon was classified by the last topology pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fillability {
    /// Simple polygon: normal outline color, interior filled.
    Fillable,
    /// Too few vertices, duplicate vertices or crossing edges: warning
    /// outline color, no fill.
    Complex,
}

/// What an [`RasterState::update`] call recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recompute {
    /// Edges were re-traced and the fill rebuilt.
    pub retraced: bool,
    /// Result of the view recomposition.
    pub view: ViewUpdate,
}

impl Recompute {
    pub const NOTHING: Self = Self {
        retraced: false,
        view: ViewUpdate::Unchanged,
    };
}

#[derive(Debug, Clone)]
pub struct RasterState {
    snapshot: Vec<Vec2>,
    view: ViewState,
    crossings: CrossingTable,
    outline: Vec<IVec2>,
    fill: Vec<IVec2>,
    buffer: PixelBuffer,
    fillability: Fillability,
    topology_dirty: bool,
    max_reserve: usize,
}

impl Default for RasterState {
    fn default() -> Self {
        Self::new(&RasterConfig::default())
    }
}

impl RasterState {
    pub fn new(config: &RasterConfig) -> Self {
        Self {
            snapshot: Vec::new(),
            view: ViewState::default(),
            crossings: CrossingTable::new(),
            outline: Vec::new(),
            fill: Vec::new(),
            buffer: PixelBuffer::new(),
            fillability: Fillability::Complex,
            topology_dirty: false,
            max_reserve: config.max_reserve_pixels,
        }
    }

    // -- Inputs --

    /// Take a copy of the polygon's vertices and mark topology dirty.
    pub fn submit_geometry(&mut self, vertices: &[Vec2]) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(vertices);
        self.topology_dirty = true;
    }

    /// Record new view inputs and mark the view dirty.
    pub fn submit_view(&mut self, inputs: ViewInputs) {
        self.view.submit(inputs);
    }

    pub fn is_topology_dirty(&self) -> bool {
        self.topology_dirty
    }

    pub fn is_view_dirty(&self) -> bool {
        self.view.is_dirty()
    }

    // -- Recompute --

    /// Run whatever recomputation is pending.
    ///
    /// A topology change always re-traces, and folds the view
    /// recomposition into the same pass.
    pub fn update(&mut self) -> Recompute {
        let retraced = self.topology_dirty;
        if retraced {
            self.recompute_topology();
            self.view.mark_dirty();
        }
        let view = self.view.recompute();
        Recompute { retraced, view }
    }

    fn recompute_topology(&mut self) {
        self.topology_dirty = false;

        self.crossings.clear();
        self.outline.clear();
        self.fill.clear();

        let (outline_hint, fill_hint) = self.capacity_hint();
        self.outline.reserve(outline_hint);

        trace_polygon(&self.snapshot, &mut self.outline, &mut self.crossings);

        let finite = self.snapshot.iter().all(|v| v.is_finite());
        if !finite {
            log::warn!(
                "[RasterState] Non-finite vertex in polygon of {} vertices, outline only",
                self.snapshot.len()
            );
        }

        if finite && is_simple(&self.snapshot) {
            self.fill.reserve(fill_hint);
            fill_into(&self.crossings, &mut self.fill);
            self.fillability = Fillability::Fillable;
        } else {
            self.fillability = Fillability::Complex;
        }

        self.buffer.rebuild(&self.outline, &self.fill);

        log::debug!(
            "[RasterState] Traced {} vertices: {} outline px, {} fill px, {} scanlines ({:?})",
            self.snapshot.len(),
            self.outline.len(),
            self.fill.len(),
            self.crossings.row_count(),
            self.fillability
        );
    }

    /// Capacity estimates from the polygon's bounding box: perimeter for the
    /// outline, area for the fill. Both capped.
    fn capacity_hint(&self) -> (usize, usize) {
        let Some(&first) = self.snapshot.first() else {
            return (0, 0);
        };
        let (min, max) = self
            .snapshot
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let size = (max - min).abs() + Vec2::ONE;
        if !size.is_finite() {
            return (0, 0);
        }

        let cap = self.max_reserve as f32;
        let perimeter = (2.0 * (size.x + size.y) + self.snapshot.len() as f32).min(cap);
        let area = (size.x * size.y).min(cap);
        (perimeter as usize, area as usize)
    }

    // -- Outputs --

    pub fn fillability(&self) -> Fillability {
        self.fillability
    }

    pub fn is_fillable(&self) -> bool {
        self.fillability == Fillability::Fillable
    }

    pub fn crossings(&self) -> &CrossingTable {
        &self.crossings
    }

    pub fn outline(&self) -> &[IVec2] {
        &self.outline
    }

    pub fn fill(&self) -> &[IVec2] {
        &self.fill
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn vertices(&self) -> &[PixelVertex] {
        self.buffer.vertices()
    }

    pub fn layout(&self) -> BufferLayout {
        self.buffer.layout()
    }

    pub fn view(&self) -> &ViewTransform {
        self.view.transform()
    }

    pub fn view_inputs(&self) -> &ViewInputs {
        self.view.inputs()
    }

    pub fn project(&self, world: Vec2) -> Vec2 {
        self.view.project(world)
    }

    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        self.view.unproject(screen)
    }

    /// Draw list for the surface: fill first (when fillable), then the
    /// outline on top, both as points.
    pub fn draw_commands(&self, config: &RasterConfig) -> Vec<DrawCommand> {
        let layout = self.layout();
        let mut commands = Vec::with_capacity(2);

        if self.is_fillable() && layout.fill_len > 0 {
            commands.push(DrawCommand::new(
                ColorRole::Fill,
                config,
                Primitive::Points,
                layout.fill_offset,
                layout.fill_len,
            ));
        }

        if layout.outline_len > 0 {
            let role = match self.fillability {
                Fillability::Fillable => ColorRole::OutlineSimple,
                Fillability::Complex => ColorRole::OutlineComplex,
            };
            commands.push(DrawCommand::new(
                role,
                config,
                Primitive::Points,
                layout.outline_offset,
                layout.outline_len,
            ));
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_update_without_changes_is_noop_after_first() {
        let mut state = RasterState::default();
        let first = state.update();
        assert!(!first.retraced);
        assert_eq!(first.view, ViewUpdate::Adopted);
        assert_eq!(state.update(), Recompute::NOTHING);
    }

    #[test]
    fn test_topology_pass_fills_simple_polygon() {
        let mut state = RasterState::default();
        state.submit_geometry(&square());
        let result = state.update();

        assert!(result.retraced);
        assert!(state.is_fillable());
        assert_eq!(state.outline().len(), 40);
        assert!(!state.fill().is_empty());
        assert_eq!(
            state.vertices().len(),
            state.outline().len() + state.fill().len()
        );
    }

    #[test]
    fn test_capacity_hint_is_capped() {
        let config = RasterConfig {
            max_reserve_pixels: 64,
            ..Default::default()
        };
        let mut state = RasterState::new(&config);
        state.submit_geometry(&[Vec2::new(-500.0, -500.0), Vec2::new(500.0, 500.0)]);
        let (outline, fill) = state.capacity_hint();
        assert_eq!(outline, 64);
        assert_eq!(fill, 64);
    }

    #[test]
    fn test_draw_commands_for_complex_polygon() {
        let config = RasterConfig::default();
        let mut state = RasterState::default();
        state.submit_geometry(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        ]);
        state.update();

        let commands = state.draw_commands(&config);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].role, ColorRole::OutlineComplex);
        assert_eq!(commands[0].color, config.complex_outline_color);
    }
}
