//! Editor Session
//!
//! The single owner of one editable model and its renderer. Every edit
//! (pointer, transform control, resize, renderer switch) goes through
//! `&mut EditorSession`, which forwards geometry or view changes to the
//! renderer; [`EditorSession::frame`] then runs the pending recompute before
//! the surface reads the buffers.

use glam::Vec2;

use super::model::{EditableModel, TransformOp};
use super::polygon::EditError;
use crate::config::RasterConfig;
use crate::raster::Recompute;
use crate::renderer::{DrawCommand, RenderMode, Renderer};
use crate::view::Viewport;

/// Pointer button driving an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Select an existing vertex, or append a new one.
    Left,
    /// Remove the vertex under the pointer.
    Right,
}

/// What a pointer press did to the polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEdit {
    Selected(usize),
    Appended(usize),
    Removed(usize),
    Nothing,
}

pub struct EditorSession {
    model: EditableModel,
    renderer: Renderer,
    config: RasterConfig,
    viewport: Viewport,
    selected: Option<usize>,
}

impl EditorSession {
    pub fn new(model: EditableModel, config: RasterConfig, viewport: Viewport) -> Self {
        let renderer = Renderer::new(config.render_mode, &config);
        let mut session = Self {
            model,
            renderer,
            config,
            viewport,
            selected: None,
        };
        session.resubmit_all();
        session.renderer.update();
        session
    }

    fn resubmit_all(&mut self) {
        self.renderer.submit_geometry(self.model.polygon.vertices());
        self.submit_view();
    }

    fn submit_geometry(&mut self) {
        self.renderer.submit_geometry(self.model.polygon.vertices());
    }

    fn submit_view(&mut self) {
        self.renderer.submit_view(self.model.view_inputs(self.viewport));
    }

    // -- Accessors --

    pub fn model(&self) -> &EditableModel {
        &self.model
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        self.renderer.draw_commands(&self.config)
    }

    /// Window pixel position to world coordinates through the current view.
    pub fn pointer_to_world(&self, pixel: Vec2) -> Vec2 {
        self.renderer.unproject(self.viewport.to_ndc(pixel))
    }

    /// World coordinates to window pixel position through the current view.
    pub fn world_to_pointer(&self, world: Vec2) -> Vec2 {
        self.viewport.from_ndc(self.renderer.project(world))
    }

    // -- Frame --

    /// Run pending recomputation ahead of drawing.
    pub fn frame(&mut self) -> Recompute {
        self.renderer.update()
    }

    // -- Pointer editing --

    pub fn press(&mut self, pixel: Vec2, button: PointerButton) -> PointerEdit {
        let world = self.pointer_to_world(pixel);
        let picked = self.model.polygon.pick(world, self.config.pick_radius);

        let edit = match (button, picked) {
            (PointerButton::Left, Some(index)) => {
                self.selected = Some(index);
                PointerEdit::Selected(index)
            }
            (PointerButton::Left, None) => {
                let index = self.model.polygon.push(world);
                self.selected = Some(index);
                self.submit_geometry();
                PointerEdit::Appended(index)
            }
            (PointerButton::Right, Some(index)) => {
                if self.model.polygon.remove(index).is_ok() {
                    self.shift_selection(index);
                    self.submit_geometry();
                }
                PointerEdit::Removed(index)
            }
            (PointerButton::Right, None) => PointerEdit::Nothing,
        };

        log::debug!("[EditorSession] {:?} on '{}' at {:?}", edit, self.model.name, world);
        edit
    }

    /// Move the selected vertex under the pointer. Returns whether a vertex
    /// moved.
    pub fn drag(&mut self, pixel: Vec2) -> Result<bool, EditError> {
        let Some(index) = self.selected else {
            return Ok(false);
        };
        let world = self.pointer_to_world(pixel);
        self.model.polygon.set(index, world)?;
        self.submit_geometry();
        Ok(true)
    }

    pub fn release(&mut self) {
        if let Some(index) = self.selected.take() {
            log::debug!(
                "[EditorSession] Vertex #{} of '{}' dropped at {:?}",
                index,
                self.model.name,
                self.model.polygon.vertices().get(index)
            );
        }
    }

    // -- Direct edits --

    pub fn append_vertex(&mut self, world: Vec2) -> usize {
        let index = self.model.polygon.push(world);
        self.submit_geometry();
        index
    }

    pub fn move_vertex(&mut self, index: usize, world: Vec2) -> Result<(), EditError> {
        self.model.polygon.set(index, world)?;
        self.submit_geometry();
        Ok(())
    }

    pub fn remove_vertex(&mut self, index: usize) -> Result<Vec2, EditError> {
        let removed = self.model.polygon.remove(index)?;
        self.shift_selection(index);
        self.submit_geometry();
        Ok(removed)
    }

    /// Keep the selection on the same vertex after `removed` left the polygon.
    fn shift_selection(&mut self, removed: usize) {
        self.selected = match self.selected {
            Some(selected) if selected == removed => None,
            Some(selected) if selected > removed => Some(selected - 1),
            other => other,
        };
    }

    // -- View edits --

    pub fn apply_transform(&mut self, op: TransformOp) {
        op.apply(&mut self.model.transform);
        self.submit_view();
    }

    pub fn set_camera(&mut self, camera: Vec2) {
        self.model.camera = camera;
        self.submit_view();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.submit_view();
    }

    /// Switch renderer strategy, rebuilding its resources from the model.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if self.renderer.mode() == mode {
            return;
        }
        self.renderer = Renderer::new(mode, &self.config);
        self.resubmit_all();
        self.renderer.update();
        log::info!("[EditorSession] Switched to {} rasterization", mode);
    }

    /// Replace the edited model (e.g. a different entry picked from a list).
    pub fn set_model(&mut self, model: EditableModel) {
        log::debug!("[EditorSession] Switching from '{}' to '{}'", self.model.name, model.name);
        self.model = model;
        self.selected = None;
        self.resubmit_all();
    }
}
