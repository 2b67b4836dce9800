//! View State Tracking
//!
//! Holds the latest view inputs, the transform currently in effect and a
//! dirty flag. Recomposition either adopts the new transform or, when the
//! candidate is singular, warns and keeps the previous one.

use glam::Vec2;

use super::view_transform::{ViewInputs, ViewTransform};

/// Outcome of a view recomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Nothing was pending.
    Unchanged,
    /// The new transform is now in effect.
    Adopted,
    /// The candidate was not invertible; the previous transform was kept.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    inputs: ViewInputs,
    current: ViewTransform,
    dirty: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ViewInputs::default())
    }
}

impl ViewState {
    /// Start from `inputs`; the transform is composed on the first
    /// [`recompute`](Self::recompute).
    pub fn new(inputs: ViewInputs) -> Self {
        Self {
            inputs,
            current: ViewTransform::default(),
            dirty: true,
        }
    }

    /// Replace the view inputs and mark the view dirty.
    pub fn submit(&mut self, inputs: ViewInputs) {
        self.inputs = inputs;
        self.dirty = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn inputs(&self) -> &ViewInputs {
        &self.inputs
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.current
    }

    /// Compose the pending transform if the view is dirty.
    pub fn recompute(&mut self) -> ViewUpdate {
        if !self.dirty {
            return ViewUpdate::Unchanged;
        }
        self.dirty = false;

        match ViewTransform::compose(&self.inputs) {
            Some(view) => {
                self.current = view;
                ViewUpdate::Adopted
            }
            None => {
                log::warn!(
                    "[ViewState] Non-invertible view transform (model {:?}, camera {:?}, viewport {:?}), keeping previous",
                    self.inputs.model,
                    self.inputs.camera,
                    self.inputs.viewport
                );
                ViewUpdate::Rejected
            }
        }
    }

    pub fn project(&self, world: Vec2) -> Vec2 {
        self.current.project(world)
    }

    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        self.current.unproject(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_recompute_adopts() {
        let mut state = ViewState::default();
        assert!(state.is_dirty());
        assert_eq!(state.recompute(), ViewUpdate::Adopted);
        assert!(!state.is_dirty());
        assert_eq!(state.recompute(), ViewUpdate::Unchanged);
    }

    #[test]
    fn test_singular_candidate_keeps_previous() {
        let mut state = ViewState::default();
        state.recompute();
        let before = *state.transform();

        let mut inputs = *state.inputs();
        inputs.model.set_scale_y(0.0);
        state.submit(inputs);

        assert_eq!(state.recompute(), ViewUpdate::Rejected);
        assert_eq!(*state.transform(), before);
    }
}
