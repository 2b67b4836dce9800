//! Scene Files (.json)
//!
//! A scripted editing session: a model, the viewport it is shown in, the
//! transform control changes to apply, and optional renderer configuration.
//! Used by the `shapely_render` binary to produce PNG frames headlessly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::{EditableModel, TransformOp};
use super::session::EditorSession;
use crate::config::RasterConfig;
use crate::renderer::{PixelSurface, SurfaceError};
use crate::view::Viewport;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    pub model: EditableModel,
    pub viewport: Viewport,
    /// Applied in order after the model's own transform.
    pub transform_ops: Vec<TransformOp>,
    pub config: RasterConfig,
}

impl SceneFile {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build a session for this scene with all transform ops applied.
    pub fn into_session(self) -> EditorSession {
        let mut session = EditorSession::new(self.model, self.config, self.viewport);
        for op in self.transform_ops {
            session.apply_transform(op);
        }
        session.frame();
        session
    }
}

/// Draw one frame of `session` onto a fresh surface.
pub fn render_frame(session: &mut EditorSession) -> Result<PixelSurface, SurfaceError> {
    session.frame();
    let mut surface = PixelSurface::new(session.viewport())?;
    surface.clear(session.config().background_color);
    surface.draw(session.renderer(), &session.draw_commands());
    Ok(surface)
}

/// Errors that can occur while loading or rendering a scene.
#[derive(Debug)]
pub enum SceneError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// Surface creation or PNG output failed.
    SurfaceError(SurfaceError),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {e}"),
            SceneError::JsonError(e) => write!(f, "JSON error: {e}"),
            SceneError::SurfaceError(e) => write!(f, "surface error: {e}"),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::IoError(e)
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        SceneError::JsonError(e)
    }
}

impl From<SurfaceError> for SceneError {
    fn from(e: SurfaceError) -> Self {
        SceneError::SurfaceError(e)
    }
}
