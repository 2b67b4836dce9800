//! Editor Module
//!
//! The editing side of the application: the polygon store, the model it
//! belongs to, the session that owns model + renderer, and scene files for
//! scripted sessions.

pub mod model;
pub mod polygon;
pub mod scene;
pub mod session;

pub use model::{EditableModel, TransformOp};
pub use polygon::{EditError, Polygon};
pub use scene::{SceneError, SceneFile, render_frame};
pub use session::{EditorSession, PointerButton, PointerEdit};
