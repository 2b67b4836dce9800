//! Shapely Engine Library
//!
//! Interactive 2D polygon editing with a software rasterization core that
//! reproduces, on the CPU, what a GPU point/line/triangle pipeline would draw.
//!
//! # Modules
//!
//! - [`raster`] - Midpoint line tracer, simplicity validator, scanline filler
//!   and the dirty-flag state machine tying them together
//! - [`view`] - Model transform, camera and orthographic projection
//! - [`renderer`] - Software / hardware strategies, draw lists, CPU surface
//! - [`editor`] - Polygon store, editing session and scene files
//! - [`config`] - Colors and tuning
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use shapely_engine::config::RasterConfig;
//! use shapely_engine::editor::{EditableModel, EditorSession, PointerButton};
//! use shapely_engine::view::Viewport;
//!
//! let mut session = EditorSession::new(
//!     EditableModel::new("scratch"),
//!     RasterConfig::default(),
//!     Viewport::new(800.0, 600.0),
//! );
//!
//! // Click three corners of a triangle
//! session.press(Vec2::new(100.0, 100.0), PointerButton::Left);
//! session.release();
//! session.press(Vec2::new(700.0, 100.0), PointerButton::Left);
//! session.release();
//! session.press(Vec2::new(400.0, 500.0), PointerButton::Left);
//! session.release();
//!
//! let update = session.frame();
//! assert!(update.retraced);
//! assert!(session.renderer().is_fillable());
//! ```

pub mod config;
pub mod editor;
pub mod raster;
pub mod renderer;
pub mod view;

// Re-export the types most callers need at crate level
pub use config::RasterConfig;
pub use editor::{EditableModel, EditorSession, Polygon};
pub use raster::{Fillability, RasterState};
pub use renderer::{RenderMode, Renderer};
pub use view::{ViewInputs, ViewTransform, Viewport};
