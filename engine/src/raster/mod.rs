//! Software Rasterization Core
//!
//! Reproduces on the CPU what a GPU point pipeline would draw for an
//! editable polygon:
//!
//! - [`line_tracer`] - midpoint line walk, also recording scanline crossings
//! - [`validator`] - simple / self-intersecting classification
//! - [`scanline`] - even-odd interior fill from the crossing table
//! - [`state`] - dirty-flag orchestration and buffer layout
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use shapely_engine::raster::RasterState;
//!
//! let mut state = RasterState::default();
//! state.submit_geometry(&[
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(10.0, 0.0),
//!     Vec2::new(10.0, 5.0),
//!     Vec2::new(0.0, 5.0),
//! ]);
//! state.update();
//!
//! assert!(state.is_fillable());
//! assert_eq!(state.layout().outline_offset, 0);
//! ```

pub mod buffer;
pub mod crossing;
pub mod line_tracer;
pub mod scanline;
pub mod state;
pub mod validator;

pub use buffer::{BufferLayout, PixelBuffer, PixelVertex};
pub use crossing::CrossingTable;
pub use line_tracer::{MidpointWalk, PIXEL_LIMIT, snap_to_pixel, trace, trace_polygon};
pub use scanline::{fill, fill_into};
pub use state::{Fillability, RasterState, Recompute};
pub use validator::is_simple;
