//! View Module
//!
//! World-to-screen mapping for the editable polygon: the user model
//! transform, the camera and the orthographic projection, plus the pointer
//! mapping used to turn window clicks into polygon coordinates.

pub mod transform;
pub mod view_state;
pub mod view_transform;
pub mod viewport;

pub use transform::{ModelTransform, affine_to_mat4};
pub use view_state::{ViewState, ViewUpdate};
pub use view_transform::{ViewInputs, ViewTransform};
pub use viewport::{Viewport, remap};
