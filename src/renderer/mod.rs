//! Renderer - Draw boundary and the tree's paint traversal.
//!
//! The core never rasterizes. It walks the tree and calls [`DrawSurface`]
//! methods with absolute device-pixel coordinates; a backend does the rest.
//! [`RecordingSurface`] is the in-crate implementation used by tests.

mod draw;
mod recording;
mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawSurface, ImageFit, ImageId};
