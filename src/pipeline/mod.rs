//! Pipeline - The per-tick frame loop.
//!
//! The host drives ticks; each tick runs update, input, then draw.
//!
//! ```text
//! host frame ─► update widgets ─► dispatch pointer transitions ─► draw(surface)
//! ```
//!
//! Geometry is recomputed on demand, so there is no invalidation stage
//! between input and draw.

mod frame;

pub use frame::{FrameDriver, FrameReport};
