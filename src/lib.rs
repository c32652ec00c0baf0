//! # finch-ui
//!
//! Retained-mode UI core for Rust.
//!
//! A tree of elements with box-model geometry, single-axis flex layout,
//! pointer hit testing and routing, and typed reactive state cells. Drawing
//! goes through a [`DrawSurface`] trait; the backend is the host's business.
//!
//! ## Architecture
//!
//! Elements live in a generational arena owned by [`UiTree`] and refer to each
//! other by [`ElementId`] handle. The host drives one tick per frame:
//!
//! ```text
//! update widgets → HandleMouseDown/Up/Move → draw(surface)
//! ```
//!
//! Absolute geometry is never cached. Every layout pass, draw, and hit test
//! recomputes it, so a mutation made by a click handler is visible to the
//! draw that follows in the same tick.
//!
//! ## Modules
//!
//! - [`types`] - Geometry, box model, color, interaction flags
//! - [`config`] - Viewport size and defaults
//! - [`engine`] - Element arena, tree manager, selectors, inspector
//! - [`layout`] - Geometry resolver and flex placement
//! - [`state`] - Pointer routing, host input, reactive state cells
//! - [`renderer`] - Draw surface boundary and draw traversal
//! - [`primitives`] - Widget trait, Container, Label
//! - [`pipeline`] - Per-tick frame driver
//!
//! ## Example
//!
//! ```
//! use finch_ui::{Container, FlexLayout, Label, Rect, UiTree};
//!
//! let mut tree = UiTree::default();
//! let toolbar = tree.create_flex("toolbar", Container::new(), FlexLayout::row().with_spacing(10));
//! tree.add_child(tree.root(), toolbar).unwrap();
//! tree.set_bounds(toolbar, Rect::new(0, 0, 600, 40));
//!
//! let open = tree.create("open", Label::new("Open"));
//! let save = tree.create("save", Label::new("Save"));
//! tree.set_bounds(open, Rect::new(0, 0, 100, 40));
//! tree.set_bounds(save, Rect::new(0, 0, 120, 40));
//! tree.add_child(toolbar, open).unwrap();
//! tree.add_child(toolbar, save).unwrap();
//!
//! assert_eq!(tree.computed_bounds(save).map(|b| b.x), Some(110));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::UiConfig;
pub use engine::{ElementId, Selector, UiTree};
pub use error::TreeError;
pub use layout::{arrange, FlexLayout, LayoutPolicy};
pub use pipeline::{FrameDriver, FrameReport};
pub use primitives::{Container, Label, PaintContext, Widget};
pub use renderer::{DrawCommand, DrawSurface, ImageFit, ImageId, RecordingSurface};
pub use state::{
    EventResponse, InputEvent, MouseButton, MouseHandlers, PointerAction, PointerEvent,
    PointerPoller, PointerSnapshot, StateCell,
};
