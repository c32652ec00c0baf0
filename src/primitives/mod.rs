//! Primitives - The widget capability and the minimal widgets the core ships.
//!
//! A widget is the element-specific part of a node: how it paints and what it
//! does on the per-tick update pass. Geometry, children, and pointer routing
//! are owned by the tree, so a widget never reimplements them.
//!
//! - [`Container`] - Optional background fill, the default for layout nodes
//! - [`Label`] - Text drawn at the element origin (no measurement)

mod container;
mod label;

pub use container::Container;
pub use label::{Label, DEFAULT_FONT_SIZE};

use std::any::Any;

use crate::renderer::DrawSurface;
use crate::types::{Interaction, Rect};

/// Everything a widget needs to paint itself.
pub struct PaintContext<'a> {
    /// Absolute bounds from the geometry resolver.
    pub bounds: Rect,
    /// Current pointer state of the element.
    pub interaction: Interaction,
    pub surface: &'a mut dyn DrawSurface,
}

/// Downcast support for `dyn Widget`.
///
/// Implemented for every `'static` type; widgets never implement it by hand.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The drawable and updatable part of an element.
pub trait Widget: AsAny {
    /// Short type name, used by tag selectors and the inspector.
    fn kind(&self) -> &'static str;

    /// Paint this widget. Children are painted afterwards by the tree.
    fn paint(&self, _ctx: &mut PaintContext<'_>) {}

    /// Per-tick state update, run before input and drawing.
    fn update(&mut self) {}
}
