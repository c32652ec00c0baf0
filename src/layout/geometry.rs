//! Geometry resolver.
//!
//! Maps an element's local bounds, its box model, and its ancestor chain to an
//! absolute rectangle. Recomputed on every call, never cached, so layout,
//! draw, and hit testing within one tick all see the same answer and see any
//! mutation made earlier in that tick.
//!
//! # Algorithm
//!
//! 1. Start from the element's local bounds.
//! 2. Unless the element is `Fixed`, resolve the parent's computed bounds and
//!    shrink them by the parent's padding (the parent's content box).
//! 3. `Relative` / `Absolute`: offset the local x/y by the content box origin.
//! 4. `Fixed`: local bounds are already viewport-absolute.
//! 5. Add the element's own margin to x/y. Width and height are untouched.

use crate::engine::{Element, ElementId, Registry, UiTree};
use crate::types::{PositionType, Rect};

/// Absolute bounds of `id`, or `None` for a stale handle.
pub(crate) fn computed_bounds(nodes: &Registry<Element>, id: ElementId) -> Option<Rect> {
    let node = nodes.get(id)?;
    let mut bounds = node.bounds;

    let parent_content = match node.position {
        PositionType::Fixed => None,
        PositionType::Relative | PositionType::Absolute => {
            node.parent.and_then(|parent| content_box(nodes, parent))
        }
    };

    if let Some(content) = parent_content {
        bounds.x = content.x + node.bounds.x;
        bounds.y = content.y + node.bounds.y;
    }

    bounds.x += node.box_model.margin.left;
    bounds.y += node.box_model.margin.top;

    Some(bounds)
}

/// Computed bounds shrunk by the element's padding.
pub(crate) fn content_box(nodes: &Registry<Element>, id: ElementId) -> Option<Rect> {
    let padding = nodes.get(id)?.box_model.padding;
    Some(computed_bounds(nodes, id)?.shrink(padding))
}

impl UiTree {
    /// Absolute screen-space bounds of an element.
    ///
    /// Pure: calling it twice with no mutation in between gives identical
    /// results. `None` only for stale handles.
    pub fn computed_bounds(&self, id: ElementId) -> Option<Rect> {
        computed_bounds(&self.nodes, id)
    }

    /// The absolute rectangle children are placed in.
    pub fn content_box(&self, id: ElementId) -> Option<Rect> {
        content_box(&self.nodes, id)
    }
}
