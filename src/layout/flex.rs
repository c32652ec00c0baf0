//! Flex layout engine.
//!
//! Single-level, single-pass placement of a container's direct children along
//! one main axis. Children keep their current main-axis size; only the cross
//! axis is affected by `align_items` (and only `Stretch` changes a size).
//! There is no measure pass, no wrapping and no grow/shrink. A nested
//! container is laid out again only when this pass changes its size.
//!
//! # Coordinates
//!
//! Placement is written into the children's local bounds, which are offsets
//! into the container's content box. The cursor therefore starts at 0, the
//! content box origin. `Fixed` children are the exception: their bounds are
//! viewport-absolute, so the content box origin is added for them.

use tracing::trace;

use crate::engine::{ElementId, UiTree};
use crate::types::{Alignment, FlexDirection, PositionType, Rect, Size};
use crate::config::DEFAULT_SPACING;

/// Flex container properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexLayout {
    pub direction: FlexDirection,
    pub align_items: Alignment,
    /// Stored and reported, never consulted by placement.
    pub justify_content: Alignment,
    /// Gap between consecutive children on the main axis.
    pub spacing: i32,
}

impl Default for FlexLayout {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            align_items: Alignment::Start,
            justify_content: Alignment::Start,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl FlexLayout {
    pub fn row() -> Self {
        Self::default()
    }

    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Self::default()
        }
    }

    pub fn with_align_items(mut self, align_items: Alignment) -> Self {
        self.align_items = align_items;
        self
    }

    pub fn with_justify_content(mut self, justify_content: Alignment) -> Self {
        self.justify_content = justify_content;
        self
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }
}

/// How an element places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LayoutPolicy {
    /// Children keep whatever bounds they are given.
    #[default]
    Manual,
    /// Children are re-placed after every structural or layout mutation.
    Flex(FlexLayout),
}

/// Resolve one child's cross-axis offset and extent.
fn cross_axis(align: Alignment, available: i32, extent: i32) -> (i32, i32) {
    match align {
        Alignment::Start => (0, extent),
        Alignment::Center => ((available - extent) / 2, extent),
        Alignment::End => (available - extent, extent),
        Alignment::Stretch => (0, available),
    }
}

/// Place children of the given sizes inside a content box of size `content`.
///
/// Returned rects are relative to the content box origin, one per input size,
/// in the same order.
pub fn arrange(content: Size, layout: &FlexLayout, children: &[Size]) -> Vec<Rect> {
    let mut placed = Vec::with_capacity(children.len());
    let mut cursor = 0;

    for child in children {
        let rect = match layout.direction {
            FlexDirection::Row => {
                let (y, height) = cross_axis(layout.align_items, content.height, child.height);
                let rect = Rect::new(cursor, y, child.width, height);
                cursor += child.width + layout.spacing;
                rect
            }
            FlexDirection::Column => {
                let (x, width) = cross_axis(layout.align_items, content.width, child.width);
                let rect = Rect::new(x, cursor, width, child.height);
                cursor += child.height + layout.spacing;
                rect
            }
        };
        placed.push(rect);
    }

    placed
}

impl UiTree {
    /// Run the container's layout policy. No-op for manual elements and for
    /// containers with no children.
    pub(crate) fn relayout(&mut self, container: ElementId) {
        let Some(node) = self.nodes.get(container) else {
            return;
        };
        let LayoutPolicy::Flex(layout) = node.layout else {
            return;
        };
        if node.children.is_empty() {
            return;
        }
        let Some(content) = self.content_box(container) else {
            return;
        };

        let children: Vec<(ElementId, Size, PositionType)> = node
            .children
            .iter()
            .filter_map(|&child| {
                let child_node = self.nodes.get(child)?;
                Some((child, child_node.bounds.size(), child_node.position))
            })
            .collect();

        let sizes: Vec<Size> = children.iter().map(|&(_, size, _)| size).collect();
        let placed = arrange(content.size(), &layout, &sizes);

        let mut resized = Vec::new();
        for (&(child, size, position), rect) in children.iter().zip(placed) {
            let Some(child_node) = self.nodes.get_mut(child) else {
                continue;
            };
            child_node.bounds = match position {
                PositionType::Fixed => rect.offset(content.x, content.y),
                PositionType::Relative | PositionType::Absolute => rect,
            };
            if rect.size() != size {
                resized.push(child);
            }
        }

        trace!(%container, children = children.len(), resized = resized.len(), direction = ?layout.direction, "flex layout pass");

        // Stretch changed these content boxes
        for child in resized {
            self.relayout(child);
        }
    }
}
