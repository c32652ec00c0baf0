//! Element - One node of the retained tree.
//!
//! An element is plain data: geometry, box model, flags, links, and the
//! widget that paints it. Behavior that depends on the tree (layout, hit
//! testing, drawing) lives on [`UiTree`](super::UiTree), which is the only
//! thing that mutates elements.

use super::registry::ElementId;
use crate::layout::LayoutPolicy;
use crate::primitives::Widget;
use crate::state::MouseHandlers;
use crate::types::{BoxModel, Interaction, PositionType, Rect};

pub(crate) struct Element {
    /// String id. Not required to be unique.
    pub id: String,

    /// Local bounds. `x`/`y` are an offset into the parent's content box
    /// unless `position` is `Fixed`.
    pub bounds: Rect,

    pub visible: bool,
    pub box_model: BoxModel,
    pub position: PositionType,
    pub interaction: Interaction,
    pub classes: Vec<String>,

    /// Non-owning back-reference. `None` for the root and detached elements.
    pub parent: Option<ElementId>,

    /// Owned children. Order is z-order: later is on top and drawn last.
    pub children: Vec<ElementId>,

    pub layout: LayoutPolicy,
    pub handlers: MouseHandlers,
    pub widget: Box<dyn Widget>,
}

impl Element {
    pub fn new(id: String, widget: Box<dyn Widget>) -> Self {
        Self {
            id,
            bounds: Rect::default(),
            visible: true,
            box_model: BoxModel::default(),
            position: PositionType::Relative,
            interaction: Interaction::NONE,
            classes: Vec::new(),
            parent: None,
            children: Vec::new(),
            layout: LayoutPolicy::Manual,
            handlers: MouseHandlers::default(),
            widget,
        }
    }
}
