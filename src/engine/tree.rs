//! UiTree - The single tree manager.
//!
//! All structural and property mutation goes through here. After each
//! mutation the tree consults the affected containers' [`LayoutPolicy`], so a
//! flex container is already laid out when the caller's next draw or hit test
//! runs. Nothing geometric is cached: absolute bounds are recomputed on demand
//! by [`UiTree::computed_bounds`].

use tracing::{debug, warn};

use super::element::Element;
use super::registry::{ElementId, Registry};
use crate::config::UiConfig;
use crate::error::TreeError;
use crate::layout::{FlexLayout, LayoutPolicy};
use crate::primitives::{AsAny, Container, Widget};
use crate::state::PointerState;
use crate::types::{BoxModel, Interaction, PositionType, Rect};

/// A retained-mode element tree.
///
/// Created with a root element sized to the configured viewport. Every other
/// element is created detached with [`create`](Self::create) and attached
/// with [`add_child`](Self::add_child).
pub struct UiTree {
    pub(crate) nodes: Registry<Element>,
    pub(crate) root: ElementId,
    pub(crate) config: UiConfig,
    pub(crate) pointer: PointerState,
}

impl Default for UiTree {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl UiTree {
    /// Create a tree whose root is a transparent [`Container`] covering the
    /// viewport.
    pub fn new(config: UiConfig) -> Self {
        let mut nodes = Registry::new();
        let mut root = Element::new(config.root_id.clone(), Box::new(Container::new()));
        root.bounds = Rect::from_size(config.viewport);
        let root = nodes.allocate(root);

        Self {
            nodes,
            root,
            config,
            pointer: PointerState::default(),
        }
    }

    /// The root element. It lives as long as the tree and has no parent.
    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Number of live elements, attached or detached.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// False once `id` has been destroyed, even if its slot was reused.
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains(id)
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Create a detached element with default geometry.
    pub fn create(&mut self, id: impl Into<String>, widget: impl Widget + 'static) -> ElementId {
        let element = Element::new(id.into(), Box::new(widget));
        self.nodes.allocate(element)
    }

    /// Create a detached flex container.
    pub fn create_flex(
        &mut self,
        id: impl Into<String>,
        widget: impl Widget + 'static,
        layout: FlexLayout,
    ) -> ElementId {
        let mut element = Element::new(id.into(), Box::new(widget));
        element.layout = LayoutPolicy::Flex(layout);
        self.nodes.allocate(element)
    }

    /// Flex layout with this tree's configured default spacing.
    pub fn default_flex(&self) -> FlexLayout {
        FlexLayout::default().with_spacing(self.config.default_spacing)
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Append `child` to `parent`'s children (topmost z-order).
    ///
    /// A child that already has a parent is moved. Fails only when the request
    /// would break the tree: stale handles, attaching the root, or making an
    /// element its own ancestor.
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), TreeError> {
        if !self.nodes.contains(parent) {
            return Err(TreeError::StaleElement(parent));
        }
        if !self.nodes.contains(child) {
            return Err(TreeError::StaleElement(child));
        }
        if child == self.root {
            warn!(%parent, "refused to attach the root element");
            return Err(TreeError::RootHasNoParent);
        }
        if child == parent || self.is_ancestor(child, parent) {
            warn!(%parent, %child, "refused add_child that would create a cycle");
            return Err(TreeError::WouldCycle { parent, child });
        }

        let previous = self.nodes.get(child).and_then(|node| node.parent);
        if let Some(previous) = previous {
            if let Some(node) = self.nodes.get_mut(previous) {
                node.children.retain(|&c| c != child);
            }
        }

        // Parent link first, then insertion
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }

        debug!(
            child = %self.id_of(child).unwrap_or_default(),
            parent = %self.id_of(parent).unwrap_or_default(),
            "added child"
        );

        if let Some(previous) = previous.filter(|&p| p != parent) {
            self.relayout(previous);
        }
        self.relayout(parent);
        Ok(())
    }

    /// Remove `child` from `parent` and destroy its subtree.
    ///
    /// No-op if `child` is not one of `parent`'s children.
    pub fn remove_child(&mut self, parent: ElementId, child: ElementId) {
        let Some(node) = self.nodes.get_mut(parent) else {
            return;
        };
        let Some(position) = node.children.iter().position(|&c| c == child) else {
            return;
        };
        node.children.remove(position);

        let released = self.release_subtree(child);
        debug!(%parent, %child, released, "removed child");

        self.relayout(parent);
    }

    /// Remove and destroy every child of `parent`.
    pub fn remove_all_children(&mut self, parent: ElementId) {
        let Some(node) = self.nodes.get_mut(parent) else {
            return;
        };
        let children = std::mem::take(&mut node.children);

        let released: usize = children.into_iter().map(|c| self.release_subtree(c)).sum();
        debug!(%parent, released, "removed all children");

        self.relayout(parent);
    }

    /// Destroy an element and its subtree, detaching it first if attached.
    ///
    /// The root cannot be destroyed.
    pub fn destroy(&mut self, id: ElementId) {
        if id == self.root {
            warn!("refused to destroy the root element");
            return;
        }
        match self.parent(id) {
            Some(parent) => self.remove_child(parent, id),
            None => {
                self.release_subtree(id);
            }
        }
    }

    /// Release `id` and all descendants from the registry. Returns the count.
    fn release_subtree(&mut self, id: ElementId) -> usize {
        let mut stack = vec![id];
        let mut released = 0;

        while let Some(current) = stack.pop() {
            if let Some(element) = self.nodes.release(current) {
                stack.extend(element.children);
                self.pointer.forget(current);
                released += 1;
            }
        }

        released
    }

    /// Children in z-order. Empty for stale handles.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id)?.parent
    }

    /// Parent, grandparent, ... up to the root or a detached top.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// True if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// True if the element is reachable from the root.
    pub fn is_attached(&self, id: ElementId) -> bool {
        self.nodes.contains(id) && (id == self.root || self.is_ancestor(self.root, id))
    }

    /// Attached elements in depth-first pre-order, root first.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut order = Vec::new();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            order.push(current);
            stack.extend(node.children.iter().rev());
        }

        order
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// String id of an element.
    pub fn id_of(&self, id: ElementId) -> Option<String> {
        self.nodes.get(id).map(|node| node.id.clone())
    }

    pub fn set_element_id(&mut self, id: ElementId, element_id: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.id = element_id.into();
        }
    }

    /// Local bounds as last set by the caller or by a layout pass.
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.nodes.get(id).map(|node| node.bounds)
    }

    /// Set local bounds.
    ///
    /// A flex parent re-places the element right away, so only the size of
    /// `bounds` survives for flex children.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.bounds = bounds;
        let parent = node.parent;

        if let Some(parent) = parent {
            self.relayout(parent);
        }
        self.relayout(id);
    }

    pub fn box_model(&self, id: ElementId) -> Option<BoxModel> {
        self.nodes.get(id).map(|node| node.box_model)
    }

    pub fn set_box_model(&mut self, id: ElementId, box_model: BoxModel) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.box_model = box_model;
        self.relayout(id);
    }

    pub fn position_type(&self, id: ElementId) -> Option<PositionType> {
        self.nodes.get(id).map(|node| node.position)
    }

    pub fn set_position_type(&mut self, id: ElementId, position: PositionType) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.position = position;
        let parent = node.parent;

        if let Some(parent) = parent {
            self.relayout(parent);
        }
    }

    /// Hidden elements are not drawn or hit, and neither are their subtrees.
    pub fn is_visible(&self, id: ElementId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.visible)
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.visible = visible;
        }
    }

    /// Disabled elements are skipped by hit testing, subtree included.
    pub fn set_enabled(&mut self, id: ElementId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.interaction.set(Interaction::DISABLED, !enabled);
        }
    }

    pub fn is_enabled(&self, id: ElementId) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| !node.interaction.contains(Interaction::DISABLED))
    }

    pub fn interaction(&self, id: ElementId) -> Interaction {
        self.nodes
            .get(id)
            .map(|node| node.interaction)
            .unwrap_or_default()
    }

    pub fn is_hovered(&self, id: ElementId) -> bool {
        self.interaction(id).contains(Interaction::HOVERED)
    }

    pub fn is_pressed(&self, id: ElementId) -> bool {
        self.interaction(id).contains(Interaction::PRESSED)
    }

    pub(crate) fn set_flag(&mut self, id: ElementId, flag: Interaction, on: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.interaction.set(flag, on);
        }
    }

    /// Typed access to an element's widget.
    pub fn widget<W: Widget + 'static>(&self, id: ElementId) -> Option<&W> {
        let node = self.nodes.get(id)?;
        AsAny::as_any(&*node.widget).downcast_ref::<W>()
    }

    pub fn widget_mut<W: Widget + 'static>(&mut self, id: ElementId) -> Option<&mut W> {
        let node = self.nodes.get_mut(id)?;
        AsAny::as_any_mut(&mut *node.widget).downcast_mut::<W>()
    }

    /// Widget kind name ("container", "label", ...).
    pub fn kind(&self, id: ElementId) -> Option<&'static str> {
        self.nodes.get(id).map(|node| node.widget.kind())
    }

    // =========================================================================
    // Layout policy
    // =========================================================================

    pub fn layout_policy(&self, id: ElementId) -> Option<LayoutPolicy> {
        self.nodes.get(id).map(|node| node.layout)
    }

    /// Make `id` a flex container (or reconfigure it) and lay it out.
    pub fn set_flex_layout(&mut self, id: ElementId, layout: FlexLayout) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.layout = LayoutPolicy::Flex(layout);
        self.relayout(id);
    }

    /// Modify an existing flex layout in place. No-op for manual elements.
    pub fn update_flex_layout(&mut self, id: ElementId, modify: impl FnOnce(&mut FlexLayout)) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let LayoutPolicy::Flex(layout) = &mut node.layout else {
            return;
        };
        modify(layout);
        self.relayout(id);
    }

    /// Set the gap between flex children.
    pub fn set_spacing(&mut self, id: ElementId, spacing: i32) {
        self.update_flex_layout(id, |layout| layout.spacing = spacing);
    }

    /// Stop auto-placing children. Their current bounds are kept.
    pub fn clear_layout(&mut self, id: ElementId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.layout = LayoutPolicy::Manual;
        }
    }
}
