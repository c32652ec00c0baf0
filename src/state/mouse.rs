//! Mouse Module - Pointer event routing
//!
//! Hit testing and dispatch of pointer events through the element tree.
//! All pointer state (position, pressed element, hovered path) is held by the
//! [`UiTree`] itself, so two trees never share it.
//!
//! # API
//!
//! - `hit_test(x, y)` / `hit_path(x, y)` - Topmost element at a point
//! - `dispatch(event)` - Route a pointer event
//! - `handle_mouse_down/up/move(x, y)` - Left-button shorthands
//! - `on_click(id, fn)` etc. - Per-element handlers
//! - `pressed_element`, `hovered_path`, `pointer_position` - Pointer state
//!
//! # Routing rules
//!
//! - Hidden or disabled elements, and elements whose computed bounds miss the
//!   point, are not hit and their subtrees are not searched.
//! - Children are tested last-added first, so the topmost element wins.
//! - Mouse down presses every element on the hit path. A click fires on the
//!   deepest element hit by both the press and the release (same button), and
//!   bubbles from there. `on_click`, `on_mouse_down` and `on_mouse_up` bubble
//!   to the first ancestor with a handler.
//! - `on_mouse_enter` / `on_mouse_leave` fire on the element itself, once per
//!   transition, for every element on the hovered path.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use finch_ui::engine::UiTree;
//! use finch_ui::primitives::Container;
//! use finch_ui::types::Rect;
//!
//! let mut tree = UiTree::default();
//! let button = tree.create("ok", Container::new());
//! tree.add_child(tree.root(), button).unwrap();
//! tree.set_bounds(button, Rect::new(100, 100, 100, 50));
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! tree.on_click(button, move |_tree, _event| counter.set(counter.get() + 1));
//!
//! tree.handle_mouse_down(150, 125);
//! tree.handle_mouse_up(150, 125);
//! assert_eq!(clicks.get(), 1);
//! ```

use std::rc::Rc;

use tracing::trace;

use crate::engine::{ElementId, UiTree};
use crate::types::{Interaction, Point};

// =============================================================================
// TYPES
// =============================================================================

/// Pointer action type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    Down,
    Up,
    Move,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Pointer event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    /// Action type (down, up, move)
    pub action: PointerAction,
    /// Button that changed state (`None` for moves)
    pub button: MouseButton,
    /// X coordinate in the same space as computed bounds
    pub x: i32,
    /// Y coordinate in the same space as computed bounds
    pub y: i32,
    /// Element the event is about (filled by dispatch)
    pub target: Option<ElementId>,
    /// Element whose handler is running (filled by dispatch)
    pub current_target: Option<ElementId>,
}

impl PointerEvent {
    pub fn new(action: PointerAction, button: MouseButton, x: i32, y: i32) -> Self {
        Self {
            action,
            button,
            x,
            y,
            target: None,
            current_target: None,
        }
    }

    pub fn down(button: MouseButton, x: i32, y: i32) -> Self {
        Self::new(PointerAction::Down, button, x, y)
    }

    pub fn up(button: MouseButton, x: i32, y: i32) -> Self {
        Self::new(PointerAction::Up, button, x, y)
    }

    pub fn move_to(x: i32, y: i32) -> Self {
        Self::new(PointerAction::Move, MouseButton::None, x, y)
    }
}

/// Result of dispatching one pointer event.
///
/// `handled` and `repaint` are independent: moving out of a button is not
/// handled by anything, but its hover state changed and it must be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// An interactive element (one with handlers) was hit, or a click fired.
    pub handled: bool,
    /// Some element's hovered or pressed state changed.
    pub repaint: bool,
}

impl EventResponse {
    pub fn merge(self, other: Self) -> Self {
        Self {
            handled: self.handled || other.handled,
            repaint: self.repaint || other.repaint,
        }
    }

    /// Either signal is set.
    pub fn any(&self) -> bool {
        self.handled || self.repaint
    }
}

// =============================================================================
// HANDLER TYPES
// =============================================================================

/// Handler for pointer events. Receives the tree so it can mutate it.
pub type PointerHandler = Rc<dyn Fn(&mut UiTree, &PointerEvent)>;

/// Handlers for one element.
///
/// Uses `Rc<dyn Fn>` so dispatch can clone a handler out of the tree before
/// calling it with `&mut UiTree`.
#[derive(Default, Clone)]
pub struct MouseHandlers {
    pub on_mouse_down: Option<PointerHandler>,
    pub on_mouse_up: Option<PointerHandler>,
    pub on_click: Option<PointerHandler>,
    pub on_mouse_enter: Option<PointerHandler>,
    pub on_mouse_leave: Option<PointerHandler>,
}

impl MouseHandlers {
    /// True if any handler is registered.
    pub fn is_interactive(&self) -> bool {
        self.on_mouse_down.is_some()
            || self.on_mouse_up.is_some()
            || self.on_click.is_some()
            || self.on_mouse_enter.is_some()
            || self.on_mouse_leave.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
enum HandlerKind {
    Down,
    Up,
    Click,
    Enter,
    Leave,
}

impl HandlerKind {
    fn select(self, handlers: &MouseHandlers) -> Option<&PointerHandler> {
        match self {
            Self::Down => handlers.on_mouse_down.as_ref(),
            Self::Up => handlers.on_mouse_up.as_ref(),
            Self::Click => handlers.on_click.as_ref(),
            Self::Enter => handlers.on_mouse_enter.as_ref(),
            Self::Leave => handlers.on_mouse_leave.as_ref(),
        }
    }
}

// =============================================================================
// POINTER STATE
// =============================================================================

/// Per-tree pointer state.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    pub position: Point,
    pub button_down: bool,
    /// Root-to-target path hit by the last mouse down, until the release.
    pub pressed: Vec<ElementId>,
    pub pressed_button: MouseButton,
    /// Root-to-target path under the pointer after the last event.
    pub hovered: Vec<ElementId>,
    pub last_event: Option<PointerEvent>,
}

impl PointerState {
    /// Drop references to a released element.
    pub fn forget(&mut self, id: ElementId) {
        // Released elements go subtree-first from `id`, so everything below it
        // on the pressed path is gone too
        if let Some(at) = self.pressed.iter().position(|&p| p == id) {
            self.pressed.truncate(at);
            if self.pressed.is_empty() {
                self.pressed_button = MouseButton::None;
            }
        }
        self.hovered.retain(|&h| h != id);
    }
}

// =============================================================================
// HIT TESTING
// =============================================================================

impl UiTree {
    fn is_hittable(&self, id: ElementId, x: i32, y: i32) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        if !node.visible || node.interaction.contains(Interaction::DISABLED) {
            return false;
        }
        self.computed_bounds(id)
            .is_some_and(|bounds| bounds.contains(x, y))
    }

    /// Root-to-target path of elements under a point. Empty if the root
    /// itself is missed.
    pub fn hit_path(&self, x: i32, y: i32) -> Vec<ElementId> {
        let mut path = Vec::new();
        if !self.is_hittable(self.root, x, y) {
            return path;
        }

        let mut current = self.root;
        path.push(current);
        while let Some(&hit) = self
            .children(current)
            .iter()
            .rev()
            .find(|&&child| self.is_hittable(child, x, y))
        {
            path.push(hit);
            current = hit;
        }

        path
    }

    /// Topmost element under a point.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ElementId> {
        self.hit_path(x, y).last().copied()
    }

    fn path_is_interactive(&self, path: &[ElementId]) -> bool {
        path.iter().any(|&id| {
            self.nodes
                .get(id)
                .is_some_and(|node| node.handlers.is_interactive())
        })
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Route a pointer event through the tree.
    pub fn dispatch(&mut self, mut event: PointerEvent) -> EventResponse {
        let path = self.hit_path(event.x, event.y);
        event.target = path.last().copied();
        event.current_target = None;

        trace!(action = ?event.action, x = event.x, y = event.y, target = ?event.target, "pointer dispatch");

        self.pointer.position = Point::new(event.x, event.y);
        self.pointer.last_event = Some(event.clone());

        let hover_changed = self.update_hover(path.clone(), &event);

        let response = match event.action {
            PointerAction::Down => self.dispatch_down(&path, &event),
            PointerAction::Up => self.dispatch_up(&path, &event),
            PointerAction::Move => EventResponse {
                handled: self.path_is_interactive(&path),
                repaint: false,
            },
        };

        response.merge(EventResponse {
            handled: false,
            repaint: hover_changed,
        })
    }

    /// Left-button press at a point.
    pub fn handle_mouse_down(&mut self, x: i32, y: i32) -> EventResponse {
        self.dispatch(PointerEvent::down(MouseButton::Left, x, y))
    }

    /// Left-button release at a point.
    pub fn handle_mouse_up(&mut self, x: i32, y: i32) -> EventResponse {
        self.dispatch(PointerEvent::up(MouseButton::Left, x, y))
    }

    /// Pointer movement to a point.
    pub fn handle_mouse_move(&mut self, x: i32, y: i32) -> EventResponse {
        self.dispatch(PointerEvent::move_to(x, y))
    }

    fn dispatch_down(&mut self, path: &[ElementId], event: &PointerEvent) -> EventResponse {
        self.pointer.button_down = true;

        // A second press without a release replaces the first
        self.release_pressed();

        for &id in path {
            self.set_flag(id, Interaction::PRESSED, true);
        }
        self.pointer.pressed = path.to_vec();
        self.pointer.pressed_button = event.button;

        if let Some(target) = event.target {
            self.bubble(target, HandlerKind::Down, event);
        }

        EventResponse {
            handled: self.path_is_interactive(path),
            repaint: !path.is_empty(),
        }
    }

    /// Clear PRESSED on the whole pressed path. Returns the path.
    fn release_pressed(&mut self) -> Vec<ElementId> {
        let pressed = std::mem::take(&mut self.pointer.pressed);
        for &id in &pressed {
            self.set_flag(id, Interaction::PRESSED, false);
        }
        pressed
    }

    fn dispatch_up(&mut self, path: &[ElementId], event: &PointerEvent) -> EventResponse {
        self.pointer.button_down = false;

        let pressed = self.release_pressed();
        let pressed_button = std::mem::take(&mut self.pointer.pressed_button);

        if let Some(target) = event.target {
            self.bubble(target, HandlerKind::Up, event);
        }

        // Both paths start at the root, so the shared prefix ends at the
        // deepest element hit by the press and the release alike
        let common = pressed
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .map(|(&id, _)| id)
            .last();

        let mut clicked = false;
        if let Some(common) = common {
            if pressed_button == event.button && self.contains(common) {
                let mut click = event.clone();
                click.target = Some(common);
                clicked = self.bubble(common, HandlerKind::Click, &click);
            }
        }

        EventResponse {
            handled: clicked || self.path_is_interactive(path),
            repaint: !pressed.is_empty(),
        }
    }

    /// Recompute the hovered path, update HOVERED flags, and fire leave/enter.
    /// Returns true if any element's hover state changed.
    fn update_hover(&mut self, path: Vec<ElementId>, event: &PointerEvent) -> bool {
        let previous = std::mem::take(&mut self.pointer.hovered);

        let left: Vec<ElementId> = previous
            .iter()
            .rev()
            .copied()
            .filter(|id| !path.contains(id))
            .collect();
        let entered: Vec<ElementId> = path
            .iter()
            .copied()
            .filter(|id| !previous.contains(id))
            .collect();

        for &id in &left {
            self.set_flag(id, Interaction::HOVERED, false);
        }
        for &id in &entered {
            self.set_flag(id, Interaction::HOVERED, true);
        }
        self.pointer.hovered = path;

        for &id in &left {
            self.fire(id, HandlerKind::Leave, event);
        }
        for &id in &entered {
            self.fire(id, HandlerKind::Enter, event);
        }

        !left.is_empty() || !entered.is_empty()
    }

    /// Call one element's handler. Returns true if it had one.
    fn fire(&mut self, id: ElementId, kind: HandlerKind, event: &PointerEvent) -> bool {
        let Some(handler) = self
            .nodes
            .get(id)
            .and_then(|node| kind.select(&node.handlers).cloned())
        else {
            return false;
        };

        let mut event = event.clone();
        event.current_target = Some(id);
        handler(self, &event);
        true
    }

    /// Walk from `start` up the parent chain until a handler is found and
    /// fired. Returns true if one fired.
    fn bubble(&mut self, start: ElementId, kind: HandlerKind, event: &PointerEvent) -> bool {
        let mut current = Some(start);
        while let Some(id) = current {
            if self.fire(id, kind, event) {
                trace!(element = %id, ?kind, "pointer handler fired");
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    fn handlers_mut(&mut self, id: ElementId) -> Option<&mut MouseHandlers> {
        self.nodes.get_mut(id).map(|node| &mut node.handlers)
    }

    pub fn on_click<F>(&mut self, id: ElementId, handler: F)
    where
        F: Fn(&mut UiTree, &PointerEvent) + 'static,
    {
        if let Some(handlers) = self.handlers_mut(id) {
            handlers.on_click = Some(Rc::new(handler));
        }
    }

    pub fn on_mouse_down<F>(&mut self, id: ElementId, handler: F)
    where
        F: Fn(&mut UiTree, &PointerEvent) + 'static,
    {
        if let Some(handlers) = self.handlers_mut(id) {
            handlers.on_mouse_down = Some(Rc::new(handler));
        }
    }

    pub fn on_mouse_up<F>(&mut self, id: ElementId, handler: F)
    where
        F: Fn(&mut UiTree, &PointerEvent) + 'static,
    {
        if let Some(handlers) = self.handlers_mut(id) {
            handlers.on_mouse_up = Some(Rc::new(handler));
        }
    }

    pub fn on_mouse_enter<F>(&mut self, id: ElementId, handler: F)
    where
        F: Fn(&mut UiTree, &PointerEvent) + 'static,
    {
        if let Some(handlers) = self.handlers_mut(id) {
            handlers.on_mouse_enter = Some(Rc::new(handler));
        }
    }

    pub fn on_mouse_leave<F>(&mut self, id: ElementId, handler: F)
    where
        F: Fn(&mut UiTree, &PointerEvent) + 'static,
    {
        if let Some(handlers) = self.handlers_mut(id) {
            handlers.on_mouse_leave = Some(Rc::new(handler));
        }
    }

    /// Replace all handlers of an element at once.
    pub fn set_handlers(&mut self, id: ElementId, handlers: MouseHandlers) {
        if let Some(slot) = self.handlers_mut(id) {
            *slot = handlers;
        }
    }

    pub fn clear_handlers(&mut self, id: ElementId) {
        self.set_handlers(id, MouseHandlers::default());
    }

    // =========================================================================
    // STATE
    // =========================================================================

    /// Deepest element pressed by the last mouse down, until the release.
    pub fn pressed_element(&self) -> Option<ElementId> {
        self.pointer.pressed.last().copied()
    }

    /// Root-to-target path pressed by the last mouse down.
    pub fn pressed_path(&self) -> &[ElementId] {
        &self.pointer.pressed
    }

    /// Root-to-target path under the pointer after the last event.
    pub fn hovered_path(&self) -> &[ElementId] {
        &self.pointer.hovered
    }

    /// Topmost hovered element.
    pub fn hovered_element(&self) -> Option<ElementId> {
        self.pointer.hovered.last().copied()
    }

    pub fn pointer_position(&self) -> Point {
        self.pointer.position
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer.button_down
    }

    pub fn last_pointer_event(&self) -> Option<&PointerEvent> {
        self.pointer.last_event.as_ref()
    }
}

// =============================================================================
// TESTS
// =============================================================================
