//! Input Module - Host input boundary
//!
//! Bridges crossterm's event stream, or a per-tick polled pointer, to
//! [`UiTree::dispatch`].
//!
//! # API
//!
//! - `convert_event` / `convert_mouse_event` - crossterm events to ours
//! - `poll_event` / `read_event` - Read the terminal event stream
//! - `route_event` - Dispatch an input event into a tree
//! - `PointerPoller` - Turn polled pointer snapshots into transitions
//!
//! Mouse capture is left to the host, which owns the terminal.
//!
//! # Example
//!
//! ```ignore
//! use finch_ui::engine::UiTree;
//! use finch_ui::state::{poll_event, route_event};
//! use std::time::Duration;
//!
//! let mut tree = UiTree::default();
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(&mut tree, event);
//!     }
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent,
    MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
    poll, read,
};
use std::time::Duration;

use super::mouse::{EventResponse, MouseButton, PointerAction, PointerEvent};
use crate::engine::UiTree;
use crate::types::{Point, Rect, Size};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Events the tree understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer press, release or movement
    Pointer(PointerEvent),
    /// Terminal resize (new width, height)
    Resize(u16, u16),
    /// Anything else (keys, focus, paste, scroll)
    None,
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to a PointerEvent.
///
/// Drags are moves with the button held. Scroll is not routed.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<PointerEvent> {
    let (action, button) = match event.kind {
        MouseEventKind::Down(btn) => (PointerAction::Down, convert_mouse_button(btn)),
        MouseEventKind::Up(btn) => (PointerAction::Up, convert_mouse_button(btn)),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => (PointerAction::Move, MouseButton::None),
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => return None,
    };

    Some(PointerEvent::new(
        action,
        button,
        i32::from(event.column),
        i32::from(event.row),
    ))
}

/// Convert crossterm MouseButton to our MouseButton
fn convert_mouse_button(btn: CrosstermMouseButton) -> MouseButton {
    match btn {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Convert any crossterm event. Keys, focus and paste become `None`.
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse)
            .map(InputEvent::Pointer)
            .unwrap_or(InputEvent::None),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route an event into the tree.
///
/// A resize gives the root the new viewport size, which relayouts it if it
/// is a flex container.
pub fn route_event(tree: &mut UiTree, event: InputEvent) -> EventResponse {
    match event {
        InputEvent::Pointer(pointer) => tree.dispatch(pointer),
        InputEvent::Resize(w, h) => {
            let root = tree.root();
            let size = Size::new(i32::from(w), i32::from(h));
            tree.set_bounds(root, Rect::from_size(size));
            EventResponse {
                handled: false,
                repaint: true,
            }
        }
        InputEvent::None => EventResponse::default(),
    }
}

// =============================================================================
// POLLED POINTER
// =============================================================================

/// Pointer state sampled once per tick by a host that polls instead of
/// delivering an event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSnapshot {
    pub x: i32,
    pub y: i32,
    /// Primary button held
    pub button_down: bool,
}

impl PointerSnapshot {
    pub const fn new(x: i32, y: i32, button_down: bool) -> Self {
        Self { x, y, button_down }
    }

    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Turns consecutive snapshots into pointer transitions.
///
/// Per poll, in order: a down on the press edge, an up on the release edge,
/// then a move if the position changed. The first poll always reports a move.
#[derive(Debug, Clone, Default)]
pub struct PointerPoller {
    previous: Option<PointerSnapshot>,
}

impl PointerPoller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self, snapshot: PointerSnapshot) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let was_down = self.previous.is_some_and(|p| p.button_down);

        if snapshot.button_down && !was_down {
            events.push(PointerEvent::down(MouseButton::Left, snapshot.x, snapshot.y));
        } else if !snapshot.button_down && was_down {
            events.push(PointerEvent::up(MouseButton::Left, snapshot.x, snapshot.y));
        }

        let moved = self
            .previous
            .is_none_or(|p| p.position() != snapshot.position());
        if moved {
            events.push(PointerEvent::move_to(snapshot.x, snapshot.y));
        }

        self.previous = Some(snapshot);
        events
    }

    /// Forget the last snapshot. The next poll reports a fresh move.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn crossterm_mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermMouseEvent {
        CrosstermMouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_convert_mouse_down() {
        let event = convert_mouse_event(crossterm_mouse(
            MouseEventKind::Down(CrosstermMouseButton::Left),
            10,
            5,
        ))
        .unwrap();

        assert_eq!(event.action, PointerAction::Down);
        assert_eq!(event.button, MouseButton::Left);
        assert_eq!((event.x, event.y), (10, 5));
        assert_eq!(event.target, None);
    }

    #[test]
    fn test_convert_mouse_up() {
        let event = convert_mouse_event(crossterm_mouse(
            MouseEventKind::Up(CrosstermMouseButton::Right),
            20,
            15,
        ))
        .unwrap();

        assert_eq!(event.action, PointerAction::Up);
        assert_eq!(event.button, MouseButton::Right);
    }

    #[test]
    fn test_convert_drag_is_move() {
        let event = convert_mouse_event(crossterm_mouse(
            MouseEventKind::Drag(CrosstermMouseButton::Left),
            3,
            4,
        ))
        .unwrap();

        assert_eq!(event.action, PointerAction::Move);
        assert_eq!(event.button, MouseButton::None);
    }

    #[test]
    fn test_scroll_is_not_routed() {
        for kind in [
            MouseEventKind::ScrollUp,
            MouseEventKind::ScrollDown,
            MouseEventKind::ScrollLeft,
            MouseEventKind::ScrollRight,
        ] {
            assert!(convert_mouse_event(crossterm_mouse(kind, 0, 0)).is_none());
        }
    }

    #[test]
    fn test_convert_event_kinds() {
        let click = convert_event(CrosstermEvent::Mouse(crossterm_mouse(
            MouseEventKind::Down(CrosstermMouseButton::Left),
            7,
            8,
        )));
        assert_eq!(click, InputEvent::Pointer(PointerEvent::down(MouseButton::Left, 7, 8)));

        assert_eq!(convert_event(CrosstermEvent::Resize(80, 24)), InputEvent::Resize(80, 24));
        assert_eq!(
            convert_event(CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))),
            InputEvent::None
        );
        assert_eq!(convert_event(CrosstermEvent::FocusGained), InputEvent::None);

        let scroll = CrosstermEvent::Mouse(crossterm_mouse(MouseEventKind::ScrollDown, 0, 0));
        assert_eq!(convert_event(scroll), InputEvent::None);
    }

    #[test]
    fn test_converted_stream_drives_a_click() {
        let mut tree = UiTree::default();
        let clicks = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = clicks.clone();
        tree.on_click(tree.root(), move |_, _| counter.set(counter.get() + 1));

        for kind in [
            MouseEventKind::Down(CrosstermMouseButton::Left),
            MouseEventKind::Up(CrosstermMouseButton::Left),
        ] {
            let event = convert_event(CrosstermEvent::Mouse(crossterm_mouse(kind, 3, 3)));
            route_event(&mut tree, event);
        }

        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_route_resize_resizes_root() {
        let mut tree = UiTree::default();

        let response = route_event(&mut tree, InputEvent::Resize(120, 40));

        assert!(response.repaint);
        assert_eq!(tree.bounds(tree.root()), Some(Rect::new(0, 0, 120, 40)));
    }

    #[test]
    fn test_route_none_does_nothing() {
        let mut tree = UiTree::default();
        assert_eq!(route_event(&mut tree, InputEvent::None), EventResponse::default());
    }

    // -------------------------------------------------------------------------
    // Poller
    // -------------------------------------------------------------------------

    fn actions(events: &[PointerEvent]) -> Vec<PointerAction> {
        events.iter().map(|e| e.action).collect()
    }

    #[test]
    fn test_first_poll_reports_move() {
        let mut poller = PointerPoller::new();
        let events = poller.poll(PointerSnapshot::new(5, 5, false));
        assert_eq!(actions(&events), vec![PointerAction::Move]);
    }

    #[test]
    fn test_press_and_release_edges() {
        let mut poller = PointerPoller::new();
        poller.poll(PointerSnapshot::new(5, 5, false));

        let press = poller.poll(PointerSnapshot::new(5, 5, true));
        assert_eq!(actions(&press), vec![PointerAction::Down]);

        // Held, not moved
        assert!(poller.poll(PointerSnapshot::new(5, 5, true)).is_empty());

        let release = poller.poll(PointerSnapshot::new(9, 9, false));
        assert_eq!(actions(&release), vec![PointerAction::Up, PointerAction::Move]);
        assert_eq!((release[0].x, release[0].y), (9, 9));
    }

    #[test]
    fn test_first_poll_with_button_held() {
        let mut poller = PointerPoller::new();
        let events = poller.poll(PointerSnapshot::new(1, 2, true));
        assert_eq!(actions(&events), vec![PointerAction::Down, PointerAction::Move]);
    }

    #[test]
    fn test_reset_reports_fresh_move() {
        let mut poller = PointerPoller::new();
        poller.poll(PointerSnapshot::new(1, 1, false));
        assert!(poller.poll(PointerSnapshot::new(1, 1, false)).is_empty());

        poller.reset();
        assert_eq!(
            actions(&poller.poll(PointerSnapshot::new(1, 1, false))),
            vec![PointerAction::Move]
        );
    }
}
