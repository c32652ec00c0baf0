//! State Module - Pointer routing, host input, reactive values
//!
//! - [`mouse`]: hit testing and pointer dispatch on [`UiTree`](crate::engine::UiTree)
//! - [`input`]: crossterm conversion and per-tick pointer polling
//! - [`cell`]: [`StateCell`], a typed value with synchronous watchers

pub mod cell;
pub mod input;
pub mod mouse;

pub use cell::StateCell;
pub use input::{
    convert_event, convert_mouse_event, poll_event, read_event, route_event,
    InputEvent, PointerPoller, PointerSnapshot,
};
pub use mouse::{
    EventResponse, MouseButton, MouseHandlers, PointerAction, PointerEvent, PointerHandler,
};

pub(crate) use mouse::PointerState;
