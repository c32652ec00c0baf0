//! Frame driver - one host tick.
//!
//! The host owns the loop and calls [`FrameDriver::tick`] once per frame:
//!
//! 1. `update` pass over every attached widget
//! 2. pointer transitions from the polled snapshot, dispatched in order
//! 3. `draw` onto the host's surface
//!
//! Any mutation a handler makes in step 2 is visible to the draw in step 3.
//!
//! # Example
//!
//! ```
//! use finch_ui::engine::UiTree;
//! use finch_ui::pipeline::FrameDriver;
//! use finch_ui::renderer::RecordingSurface;
//! use finch_ui::state::PointerSnapshot;
//!
//! let mut tree = UiTree::default();
//! let mut driver = FrameDriver::new();
//! let mut surface = RecordingSurface::new();
//!
//! let report = driver.tick(&mut tree, PointerSnapshot::new(10, 10, false), &mut surface);
//! assert_eq!(report.frame, 1);
//! assert_eq!(report.events, 1);
//! ```

use tracing::debug;

use crate::engine::UiTree;
use crate::renderer::DrawSurface;
use crate::state::{route_event, EventResponse, InputEvent, PointerPoller, PointerSnapshot};
use crate::types::Rgba;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// 1-based frame counter.
    pub frame: u64,
    /// Pointer events dispatched this tick.
    pub events: usize,
    /// At least one event was handled.
    pub handled: bool,
    /// At least one event changed hover or pressed state.
    pub repaint: bool,
}

impl FrameReport {
    fn record(&mut self, response: EventResponse) {
        self.events += 1;
        self.handled |= response.handled;
        self.repaint |= response.repaint;
    }
}

/// Runs update, input, and draw for a tree once per host frame.
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    poller: PointerPoller,
    frame: u64,
    clear_color: Option<Rgba>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the surface with `color` before drawing each frame.
    pub fn with_clear_color(mut self, color: Rgba) -> Self {
        self.clear_color = Some(color);
        self
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// One tick for a host that polls the pointer.
    pub fn tick(
        &mut self,
        tree: &mut UiTree,
        pointer: PointerSnapshot,
        surface: &mut dyn DrawSurface,
    ) -> FrameReport {
        let events = self.poller.poll(pointer);
        self.run(tree, events.into_iter().map(InputEvent::Pointer), surface)
    }

    /// One tick for a host that receives an event stream (e.g. crossterm).
    pub fn tick_events(
        &mut self,
        tree: &mut UiTree,
        events: impl IntoIterator<Item = InputEvent>,
        surface: &mut dyn DrawSurface,
    ) -> FrameReport {
        self.run(tree, events, surface)
    }

    fn run(
        &mut self,
        tree: &mut UiTree,
        events: impl IntoIterator<Item = InputEvent>,
        surface: &mut dyn DrawSurface,
    ) -> FrameReport {
        self.frame += 1;
        let mut report = FrameReport {
            frame: self.frame,
            ..FrameReport::default()
        };

        tree.update();

        for event in events {
            if event == InputEvent::None {
                continue;
            }
            report.record(route_event(tree, event));
        }

        if let Some(color) = self.clear_color {
            surface.clear(color);
        }
        tree.draw(surface);

        debug!(
            frame = report.frame,
            events = report.events,
            handled = report.handled,
            repaint = report.repaint,
            "frame"
        );
        report
    }
}
