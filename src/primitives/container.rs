//! Container primitive - a plain box with an optional background.

use super::{PaintContext, Widget};
use crate::types::Rgba;

/// A box that only paints its background.
///
/// Transparent by default, in which case nothing is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Container {
    pub background: Rgba,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(background: Rgba) -> Self {
        Self { background }
    }
}

impl Widget for Container {
    fn kind(&self) -> &'static str {
        "container"
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if self.background.is_transparent() {
            return;
        }
        let b = ctx.bounds;
        ctx.surface.fill_rect(b.x, b.y, b.width, b.height, self.background);
    }
}
