//! Label primitive - single string drawn at the element origin.
//!
//! Text is handed to the surface as-is. Measuring, wrapping, and truncation
//! belong to the rendering backend.

use super::{PaintContext, Widget};
use crate::types::Rgba;

/// Default font size handed to the surface.
pub const DEFAULT_FONT_SIZE: i32 = 14;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub color: Rgba,
    pub font_size: i32,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Rgba::BLACK,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: i32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn kind(&self) -> &'static str {
        "label"
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if self.text.is_empty() {
            return;
        }
        ctx.surface
            .draw_text(&self.text, ctx.bounds.x, ctx.bounds.y, self.color, self.font_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::types::{Interaction, Rect};

    #[test]
    fn test_label_draws_text_at_origin() {
        let mut surface = RecordingSurface::new();
        let mut ctx = PaintContext {
            bounds: Rect::new(12, 34, 100, 20),
            interaction: Interaction::NONE,
            surface: &mut surface,
        };

        Label::new("Add").with_color(Rgba::WHITE).paint(&mut ctx);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::Text {
                text: "Add".to_string(),
                x: 12,
                y: 34,
                color: Rgba::WHITE,
                font_size: DEFAULT_FONT_SIZE,
            }]
        );
    }

    #[test]
    fn test_empty_label_draws_nothing() {
        let mut surface = RecordingSurface::new();
        let mut ctx = PaintContext {
            bounds: Rect::default(),
            interaction: Interaction::NONE,
            surface: &mut surface,
        };

        Label::new("").paint(&mut ctx);
        assert!(surface.commands().is_empty());
    }
}
