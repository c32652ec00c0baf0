//! Recording surface.
//!
//! Captures every draw call as a [`DrawCommand`] instead of rasterizing. Used
//! by tests to assert paint order and by hosts that replay a frame later.

use super::surface::{DrawSurface, ImageFit, ImageId};
use crate::types::{Rect, Rgba};

/// One captured draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Rgba),
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Rgba,
        font_size: i32,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba,
    },
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    Line {
        from: (i32, i32),
        to: (i32, i32),
        color: Rgba,
    },
    StrokeCircle {
        x: i32,
        y: i32,
        radius: i32,
        color: Rgba,
    },
    FillCircle {
        x: i32,
        y: i32,
        radius: i32,
        color: Rgba,
    },
    SetClip(Rect),
    ResetClip,
    Image {
        image: ImageId,
        dest: Rect,
        fit: ImageFit,
    },
}

/// A [`DrawSurface`] that records instead of drawing.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty for the next frame.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Rects of all `FillRect` commands, in paint order.
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgba, font_size: i32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
            font_size,
        });
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeRect {
            rect: Rect::new(x, y, width, height),
            color,
        });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgba) {
        self.commands.push(DrawCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            color,
        });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from: (x1, y1),
            to: (x2, y2),
            color,
        });
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle { x, y, radius, color });
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius, color });
    }

    fn set_clip_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands
            .push(DrawCommand::SetClip(Rect::new(x, y, width, height)));
    }

    fn reset_clip_rect(&mut self) {
        self.commands.push(DrawCommand::ResetClip);
    }

    fn draw_image(&mut self, image: ImageId, dest: Rect, fit: ImageFit) {
        self.commands.push(DrawCommand::Image { image, dest, fit });
    }
}
