//! Draw surface boundary.
//!
//! The tree paints through this trait and nothing else. A backend (GPU,
//! software rasterizer, terminal) implements it; coordinates are device pixels
//! in the same space as `computed_bounds`.

use crate::types::{Rect, Rgba};

/// Opaque handle to an image the backend has already decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// How an image is sized into its destination rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ImageFit {
    /// Keep aspect ratio, fit inside the rect.
    #[default]
    Contain,
    /// Keep aspect ratio, cover the rect (may crop).
    Cover,
    /// Stretch to the rect.
    Fill,
}

/// Primitive drawing operations.
pub trait DrawSurface {
    fn clear(&mut self, color: Rgba);

    /// `y` is the top of the text box, not the baseline.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgba, font_size: i32);

    /// Stroke a one pixel outline.
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgba);

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgba);

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba);

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgba);

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Rgba);

    fn set_clip_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn reset_clip_rect(&mut self);

    fn draw_image(&mut self, image: ImageId, dest: Rect, fit: ImageFit);
}
