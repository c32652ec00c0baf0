//! Draw traversal.
//!
//! Depth-first from the root in child insertion order, so later siblings paint
//! over earlier ones (the same order hit testing reverses). Per element: the
//! widget paints, then the border from its box model, then its children.
//! A hidden element skips its whole subtree.

use tracing::trace;

use super::surface::DrawSurface;
use crate::engine::{ElementId, UiTree};
use crate::primitives::PaintContext;
use crate::types::{Border, BorderStyle, Rect};

/// Paint a border as up to four filled strips, one per non-zero side.
fn paint_border(surface: &mut dyn DrawSurface, bounds: Rect, border: &Border) {
    if border.style == BorderStyle::None {
        return;
    }
    let w = border.width;
    let color = border.color;
    let inner_height = bounds.height - w.top - w.bottom;

    if w.top > 0 {
        surface.fill_rect(bounds.x, bounds.y, bounds.width, w.top, color);
    }
    if w.bottom > 0 {
        let y = bounds.y + bounds.height - w.bottom;
        surface.fill_rect(bounds.x, y, bounds.width, w.bottom, color);
    }
    if w.left > 0 {
        surface.fill_rect(bounds.x, bounds.y + w.top, w.left, inner_height, color);
    }
    if w.right > 0 {
        let x = bounds.x + bounds.width - w.right;
        surface.fill_rect(x, bounds.y + w.top, w.right, inner_height, color);
    }
}

impl UiTree {
    /// Draw the attached tree onto `surface`.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let drawn = self.draw_element(self.root, surface);
        trace!(drawn, "draw pass");
    }

    /// Draw one element and its subtree. Returns how many elements painted.
    pub fn draw_element(&self, id: ElementId, surface: &mut dyn DrawSurface) -> usize {
        let Some(node) = self.nodes.get(id) else {
            return 0;
        };
        if !node.visible {
            return 0;
        }
        let Some(bounds) = self.computed_bounds(id) else {
            return 0;
        };

        let mut ctx = PaintContext {
            bounds,
            interaction: node.interaction,
            surface: &mut *surface,
        };
        node.widget.paint(&mut ctx);
        paint_border(surface, bounds, &node.box_model.border);

        let mut drawn = 1;
        for &child in &node.children {
            drawn += self.draw_element(child, surface);
        }
        drawn
    }

    /// Run every attached widget's per-tick `update`, parents before children.
    pub fn update(&mut self) {
        for id in self.descendants(self.root) {
            if let Some(node) = self.nodes.get_mut(id) {
                node.widget.update();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::primitives::{Container, Label, Widget, DEFAULT_FONT_SIZE};
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::types::{BoxModel, Rgba, Spacing};

    fn tree() -> UiTree {
        UiTree::new(UiConfig::default().with_viewport(200, 100))
    }

    #[test]
    fn test_depth_first_insertion_order() {
        let mut tree = tree();
        let root = tree.root();
        let a = tree.create("a", Container::with_background(Rgba::RED));
        let a1 = tree.create("a1", Container::with_background(Rgba::GREEN));
        let b = tree.create("b", Container::with_background(Rgba::BLUE));
        tree.add_child(root, a).unwrap();
        tree.add_child(a, a1).unwrap();
        tree.add_child(root, b).unwrap();
        tree.set_bounds(a, Rect::new(0, 0, 50, 50));
        tree.set_bounds(a1, Rect::new(5, 5, 10, 10));
        tree.set_bounds(b, Rect::new(60, 0, 50, 50));

        let mut surface = RecordingSurface::new();
        tree.draw(&mut surface);

        assert_eq!(
            surface.filled_rects(),
            vec![
                Rect::new(0, 0, 50, 50),
                Rect::new(5, 5, 10, 10),
                Rect::new(60, 0, 50, 50),
            ]
        );
    }

    #[test]
    fn test_hidden_subtree_is_skipped() {
        let mut tree = tree();
        let root = tree.root();
        let panel = tree.create("panel", Container::with_background(Rgba::RED));
        let inner = tree.create("inner", Container::with_background(Rgba::GREEN));
        tree.add_child(root, panel).unwrap();
        tree.add_child(panel, inner).unwrap();
        tree.set_visible(panel, false);

        let mut surface = RecordingSurface::new();
        tree.draw(&mut surface);

        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_label_uses_computed_bounds() {
        let mut tree = tree();
        let root = tree.root();
        let panel = tree.create("panel", Container::new());
        let label = tree.create("label", Label::new("hi").with_color(Rgba::WHITE));
        tree.add_child(root, panel).unwrap();
        tree.add_child(panel, label).unwrap();
        tree.set_bounds(panel, Rect::new(10, 20, 100, 50));
        tree.set_box_model(panel, BoxModel::default().with_padding(Spacing::all(4)));

        let mut surface = RecordingSurface::new();
        tree.draw(&mut surface);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::Text {
                text: "hi".to_string(),
                x: 14,
                y: 24,
                color: Rgba::WHITE,
                font_size: DEFAULT_FONT_SIZE,
            }]
        );
    }

    #[test]
    fn test_border_strips_after_widget() {
        let mut tree = tree();
        let root = tree.root();
        let boxed = tree.create("boxed", Container::with_background(Rgba::WHITE));
        tree.add_child(root, boxed).unwrap();
        tree.set_bounds(boxed, Rect::new(10, 10, 40, 20));
        tree.set_box_model(
            boxed,
            BoxModel::default().with_border(Border::solid(2, Rgba::BLACK)),
        );

        let mut surface = RecordingSurface::new();
        tree.draw(&mut surface);

        assert_eq!(
            surface.filled_rects(),
            vec![
                Rect::new(10, 10, 40, 20),
                Rect::new(10, 10, 40, 2),
                Rect::new(10, 28, 40, 2),
                Rect::new(10, 12, 2, 16),
                Rect::new(48, 12, 2, 16),
            ]
        );
    }

    #[test]
    fn test_border_style_none_paints_nothing() {
        let mut surface = RecordingSurface::new();
        let border = Border {
            width: Spacing::all(3),
            color: Rgba::RED,
            style: BorderStyle::None,
        };

        paint_border(&mut surface, Rect::new(0, 0, 10, 10), &border);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_only_nonzero_sides_are_painted() {
        let mut surface = RecordingSurface::new();
        let border = Border {
            width: Spacing::new(0, 0, 1, 0),
            color: Rgba::RED,
            style: BorderStyle::Solid,
        };

        paint_border(&mut surface, Rect::new(0, 0, 10, 10), &border);
        assert_eq!(surface.filled_rects(), vec![Rect::new(0, 9, 10, 1)]);
    }

    struct Ticker {
        ticks: u32,
    }

    impl Widget for Ticker {
        fn kind(&self) -> &'static str {
            "ticker"
        }

        fn update(&mut self) {
            self.ticks += 1;
        }
    }

    #[test]
    fn test_update_reaches_attached_widgets_only() {
        let mut tree = tree();
        let root = tree.root();
        let attached = tree.create("attached", Ticker { ticks: 0 });
        let detached = tree.create("detached", Ticker { ticks: 0 });
        tree.add_child(root, attached).unwrap();

        tree.update();
        tree.update();

        assert_eq!(tree.widget::<Ticker>(attached).map(|t| t.ticks), Some(2));
        assert_eq!(tree.widget::<Ticker>(detached).map(|t| t.ticks), Some(0));
    }
}
