//! Inspector - text dump of the live tree for debugging.

use std::fmt::Write;

use super::registry::ElementId;
use super::tree::UiTree;
use crate::types::Interaction;

impl UiTree {
    /// Indented dump of the attached tree, one element per line:
    ///
    /// ```text
    /// root (container) 0,0 1200x800 [hovered]
    ///   toolbar (container) .bar 0,0 1200x40
    /// ```
    pub fn inspect(&self) -> String {
        let mut out = String::new();
        self.inspect_into(&mut out, self.root, 0);
        out
    }

    fn inspect_into(&self, out: &mut String, id: ElementId, depth: usize) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let bounds = self.computed_bounds(id).unwrap_or_default();

        // Writing to a String cannot fail
        let _ = write!(
            out,
            "{:indent$}{} ({})",
            "",
            node.id,
            node.widget.kind(),
            indent = depth * 2
        );
        for class in &node.classes {
            let _ = write!(out, " .{class}");
        }
        let _ = write!(
            out,
            " {},{} {}x{}",
            bounds.x, bounds.y, bounds.width, bounds.height
        );

        let mut flags = Vec::new();
        if !node.visible {
            flags.push("hidden");
        }
        if node.interaction.contains(Interaction::HOVERED) {
            flags.push("hovered");
        }
        if node.interaction.contains(Interaction::PRESSED) {
            flags.push("pressed");
        }
        if node.interaction.contains(Interaction::DISABLED) {
            flags.push("disabled");
        }
        if !flags.is_empty() {
            let _ = write!(out, " [{}]", flags.join(" "));
        }
        out.push('\n');

        for &child in &node.children {
            self.inspect_into(out, child, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::UiConfig;
    use crate::engine::UiTree;
    use crate::primitives::{Container, Label};
    use crate::types::Rect;

    #[test]
    fn test_inspect_dump() {
        let mut tree = UiTree::new(UiConfig::default().with_viewport(300, 200));
        let root = tree.root();
        let bar = tree.create("toolbar", Container::new());
        let title = tree.create("title", Label::new("Hi"));
        tree.add_child(root, bar).unwrap();
        tree.add_child(bar, title).unwrap();
        tree.set_bounds(bar, Rect::new(0, 0, 300, 40));
        tree.set_bounds(title, Rect::new(10, 5, 80, 20));
        tree.add_class(bar, "bar");
        tree.set_visible(title, false);

        let expected = "\
root (container) 0,0 300x200
  toolbar (container) .bar 0,0 300x40
    title (label) 10,5 80x20 [hidden]
";
        assert_eq!(tree.inspect(), expected);
    }

    #[test]
    fn test_inspect_shows_pointer_flags() {
        let mut tree = UiTree::new(UiConfig::default().with_viewport(100, 100));
        tree.handle_mouse_down(5, 5);

        assert_eq!(tree.inspect(), "root (container) 0,0 100x100 [hovered pressed]\n");
    }
}
