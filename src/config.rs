//! Tree configuration.
//!
//! Plain struct with defaults; construct with `UiConfig::default()` and
//! override through the `with_*` methods.

use crate::types::Size;

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: i32 = 1200;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: i32 = 800;

/// Default gap between flex children.
pub const DEFAULT_SPACING: i32 = 5;

/// Configuration consumed by [`UiTree::new`](crate::engine::UiTree::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Size given to the root element's bounds.
    pub viewport: Size,
    /// Spacing used by flex containers created without an explicit layout.
    pub default_spacing: i32,
    /// String id of the root element.
    pub root_id: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            default_spacing: DEFAULT_SPACING,
            root_id: "root".to_string(),
        }
    }
}

impl UiConfig {
    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }

    pub fn with_default_spacing(mut self, spacing: i32) -> Self {
        self.default_spacing = spacing;
        self
    }

    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.viewport, Size::new(1200, 800));
        assert_eq!(config.default_spacing, 5);
        assert_eq!(config.root_id, "root");
    }

    #[test]
    fn test_builder() {
        let config = UiConfig::default()
            .with_viewport(640, 480)
            .with_default_spacing(0)
            .with_root_id("app");

        assert_eq!(config.viewport, Size::new(640, 480));
        assert_eq!(config.default_spacing, 0);
        assert_eq!(config.root_id, "app");
    }
}
