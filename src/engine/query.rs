//! Class names and selector lookup.
//!
//! Selectors are single simple selectors, no combinators:
//!
//! | Selector | Matches                                  |
//! |----------|------------------------------------------|
//! | `#save`  | element id equal to `save`               |
//! | `.row`   | element carrying class `row`             |
//! | `btn`    | element id containing `btn`              |
//!
//! Searches run depth-first pre-order from the root over attached elements.

use super::registry::ElementId;
use super::tree::UiTree;

/// A parsed simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    /// Substring of the element id.
    Tag(String),
}

impl Selector {
    /// Parse a selector. `None` for the empty string and for attribute
    /// selectors (`[...]`), which are not supported.
    pub fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        if selector.is_empty() || (selector.starts_with('[') && selector.ends_with(']')) {
            return None;
        }

        if let Some(id) = selector.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = selector.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(selector.to_string()))
        }
    }

    fn matches(&self, id: &str, classes: &[String]) -> bool {
        match self {
            Self::Id(want) => id == want,
            Self::Class(want) => classes.iter().any(|c| c == want),
            Self::Tag(want) => id.contains(want.as_str()),
        }
    }
}

impl UiTree {
    // =========================================================================
    // Classes
    // =========================================================================

    /// Add a class name. Duplicates are ignored.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    /// Class names in insertion order.
    pub fn classes(&self, id: ElementId) -> &[String] {
        self.nodes
            .get(id)
            .map(|node| node.classes.as_slice())
            .unwrap_or(&[])
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// First attached element whose id equals `element_id`.
    pub fn find_by_id(&self, element_id: &str) -> Option<ElementId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&id| self.nodes.get(id).is_some_and(|node| node.id == element_id))
    }

    /// First attached element matching `selector`.
    pub fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.query_selector_from(self.root, selector)
    }

    /// All attached elements matching `selector`, in pre-order.
    pub fn query_selector_all(&self, selector: &str) -> Vec<ElementId> {
        self.query_selector_all_from(self.root, selector)
    }

    /// First match in the subtree rooted at `scope`, `scope` included.
    pub fn query_selector_from(&self, scope: ElementId, selector: &str) -> Option<ElementId> {
        let selector = Selector::parse(selector)?;
        self.descendants(scope)
            .into_iter()
            .find(|&id| self.matches(id, &selector))
    }

    pub fn query_selector_all_from(&self, scope: ElementId, selector: &str) -> Vec<ElementId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.matches(id, &selector))
            .collect()
    }

    fn matches(&self, id: ElementId, selector: &Selector) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| selector.matches(&node.id, &node.classes))
    }
}
