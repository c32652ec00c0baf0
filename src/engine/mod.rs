//! Engine - Element registry and the tree manager.
//!
//! The engine owns every element:
//! - Registry: slot allocation, generational [`ElementId`] handles
//! - UiTree: structure (add/remove), property mutation, lookup
//! - Query: class names and `#id` / `.class` / tag selectors
//! - Inspect: indented text dump of the live tree
//!
//! # Architecture
//!
//! Elements are NOT linked by pointers. They sit in registry slots and refer to
//! each other by handle:
//!
//! ```text
//! slot 0: root      (parent=None, children=[1, 2])
//! slot 1: toolbar   (parent=0,    children=[3])
//! slot 2: content   (parent=0,    children=[])
//! slot 3: button    (parent=1,    children=[])
//! ```
//!
//! Ownership is a single arena, so the parent/child cycle exists only as
//! handles. Removing a child releases its whole subtree from the registry.

mod element;
mod inspect;
mod query;
mod registry;
mod tree;

pub(crate) use element::Element;
pub(crate) use registry::Registry;

pub use query::Selector;
pub use registry::ElementId;
pub use tree::UiTree;
