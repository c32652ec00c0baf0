//! Errors for structural requests the tree refuses.
//!
//! Only requests that would break a tree invariant fail. Missing lookups and
//! removals of absent children are not errors.

use thiserror::Error;

use crate::engine::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("element {0} no longer exists")]
    StaleElement(ElementId),

    #[error("adding {child} under {parent} would create a cycle")]
    WouldCycle { parent: ElementId, child: ElementId },

    #[error("the root element cannot be given a parent")]
    RootHasNoParent,
}
