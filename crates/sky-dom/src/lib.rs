//! Skylight DOM
//!
//! Arena-based document tree. All higher layers (parsing, focusability,
//! the modal controller) operate on this tree through `NodeId` handles.

mod document;
mod interner;
mod node;
mod tree;

pub use document::Document;
pub use interner::{InternedTag, StringInterner};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{Ancestors, Children, Descendants, DomError, DomResult, DomTree};

/// Node identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Absent-node sentinel used for tree links
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id refers to a node at all
    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
