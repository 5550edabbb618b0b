//! Document — high-level document API
//!
//! Wraps a `DomTree` with the lookups the engine needs (`body`, id and
//! class queries) and tracks which element currently holds focus.

use crate::{DomTree, NodeId};

/// HTML document
pub struct Document {
    tree: DomTree,
    /// Cached reference to the <html> element
    html_element: NodeId,
    /// Cached reference to the <body> element
    body_element: NodeId,
    /// Element currently holding focus
    active_element: Option<NodeId>,
}

impl Document {
    /// Create a new document with the basic html/head/body structure
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Fresh nodes always attach
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            body_element: body,
            active_element: None,
        }
    }

    /// Create an empty document (no structure); used by the parser
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            body_element: NodeId::NONE,
            active_element: None,
        }
    }

    /// Resolve the html/body caches after the tree has been populated
    pub fn finalize(&mut self) {
        self.html_element = self
            .tree
            .children(self.tree.root())
            .find(|&id| self.tree.tag_name(id) == Some("html"))
            .unwrap_or(NodeId::NONE);
        self.body_element = if self.html_element.is_some() {
            self.tree
                .children(self.html_element)
                .find(|&id| self.tree.tag_name(id) == Some("body"))
                .unwrap_or(NodeId::NONE)
        } else {
            NodeId::NONE
        };
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Get the <html> element
    pub fn html(&self) -> NodeId {
        self.html_element
    }

    /// Get the <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// First element with the given id attribute, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|&node| self.tree.element_id(node) == Some(id))
    }

    /// All elements carrying the given class, in document order
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .filter(|&node| self.tree.has_class(node, class))
            .collect()
    }

    /// Move focus to an element
    ///
    /// Focusing a missing or detached node is a no-op.
    pub fn focus(&mut self, id: NodeId) {
        let is_element = self.tree.get(id).is_some_and(|n| n.is_element());
        if is_element && self.tree.is_attached(id) {
            tracing::trace!(node = id.0, "focus moved");
            self.active_element = Some(id);
        }
    }

    /// Drop focus
    pub fn blur(&mut self) {
        self.active_element = None;
    }

    /// The element currently holding focus, if it is still attached
    pub fn active_element(&self) -> Option<NodeId> {
        self.active_element
            .filter(|&id| self.tree.is_attached(id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
