//! DOM tree (arena-based allocation)
//!
//! Nodes live in a flat arena and are linked through `NodeId`s. Removal
//! unlinks a subtree; arena slots are kept for the document's lifetime, so
//! ids are never reused.

use crate::{ElementData, InternedTag, Node, NodeData, NodeId, StringInterner};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node not found")]
    NotFound,
    #[error("node is not an element")]
    NotAnElement,
    #[error("hierarchy request error")]
    HierarchyRequest,
    #[error("node is not a child of the given parent")]
    NotAChild,
}

/// Arena-based DOM tree
pub struct DomTree {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl DomTree {
    /// Create a new tree holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            interner: StringInterner::new(),
        }
    }

    /// The document root
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by id
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes ever allocated (removed subtrees included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // === Node creation ===

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let name = self.interner.intern(tag);
        self.alloc(Node::new(NodeData::Element(ElementData::new(name))))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text.to_string())))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text.to_string())))
    }

    // === Structure ===

    /// Append `child` as the last child of `parent`
    ///
    /// A child that is currently attached elsewhere is detached first, so
    /// this doubles as the relocation primitive.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, NodeId::NONE)
    }

    /// Insert `new_child` into `parent` before `ref_child`
    ///
    /// A NONE `ref_child` appends at the end.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        ref_child: NodeId,
    ) -> DomResult<()> {
        if !self.contains(parent) || !self.contains(new_child) {
            return Err(DomError::NotFound);
        }
        if parent == new_child || self.is_ancestor(new_child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        if ref_child.is_some() {
            if !self.contains(ref_child) {
                return Err(DomError::NotFound);
            }
            if self.node(ref_child).parent != parent {
                return Err(DomError::NotAChild);
            }
            // Inserting a node before itself leaves it where it is
            if new_child == ref_child {
                return Ok(());
            }
        }

        self.detach(new_child)?;

        let prev = if ref_child.is_some() {
            self.node(ref_child).prev_sibling
        } else {
            self.node(parent).last_child
        };

        {
            let node = self.node_mut(new_child);
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = ref_child;
        }
        if prev.is_some() {
            self.node_mut(prev).next_sibling = new_child;
        } else {
            self.node_mut(parent).first_child = new_child;
        }
        if ref_child.is_some() {
            self.node_mut(ref_child).prev_sibling = new_child;
        } else {
            self.node_mut(parent).last_child = new_child;
        }
        Ok(())
    }

    /// Unlink a subtree from its parent, keeping it re-insertable
    ///
    /// Detaching an already detached node is a no-op.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        if !self.contains(id) {
            return Err(DomError::NotFound);
        }
        let (parent, prev, next) = {
            let node = self.node(id);
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_some() {
            return Ok(());
        }

        if prev.is_some() {
            self.node_mut(prev).next_sibling = next;
        } else {
            self.node_mut(parent).first_child = next;
        }
        if next.is_some() {
            self.node_mut(next).prev_sibling = prev;
        } else {
            self.node_mut(parent).last_child = prev;
        }

        let node = self.node_mut(id);
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Remove a subtree from the document
    ///
    /// The nodes become unreachable from the root; their arena slots are
    /// not reclaimed.
    pub fn remove(&mut self, id: NodeId) -> DomResult<()> {
        if id == NodeId::ROOT {
            return Err(DomError::HierarchyRequest);
        }
        self.detach(id)
    }

    /// Move every child of `from` to the end of `to`, preserving order
    ///
    /// Returns the number of children moved.
    pub fn move_children(&mut self, from: NodeId, to: NodeId) -> DomResult<usize> {
        if !self.contains(from) || !self.contains(to) {
            return Err(DomError::NotFound);
        }
        if from == to {
            return Err(DomError::HierarchyRequest);
        }
        let mut moved = 0;
        loop {
            let child = self.node(from).first_child;
            if !child.is_some() {
                break;
            }
            self.append_child(to, child)?;
            moved += 1;
        }
        Ok(moved)
    }

    /// Move all children of `parent` into `wrapper`, then append `wrapper`
    /// to `parent`
    pub fn wrap_children(&mut self, parent: NodeId, wrapper: NodeId) -> DomResult<()> {
        if !self.contains(parent) || !self.contains(wrapper) {
            return Err(DomError::NotFound);
        }
        if parent == wrapper || self.is_ancestor(wrapper, parent) {
            return Err(DomError::HierarchyRequest);
        }
        self.detach(wrapper)?;
        self.move_children(parent, wrapper)?;
        self.append_child(parent, wrapper)
    }

    // === Traversal ===

    /// Iterate the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Iterate all descendants of a node in document (pre-)order
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Descendants {
            tree: self,
            root: id,
            next,
        }
    }

    /// Iterate ancestors from the parent up to the root
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.parent);
        Ancestors { tree: self, next }
    }

    /// Check whether `ancestor` is a proper ancestor of `id`
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    /// Check whether a node is reachable from the document root
    pub fn is_attached(&self, id: NodeId) -> bool {
        id == NodeId::ROOT || self.is_ancestor(NodeId::ROOT, id)
    }

    // === Element helpers ===

    /// Tag name of an element node
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        let elem = self.get(id)?.as_element()?;
        Some(self.interner.resolve(elem.name))
    }

    /// Interned tag id of an element node
    pub fn tag(&self, id: NodeId) -> Option<InternedTag> {
        Some(self.get(id)?.as_element()?.name)
    }

    /// Get an attribute value
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.attr(name)
    }

    /// Check whether an attribute is present
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute on an element
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Remove an attribute from an element
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> DomResult<()> {
        self.element_mut(id)?.remove_attr(name);
        Ok(())
    }

    /// Cached id attribute of an element
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element()?.id()
    }

    /// Check for a class token
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_class(class))
    }

    /// Add a class token to an element
    pub fn add_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        self.element_mut(id)?.add_class(class);
        Ok(())
    }

    /// Remove a class token from an element
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        self.element_mut(id)?.remove_class(class);
        Ok(())
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.get(id).and_then(|n| n.as_text()) {
            out.push_str(text);
        }
        for desc in self.descendants(id) {
            if let Some(text) = self.node(desc).as_text() {
                out.push_str(text);
            }
        }
        out
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Direct-children iterator
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_some() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.node(current).next_sibling;
        Some(current)
    }
}

/// Pre-order descendants iterator (excludes the start node)
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_some() {
            return None;
        }
        let current = self.next;

        let first_child = self.tree.node(current).first_child;
        self.next = if first_child.is_some() {
            first_child
        } else {
            // Climb until a next sibling exists, stopping at the root
            let mut at = current;
            loop {
                if at == self.root {
                    break NodeId::NONE;
                }
                let node = self.tree.node(at);
                if node.next_sibling.is_some() {
                    break node.next_sibling;
                }
                if !node.parent.is_some() {
                    break NodeId::NONE;
                }
                at = node.parent;
            }
        };
        Some(current)
    }
}

/// Ancestor iterator, nearest first
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_some() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.node(current).parent;
        Some(current)
    }
}
