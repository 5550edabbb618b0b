//! DOM node
//!
//! Compact node with sibling links into the arena. Elements cache their
//! `id` attribute and class tokens, the two lookups everything else in the
//! engine leans on.

use crate::{InternedTag, NodeId};

/// DOM node: tree links plus node-specific data
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Attribute name/value pair
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name (interned)
    pub name: InternedTag,
    attrs: Vec<Attribute>,
    /// Cached id attribute (very common lookup)
    id: Option<String>,
    /// Cached class token list
    classes: Vec<String>,
}

impl ElementData {
    pub fn new(name: InternedTag) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check whether an attribute is present
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, keeping the id/class caches coherent
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match name {
            "id" => self.id = Some(value.to_string()),
            "class" => self.classes = parse_tokens(value),
            _ => {}
        }
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Remove an attribute; returns whether it was present
    pub fn remove_attr(&mut self, name: &str) -> bool {
        match name {
            "id" => self.id = None,
            "class" => self.classes.clear(),
            _ => {}
        }
        let before = self.attrs.len();
        self.attrs.retain(|a| a.name != name);
        self.attrs.len() != before
    }

    /// Iterate attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    /// The cached id attribute
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Check for a class token
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class token (duplicates are never stored)
    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        self.classes.push(class.to_string());
        self.sync_class_attr();
    }

    /// Remove a class token
    pub fn remove_class(&mut self, class: &str) {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        if self.classes.len() != before {
            self.sync_class_attr();
        }
    }

    /// Iterate class tokens
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.as_str())
    }

    fn sync_class_attr(&mut self) {
        let value = self.classes.join(" ");
        for attr in self.attrs.iter_mut() {
            if attr.name == "class" {
                attr.value = value;
                return;
            }
        }
        self.attrs.push(Attribute {
            name: "class".to_string(),
            value,
        });
    }
}

fn parse_tokens(value: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in value.split_whitespace() {
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;

    fn element() -> ElementData {
        let mut interner = StringInterner::new();
        ElementData::new(interner.intern("div"))
    }

    #[test]
    fn test_attr_set_get() {
        let mut elem = element();
        elem.set_attr("title", "hello");
        assert_eq!(elem.attr("title"), Some("hello"));
        elem.set_attr("title", "bye");
        assert_eq!(elem.attr("title"), Some("bye"));
        assert_eq!(elem.attrs().count(), 1);
    }

    #[test]
    fn test_id_cache() {
        let mut elem = element();
        elem.set_attr("id", "main");
        assert_eq!(elem.id(), Some("main"));
        elem.remove_attr("id");
        assert_eq!(elem.id(), None);
    }

    #[test]
    fn test_class_cache_follows_attr() {
        let mut elem = element();
        elem.set_attr("class", "btn  btn btn-primary");
        assert!(elem.has_class("btn"));
        assert!(elem.has_class("btn-primary"));
        assert_eq!(elem.classes().count(), 2);
    }

    #[test]
    fn test_class_ops_sync_attr() {
        let mut elem = element();
        elem.add_class("no-scroll");
        assert_eq!(elem.attr("class"), Some("no-scroll"));
        elem.add_class("dimmed");
        elem.remove_class("no-scroll");
        assert_eq!(elem.attr("class"), Some("dimmed"));
    }
}
