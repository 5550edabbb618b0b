//! HTML serialization (innerHTML/outerHTML)
//!
//! Serializes DOM nodes to HTML strings with proper escaping and void
//! element handling.

use sky_dom::{DomTree, NodeData, NodeId};

/// Void elements (self-closing, no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// HTML serializer
#[derive(Debug, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the children of a node (innerHTML)
    pub fn serialize_inner(&self, tree: &DomTree, id: NodeId) -> String {
        let mut out = String::new();
        self.write_children(tree, id, &mut out);
        out
    }

    /// Serialize a node and its descendants (outerHTML)
    pub fn serialize_outer(&self, tree: &DomTree, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(tree, id, &mut out);
        out
    }

    fn write_children(&self, tree: &DomTree, id: NodeId, out: &mut String) {
        for child in tree.children(id) {
            self.write_node(tree, child, out);
        }
    }

    fn write_node(&self, tree: &DomTree, id: NodeId, out: &mut String) {
        let Some(node) = tree.get(id) else {
            return;
        };

        match &node.data {
            NodeData::Document => self.write_children(tree, id, out),
            NodeData::Element(elem) => {
                let tag = tree.tag_name(id).unwrap_or("");
                out.push('<');
                out.push_str(tag);
                for attr in elem.attrs() {
                    out.push(' ');
                    out.push_str(&attr.name);
                    // Boolean attributes serialize as the bare name
                    if !attr.value.is_empty() {
                        out.push_str("=\"");
                        escape_attr(&attr.value, out);
                        out.push('"');
                    }
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }
                self.write_children(tree, id, out);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            NodeData::Text(text) => escape_text(text, out),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
