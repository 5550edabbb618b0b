//! HTML5 parser
//!
//! Uses html5ever's built-in RcDom and converts to our DOM format. This is
//! simpler and more reliable than implementing TreeSink directly.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use sky_dom::{Document, DomResult, DomTree, NodeId};

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        tracing::debug!(bytes = html.len(), "parsing HTML document");

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .expect("reading from an in-memory buffer cannot fail");

        let mut document = Document::empty();
        let root = document.tree().root();
        convert_children(&dom.document, document.tree_mut(), root)
            .expect("freshly created nodes always attach");
        document.finalize();

        tracing::debug!(nodes = document.tree().len(), "parsed document");
        document
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_children(handle: &Handle, tree: &mut DomTree, parent: NodeId) -> DomResult<()> {
    for child in handle.children.borrow().iter() {
        convert_node(child, tree, parent)?;
    }
    Ok(())
}

fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) -> DomResult<()> {
    match &handle.data {
        RcNodeData::Document => convert_children(handle, tree, parent)?,
        RcNodeData::Text { contents } => {
            // Whitespace-only text between elements carries no content
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                let id = tree.create_text(&text);
                tree.append_child(parent, id)?;
            }
        }
        RcNodeData::Comment { contents } => {
            let id = tree.create_comment(&contents.to_string());
            tree.append_child(parent, id)?;
        }
        RcNodeData::Element { name, attrs, .. } => {
            let id = tree.create_element(&name.local);
            for attr in attrs.borrow().iter() {
                tree.set_attr(id, &attr.name.local, &attr.value)?;
            }
            tree.append_child(parent, id)?;
            convert_children(handle, tree, id)?;
        }
        // Doctype and processing instructions carry nothing the engine needs
        RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}
    }
    Ok(())
}
