//! Focusable-element detection
//!
//! Mirrors the interactive-element selector accessible dialogs trap focus
//! over: links with an href, enabled form controls, embedded content, and
//! anything carrying tabindex or contenteditable. Any tabindex value
//! matches, including "-1" (callers wanting sequential-only filtering can
//! consult `TabIndex`).

use sky_dom::{DomTree, NodeId};

/// Check whether a single element is focusable
pub fn is_focusable(tree: &DomTree, id: NodeId) -> bool {
    let Some(tag) = tree.tag_name(id) else {
        return false;
    };
    let by_tag = match tag {
        "a" | "area" => tree.has_attr(id, "href"),
        "input" | "select" | "textarea" | "button" => !tree.has_attr(id, "disabled"),
        "iframe" | "object" | "embed" => true,
        _ => false,
    };
    by_tag || tree.has_attr(id, "tabindex") || tree.has_attr(id, "contenteditable")
}

/// Focusable descendants of `root` in document order, excluding `root`
pub fn focusable_within(tree: &DomTree, root: NodeId) -> Vec<NodeId> {
    tree.descendants(root)
        .filter(|&id| is_focusable(tree, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sky_dom::DomTree;

    fn attach(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
        let id = tree.create_element(tag);
        tree.append_child(parent, id).unwrap();
        id
    }

    #[test]
    fn test_links_need_href() {
        let mut tree = DomTree::new();
        let bare = attach(&mut tree, NodeId::ROOT, "a");
        let linked = attach(&mut tree, NodeId::ROOT, "a");
        tree.set_attr(linked, "href", "#").unwrap();

        assert!(!is_focusable(&tree, bare));
        assert!(is_focusable(&tree, linked));
    }

    #[test]
    fn test_disabled_controls_excluded() {
        let mut tree = DomTree::new();
        let button = attach(&mut tree, NodeId::ROOT, "button");
        let disabled = attach(&mut tree, NodeId::ROOT, "input");
        tree.set_attr(disabled, "disabled", "").unwrap();

        assert!(is_focusable(&tree, button));
        assert!(!is_focusable(&tree, disabled));
    }

    #[test]
    fn test_tabindex_matches_even_negative() {
        let mut tree = DomTree::new();
        let div = attach(&mut tree, NodeId::ROOT, "div");
        assert!(!is_focusable(&tree, div));

        tree.set_attr(div, "tabindex", "-1").unwrap();
        assert!(is_focusable(&tree, div));
    }

    #[test]
    fn test_collection_in_document_order() {
        let mut tree = DomTree::new();
        let dialog = attach(&mut tree, NodeId::ROOT, "dialog");
        let close = attach(&mut tree, dialog, "button");
        let para = attach(&mut tree, dialog, "p");
        let link_a = attach(&mut tree, para, "a");
        tree.set_attr(link_a, "href", "/a").unwrap();
        let link_b = attach(&mut tree, dialog, "a");
        tree.set_attr(link_b, "href", "/b").unwrap();

        assert_eq!(focusable_within(&tree, dialog), vec![close, link_a, link_b]);
    }
}
