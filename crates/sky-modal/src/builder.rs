//! Overlay and dialog construction
//!
//! The generated markup is built as element nodes with attributes set
//! programmatically; nothing is assembled through strings.

use sky_a11y::{ATTR_LABELLEDBY, ATTR_MODAL, ATTR_ROLE, AriaRole};
use sky_dom::{Document, DomResult, DomTree, NodeId};

use crate::config::{
    ATTR_BACKGROUND_ENABLED, ATTR_CONTENT_BACK_ID, ATTR_FOCUS_BACK, CLOSE_BUTTON_CLASS,
    CLOSE_BUTTON_ID, CLOSE_CLASS_SUFFIX, CLOSE_IMG_CLASS, CLOSE_TEXT_CLASS, CONTENT_CLASS_SUFFIX,
    CONTENT_ID, DIALOG_ID, MODAL_CLASS_SUFFIX, OVERLAY_CLASS_SUFFIX, OVERLAY_ID, TITLE_CLASS_SUFFIX,
    TITLE_ID, TriggerConfig, VISUALLY_HIDDEN_CLASS,
};

/// Node handles of a freshly built dialog
pub(crate) struct DialogParts {
    pub dialog: NodeId,
    pub close_button: NodeId,
    /// Source element whose children were borrowed, with the holder they
    /// were moved into
    pub borrowed: Option<(NodeId, NodeId)>,
}

/// Build the overlay node (detached)
pub(crate) fn build_overlay(tree: &mut DomTree, config: &TriggerConfig) -> DomResult<NodeId> {
    let overlay = tree.create_element("span");
    tree.set_attr(overlay, "id", OVERLAY_ID)?;
    tree.set_attr(overlay, "class", &config.class(OVERLAY_CLASS_SUFFIX))?;
    tree.set_attr(overlay, ATTR_BACKGROUND_ENABLED, config.background_click.as_str())?;
    tree.set_attr(overlay, "title", &config.close_title)?;

    let label = tree.create_element("span");
    tree.set_attr(label, "class", VISUALLY_HIDDEN_CLASS)?;
    let label_text = tree.create_text(&config.close_title);
    tree.append_child(label, label_text)?;
    tree.append_child(overlay, label)?;

    Ok(overlay)
}

/// Build the dialog node (detached), resolving its content
///
/// Inline text wins over borrowed content; a dangling content id skips the
/// borrow branch entirely.
pub(crate) fn build_dialog(doc: &mut Document, config: &TriggerConfig) -> DomResult<DialogParts> {
    let tree = doc.tree_mut();

    let dialog = tree.create_element("dialog");
    tree.set_attr(dialog, "id", DIALOG_ID)?;
    tree.set_attr(dialog, ATTR_ROLE, AriaRole::Dialog.as_str())?;
    tree.set_attr(dialog, "class", &config.class(MODAL_CLASS_SUFFIX))?;
    tree.set_attr(dialog, "open", "")?;
    tree.set_attr(dialog, ATTR_MODAL, "true")?;
    tree.set_attr(dialog, ATTR_LABELLEDBY, TITLE_ID)?;

    let region = tree.create_element("div");
    tree.set_attr(region, ATTR_ROLE, AriaRole::Document.as_str())?;
    tree.append_child(dialog, region)?;

    let close_button = build_close_button(tree, config)?;
    tree.append_child(region, close_button)?;

    let content_area = tree.create_element("div");
    tree.set_attr(content_area, "class", &config.class(CONTENT_CLASS_SUFFIX))?;
    tree.append_child(region, content_area)?;

    if let Some(title) = &config.title {
        let heading = tree.create_element("h1");
        tree.set_attr(heading, "id", TITLE_ID)?;
        tree.set_attr(heading, "class", &config.class(TITLE_CLASS_SUFFIX))?;
        let heading_text = tree.create_text(title);
        tree.append_child(heading, heading_text)?;
        tree.append_child(content_area, heading)?;
    }

    let mut borrowed = None;
    if !config.text.is_empty() {
        let text = doc.tree_mut().create_text(&config.text);
        doc.tree_mut().append_child(content_area, text)?;
    } else if let Some(content_id) = &config.content_id {
        // Borrow the source's children so ids stay unique in the document
        if let Some(source) = doc.get_element_by_id(content_id) {
            let tree = doc.tree_mut();
            let holder = tree.create_element("div");
            tree.set_attr(holder, "id", CONTENT_ID)?;
            tree.move_children(source, holder)?;
            tree.append_child(content_area, holder)?;
            borrowed = Some((source, holder));
        } else {
            tracing::warn!(%content_id, "content source not found; dialog opens empty");
        }
    }

    Ok(DialogParts {
        dialog,
        close_button,
        borrowed,
    })
}

fn build_close_button(tree: &mut DomTree, config: &TriggerConfig) -> DomResult<NodeId> {
    let button = tree.create_element("button");
    tree.set_attr(button, "type", "button")?;
    tree.set_attr(button, "id", CLOSE_BUTTON_ID)?;
    tree.set_attr(
        button,
        "class",
        &format!("{} {}", CLOSE_BUTTON_CLASS, config.class(CLOSE_CLASS_SUFFIX)),
    )?;
    tree.set_attr(button, "title", &config.close_title)?;
    tree.set_attr(
        button,
        ATTR_CONTENT_BACK_ID,
        config.content_id.as_deref().unwrap_or(""),
    )?;
    tree.set_attr(button, ATTR_FOCUS_BACK, &config.focus_back_id)?;

    match &config.close_img {
        Some(path) => {
            let img = tree.create_element("img");
            tree.set_attr(img, "src", path)?;
            tree.set_attr(img, "alt", &config.close_text)?;
            tree.set_attr(img, "class", CLOSE_IMG_CLASS)?;
            tree.append_child(button, img)?;
        }
        None => {
            let label = tree.create_element("span");
            tree.set_attr(label, "class", CLOSE_TEXT_CLASS)?;
            let text = tree.create_text(&config.close_text);
            tree.append_child(label, text)?;
            tree.append_child(button, label)?;
        }
    }

    Ok(button)
}
