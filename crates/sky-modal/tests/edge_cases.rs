//! Edge-case tests for the modal controller

use sky_dom::{Document, NodeId};
use sky_html::{HtmlParser, HtmlSerializer};
use sky_modal::config::{CLOSE_BUTTON_ID, DIALOG_ID, OVERLAY_ID, TITLE_ID};
use sky_modal::{InputEvent, Key, ModalController};

fn setup(html: &str) -> (Document, ModalController) {
    let mut doc = HtmlParser::new().parse(html);
    let mut controller = ModalController::new();
    controller.install(&mut doc);
    (doc, controller)
}

fn click(controller: &mut ModalController, doc: &mut Document, target: NodeId) -> bool {
    let mut event = InputEvent::click(target);
    controller.handle_event(doc, &mut event);
    event.default_prevented()
}

#[test]
fn test_double_open_is_absorbed() {
    let html = r#"
        <button class="js-modal" data-modal-text="first">One</button>
        <button class="js-modal" data-modal-text="second">Two</button>
        "#;
    let (mut doc, mut controller) = setup(html);

    let one = doc.get_element_by_id("label_modal_1").unwrap();
    let two = doc.get_element_by_id("label_modal_2").unwrap();
    assert!(click(&mut controller, &mut doc, one));
    let dialog = controller.active().unwrap().dialog();

    // Second activation while open: absorbed, first dialog intact
    assert!(click(&mut controller, &mut doc, two));
    assert_eq!(controller.active().unwrap().dialog(), dialog);
    let overlays = doc
        .tree()
        .children(doc.body())
        .filter(|&id| doc.tree().element_id(id) == Some(OVERLAY_ID))
        .count();
    assert_eq!(overlays, 1);

    let content = doc.elements_by_class("modal__content");
    assert_eq!(doc.tree().text_content(content[0]), "first");
}

#[test]
fn test_dangling_content_id_opens_empty() {
    let (mut doc, mut controller) = setup(
        r#"<button class="js-modal" data-modal-content-id="nowhere">Open</button>"#,
    );
    let trigger = doc.get_element_by_id("label_modal_1").unwrap();
    click(&mut controller, &mut doc, trigger);

    assert!(controller.is_open());
    let content = doc.elements_by_class("modal__content");
    assert_eq!(doc.tree().children(content[0]).count(), 0);

    // Close still works
    let mut escape = InputEvent::keydown(Key::Escape, false);
    controller.handle_event(&mut doc, &mut escape);
    assert!(!controller.is_open());
}

#[test]
fn test_inline_text_wins_over_content_id() {
    let html = r#"
        <button class="js-modal" data-modal-text="inline" data-modal-content-id="src">Open</button>
        <div id="src"><p>borrowed</p></div>
        "#;
    let (mut doc, mut controller) = setup(html);
    let trigger = doc.get_element_by_id("label_modal_1").unwrap();
    click(&mut controller, &mut doc, trigger);

    let content = doc.elements_by_class("modal__content");
    assert_eq!(doc.tree().text_content(content[0]), "inline");
    // The source keeps its children
    let src = doc.get_element_by_id("src").unwrap();
    assert_eq!(doc.tree().children(src).count(), 1);
}

#[test]
fn test_full_attribute_set() {
    let html = r#"
        <button class="js-modal"
            data-modal-prefix-class="shop"
            data-modal-text="Your cart"
            data-modal-title="Cart"
            data-modal-close-text="Dismiss"
            data-modal-close-img="/img/x.svg">Open</button>
        "#;
    let (mut doc, mut controller) = setup(html);
    let trigger = doc.get_element_by_id("label_modal_1").unwrap();
    click(&mut controller, &mut doc, trigger);

    let tree = doc.tree();
    let dialog = doc.get_element_by_id(DIALOG_ID).unwrap();
    assert!(tree.has_class(dialog, "shop-modal"));

    let overlay = doc.get_element_by_id(OVERLAY_ID).unwrap();
    assert!(tree.has_class(overlay, "shop-modal-overlay"));
    // Close title falls back to the close text
    assert_eq!(tree.attr(overlay, "title"), Some("Dismiss"));

    let heading = doc.get_element_by_id(TITLE_ID).unwrap();
    assert_eq!(tree.tag_name(heading), Some("h1"));
    assert!(tree.has_class(heading, "shop-modal-title"));
    assert_eq!(tree.text_content(heading), "Cart");
    assert_eq!(tree.attr(dialog, "aria-labelledby"), Some(TITLE_ID));

    // Icon close control renders an image
    let close = doc.get_element_by_id(CLOSE_BUTTON_ID).unwrap();
    let inner = tree.children(close).next().unwrap();
    assert_eq!(tree.tag_name(inner), Some("img"));
    assert_eq!(tree.attr(inner, "alt"), Some("Dismiss"));
}

#[test]
fn test_click_on_close_button_descendant_closes() {
    let (mut doc, mut controller) =
        setup(r#"<button class="js-modal" data-modal-text="hi">Open</button>"#);
    let trigger = doc.get_element_by_id("label_modal_1").unwrap();
    click(&mut controller, &mut doc, trigger);

    // The close button renders a <span> label; click that
    let close = doc.get_element_by_id(CLOSE_BUTTON_ID).unwrap();
    let label = doc.tree().children(close).next().unwrap();
    click(&mut controller, &mut doc, label);
    assert!(!controller.is_open());
    assert_eq!(doc.get_element_by_id(DIALOG_ID), None);
}

#[test]
fn test_unrelated_click_is_ignored() {
    let html = r#"
        <button class="js-modal" data-modal-text="hi">Open</button>
        <p id="bystander">text</p>
        "#;
    let (mut doc, mut controller) = setup(html);
    let trigger = doc.get_element_by_id("label_modal_1").unwrap();
    click(&mut controller, &mut doc, trigger);

    let before = HtmlSerializer::new().serialize_inner(doc.tree(), doc.body());
    let bystander = doc.get_element_by_id("bystander").unwrap();
    assert!(!click(&mut controller, &mut doc, bystander));
    assert!(controller.is_open());
    assert_eq!(
        HtmlSerializer::new().serialize_inner(doc.tree(), doc.body()),
        before
    );
}

#[test]
fn test_close_survives_vanished_content_source() {
    let html = r#"
        <button class="js-modal" data-modal-content-id="src">Open</button>
        <div id="src"><p>borrowed</p></div>
        "#;
    let (mut doc, mut controller) = setup(html);
    let trigger = doc.get_element_by_id("label_modal_1").unwrap();
    let src = doc.get_element_by_id("src").unwrap();
    click(&mut controller, &mut doc, trigger);

    // The source element disappears while the dialog is open
    doc.tree_mut().remove(src).unwrap();

    let mut escape = InputEvent::keydown(Key::Escape, false);
    controller.handle_event(&mut doc, &mut escape);
    assert!(!controller.is_open());
    assert_eq!(doc.get_element_by_id(DIALOG_ID), None);
}

#[test]
fn test_other_keys_pass_through() {
    let (mut doc, mut controller) =
        setup(r#"<button class="js-modal" data-modal-text="hi">Open</button>"#);
    let trigger = doc.get_element_by_id("label_modal_1").unwrap();
    click(&mut controller, &mut doc, trigger);

    let mut event = InputEvent::keydown(Key::Other, false);
    controller.handle_event(&mut doc, &mut event);
    assert!(!event.default_prevented());
    assert!(controller.is_open());
}

#[test]
fn test_trigger_click_by_marker_class_only() {
    // A trigger works even when other classes are present
    let (mut doc, mut controller) = setup(
        r##"<a class="btn js-modal fancy" data-modal-text="hi" href="#">Open</a>"##,
    );
    let trigger = doc.get_element_by_id("label_modal_1").unwrap();
    assert!(click(&mut controller, &mut doc, trigger));
    assert!(controller.is_open());
}
