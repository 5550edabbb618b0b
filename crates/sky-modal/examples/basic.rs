//! Example: opening and closing an accessible modal

use sky_html::{HtmlParser, HtmlSerializer};
use sky_modal::{InputEvent, Key, ModalController};

const PAGE: &str = r#"
    <button class="js-modal"
        data-modal-title="Newsletter"
        data-modal-content-id="signup"
        data-modal-close-text="Close">Subscribe</button>
    <div id="signup">
        <p>Leave your address and we will write.</p>
        <input type="email" placeholder="you@example.com">
    </div>
"#;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut doc = HtmlParser::new().parse(PAGE);
    let mut controller = ModalController::new();
    controller.install(&mut doc);

    let trigger = doc
        .get_element_by_id("label_modal_1")
        .expect("install assigns trigger ids");

    let mut click = InputEvent::click(trigger);
    controller.handle_event(&mut doc, &mut click);
    println!("dialog open: {}", controller.is_open());
    println!(
        "document while open:\n{}",
        HtmlSerializer::new().serialize_inner(doc.tree(), doc.body())
    );

    // Escape closes and hands focus back to the trigger
    let mut escape = InputEvent::keydown(Key::Escape, false);
    controller.handle_event(&mut doc, &mut escape);
    println!("dialog open after escape: {}", controller.is_open());
    println!(
        "document restored:\n{}",
        HtmlSerializer::new().serialize_inner(doc.tree(), doc.body())
    );
}
