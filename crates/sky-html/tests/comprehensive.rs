//! Comprehensive tests for sky-html
//!
//! Parsing fixtures into the sky-dom tree and reading markup back out.

use sky_html::{HtmlParser, HtmlSerializer};

#[test]
fn test_parse_minimal_html() {
    let doc = HtmlParser::new().parse("");
    assert!(doc.tree().len() >= 1, "even empty HTML should have a root");
    assert!(doc.body().is_some(), "html5ever synthesizes html/body");
}

#[test]
fn test_parse_nested_structure() {
    let html = r#"
        <html>
            <body>
                <div id="container">
                    <h1>Welcome</h1>
                    <p class="intro">This is a test.</p>
                    <ul>
                        <li>Item 1</li>
                        <li>Item 2</li>
                    </ul>
                </div>
            </body>
        </html>
    "#;

    let doc = HtmlParser::new().parse(html);
    let container = doc.get_element_by_id("container").unwrap();
    assert_eq!(doc.tree().tag_name(container), Some("div"));
    assert_eq!(doc.tree().children(container).count(), 3);
}

#[test]
fn test_parse_attributes() {
    let html = r#"<button class="js-modal" data-modal-title="Hello" disabled>Open</button>"#;
    let doc = HtmlParser::new().parse(html);

    let buttons = doc.elements_by_class("js-modal");
    assert_eq!(buttons.len(), 1);
    let button = buttons[0];
    assert_eq!(doc.tree().attr(button, "data-modal-title"), Some("Hello"));
    assert!(doc.tree().has_attr(button, "disabled"));
    assert_eq!(doc.tree().text_content(button), "Open");
}

#[test]
fn test_elements_by_class_document_order() {
    let html = r#"
        <p class="hit" id="one"></p>
        <div><span class="hit" id="two"></span></div>
        <p class="hit" id="three"></p>
    "#;
    let doc = HtmlParser::new().parse(html);

    let hits = doc.elements_by_class("hit");
    let ids: Vec<&str> = hits
        .iter()
        .filter_map(|&id| doc.tree().element_id(id))
        .collect();
    assert_eq!(ids, vec!["one", "two", "three"]);
}

#[test]
fn test_serialize_inner_round_trip() {
    let html = r#"<div id="src"><p>Some <strong>rich</strong> content</p></div>"#;
    let doc = HtmlParser::new().parse(html);
    let src = doc.get_element_by_id("src").unwrap();

    let inner = HtmlSerializer::new().serialize_inner(doc.tree(), src);
    assert_eq!(inner, "<p>Some <strong>rich</strong> content</p>");
}

#[test]
fn test_whitespace_only_text_dropped() {
    let html = "<ul>\n    <li>a</li>\n    <li>b</li>\n</ul>";
    let doc = HtmlParser::new().parse(html);
    let body = doc.body();

    let inner = HtmlSerializer::new().serialize_inner(doc.tree(), body);
    assert_eq!(inner, "<ul><li>a</li><li>b</li></ul>");
}
