//! Skylight HTML
//!
//! HTML5 parsing into the `sky-dom` tree and serialization back out
//! (the `innerHTML`-shaped read path).

mod parser;
mod serializer;

pub use parser::HtmlParser;
pub use serializer::HtmlSerializer;

pub use sky_dom::Document;
