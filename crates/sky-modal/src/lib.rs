//! Skylight modal
//!
//! Accessible modal dialogs following ARIA dialog conventions: trigger
//! elements marked with a class and described by data attributes launch a
//! generated dialog/overlay pair, the page behind is hidden from
//! assistive technology, focus is trapped inside the dialog, and closing
//! restores the document to its pre-open state.
//!
//! # Example
//! ```rust,ignore
//! use sky_html::HtmlParser;
//! use sky_modal::{InputEvent, ModalController};
//!
//! let mut doc = HtmlParser::new().parse(PAGE);
//! let mut controller = ModalController::new();
//! controller.install(&mut doc);
//!
//! let trigger = doc.get_element_by_id("label_modal_1").unwrap();
//! let mut click = InputEvent::click(trigger);
//! controller.handle_event(&mut doc, &mut click);
//! assert!(controller.is_open());
//! ```

mod builder;
pub mod config;
mod controller;
mod event;

pub use config::{BackgroundClick, TriggerConfig};
pub use controller::{ActiveModal, ModalController};
pub use event::{InputEvent, InputEventKind, Key};
