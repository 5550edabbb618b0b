//! Skylight accessibility
//!
//! The focusability model the focus trap is built on, plus the ARIA
//! vocabulary stamped onto generated dialog markup.

mod aria;
mod focusable;
mod tab_index;

pub use aria::{ATTR_HIDDEN, ATTR_LABELLEDBY, ATTR_MODAL, ATTR_ROLE, AriaRole};
pub use focusable::{focusable_within, is_focusable};
pub use tab_index::TabIndex;
