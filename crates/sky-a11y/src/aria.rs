//! ARIA vocabulary
//!
//! The roles and attribute names the dialog builder emits.

/// Attribute name for element roles
pub const ATTR_ROLE: &str = "role";
/// Marks a dialog as modal
pub const ATTR_MODAL: &str = "aria-modal";
/// Points a dialog at its heading
pub const ATTR_LABELLEDBY: &str = "aria-labelledby";
/// Hides a subtree from assistive technology
pub const ATTR_HIDDEN: &str = "aria-hidden";

/// ARIA roles used by dialog markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaRole {
    Dialog,
    AlertDialog,
    Document,
}

impl AriaRole {
    /// Parse from an attribute value
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dialog" => Some(Self::Dialog),
            "alertdialog" => Some(Self::AlertDialog),
            "document" => Some(Self::Document),
            _ => None,
        }
    }

    /// The attribute value for this role
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::AlertDialog => "alertdialog",
            Self::Document => "document",
        }
    }
}
