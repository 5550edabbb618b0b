//! Trigger attribute contract
//!
//! The declarative data attributes read off a trigger element at open
//! time, the ids and class names stamped onto generated markup, and the
//! per-trigger configuration resolved from them.

use sky_dom::{DomTree, NodeId};

/// Marker class that turns an element into a dialog launcher
pub const TRIGGER_CLASS: &str = "js-modal";
/// Id prefix assigned to triggers at install time
pub const TRIGGER_ID_PREFIX: &str = "label_modal_";

// Trigger attributes
pub const ATTR_PREFIX_CLASS: &str = "data-modal-prefix-class";
pub const ATTR_TEXT: &str = "data-modal-text";
pub const ATTR_CONTENT_ID: &str = "data-modal-content-id";
pub const ATTR_TITLE: &str = "data-modal-title";
pub const ATTR_CLOSE_TEXT: &str = "data-modal-close-text";
pub const ATTR_CLOSE_TITLE: &str = "data-modal-close-title";
pub const ATTR_CLOSE_IMG: &str = "data-modal-close-img";
pub const ATTR_BACKGROUND_CLICK: &str = "data-modal-background-click";

// Generated element ids
pub const DIALOG_ID: &str = "js-modal";
pub const OVERLAY_ID: &str = "js-modal-overlay";
pub const CLOSE_BUTTON_ID: &str = "js-modal-close";
pub const CONTENT_ID: &str = "js-modal-content";
pub const PAGE_WRAPPER_ID: &str = "js-modal-page";
pub const TITLE_ID: &str = "modal-title";

// Back references and overlay policy, written on generated markup
pub const ATTR_CONTENT_BACK_ID: &str = "data-content-back-id";
pub const ATTR_FOCUS_BACK: &str = "data-focus-back";
pub const ATTR_BACKGROUND_ENABLED: &str = "data-background-click";

// Generated class names (suffixes take the resolved prefix)
pub const CLOSE_BUTTON_CLASS: &str = "js-modal-close";
pub const MODAL_CLASS_SUFFIX: &str = "modal";
pub const OVERLAY_CLASS_SUFFIX: &str = "modal-overlay";
pub const CLOSE_CLASS_SUFFIX: &str = "modal-close";
pub const CONTENT_CLASS_SUFFIX: &str = "modal__content";
pub const TITLE_CLASS_SUFFIX: &str = "modal-title";
pub const CLOSE_IMG_CLASS: &str = "modal__closeimg";
pub const CLOSE_TEXT_CLASS: &str = "modal-close__text";

/// Class hiding an element visually while keeping it readable
pub const VISUALLY_HIDDEN_CLASS: &str = "invisible";
/// Class disabling page scroll while a dialog is open
pub const NO_SCROLL_CLASS: &str = "no-scroll";

/// Default close-control text
pub const DEFAULT_CLOSE_TEXT: &str = "Close modal";

/// Overlay background-click policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundClick {
    /// Clicking the overlay closes the dialog
    #[default]
    Enabled,
    /// Clicks on the overlay are absorbed
    Disabled,
}

impl BackgroundClick {
    /// Resolve from the trigger attribute: exactly "disabled" blocks
    /// overlay-click closing, anything else (or absence) enables it.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("disabled") => Self::Disabled,
            _ => Self::Enabled,
        }
    }

    /// The attribute value mirrored onto the overlay
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

/// Dialog configuration resolved from one trigger element
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Class-name prefix including its trailing '-', or empty
    pub prefix_class: String,
    /// Inline dialog body text ("" when absent)
    pub text: String,
    /// Id of the element whose content is borrowed into the dialog
    pub content_id: Option<String>,
    /// Dialog heading; omitted entirely when empty
    pub title: Option<String>,
    /// Close-control text
    pub close_text: String,
    /// Close-control title attribute
    pub close_title: String,
    /// Close-control icon path; renders an <img> instead of text
    pub close_img: Option<String>,
    /// Overlay background-click policy
    pub background_click: BackgroundClick,
    /// Id of the trigger, for the focus back reference
    pub focus_back_id: String,
}

impl TriggerConfig {
    /// Read a trigger's attributes, substituting defaults for anything
    /// missing. Never fails: a bare trigger yields a fully usable config.
    pub fn from_trigger(tree: &DomTree, trigger: NodeId) -> Self {
        let attr = |name: &str| tree.attr(trigger, name).map(str::to_string);

        let prefix_class = match attr(ATTR_PREFIX_CLASS) {
            Some(prefix) => format!("{prefix}-"),
            None => String::new(),
        };
        let close_text = attr(ATTR_CLOSE_TEXT).unwrap_or_else(|| DEFAULT_CLOSE_TEXT.to_string());
        let close_title = attr(ATTR_CLOSE_TITLE).unwrap_or_else(|| close_text.clone());

        Self {
            prefix_class,
            text: attr(ATTR_TEXT).unwrap_or_default(),
            content_id: attr(ATTR_CONTENT_ID).filter(|id| !id.is_empty()),
            title: attr(ATTR_TITLE).filter(|title| !title.is_empty()),
            close_text,
            close_title,
            close_img: attr(ATTR_CLOSE_IMG).filter(|path| !path.is_empty()),
            background_click: BackgroundClick::parse(tree.attr(trigger, ATTR_BACKGROUND_CLICK)),
            focus_back_id: tree.element_id(trigger).unwrap_or_default().to_string(),
        }
    }

    /// Apply the resolved prefix to a generated class-name suffix
    pub fn class(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix_class, suffix)
    }
}
