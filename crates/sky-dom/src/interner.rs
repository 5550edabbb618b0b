//! String interner for tag names
//!
//! Tag names repeat heavily ("div", "span", "button"); each distinct name
//! is stored once and referenced by a 4-byte id.

use std::collections::HashMap;

/// Interned tag id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedTag(u32);

/// Tag-name interner with common HTML names pre-interned
pub struct StringInterner {
    strings: Vec<Box<str>>,
    map: HashMap<Box<str>, u32>,
}

impl StringInterner {
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Vec::with_capacity(64),
            map: HashMap::with_capacity(64),
        };

        const COMMON_TAGS: &[&str] = &[
            "html", "head", "body", "div", "span", "p", "a", "img",
            "ul", "ol", "li", "h1", "h2", "h3",
            "form", "input", "button", "select", "option", "textarea",
            "dialog", "iframe", "object", "embed", "area",
            "header", "footer", "nav", "main", "section", "article",
            "script", "style", "link", "meta", "title", "br", "hr",
        ];
        for tag in COMMON_TAGS {
            interner.intern(tag);
        }

        interner
    }

    /// Intern a string, returning its id
    ///
    /// If the string is already interned, returns the existing id.
    pub fn intern(&mut self, s: &str) -> InternedTag {
        if let Some(&idx) = self.map.get(s) {
            return InternedTag(idx);
        }
        let idx = self.strings.len() as u32;
        let boxed: Box<str> = s.into();
        self.strings.push(boxed.clone());
        self.map.insert(boxed, idx);
        InternedTag(idx)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedTag> {
        self.map.get(s).map(|&idx| InternedTag(idx))
    }

    /// Resolve an interned id back to its string
    pub fn resolve(&self, tag: InternedTag) -> &str {
        &self.strings[tag.0 as usize]
    }

    /// Number of distinct strings interned
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
