//! Tag events produced by an HTML tokenizer
//!
//! The extractor only depends on this contract. Any tokenizer can drive it by
//! yielding `Result<TagEvent, E>` items; exhausting the iterator ends the
//! stream cleanly and an `Err` aborts extraction with that error.

use serde::{Deserialize, Serialize};

/// An element tag with its attributes in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Element name (e.g., "meta")
    pub name: String,

    /// Attribute key/value pairs
    pub attrs: Vec<(String, String)>,
}

impl Tag {
    /// Create a tag without attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Value of an attribute, or "" when absent.
    ///
    /// A key repeated on the same tag resolves to its last occurrence.
    pub fn get(&self, key: &str) -> &str {
        self.attrs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Whether this tag is an element with the given name (ASCII case-insensitive).
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// One event of a tokenized HTML stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagEvent {
    /// `<name ...>`
    Start(Tag),
    /// `<name .../>` or a void element
    SelfClosing(Tag),
    /// `</name>`
    End(String),
    /// Character data
    Text(String),
    /// `<!-- ... -->`
    Comment(String),
}

impl TagEvent {
    /// The tag carried by an opening event.
    pub fn opening_tag(&self) -> Option<&Tag> {
        match self {
            Self::Start(tag) | Self::SelfClosing(tag) => Some(tag),
            Self::End(_) | Self::Text(_) | Self::Comment(_) => None,
        }
    }
}
