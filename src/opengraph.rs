//! OpenGraph data model
//!
//! Structured form of the [OpenGraph](https://ogp.me/) metadata found in an
//! HTML document. Empty strings and zero dimensions mean "unset".

use serde::{Deserialize, Serialize};

use crate::property::{DetailField, ScalarField};

/// OpenGraph metadata for a webpage.
///
/// OpenGraph is a protocol for structured data in web pages, originally
/// developed by Facebook. It allows websites to control how content appears
/// when shared on social media platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opengraph {
    /// The title of the object
    pub title: String,

    /// The type of object (e.g., "website", "article", "video.movie")
    #[serde(rename = "type")]
    pub og_type: String,

    /// Images associated with the object
    pub images: Vec<OpengraphMedia>,

    /// The canonical URL of the object
    pub url: String,

    /// Audio files associated with the object
    pub audios: Vec<OpengraphAudio>,

    /// A brief description of the content
    pub description: String,

    /// The word that appears before the title in a sentence ("a", "the", ...)
    pub determiner: String,

    /// Locale information, present once any locale property was seen
    pub locale: Option<OpengraphLocale>,

    /// The name of the site
    pub site_name: String,

    /// Videos associated with the object
    pub videos: Vec<OpengraphMedia>,
}

/// Image or video in OpenGraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpengraphMedia {
    /// URL of the media
    pub url: String,

    /// Secure (HTTPS) URL of the media
    pub secure_url: String,

    /// MIME type (e.g., "image/jpeg")
    pub mime_type: String,

    /// Width in pixels, 0 when unknown
    pub width: u64,

    /// Height in pixels, 0 when unknown
    pub height: u64,

    /// Alternative text description
    pub alt: String,
}

/// Audio file in OpenGraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpengraphAudio {
    /// URL of the audio file
    pub url: String,

    /// Secure (HTTPS) URL of the audio file
    pub secure_url: String,

    /// MIME type (e.g., "audio/mpeg")
    pub mime_type: String,
}

/// Locale of the content and the other locales it is available in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpengraphLocale {
    /// Primary locale (e.g., "en_US"); may be empty when only alternates were given
    pub locale: String,

    /// Alternative locales, in document order
    pub alternates: Vec<String>,
}

/// A raw `(property, content)` pair scraped from a `<meta>` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metadata {
    /// The `property` attribute (e.g., "og:image:width")
    pub property: String,

    /// The `content` attribute, empty when absent
    pub content: String,
}

impl Metadata {
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }
}

/// Result of applying a detail attribute to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailUpdate {
    Applied,
    AlreadySet,
    /// Numeric content that did not parse; the field keeps its default
    InvalidNumber,
    /// The entity has no such field
    Unsupported,
}

/// Common behaviour of list entities the fold appends to and refines.
pub(crate) trait Entity {
    fn with_url(url: &str) -> Self;

    fn set_detail(&mut self, field: DetailField, content: &str) -> DetailUpdate;
}

/// Parse a width or height from non-empty ASCII decimal digits.
///
/// Values too large for `u64` saturate to `u64::MAX`.
pub(crate) fn parse_dimension(content: &str) -> Option<u64> {
    if content.is_empty() || !content.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(content.parse().unwrap_or(u64::MAX))
}

fn set_text(slot: &mut String, content: &str) -> DetailUpdate {
    if !slot.is_empty() {
        return DetailUpdate::AlreadySet;
    }
    content.clone_into(slot);
    DetailUpdate::Applied
}

fn set_number(slot: &mut u64, content: &str) -> DetailUpdate {
    if *slot != 0 {
        return DetailUpdate::AlreadySet;
    }
    match parse_dimension(content) {
        Some(value) => {
            *slot = value;
            DetailUpdate::Applied
        }
        None => DetailUpdate::InvalidNumber,
    }
}

impl OpengraphMedia {
    /// Create a new media object with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Entity for OpengraphMedia {
    fn with_url(url: &str) -> Self {
        Self::new(url)
    }

    fn set_detail(&mut self, field: DetailField, content: &str) -> DetailUpdate {
        match field {
            DetailField::SecureUrl => set_text(&mut self.secure_url, content),
            DetailField::MimeType => set_text(&mut self.mime_type, content),
            DetailField::Width => set_number(&mut self.width, content),
            DetailField::Height => set_number(&mut self.height, content),
            DetailField::Alt => set_text(&mut self.alt, content),
        }
    }
}

impl OpengraphAudio {
    /// Create a new audio object with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Entity for OpengraphAudio {
    fn with_url(url: &str) -> Self {
        Self::new(url)
    }

    fn set_detail(&mut self, field: DetailField, content: &str) -> DetailUpdate {
        match field {
            DetailField::SecureUrl => set_text(&mut self.secure_url, content),
            DetailField::MimeType => set_text(&mut self.mime_type, content),
            DetailField::Width | DetailField::Height | DetailField::Alt => {
                DetailUpdate::Unsupported
            }
        }
    }
}

impl Opengraph {
    /// Create an empty OpenGraph structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a scalar field.
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Title => &self.title,
            ScalarField::Type => &self.og_type,
            ScalarField::Url => &self.url,
            ScalarField::Description => &self.description,
            ScalarField::Determiner => &self.determiner,
            ScalarField::SiteName => &self.site_name,
        }
    }

    pub(crate) fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Title => &mut self.title,
            ScalarField::Type => &mut self.og_type,
            ScalarField::Url => &mut self.url,
            ScalarField::Description => &mut self.description,
            ScalarField::Determiner => &mut self.determiner,
            ScalarField::SiteName => &mut self.site_name,
        }
    }

    /// Check if the OpenGraph data is empty (nothing was extracted or set).
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.og_type.is_empty()
            && self.url.is_empty()
            && self.description.is_empty()
            && self.determiner.is_empty()
            && self.site_name.is_empty()
            && self.locale.is_none()
            && self.images.is_empty()
            && self.videos.is_empty()
            && self.audios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("800"), Some(800));
        assert_eq!(parse_dimension("0"), Some(0));
        assert_eq!(parse_dimension(""), None);
        assert_eq!(parse_dimension("x"), None);
        assert_eq!(parse_dimension("+5"), None);
        assert_eq!(parse_dimension(" 5"), None);
        assert_eq!(parse_dimension("-1"), None);
        assert_eq!(parse_dimension("12.5"), None);
        assert_eq!(parse_dimension("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_dimension("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn test_oversized_dimension_saturates() {
        let mut image = OpengraphMedia::new("http://example.org/huge.png");
        assert_eq!(
            image.set_detail(DetailField::Width, "99999999999999999999"),
            DetailUpdate::Applied
        );
        assert_eq!(image.width, u64::MAX);
    }

    #[test]
    fn test_media_details_first_wins() {
        let mut image = OpengraphMedia::new("http://example.org/a.png");
        assert_eq!(
            image.set_detail(DetailField::Width, "100"),
            DetailUpdate::Applied
        );
        assert_eq!(
            image.set_detail(DetailField::Width, "200"),
            DetailUpdate::AlreadySet
        );
        assert_eq!(
            image.set_detail(DetailField::Alt, "first"),
            DetailUpdate::Applied
        );
        assert_eq!(
            image.set_detail(DetailField::Alt, "second"),
            DetailUpdate::AlreadySet
        );
        assert_eq!(image.width, 100);
        assert_eq!(image.alt, "first");
    }

    #[test]
    fn test_invalid_number_leaves_field_open() {
        let mut video = OpengraphMedia::new("http://example.org/v.mp4");
        assert_eq!(
            video.set_detail(DetailField::Height, "tall"),
            DetailUpdate::InvalidNumber
        );
        assert_eq!(video.height, 0);
        assert_eq!(
            video.set_detail(DetailField::Height, "720"),
            DetailUpdate::Applied
        );
        assert_eq!(video.height, 720);
    }

    #[test]
    fn test_audio_rejects_dimensions() {
        let mut audio = OpengraphAudio::new("http://example.org/a.mp3");
        assert_eq!(
            audio.set_detail(DetailField::Width, "10"),
            DetailUpdate::Unsupported
        );
        assert_eq!(
            audio.set_detail(DetailField::MimeType, "audio/mpeg"),
            DetailUpdate::Applied
        );
        assert_eq!(audio.mime_type, "audio/mpeg");
    }

    #[test]
    fn test_is_empty() {
        let og = Opengraph::new();
        assert!(og.is_empty());

        let og2 = Opengraph {
            locale: Some(OpengraphLocale::default()),
            ..Default::default()
        };
        assert!(!og2.is_empty());

        let mut og3 = Opengraph::new();
        *og3.scalar_mut(ScalarField::Title) = "Test".to_string();
        assert_eq!(og3.scalar(ScalarField::Title), "Test");
        assert!(!og3.is_empty());
    }
}
