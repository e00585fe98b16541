//! Rendering OpenGraph data back to `<meta>` elements

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::{Tag, TagEvent};
use crate::opengraph::{Opengraph, OpengraphAudio, OpengraphMedia};
use crate::property::{
    DetailField, LOCALE, LOCALE_ALTERNATE, MediaKind, ScalarField, detail_property,
};

/// A `<meta property="..." content="...">` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaElement {
    /// Value of the `property` attribute (e.g., "og:title")
    pub property: String,

    /// Value of the `content` attribute
    pub content: String,
}

impl MetaElement {
    pub fn new(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            content: content.into(),
        }
    }

    /// Element name, always "meta".
    pub fn name(&self) -> &'static str {
        "meta"
    }

    /// The element's attributes, `property` first.
    pub fn attributes(&self) -> [(&'static str, &str); 2] {
        [
            ("property", self.property.as_str()),
            ("content", self.content.as_str()),
        ]
    }

    /// The element as a self-closing tag event, for feeding back into extraction.
    pub fn to_tag_event(&self) -> TagEvent {
        TagEvent::SelfClosing(
            Tag::new(self.name())
                .attr("property", self.property.as_str())
                .attr("content", self.content.as_str()),
        )
    }
}

impl fmt::Display for MetaElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name())?;
        for (key, value) in self.attributes() {
            write!(f, " {key}=\"")?;
            write_escaped(f, value)?;
            f.write_str("\"")?;
        }
        f.write_str("/>")
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let mut last = 0;
    for (i, c) in value.char_indices() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        f.write_str(&value[last..i])?;
        f.write_str(entity)?;
        last = i + c.len_utf8();
    }
    f.write_str(&value[last..])
}

/// Render OpenGraph data as meta elements.
///
/// Fields are emitted in a fixed order: title, type, images, url, audios,
/// description, determiner, locale, site name, videos. Empty strings and zero
/// dimensions are skipped, except the primary locale which is emitted
/// whenever locale information is present.
pub fn render(og: &Opengraph) -> Vec<MetaElement> {
    let mut out = Vec::new();

    push_scalar(&mut out, og, ScalarField::Title);
    push_scalar(&mut out, og, ScalarField::Type);
    for image in &og.images {
        push_media(&mut out, MediaKind::Image, image);
    }
    push_scalar(&mut out, og, ScalarField::Url);
    for audio in &og.audios {
        push_audio(&mut out, audio);
    }
    push_scalar(&mut out, og, ScalarField::Description);
    push_scalar(&mut out, og, ScalarField::Determiner);
    if let Some(locale) = &og.locale {
        out.push(MetaElement::new(LOCALE, locale.locale.as_str()));
        for alternate in &locale.alternates {
            out.push(MetaElement::new(LOCALE_ALTERNATE, alternate.as_str()));
        }
    }
    push_scalar(&mut out, og, ScalarField::SiteName);
    for video in &og.videos {
        push_media(&mut out, MediaKind::Video, video);
    }

    debug!(elements = out.len(), "rendered OpenGraph metadata");
    out
}

fn push_scalar(out: &mut Vec<MetaElement>, og: &Opengraph, field: ScalarField) {
    push_text(out, field.property(), og.scalar(field));
}

fn push_text(out: &mut Vec<MetaElement>, property: &str, value: &str) {
    if !value.is_empty() {
        out.push(MetaElement::new(property, value));
    }
}

fn push_detail(out: &mut Vec<MetaElement>, kind: MediaKind, field: DetailField, value: &str) {
    if let Some(property) = detail_property(kind, field) {
        push_text(out, property, value);
    }
}

fn push_dimension(out: &mut Vec<MetaElement>, kind: MediaKind, field: DetailField, value: u64) {
    if value != 0
        && let Some(property) = detail_property(kind, field)
    {
        out.push(MetaElement::new(property, value.to_string()));
    }
}

fn push_media(out: &mut Vec<MetaElement>, kind: MediaKind, media: &OpengraphMedia) {
    push_text(out, kind.property(), &media.url);
    push_detail(out, kind, DetailField::SecureUrl, &media.secure_url);
    push_detail(out, kind, DetailField::MimeType, &media.mime_type);
    push_dimension(out, kind, DetailField::Width, media.width);
    push_dimension(out, kind, DetailField::Height, media.height);
    push_detail(out, kind, DetailField::Alt, &media.alt);
}

fn push_audio(out: &mut Vec<MetaElement>, audio: &OpengraphAudio) {
    let kind = MediaKind::Audio;
    push_text(out, kind.property(), &audio.url);
    push_detail(out, kind, DetailField::SecureUrl, &audio.secure_url);
    push_detail(out, kind, DetailField::MimeType, &audio.mime_type);
}

impl Opengraph {
    /// Render as meta elements. See [`render`].
    pub fn to_meta_elements(&self) -> Vec<MetaElement> {
        render(self)
    }

    /// Render as HTML, one `<meta .../>` tag per line.
    pub fn to_html(&self) -> String {
        render(self)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
