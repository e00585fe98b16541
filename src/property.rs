//! OpenGraph property vocabulary
//!
//! Maps exact `og:*` property strings to the action the fold performs for
//! them, and back from fields to their canonical property names.

use serde::{Deserialize, Serialize};

/// Namespace prefix a `property` attribute must carry to be collected.
pub const PREFIX: &str = "og:";

pub(crate) const LOCALE: &str = "og:locale";
pub(crate) const LOCALE_ALTERNATE: &str = "og:locale:alternate";

/// Top-level single-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarField {
    Title,
    Type,
    Url,
    Description,
    Determiner,
    SiteName,
}

impl ScalarField {
    /// Canonical property name, e.g. `og:site_name`.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Title => "og:title",
            Self::Type => "og:type",
            Self::Url => "og:url",
            Self::Description => "og:description",
            Self::Determiner => "og:determiner",
            Self::SiteName => "og:site_name",
        }
    }
}

/// Repeated entity families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Property that starts a new entity of this family.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Image => "og:image",
            Self::Video => "og:video",
            Self::Audio => "og:audio",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Image => 0,
            Self::Video => 1,
            Self::Audio => 2,
        }
    }
}

/// Attributes that describe the most recently started entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailField {
    SecureUrl,
    MimeType,
    Width,
    Height,
    Alt,
}

/// Canonical property name for a detail of an entity family.
///
/// Audio entities carry no dimensions or alt text; asking for those yields
/// `None`.
pub const fn detail_property(kind: MediaKind, field: DetailField) -> Option<&'static str> {
    let name = match (kind, field) {
        (MediaKind::Image, DetailField::SecureUrl) => "og:image:secure_url",
        (MediaKind::Image, DetailField::MimeType) => "og:image:type",
        (MediaKind::Image, DetailField::Width) => "og:image:width",
        (MediaKind::Image, DetailField::Height) => "og:image:height",
        (MediaKind::Image, DetailField::Alt) => "og:image:alt",
        (MediaKind::Video, DetailField::SecureUrl) => "og:video:secure_url",
        (MediaKind::Video, DetailField::MimeType) => "og:video:type",
        (MediaKind::Video, DetailField::Width) => "og:video:width",
        (MediaKind::Video, DetailField::Height) => "og:video:height",
        (MediaKind::Video, DetailField::Alt) => "og:video:alt",
        (MediaKind::Audio, DetailField::SecureUrl) => "og:audio:secure_url",
        (MediaKind::Audio, DetailField::MimeType) => "og:audio:type",
        (MediaKind::Audio, _) => return None,
    };
    Some(name)
}

/// What the fold does with a collected `(property, content)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Set a scalar field if it is still empty.
    SetScalar(ScalarField),
    /// Append a new entity whose URL is the content.
    AppendEntity(MediaKind),
    /// Set a field of the last entity of a list if that field is still unset.
    SetDetail(MediaKind, DetailField),
    /// Set the primary locale if still empty, creating the locale entity.
    SetLocale,
    /// Append an alternate locale, creating the locale entity.
    AppendLocaleAlternate,
}

impl Action {
    /// Look up the action for an exact property string.
    ///
    /// Returns `None` for anything outside the recognized vocabulary,
    /// including properties without the `og:` prefix.
    pub fn lookup(property: &str) -> Option<Self> {
        use DetailField::*;
        use MediaKind::*;

        let action = match property {
            "og:title" => Self::SetScalar(ScalarField::Title),
            "og:type" => Self::SetScalar(ScalarField::Type),
            "og:url" => Self::SetScalar(ScalarField::Url),
            "og:description" => Self::SetScalar(ScalarField::Description),
            "og:determiner" => Self::SetScalar(ScalarField::Determiner),
            "og:site_name" => Self::SetScalar(ScalarField::SiteName),

            "og:image" | "og:image:url" => Self::AppendEntity(Image),
            "og:image:secure_url" => Self::SetDetail(Image, SecureUrl),
            "og:image:type" => Self::SetDetail(Image, MimeType),
            "og:image:width" => Self::SetDetail(Image, Width),
            "og:image:height" => Self::SetDetail(Image, Height),
            "og:image:alt" => Self::SetDetail(Image, Alt),

            "og:video" => Self::AppendEntity(Video),
            "og:video:secure_url" => Self::SetDetail(Video, SecureUrl),
            "og:video:type" => Self::SetDetail(Video, MimeType),
            "og:video:width" => Self::SetDetail(Video, Width),
            "og:video:height" => Self::SetDetail(Video, Height),
            "og:video:alt" => Self::SetDetail(Video, Alt),

            "og:audio" => Self::AppendEntity(Audio),
            "og:audio:secure_url" => Self::SetDetail(Audio, SecureUrl),
            "og:audio:type" => Self::SetDetail(Audio, MimeType),

            LOCALE => Self::SetLocale,
            LOCALE_ALTERNATE => Self::AppendLocaleAlternate,

            _ => return None,
        };
        Some(action)
    }
}
