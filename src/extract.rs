//! OpenGraph extraction
//!
//! Extraction runs in two passes. The first collects `(property, content)`
//! pairs from `<meta property="og:...">` tags in document order. The second
//! folds those pairs into an [`Opengraph`]:
//!
//! - scalar fields keep their first non-empty value
//! - `og:image`, `og:image:url`, `og:video` and `og:audio` append an entity
//! - detail properties refine the last entity of their list, first value wins
//! - details with no entity to attach to are dropped
//! - unknown `og:*` properties and malformed numbers are ignored
//!
//! The fold never fails unless strict mode is requested.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::event::TagEvent;
use crate::opengraph::{DetailUpdate, Entity, Metadata, Opengraph};
use crate::property::{Action, DetailField, MediaKind, PREFIX, ScalarField};

/// Configuration for extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Report unknown properties, orphan details and malformed numbers as
    /// errors instead of skipping them.
    ///
    /// Default: false.
    pub strict: bool,

    /// Maximum number of entities kept per image, video and audio list.
    ///
    /// Entities past the limit are dropped together with their details.
    /// Default: unlimited.
    pub max_media_items: Option<usize>,
}

impl ExtractOptions {
    /// Create a new ExtractOptions with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to fail on the first non-conforming pair.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the maximum number of entities kept per list.
    pub fn max_media_items(mut self, max: impl Into<Option<usize>>) -> Self {
        self.max_media_items = max.into();
        self
    }
}

/// Collect OpenGraph pairs from a tag event stream.
///
/// Only opening `meta` tags whose `property` starts with `og:` contribute.
/// A stream error is returned as-is and nothing is collected.
pub fn collect_pairs<I, E>(events: I) -> std::result::Result<Vec<Metadata>, E>
where
    I: IntoIterator<Item = std::result::Result<TagEvent, E>>,
{
    let mut pairs = Vec::new();
    for event in events {
        let event = event?;
        let Some(tag) = event.opening_tag() else {
            continue;
        };
        if !tag.is("meta") {
            continue;
        }
        let property = tag.get("property");
        if !property.starts_with(PREFIX) {
            continue;
        }
        pairs.push(Metadata::new(property, tag.get("content")));
    }
    Ok(pairs)
}

/// Fold collected pairs into an [`Opengraph`], skipping anything unusable.
pub fn fold(pairs: &[Metadata]) -> Opengraph {
    fold_with(pairs, &ExtractOptions::default())
}

/// Like [`fold`], with options applied.
///
/// The `strict` flag is ignored here; use [`fold_strict`] to surface
/// violations.
pub fn fold_with(pairs: &[Metadata], options: &ExtractOptions) -> Opengraph {
    let mut folder = Folder::new(options);
    for pair in pairs {
        if let Some(violation) = folder.push(pair) {
            trace!(
                property = %pair.property,
                content = %pair.content,
                ?violation,
                "ignoring OpenGraph property"
            );
        }
    }
    folder.finish()
}

/// Fold collected pairs, failing on the first non-conforming pair.
pub fn fold_strict(pairs: &[Metadata], options: &ExtractOptions) -> Result<Opengraph> {
    let mut folder = Folder::new(options);
    for pair in pairs {
        if let Some(violation) = folder.push(pair) {
            return Err(violation.into_error(pair));
        }
    }
    Ok(folder.finish())
}

/// Extract OpenGraph metadata from a tag event stream with default options.
///
/// # Example
/// ```
/// use ogp_meta::{Tag, TagEvent, extract};
///
/// let events = vec![
///     TagEvent::SelfClosing(Tag::new("meta").attr("property", "og:title").attr("content", "Hi")),
///     TagEvent::SelfClosing(Tag::new("meta").attr("property", "og:title").attr("content", "Again")),
/// ];
/// let og = extract(events.into_iter().map(Ok::<_, std::convert::Infallible>)).unwrap();
/// assert_eq!(og.title, "Hi");
/// ```
pub fn extract<I, E>(events: I) -> std::result::Result<Opengraph, E>
where
    I: IntoIterator<Item = std::result::Result<TagEvent, E>>,
{
    let pairs = collect_pairs(events)?;
    let og = fold(&pairs);
    debug!(pairs = pairs.len(), "extracted OpenGraph metadata");
    Ok(og)
}

/// Extractor with configurable options.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor with default (lenient) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract OpenGraph metadata from a tag event stream.
    ///
    /// Stream errors are returned unchanged; strict-mode violations are
    /// converted into the stream's error type.
    pub fn extract<I, E>(&self, events: I) -> std::result::Result<Opengraph, E>
    where
        I: IntoIterator<Item = std::result::Result<TagEvent, E>>,
        E: From<Error>,
    {
        let pairs = collect_pairs(events)?;
        let og = if self.options.strict {
            fold_strict(&pairs, &self.options)?
        } else {
            fold_with(&pairs, &self.options)
        };
        debug!(
            pairs = pairs.len(),
            strict = self.options.strict,
            images = og.images.len(),
            videos = og.videos.len(),
            audios = og.audios.len(),
            "extracted OpenGraph metadata"
        );
        Ok(og)
    }
}

/// Why a pair did not contribute to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    Unknown,
    Orphan,
    InvalidNumber,
}

impl Violation {
    fn into_error(self, pair: &Metadata) -> Error {
        match self {
            Self::Unknown => Error::UnknownProperty(pair.property.clone()),
            Self::Orphan => Error::OrphanProperty(pair.property.clone()),
            Self::InvalidNumber => Error::InvalidNumber {
                property: pair.property.clone(),
                content: pair.content.clone(),
            },
        }
    }
}

/// Fold accumulator.
///
/// Owns the object under construction; the entity a detail refers to is
/// always the last element of its list.
struct Folder<'a> {
    options: &'a ExtractOptions,
    og: Opengraph,
    /// Per list, whether the most recent entity was dropped by the size limit
    truncated: [bool; 3],
}

impl<'a> Folder<'a> {
    fn new(options: &'a ExtractOptions) -> Self {
        Self {
            options,
            og: Opengraph::new(),
            truncated: [false; 3],
        }
    }

    fn finish(self) -> Opengraph {
        self.og
    }

    fn push(&mut self, pair: &Metadata) -> Option<Violation> {
        let Some(action) = Action::lookup(&pair.property) else {
            return Some(Violation::Unknown);
        };
        let content = pair.content.as_str();

        match action {
            Action::SetScalar(field) => {
                self.set_scalar(field, content);
                None
            }
            Action::AppendEntity(kind) => {
                self.append(kind, content);
                None
            }
            Action::SetDetail(kind, field) => self.set_detail(kind, field, content),
            Action::SetLocale => {
                let locale = self.og.locale.get_or_insert_with(Default::default);
                if locale.locale.is_empty() {
                    content.clone_into(&mut locale.locale);
                }
                None
            }
            Action::AppendLocaleAlternate => {
                let locale = self.og.locale.get_or_insert_with(Default::default);
                locale.alternates.push(content.to_string());
                None
            }
        }
    }

    fn set_scalar(&mut self, field: ScalarField, content: &str) {
        let slot = self.og.scalar_mut(field);
        if slot.is_empty() {
            content.clone_into(slot);
        }
    }

    fn append(&mut self, kind: MediaKind, url: &str) {
        let limit = self.options.max_media_items;
        let truncated = &mut self.truncated[kind.index()];
        *truncated = match kind {
            MediaKind::Image => append_entity(&mut self.og.images, url, limit),
            MediaKind::Video => append_entity(&mut self.og.videos, url, limit),
            MediaKind::Audio => append_entity(&mut self.og.audios, url, limit),
        };
        if *truncated {
            trace!(?kind, url, "media limit reached, dropping entity");
        }
    }

    fn set_detail(
        &mut self,
        kind: MediaKind,
        field: DetailField,
        content: &str,
    ) -> Option<Violation> {
        if self.truncated[kind.index()] {
            return None;
        }
        let update = match kind {
            MediaKind::Image => set_last_detail(&mut self.og.images, field, content),
            MediaKind::Video => set_last_detail(&mut self.og.videos, field, content),
            MediaKind::Audio => set_last_detail(&mut self.og.audios, field, content),
        };
        match update {
            None => Some(Violation::Orphan),
            Some(DetailUpdate::Applied | DetailUpdate::AlreadySet) => None,
            Some(DetailUpdate::InvalidNumber) => Some(Violation::InvalidNumber),
            Some(DetailUpdate::Unsupported) => Some(Violation::Unknown),
        }
    }
}

/// Append an entity unless the list is full. Returns whether it was dropped.
fn append_entity<T: Entity>(list: &mut Vec<T>, url: &str, limit: Option<usize>) -> bool {
    if limit.is_some_and(|max| list.len() >= max) {
        return true;
    }
    list.push(T::with_url(url));
    false
}

/// Apply a detail to the last entity, or `None` when the list is empty.
fn set_last_detail<T: Entity>(
    list: &mut [T],
    field: DetailField,
    content: &str,
) -> Option<DetailUpdate> {
    list.last_mut().map(|entity| entity.set_detail(field, content))
}
