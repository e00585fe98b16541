//! Error types for ogp-meta

use thiserror::Error;

/// Errors that can occur when extracting OpenGraph metadata.
///
/// Only [`Error::Io`] is produced by the default (lenient) extraction. The
/// remaining variants are reported when strict mode is enabled through
/// [`ExtractOptions::strict`](crate::ExtractOptions::strict).
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read the document
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// An `og:` property that is not part of the recognized vocabulary
    #[error("unknown OpenGraph property: {0}")]
    UnknownProperty(String),

    /// A detail property with no preceding entity to attach to
    #[error("{0} appears before any entity it could describe")]
    OrphanProperty(String),

    /// A width or height that is not a decimal unsigned integer
    #[error("invalid number for {property}: {content:?}")]
    InvalidNumber {
        /// The property carrying the value
        property: String,
        /// The raw content that failed to parse
        content: String,
    },
}

/// Result type alias for ogp-meta operations.
pub type Result<T> = std::result::Result<T, Error>;
