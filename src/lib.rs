//! # ogp-meta
//!
//! Extract [Open Graph protocol](https://ogp.me/) metadata from HTML documents
//! and render it back to `<meta>` tags.
//!
//! ## Features
//!
//! - Fold `og:*` meta tags into a typed [`Opengraph`] object
//! - Images, videos and audio files with their structured properties
//! - Lenient by default: duplicates, orphan properties and malformed
//!   numbers never abort extraction
//! - Optional strict mode reporting non-conforming properties
//! - Render an [`Opengraph`] object to an ordered list of meta elements
//! - Tokenizer-agnostic core; an html5ever-based HTML front end is bundled
//!
//! ## Quick Start
//!
//! ```rust
//! use ogp_meta::Opengraph;
//!
//! let html = r#"
//!     <html><head>
//!         <meta property="og:title" content="The Rock">
//!         <meta property="og:image" content="https://example.com/rock.jpg">
//!         <meta property="og:image:width" content="400">
//!     </head></html>
//! "#;
//!
//! let og = Opengraph::from_string(html).unwrap();
//! assert_eq!(og.title, "The Rock");
//! assert_eq!(og.images[0].width, 400);
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use ogp_meta::{Opengraph, OpengraphMedia};
//!
//! let og = Opengraph {
//!     title: "The Rock".to_string(),
//!     images: vec![OpengraphMedia::new("https://example.com/rock.jpg")],
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     og.to_html(),
//!     "<meta property=\"og:title\" content=\"The Rock\"/>\n\
//!      <meta property=\"og:image\" content=\"https://example.com/rock.jpg\"/>"
//! );
//! ```
//!
//! ## Custom Tokenizers
//!
//! Any tokenizer can feed [`extract`] by yielding [`TagEvent`] results. The
//! bundled HTML front end can be disabled:
//!
//! ```toml
//! [dependencies]
//! ogp-meta = { version = "0.1", default-features = false }
//! ```

mod error;
mod event;
mod extract;
mod opengraph;
mod property;
mod render;

#[cfg(feature = "html")]
mod html;

pub use error::{Error, Result};
pub use event::{Tag, TagEvent};
pub use extract::{
    ExtractOptions, Extractor, collect_pairs, extract, fold, fold_strict, fold_with,
};
pub use opengraph::{Metadata, Opengraph, OpengraphAudio, OpengraphLocale, OpengraphMedia};
pub use property::{Action, DetailField, MediaKind, PREFIX, ScalarField, detail_property};
pub use render::{MetaElement, render};

#[cfg(feature = "html")]
pub use html::tag_events;
