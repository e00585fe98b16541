//! HTML tokenization
//!
//! Drives the extractor from the html5ever tokenizer. No tree is built, so
//! tags are reported exactly in source order, wherever they appear.

use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::Path;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use crate::error::{Error, Result};
use crate::event::{Tag, TagEvent};
use crate::extract::{ExtractOptions, Extractor};
use crate::opengraph::Opengraph;

/// Collects tokenizer output as tag events.
#[derive(Default)]
struct EventSink {
    events: Vec<TagEvent>,
}

impl EventSink {
    fn push_text(&mut self, text: &str) {
        if let Some(TagEvent::Text(last)) = self.events.last_mut() {
            last.push_str(text);
        } else {
            self.events.push(TagEvent::Text(text.to_string()));
        }
    }
}

/// Tokenizer state to switch to after a start tag, for elements whose
/// content is not markup. `noscript` is tokenized as markup.
fn raw_state(name: &str) -> Option<TokenSinkResult<()>> {
    let state = match name {
        "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => return None,
    };
    Some(state)
}

impl TokenSink for EventSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => {
                let name = tag.name.to_string();
                match tag.kind {
                    TagKind::StartTag => {
                        let raw = if tag.self_closing {
                            None
                        } else {
                            raw_state(&name)
                        };
                        let event = Tag {
                            name,
                            attrs: tag
                                .attrs
                                .iter()
                                .map(|attr| {
                                    (attr.name.local.to_string(), attr.value.to_string())
                                })
                                .collect(),
                        };
                        self.events.push(if tag.self_closing {
                            TagEvent::SelfClosing(event)
                        } else {
                            TagEvent::Start(event)
                        });
                        if let Some(raw) = raw {
                            return raw;
                        }
                    }
                    TagKind::EndTag => self.events.push(TagEvent::End(name)),
                }
            }
            Token::CharacterTokens(text) => self.push_text(&text),
            Token::CommentToken(comment) => {
                self.events.push(TagEvent::Comment(comment.to_string()));
            }
            Token::NullCharacterToken
            | Token::DoctypeToken(_)
            | Token::ParseError(_)
            | Token::EOFToken => {}
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize an HTML document, yielding tag events in source order.
///
/// Start tags written with `/>` come out as `SelfClosing`, all others as
/// `Start`. Content of `script`, `style`, `title` and similar elements is
/// reported as text. Doctypes are skipped.
pub fn tag_events(html: &str) -> impl Iterator<Item = TagEvent> {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(EventSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    tokenizer.sink.events.into_iter()
}

impl Extractor {
    /// Extract OpenGraph metadata from an HTML string.
    pub fn extract_html(&self, html: &str) -> Result<Opengraph> {
        self.extract(tag_events(html).map(Ok::<_, Error>))
    }
}

impl Opengraph {
    /// Parse OpenGraph metadata from an HTML string.
    ///
    /// # Example
    /// ```
    /// use ogp_meta::Opengraph;
    ///
    /// let html = r#"<html><head><meta property="og:title" content="Hello"></head></html>"#;
    /// let og = Opengraph::from_string(html).unwrap();
    /// assert_eq!(og.title, "Hello");
    /// ```
    pub fn from_string(html: &str) -> Result<Self> {
        Extractor::new().extract_html(html)
    }

    /// Parse OpenGraph metadata from an HTML string with custom options.
    pub fn from_string_with_options(html: &str, options: &ExtractOptions) -> Result<Self> {
        Extractor::with_options(options.clone()).extract_html(html)
    }

    /// Parse OpenGraph metadata from a reader.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; read failures are
    /// returned as [`Error::Io`].
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_string(&decode(&bytes))
    }

    /// Parse OpenGraph metadata from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_string(&decode(&bytes))
    }
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
