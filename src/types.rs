//! Document model for the markdown rendition of the site.

use serde::Deserialize;

/// A markdown document: an ordered list of blocks separated by blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDoc {
    pub blocks: Vec<Block>,
}

/// A single top-level markdown block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// ATX heading, `level` in `1..=6`.
    Heading { level: u8, text: String },
    /// Plain paragraph, emitted verbatim.
    Paragraph { content: String },
    /// Bulleted list where every item is a link.
    LinkList { items: Vec<LinkItem> },
    /// Thematic break (`---`).
    Rule,
    /// Paragraph wrapped in `*...*`. Inline markdown inside is kept as-is.
    Emphasis { content: String },
}

/// One entry of a link list.
///
/// Renders as `- [text](href)`, or `- prefix: [text](href)` when a prefix
/// is present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkItem {
    #[serde(default)]
    pub prefix: Option<String>,
    pub text: String,
    pub href: String,
}

impl LinkItem {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        LinkItem {
            prefix: None,
            text: text.into(),
            href: href.into(),
        }
    }

    pub fn prefixed(
        prefix: impl Into<String>,
        text: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        LinkItem {
            prefix: Some(prefix.into()),
            text: text.into(),
            href: href.into(),
        }
    }

    /// `true` for site-relative links (`/about.md`).
    pub fn is_relative(&self) -> bool {
        self.href.starts_with('/') && !self.href.starts_with("//")
    }

    /// `true` for absolute `http(s)://` links.
    pub fn is_absolute(&self) -> bool {
        is_absolute_url(&self.href)
    }
}

pub(crate) fn is_absolute_url(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}
