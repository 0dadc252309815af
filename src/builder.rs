//! Programmatic markdown document builder.
//!
//! The [`MarkdownDocBuilder`] provides a fluent API for assembling a
//! [`MarkdownDoc`] block by block. Rendering is handled separately by
//! [`crate::render_md::to_markdown`].

use crate::types::{Block, LinkItem, MarkdownDoc};

// -----------------------------------------------------------------------
// MarkdownDocBuilder
// -----------------------------------------------------------------------

/// Fluent builder for constructing `MarkdownDoc` documents.
///
/// # Example
///
/// ```
/// use teslavia_site::builder::MarkdownDocBuilder;
/// use teslavia_site::types::LinkItem;
///
/// let doc = MarkdownDocBuilder::new()
///     .heading(1, "Welcome")
///     .links(vec![LinkItem::new("About", "/about.md")])
///     .build();
///
/// assert_eq!(doc.blocks.len(), 2);
/// ```
pub struct MarkdownDocBuilder {
    blocks: Vec<Block>,
}

impl Default for MarkdownDocBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownDocBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        MarkdownDocBuilder { blocks: Vec::new() }
    }

    /// Add a heading. Levels outside `1..=6` are clamped.
    pub fn heading(mut self, level: u8, text: &str) -> Self {
        self.blocks.push(Block::Heading {
            level: level.clamp(1, 6),
            text: text.to_string(),
        });
        self
    }

    /// Add a paragraph.
    pub fn paragraph(mut self, content: &str) -> Self {
        self.blocks.push(Block::Paragraph {
            content: content.to_string(),
        });
        self
    }

    /// Add a bulleted link list. Empty lists are skipped.
    pub fn links(mut self, items: Vec<LinkItem>) -> Self {
        if !items.is_empty() {
            self.blocks.push(Block::LinkList { items });
        }
        self
    }

    /// Add a heading followed by a link list, skipping both when `items` is empty.
    pub fn link_section(self, level: u8, title: &str, items: Vec<LinkItem>) -> Self {
        if items.is_empty() {
            return self;
        }
        self.heading(level, title).links(items)
    }

    /// Add a thematic break.
    pub fn rule(mut self) -> Self {
        self.blocks.push(Block::Rule);
        self
    }

    /// Add an emphasized (italic) paragraph.
    pub fn emphasis(mut self, content: &str) -> Self {
        self.blocks.push(Block::Emphasis {
            content: content.to_string(),
        });
        self
    }

    /// Consume the builder and produce the document.
    pub fn build(self) -> MarkdownDoc {
        MarkdownDoc {
            blocks: self.blocks,
        }
    }
}
