//! CommonMark renderer.
//!
//! Converts a `MarkdownDoc` into plain CommonMark text. Blocks are separated
//! by exactly one blank line and the output carries no trailing newline.

use crate::types::{Block, LinkItem, MarkdownDoc};

/// Render a `MarkdownDoc` as CommonMark markdown.
pub fn to_markdown(doc: &MarkdownDoc) -> String {
    let parts: Vec<String> = doc.blocks.iter().map(render_block).collect();
    parts.join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            let prefix = "#".repeat(*level as usize);
            format!("{prefix} {text}")
        }

        Block::Paragraph { content } => content.clone(),

        Block::LinkList { items } => {
            let lines: Vec<String> = items.iter().map(render_link_item).collect();
            lines.join("\n")
        }

        Block::Rule => "---".to_string(),

        Block::Emphasis { content } => format!("*{content}*"),
    }
}

fn render_link_item(item: &LinkItem) -> String {
    let link = format!("[{}]({})", item.text, item.href);
    match &item.prefix {
        Some(p) => format!("- {p}: {link}"),
        None => format!("- {link}"),
    }
}
