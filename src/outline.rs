//! Structural outline of a markdown document.
//!
//! Markdown is parsed with `pulldown-cmark`; the outline lists every heading
//! and every link together with the section it appears in. A thematic break
//! closes the current section, so trailing notes are not attributed to the
//! last heading.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub headings: Vec<OutlineHeading>,
    pub links: Vec<OutlineLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineHeading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineLink {
    /// Text of the enclosing heading, `None` outside any section.
    pub section: Option<String>,
    pub text: String,
    pub href: String,
}

impl Outline {
    /// Headings of exactly `level`.
    pub fn headings_at(&self, level: u8) -> impl Iterator<Item = &OutlineHeading> {
        self.headings.iter().filter(move |h| h.level == level)
    }

    /// Links whose enclosing heading is `section`.
    pub fn links_in<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a OutlineLink> {
        self.links
            .iter()
            .filter(move |l| l.section.as_deref() == Some(section))
    }
}

/// Build the outline of a markdown string.
pub fn outline(markdown: &str) -> Outline {
    let mut out = Outline::default();
    let mut section: Option<String> = None;
    // Text accumulators for the heading or link currently open.
    let mut heading: Option<(u8, String)> = None;
    let mut link: Option<(String, String)> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((heading_level(level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = heading.take() {
                    section = Some(text.clone());
                    out.headings.push(OutlineHeading { level, text });
                }
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                link = Some((dest_url.to_string(), String::new()));
            }
            Event::End(TagEnd::Link) => {
                if let Some((href, text)) = link.take() {
                    out.links.push(OutlineLink {
                        section: section.clone(),
                        text,
                        href,
                    });
                }
            }
            Event::Rule => section = None,
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, text)) = link.as_mut() {
                    text.push_str(&t);
                }
                if let Some((_, text)) = heading.as_mut() {
                    text.push_str(&t);
                }
            }
            _ => {}
        }
    }

    out
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
