//! `teslavia-site` — the markdown-only rendition of the teslavia blog.
//!
//! The crate builds the site's index as a small markdown document and serves
//! it over HTTP with a markdown content type and a one-hour cache directive.
//! It also models the optional third-party widget global the HTML site relies
//! on.
//!
//! # Quick start
//!
//! ```
//! let md = teslavia_site::site::INDEX_MARKDOWN.as_str();
//! let outline = teslavia_site::outline(md);
//! assert_eq!(outline.headings_at(2).count(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod outline;
pub mod render_md;
#[cfg(feature = "axum")]
pub mod serve;
pub mod site;
pub mod types;
pub mod widget;

pub use builder::MarkdownDocBuilder;
pub use error::*;
pub use outline::{Outline, outline};
pub use site::{INDEX_MARKDOWN, SiteConfig};
pub use types::*;

impl MarkdownDoc {
    /// Render this document as CommonMark markdown.
    pub fn to_markdown(&self) -> String {
        render_md::to_markdown(self)
    }

    /// Outline of the rendered document.
    pub fn outline(&self) -> Outline {
        outline::outline(&self.to_markdown())
    }
}
