//! Site configuration and the index document.
//!
//! [`SiteConfig::default`] carries the teslavia values; a TOML file may
//! override any subset of them.
//!
//! ```
//! use teslavia_site::site::SiteConfig;
//!
//! let md = SiteConfig::default().index_markdown();
//! assert!(md.starts_with("# teslavia\n\n"));
//! ```

use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::builder::MarkdownDocBuilder;
use crate::error::SiteError;
use crate::types::{LinkItem, MarkdownDoc, is_absolute_url};

/// The default index document, rendered once.
pub static INDEX_MARKDOWN: LazyLock<String> =
    LazyLock::new(|| SiteConfig::default().index_markdown());

/// Everything the index document is rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, used as the level-1 heading.
    pub name: String,
    /// One-line description under the title.
    pub description: String,
    /// Site-relative navigation links.
    pub nav: Vec<LinkItem>,
    /// Absolute external links.
    pub links: Vec<LinkItem>,
    /// URL of the full HTML site.
    pub canonical_url: String,
    /// Link text for the canonical site in the closing note.
    pub canonical_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            name: "teslavia".into(),
            description: "Personal blog and notes by teslavia.".into(),
            nav: vec![
                LinkItem::new("About", "/about.md"),
                LinkItem::new("Recent Posts", "/posts.md"),
                LinkItem::new("Archives", "/archives.md"),
                LinkItem::new("RSS Feed", "/rss.xml"),
            ],
            links: vec![LinkItem::prefixed(
                "GitHub",
                "@teslavia",
                "https://github.com/teslavia",
            )],
            canonical_url: "https://teslavia.github.io".into(),
            canonical_label: "teslavia.github.io".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let text = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), name = %config.name, "loaded site config");
        Ok(config)
    }

    /// Check that every field can be rendered into a well-formed index.
    ///
    /// Hrefs may not contain whitespace or `()<>`; link text, prefixes and
    /// the canonical label may not contain `[`, `]` or line breaks; `name`
    /// and `description` must each fit on one line.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.trim().is_empty() {
            return Err(SiteError::Invalid("`name` must not be empty".into()));
        }
        check_single_line("name", &self.name)?;
        check_single_line("description", &self.description)?;
        for item in &self.nav {
            check_item("nav", item)?;
            if !item.is_relative() {
                return Err(SiteError::Invalid(format!(
                    "nav link `{}` must be site-relative, got `{}`",
                    item.text, item.href
                )));
            }
        }
        for item in &self.links {
            check_item("links", item)?;
            if !item.is_absolute() {
                return Err(SiteError::Invalid(format!(
                    "external link `{}` must be absolute, got `{}`",
                    item.text, item.href
                )));
            }
        }
        if !is_absolute_url(&self.canonical_url) {
            return Err(SiteError::Invalid(format!(
                "`canonical_url` must be absolute, got `{}`",
                self.canonical_url
            )));
        }
        check_href("canonical_url", &self.canonical_url)?;
        check_link_text("canonical_label", &self.canonical_label)?;
        Ok(())
    }

    /// Assemble the index document.
    pub fn index_document(&self) -> MarkdownDoc {
        let label = if self.canonical_label.is_empty() {
            self.canonical_url.as_str()
        } else {
            self.canonical_label.as_str()
        };
        let note = format!(
            "This is the markdown-only version of {label}. Visit [{label}]({}) for the full experience.",
            self.canonical_url
        );

        let mut builder = MarkdownDocBuilder::new().heading(1, &self.name);
        if !self.description.is_empty() {
            builder = builder.paragraph(&self.description);
        }
        builder
            .link_section(2, "Navigation", self.nav.clone())
            .link_section(2, "Links", self.links.clone())
            .rule()
            .emphasis(&note)
            .build()
    }

    /// Render the index document as markdown.
    pub fn index_markdown(&self) -> String {
        crate::render_md::to_markdown(&self.index_document())
    }
}

fn check_item(section: &str, item: &LinkItem) -> Result<(), SiteError> {
    if item.text.trim().is_empty() || item.href.trim().is_empty() {
        return Err(SiteError::Invalid(format!(
            "{section} entries need both `text` and `href`"
        )));
    }
    check_link_text(section, &item.text)?;
    if let Some(prefix) = &item.prefix {
        check_link_text(section, prefix)?;
    }
    check_href(section, &item.href)
}

fn check_single_line(field: &str, value: &str) -> Result<(), SiteError> {
    if value.contains(['\n', '\r']) {
        return Err(SiteError::Invalid(format!(
            "`{field}` must be a single line"
        )));
    }
    Ok(())
}

fn check_link_text(field: &str, text: &str) -> Result<(), SiteError> {
    if text.contains(['[', ']', '\n', '\r']) {
        return Err(SiteError::Invalid(format!(
            "{field}: link text `{}` may not contain brackets or line breaks",
            text.escape_debug()
        )));
    }
    Ok(())
}

fn check_href(field: &str, href: &str) -> Result<(), SiteError> {
    if href
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>'))
    {
        return Err(SiteError::Invalid(format!(
            "{field}: href `{}` may not contain whitespace or `()<>`",
            href.escape_debug()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EXPECTED: &str = "# teslavia

Personal blog and notes by teslavia.

## Navigation

- [About](/about.md)
- [Recent Posts](/posts.md)
- [Archives](/archives.md)
- [RSS Feed](/rss.xml)

## Links

- GitHub: [@teslavia](https://github.com/teslavia)

---

*This is the markdown-only version of teslavia.github.io. Visit [teslavia.github.io](https://teslavia.github.io) for the full experience.*";

    #[test]
    fn default_renders_exact_document() {
        assert_eq!(SiteConfig::default().index_markdown(), EXPECTED);
        assert_eq!(INDEX_MARKDOWN.as_str(), EXPECTED);
    }

    #[test]
    fn default_validates() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml("name = \"notes\"\n").unwrap();
        assert_eq!(config.name, "notes");
        assert_eq!(config.nav, SiteConfig::default().nav);
        assert!(config.index_markdown().starts_with("# notes\n\nPersonal blog"));
    }

    #[test]
    fn toml_links_override() {
        let text = r#"
            canonical_url = "https://example.org"
            canonical_label = "example.org"

            [[nav]]
            text = "Home"
            href = "/index.md"

            [[links]]
            prefix = "Mastodon"
            text = "@me"
            href = "https://social.example/@me"
        "#;
        let md = SiteConfig::from_toml(text).unwrap().index_markdown();
        assert!(md.contains("## Navigation\n\n- [Home](/index.md)\n\n## Links"));
        assert!(md.contains("- Mastodon: [@me](https://social.example/@me)"));
        assert!(md.ends_with("Visit [example.org](https://example.org) for the full experience.*"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let config = SiteConfig {
            links: Vec::new(),
            ..SiteConfig::default()
        };
        let md = config.index_markdown();
        assert!(!md.contains("## Links"));
        assert!(md.contains("## Navigation"));
    }

    #[test]
    fn canonical_label_falls_back_to_url() {
        let config = SiteConfig {
            canonical_label: String::new(),
            ..SiteConfig::default()
        };
        assert!(config.index_markdown().contains(
            "version of https://teslavia.github.io. Visit [https://teslavia.github.io](https://teslavia.github.io)"
        ));
    }

    #[test]
    fn rejects_absolute_nav_link() {
        let err = SiteConfig::from_toml(
            "[[nav]]\ntext = \"Out\"\nhref = \"https://elsewhere.example\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn rejects_relative_external_link() {
        let err =
            SiteConfig::from_toml("[[links]]\ntext = \"gh\"\nhref = \"/github\"\n").unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = SiteConfig::from_toml("name = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn rejects_bad_canonical_url() {
        let err = SiteConfig::from_toml("canonical_url = \"teslavia.github.io\"\n").unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = SiteConfig::from_toml("name = ").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "description = \"Notes.\"\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.description, "Notes.");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }

    #[test]
    fn rejects_href_with_space() {
        let err = SiteConfig::from_toml("[[nav]]\ntext = \"About\"\nhref = \"/about me.md\"\n")
            .unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn rejects_href_with_paren() {
        let err = SiteConfig::from_toml(
            "[[links]]\ntext = \"gh\"\nhref = \"https://github.com/a)b\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn rejects_bracket_in_link_text() {
        let err =
            SiteConfig::from_toml("[[nav]]\ntext = \"a]b\"\nhref = \"/a.md\"\n").unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn rejects_bracket_in_prefix() {
        let err = SiteConfig::from_toml(
            "[[links]]\nprefix = \"[x\"\ntext = \"gh\"\nhref = \"https://github.com\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn rejects_multiline_name() {
        let err = SiteConfig::from_toml("name = \"a\\n## Links\"\n").unwrap_err();
        assert!(err.to_string().contains("single line"));
    }

    #[test]
    fn rejects_multiline_description() {
        let err = SiteConfig::from_toml("description = \"one\\r\\n# two\"\n").unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn rejects_bracket_in_canonical_label() {
        let err = SiteConfig::from_toml("canonical_label = \"x](y\"\n").unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn rejects_canonical_url_with_space() {
        let err =
            SiteConfig::from_toml("canonical_url = \"https://teslavia.github.io/a b\"\n")
                .unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
    }

    #[test]
    fn validated_links_keep_outline_shape() {
        let config = SiteConfig::from_toml(
            "name = \"notes: a-b_c\"\n[[nav]]\ntext = \"About me (short)\"\nhref = \"/about-me.md#top\"\n",
        )
        .unwrap();
        let o = crate::outline::outline(&config.index_markdown());
        assert_eq!(o.headings_at(2).count(), 2);
        let nav: Vec<_> = o.links_in("Navigation").collect();
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].text, "About me (short)");
        assert_eq!(nav[0].href, "/about-me.md#top");
        assert_eq!(o.links_in("Links").count(), 1);
    }
}
