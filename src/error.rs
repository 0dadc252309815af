use std::path::PathBuf;

/// Errors raised while loading or validating a [`crate::site::SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to read site config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid site config: {0}")]
    Invalid(String),
}
