//! Axum route handlers for the markdown rendition of the site.
//!
//! Enable with `features = ["axum"]` in Cargo.toml (on by default).
//!
//! # Usage
//!
//! ```ignore
//! use axum::routing::get;
//!
//! let app = axum::Router::new()
//!     .route("/index.md", get(teslavia_site::serve::index_md));
//! ```

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::site::INDEX_MARKDOWN;

pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";
pub const MARKDOWN_CACHE_CONTROL: &str = "public, max-age=3600";

/// Serve the default index document.
///
/// The request is never inspected; every call yields the same response.
pub async fn index_md() -> Response {
    markdown_response(INDEX_MARKDOWN.as_str())
}

/// Serve the document held in router state.
async fn configured_index(State(markdown): State<Bytes>) -> Response {
    markdown_response(markdown)
}

/// Wrap a markdown body with status 200, its content type, and a one-hour
/// public cache directive.
pub fn markdown_response(body: impl Into<Body>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE),
            (header::CACHE_CONTROL, MARKDOWN_CACHE_CONTROL),
        ],
        body.into(),
    )
        .into_response()
}

/// Router serving `markdown` at `/index.md` and `/`.
pub fn router(markdown: impl Into<String>) -> Router {
    Router::new()
        .route("/", get(configured_index))
        .route("/index.md", get(configured_index))
        .with_state(Bytes::from(markdown.into()))
}
