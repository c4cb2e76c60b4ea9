use axum::{
    Json,
    body::Body,
    extract::{Query, State},
    http::{HeaderValue, header::CONTENT_TYPE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

use crate::router::RelayState;
use crate::RelayError;

const SEARCH_URL: &str = "https://www.google.com/search";
const DEFAULT_IMAGE_TYPE: &str = "image/gif";

const BACKGROUND_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg xmlns="http://www.w3.org/2000/svg" width="1920" height="1080" viewBox="0 0 1920 1080">
    <defs>
        <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" style="stop-color:#ff9a9e;stop-opacity:1" />
            <stop offset="100%" style="stop-color:#fad0c4;stop-opacity:1" />
        </linearGradient>
    </defs>
    <rect width="100%" height="100%" fill="url(#grad)" />
    <text x="50%" y="50%" font-family="Arial" font-size="48" fill="#ffffff" text-anchor="middle" dominant-baseline="middle">LoveOS</text>
    <text x="50%" y="58%" font-family="Arial" font-size="24" fill="#ffffff" text-anchor="middle" dominant-baseline="middle">Your personal love companion</text>
</svg>"##;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageProxyQuery {
    pub url: String,
}

pub async fn root_handler() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

/// GET /search?q=... -> redirect to a web search.
pub async fn search_handler(Query(query): Query<SearchQuery>) -> Result<Redirect, RelayError> {
    let target = Url::parse_with_params(SEARCH_URL, &[("q", query.q.as_str())])?;
    Ok(Redirect::temporary(target.as_str()))
}

/// GET /background -> desktop wallpaper.
pub async fn background_handler() -> impl IntoResponse {
    ([(CONTENT_TYPE, "image/svg+xml")], BACKGROUND_SVG)
}

/// GET /image-proxy?url=... -> stream a remote image through this origin.
pub async fn image_proxy_handler(
    State(state): State<RelayState>,
    Query(query): Query<ImageProxyQuery>,
) -> Result<Response, RelayError> {
    let target = Url::parse(&query.url)?;
    let upstream = state
        .client
        .get(target)
        .timeout(state.image_proxy_timeout)
        .send()
        .await?;

    let status = upstream.status();
    if !status.is_success() {
        return Err(RelayError::UpstreamStatus(status));
    }
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_IMAGE_TYPE));

    Ok((
        [(CONTENT_TYPE, content_type)],
        Body::from_stream(upstream.bytes_stream()),
    )
        .into_response())
}
