use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::error::RelayError;
use crate::handlers::{commands, files, misc, waifu};
use crate::providers::{ProviderTable, default_table};
use crate::service::{FileStore, Resolver};

/// Shared handler state.
#[derive(Clone)]
pub struct RelayState {
    pub resolver: Resolver,
    pub client: reqwest::Client,
    pub files: FileStore,
    /// Used when the caller sends no credential of its own.
    pub credential: Option<Arc<str>>,
    pub fallback_image: Arc<str>,
    pub image_proxy_timeout: Duration,
}

impl RelayState {
    /// State over the built-in provider table.
    pub fn new(cfg: &Config) -> Result<Self, RelayError> {
        Self::with_table(cfg, default_table(cfg))
    }

    pub fn with_table(cfg: &Config, table: ProviderTable) -> Result<Self, RelayError> {
        let client = build_client()?;
        let resolver = Resolver::new(Arc::new(table), client.clone(), cfg.allow_nsfw);
        Ok(Self {
            resolver,
            client,
            files: FileStore::new(),
            credential: cfg.credential().map(Arc::from),
            fallback_image: Arc::from(cfg.fallback_image_url.as_str()),
            image_proxy_timeout: Duration::from_secs(cfg.image_proxy_timeout_secs),
        })
    }

    /// Request credential first, configured credential second.
    pub fn credential_or_default(&self, from_request: Option<String>) -> Option<String> {
        from_request.or_else(|| self.credential.as_deref().map(str::to_string))
    }
}

/// One pooled client for every upstream; per-provider timeouts are set per request.
pub fn build_client() -> Result<reqwest::Client, RelayError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("waifu-relay/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(5))
        .build()?)
}

pub fn relay_router(state: RelayState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(misc::root_handler))
        .route("/waifu-proxy/{kind}/{category}", get(waifu::waifu_proxy_handler))
        .route("/categories/{class}", get(waifu::categories_handler))
        .route(
            "/categories/remote/{provider}",
            get(waifu::remote_categories_handler),
        )
        .route("/commands", post(commands::commands_handler))
        .route("/files", get(files::list_mock_dir_handler))
        .route("/files/content", get(files::mock_file_content_handler))
        .route(
            "/files/",
            get(files::list_files_handler).post(files::create_file_handler),
        )
        .route(
            "/files/{file_id}",
            get(files::read_file_handler).put(files::update_file_handler),
        )
        .route("/search", get(misc::search_handler))
        .route("/background", get(misc::background_handler))
        .route("/image-proxy", get(misc::image_proxy_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
