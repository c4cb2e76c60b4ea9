use std::collections::{BTreeMap, BTreeSet};

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use tracing::warn;

use crate::api::ProviderApi;
use crate::middleware::ProviderCredential;
use crate::router::RelayState;
use crate::service::Resolution;
use crate::types::responses::{ContentKind, FALLBACK_SOURCE, ImageResponse};
use crate::RelayError;

/// GET /waifu-proxy/{kind}/{category}
pub async fn waifu_proxy_handler(
    State(state): State<RelayState>,
    Path((kind, category)): Path<(String, String)>,
    ProviderCredential(credential): ProviderCredential,
) -> Result<Json<ImageResponse>, RelayError> {
    let kind: ContentKind = kind.parse()?;
    let credential = state.credential_or_default(credential);

    let resolution = state
        .resolver
        .resolve(&category, kind.is_safe(), credential.as_deref())
        .await;

    match resolution {
        Resolution::Found(image) => Ok(Json(ImageResponse {
            success: true,
            url: Some(image.url),
            source: image.provider,
        })),
        Resolution::Exhausted => Ok(Json(ImageResponse {
            success: false,
            url: Some(state.fallback_image.to_string()),
            source: FALLBACK_SOURCE.to_string(),
        })),
        Resolution::NsfwDisabled => Err(RelayError::NsfwDisabled),
    }
}

/// GET /categories/{class}: `sfw`/`nsfw`, or a provider-specific class.
pub async fn categories_handler(
    State(state): State<RelayState>,
    Path(class): Path<String>,
) -> Json<BTreeMap<String, BTreeSet<String>>> {
    let listing = match class.parse::<ContentKind>() {
        Ok(kind) => state.resolver.list_categories(kind.is_safe()),
        Err(_) => state.resolver.list_class_categories(&class),
    };
    Json(listing)
}

/// GET /categories/remote/{provider}: the provider's own catalog, `{}` without credential.
pub async fn remote_categories_handler(
    State(state): State<RelayState>,
    Path(name): Path<String>,
    ProviderCredential(credential): ProviderCredential,
) -> Result<Json<BTreeMap<String, Value>>, RelayError> {
    let provider = state
        .resolver
        .table()
        .get(&name)
        .filter(|p| p.catalog_path.is_some())
        .ok_or_else(|| RelayError::UnknownProvider(name.clone()))?;

    let Some(credential) = state.credential_or_default(credential) else {
        return Ok(Json(BTreeMap::new()));
    };

    let categories = ProviderApi::fetch_catalog(&state.client, provider, &credential)
        .await
        .unwrap_or_else(|e| {
            warn!(provider = %name, error = %e, "failed to fetch remote categories");
            BTreeMap::new()
        });
    Ok(Json(categories))
}
