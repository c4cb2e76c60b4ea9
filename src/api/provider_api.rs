use std::collections::BTreeMap;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::RelayError;
use crate::providers::Provider;

/// Stateless adapter issuing one request against one provider.
pub struct ProviderApi;

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    categories: BTreeMap<String, Value>,
}

impl ProviderApi {
    /// Single attempt: GET the category endpoint and extract the image URL.
    /// Any transport, status or body problem comes back as `Err`.
    pub async fn fetch_image(
        client: &reqwest::Client,
        provider: &Provider,
        class: &str,
        category: &str,
        credential: Option<&str>,
    ) -> Result<String, RelayError> {
        let url = provider.request_url(class, category)?;
        let mut req = client
            .get(url.clone())
            .timeout(provider.timeout)
            .header(ACCEPT, "application/json");
        if provider.requires_credential() {
            let token = credential.ok_or(RelayError::MissingCredential)?;
            req = req.header(AUTHORIZATION, token);
        }

        debug!(provider = %provider.name, %url, "requesting image");
        let resp = req.send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(RelayError::UpstreamStatus(status));
        }
        let body = resp.bytes().await?;
        provider.shape.extract_url(&body)
    }

    /// Provider-side category listing (`{"categories": {...}}`).
    pub async fn fetch_catalog(
        client: &reqwest::Client,
        provider: &Provider,
        credential: &str,
    ) -> Result<BTreeMap<String, Value>, RelayError> {
        let url = provider
            .catalog_url()
            .ok_or_else(|| RelayError::UnknownProvider(provider.name.clone()))??;

        let resp = client
            .get(url)
            .timeout(provider.timeout)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, credential)
            .send()
            .await?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(RelayError::UpstreamStatus(status));
        }
        let catalog: CatalogResponse = serde_json::from_slice(&resp.bytes().await?)?;
        Ok(catalog.categories)
    }
}
