use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::ProviderApi;
use crate::providers::{ProviderTable, class_key};

/// Image located by one of the providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub url: String,
    pub provider: String,
}

/// Outcome of one resolution. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedImage),
    /// No candidate provider produced an image.
    Exhausted,
    /// Not-safe content was requested while it is disabled; nothing was contacted.
    NsfwDisabled,
}

/// Tries providers in priority order and returns the first image found.
#[derive(Clone)]
pub struct Resolver {
    table: Arc<ProviderTable>,
    client: reqwest::Client,
    allow_nsfw: bool,
}

impl Resolver {
    pub fn new(table: Arc<ProviderTable>, client: reqwest::Client, allow_nsfw: bool) -> Self {
        Self {
            table,
            client,
            allow_nsfw,
        }
    }

    pub fn table(&self) -> &ProviderTable {
        &self.table
    }

    pub async fn resolve(
        &self,
        category: &str,
        safe: bool,
        credential: Option<&str>,
    ) -> Resolution {
        if !safe && !self.allow_nsfw {
            info!(category, "nsfw request rejected: disabled by configuration");
            return Resolution::NsfwDisabled;
        }

        let class = class_key(safe);
        let credential = credential.map(str::trim).filter(|c| !c.is_empty());
        let candidates = self.table.candidates(class, category);
        if candidates.is_empty() {
            debug!(category, class, "no provider serves this category");
            return Resolution::Exhausted;
        }

        for provider in candidates {
            if provider.requires_credential() && credential.is_none() {
                debug!(provider = %provider.name, "skipping provider: no credential supplied");
                continue;
            }

            match ProviderApi::fetch_image(&self.client, provider, class, category, credential)
                .await
            {
                Ok(url) => {
                    info!(provider = %provider.name, category, class, "image resolved");
                    return Resolution::Found(ResolvedImage {
                        url,
                        provider: provider.name.clone(),
                    });
                }
                Err(e) => {
                    warn!(
                        provider = %provider.name,
                        category,
                        class,
                        error = %e,
                        "provider attempt failed; trying next"
                    );
                }
            }
        }

        warn!(category, class, "all providers exhausted");
        Resolution::Exhausted
    }

    /// Each provider's categories for the safety flag. No I/O.
    pub fn list_categories(&self, safe: bool) -> BTreeMap<String, BTreeSet<String>> {
        self.table.categories_for(class_key(safe))
    }

    /// Same as `list_categories`, for provider-specific classes like `hentai`.
    pub fn list_class_categories(&self, class: &str) -> BTreeMap<String, BTreeSet<String>> {
        self.table.categories_for(class)
    }
}
