use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use url::Url;

/// Per-request timeout used when a provider does not set its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const SAFE_CLASS: &str = "sfw";
pub const NOT_SAFE_CLASS: &str = "nsfw";

/// Maps the caller's safety flag onto a category-table key.
pub fn class_key(safe: bool) -> &'static str {
    if safe { SAFE_CLASS } else { NOT_SAFE_CLASS }
}

/// How a provider's JSON body carries the image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{"url": "..."}`
    SimpleObject,
    /// `{"results": [{"url": "..."}]}`
    ResultsArray,
    /// `{"images": [{"url": "..."}]}`
    ImagesArray,
    /// `{"image": "..."}`, request sent with an `Authorization` header.
    Credentialed,
}

impl ResponseShape {
    pub fn requires_credential(self) -> bool {
        matches!(self, ResponseShape::Credentialed)
    }
}

/// Declarative description of one upstream image API.
#[derive(Debug, Clone)]
pub struct Provider {
    pub name: String,
    pub base_url: Url,
    /// Appended to `base_url`; `{class}` and `{category}` are substituted.
    pub path_template: String,
    pub timeout: Duration,
    pub priority: u32,
    pub shape: ResponseShape,
    pub categories: BTreeMap<String, BTreeSet<String>>,
    /// Path of the provider's own category listing, if it has one.
    pub catalog_path: Option<String>,
}

impl Provider {
    pub fn new(name: impl Into<String>, base_url: Url, shape: ResponseShape) -> Self {
        Self {
            name: name.into(),
            base_url,
            path_template: "/{class}/{category}".to_string(),
            timeout: DEFAULT_TIMEOUT,
            priority: u32::MAX,
            shape,
            categories: BTreeMap::new(),
            catalog_path: None,
        }
    }

    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn path(mut self, template: impl Into<String>) -> Self {
        self.path_template = template.into();
        self
    }

    pub fn catalog(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Declare the categories served under `class`. Repeated calls accumulate.
    pub fn categories<I, S>(mut self, class: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .entry(class.into())
            .or_default()
            .extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn requires_credential(&self) -> bool {
        self.shape.requires_credential()
    }

    pub fn supports(&self, class: &str, category: &str) -> bool {
        self.categories
            .get(class)
            .is_some_and(|set| set.contains(category))
    }

    /// Full request URL for one category.
    pub fn request_url(&self, class: &str, category: &str) -> Result<Url, url::ParseError> {
        let path = self
            .path_template
            .replace("{class}", class)
            .replace("{category}", category);
        self.join(&path)
    }

    pub fn catalog_url(&self) -> Option<Result<Url, url::ParseError>> {
        self.catalog_path.as_deref().map(|p| self.join(p))
    }

    // `Url::join` would drop the last base segment (`/api/v2` + `hug` -> `/api/hug`),
    // so the path is concatenated textually.
    fn join(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}"))
    }
}

/// Immutable set of providers, kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ProviderTable {
    providers: Vec<Provider>,
}

impl ProviderTable {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Providers serving `category` under `class`, ascending by priority.
    /// The sort is stable, so equal priorities keep declaration order.
    pub fn candidates(&self, class: &str, category: &str) -> Vec<&Provider> {
        let mut found: Vec<&Provider> = self
            .providers
            .iter()
            .filter(|p| p.supports(class, category))
            .collect();
        found.sort_by_key(|p| p.priority);
        found
    }

    /// Every provider's category set for `class`; empty when a provider declares none.
    pub fn categories_for(&self, class: &str) -> BTreeMap<String, BTreeSet<String>> {
        self.providers
            .iter()
            .map(|p| {
                let set = p.categories.get(class).cloned().unwrap_or_default();
                (p.name.clone(), set)
            })
            .collect()
    }
}
