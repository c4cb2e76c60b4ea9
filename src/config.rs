use std::path::Path;

use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Json, Serialized},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RelayError;

/// Environment variable naming the JSON config file.
pub const CONFIG_PATH_ENV: &str = "RELAY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const ENV_PREFIX: &str = "RELAY_";

/// Runtime configuration, layered as defaults < `config.json` < `RELAY_*` env.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub loglevel: String,

    /// Global switch for not-safe content. Checked before any provider is contacted.
    pub allow_nsfw: bool,

    /// Credential forwarded to credential-gated providers when the caller sends none.
    pub hentaicord_token: Option<String>,

    /// Image handed back to clients when every provider fails.
    pub fallback_image_url: String,

    pub image_proxy_timeout_secs: u64,

    pub waifu_pics_api_url: Url,
    pub nekos_api_url: Url,
    pub hentaicord_api_url: Url,
    pub waifu_im_api_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            loglevel: "info".to_string(),
            allow_nsfw: true,
            hentaicord_token: None,
            fallback_image_url: "/background".to_string(),
            image_proxy_timeout_secs: 10,
            waifu_pics_api_url: static_url("https://api.waifu.pics"),
            nekos_api_url: static_url("https://nekos.best/api/v2"),
            hentaicord_api_url: static_url("https://api.hentaicord.net"),
            waifu_im_api_url: static_url("https://waifu.im/api"),
        }
    }
}

impl Config {
    /// Load from the file named by `RELAY_CONFIG` (or `config.json`) and the environment.
    pub fn load() -> Result<Self, RelayError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let cfg: Config = Self::figment(path).extract()?;
        Ok(cfg)
    }

    /// The layered provider stack. A missing file contributes nothing.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(LegacyKeys(Json::file(path)))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configured credential, ignoring blank values.
    pub fn credential(&self) -> Option<&str> {
        self.hentaicord_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Spellings used by older `config.json` files, mapped to the field names.
const LEGACY_KEYS: &[(&str, &str)] = &[
    ("allowNsfw", "allow_nsfw"),
    ("hentaicordToken", "hentaicord_token"),
    ("fallbackImageUrl", "fallback_image_url"),
    ("imageProxyTimeoutSecs", "image_proxy_timeout_secs"),
    ("waifuPicsApiUrl", "waifu_pics_api_url"),
    ("nekosApiUrl", "nekos_api_url"),
    ("hentaicordApiUrl", "hentaicord_api_url"),
    ("waifuImApiUrl", "waifu_im_api_url"),
];

/// Renames camel-case keys of the wrapped provider so they merge over the
/// defaults instead of sitting next to them. The snake-case key wins when a
/// source carries both.
pub struct LegacyKeys<P>(pub P);

impl<P: Provider> Provider for LegacyKeys<P> {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let mut data = self.0.data()?;
        for dict in data.values_mut() {
            for (legacy, key) in LEGACY_KEYS {
                if let Some(value) = dict.remove(*legacy) {
                    dict.entry(key.to_string()).or_insert(value);
                }
            }
        }
        Ok(data)
    }
}

fn static_url(s: &'static str) -> Url {
    Url::parse(s).unwrap_or_else(|e| panic!("invalid built-in url {s}: {e}"))
}
