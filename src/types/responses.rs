use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RelayError;
use crate::providers::{NOT_SAFE_CLASS, SAFE_CLASS};

/// Source reported when the configured fallback image is served.
pub const FALLBACK_SOURCE: &str = "fallback";

/// The `{type}` path segment of the image routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Sfw,
    Nsfw,
}

impl ContentKind {
    pub fn is_safe(self) -> bool {
        matches!(self, ContentKind::Sfw)
    }
}

impl FromStr for ContentKind {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SAFE_CLASS => Ok(ContentKind::Sfw),
            NOT_SAFE_CLASS => Ok(ContentKind::Nsfw),
            other => Err(RelayError::InvalidContentType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageResponse {
    pub success: bool,
    pub url: Option<String>,
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub message: String,
}

impl CommandResponse {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            url: None,
            message: message.into(),
        }
    }
}
