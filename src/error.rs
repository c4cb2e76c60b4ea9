use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RelayError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("Upstream returned no image")]
    EmptyPayload,

    #[error("Provider requires a credential")]
    MissingCredential,

    #[error("NSFW content is disabled")]
    NsfwDisabled,

    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            RelayError::Config(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
            RelayError::NsfwDisabled => {
                let status = StatusCode::FORBIDDEN;
                let body = ApiErrorBody {
                    code: "NSFW_DISABLED".to_string(),
                    message: "NSFW content is disabled.".to_string(),
                };
                (status, body)
            }
            RelayError::InvalidContentType(kind) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorBody {
                    code: "INVALID_TYPE".to_string(),
                    message: format!("Invalid type '{kind}'. Must be 'sfw' or 'nsfw'."),
                };
                (status, body)
            }
            RelayError::UnknownProvider(name) => {
                let status = StatusCode::NOT_FOUND;
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("Unknown provider: {name}"),
                };
                (status, body)
            }
            RelayError::FileNotFound(what) => {
                let status = StatusCode::NOT_FOUND;
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("File not found: {what}"),
                };
                (status, body)
            }
            RelayError::MissingCredential => {
                let status = StatusCode::UNAUTHORIZED;
                let body = ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: "Provider credential required.".to_string(),
                };
                (status, body)
            }
            RelayError::Reqwest(_)
            | RelayError::UrlParse(_)
            | RelayError::Json(_)
            | RelayError::EmptyPayload => {
                let status = StatusCode::BAD_GATEWAY;
                let body = ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Upstream service is unavailable.".to_string(),
                };
                (status, body)
            }
            RelayError::UpstreamStatus(code) => {
                let (err_code, msg) = match code {
                    StatusCode::TOO_MANY_REQUESTS => {
                        ("RATE_LIMIT", "Upstream rate limit exceeded.")
                    }
                    StatusCode::UNAUTHORIZED => ("UNAUTHORIZED", "Upstream authentication failed."),
                    StatusCode::FORBIDDEN => ("FORBIDDEN", "Upstream permission denied."),
                    StatusCode::NOT_FOUND => ("NOT_FOUND", "Upstream resource not found."),
                    _ => ("UPSTREAM_ERROR", "An upstream error occurred."),
                };

                (
                    StatusCode::BAD_GATEWAY,
                    ApiErrorBody {
                        code: err_code.to_string(),
                        message: msg.to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

impl From<figment::Error> for RelayError {
    fn from(e: figment::Error) -> Self {
        RelayError::Config(Box::new(e))
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
