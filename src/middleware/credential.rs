use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};

pub const PROVIDER_TOKEN_HEADER: &str = "x-provider-token";

/// Pick the caller's provider credential out of the headers.
/// Accepts either:
/// - Header: `x-provider-token: ...`
/// - Header: `Authorization: [Bearer ]<token>`
///
/// Blank values count as absent.
pub fn credential_from_headers(headers: &HeaderMap) -> Option<String> {
    // 1) header: x-provider-token
    if let Some(hv) = headers
        .get(PROVIDER_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        && !hv.is_empty()
    {
        return Some(hv.to_string());
    }

    // 2) header: Authorization, with or without a Bearer scheme
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())?
        .trim();
    let token = match auth.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ if auth.eq_ignore_ascii_case("bearer") => "",
        _ => auth,
    };
    (!token.is_empty()).then(|| token.to_string())
}

/// Optional credential forwarded to credential-gated providers. Never rejects.
#[derive(Debug, Clone, Default)]
pub struct ProviderCredential(pub Option<String>);

impl<S> FromRequestParts<S> for ProviderCredential
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(credential_from_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn token_header_wins_over_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert(PROVIDER_TOKEN_HEADER, HeaderValue::from_static("tok"));
        headers.insert("authorization", HeaderValue::from_static("Bearer other"));
        assert_eq!(credential_from_headers(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn authorization_with_and_without_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
        assert_eq!(credential_from_headers(&headers).as_deref(), Some("abc"));

        headers.insert("authorization", HeaderValue::from_static("raw-key"));
        assert_eq!(credential_from_headers(&headers).as_deref(), Some("raw-key"));
    }

    #[test]
    fn blank_values_are_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(PROVIDER_TOKEN_HEADER, HeaderValue::from_static("  "));
        headers.insert("authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(credential_from_headers(&headers), None);
        assert_eq!(credential_from_headers(&HeaderMap::new()), None);
    }
}
