//! Shared HTTP plumbing for the provider adapters.

use std::time::Duration;

use qrtidy_core::AppConfig;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::LookupError;

/// Builds the one `reqwest::Client` every adapter shares.
///
/// The request timeout bounds each provider call, so a stalled provider ends
/// as an ordinary failure and the cascade moves on.
///
/// # Errors
///
/// Returns [`LookupError::Http`] if the client cannot be constructed.
pub fn build_http_client(config: &AppConfig) -> Result<Client, LookupError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .connect_timeout(Duration::from_secs(config.http_connect_timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Resolves `path` against `base_url`.
///
/// The base is normalised to end with exactly one slash so that any path
/// prefix it carries is kept rather than replaced by the join.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> Result<Url, LookupError> {
    let invalid = |reason: String| LookupError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_owned()));
    }
    base.join(path).map_err(|e| invalid(e.to_string()))
}

/// Sends the request, asserts a 2xx status, and decodes the body as `T`.
///
/// `context` names the call in errors and must not contain credentials.
///
/// # Errors
///
/// - [`LookupError::Http`] on network failure or timeout.
/// - [`LookupError::UnexpectedStatus`] on any non-2xx status.
/// - [`LookupError::Deserialize`] if the body does not match `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    context: &str,
) -> Result<T, LookupError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::UnexpectedStatus {
            status: status.as_u16(),
            context: context.to_owned(),
        });
    }

    let body = response.text().await?;
    tracing::trace!(context, bytes = body.len(), "provider response received");
    serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_path_onto_origin() {
        let url = endpoint_url("https://api.openbd.jp", "v1/get").unwrap();
        assert_eq!(url.as_str(), "https://api.openbd.jp/v1/get");
    }

    #[test]
    fn endpoint_url_strips_trailing_slashes() {
        let url = endpoint_url("https://api.openbd.jp//", "v1/get").unwrap();
        assert_eq!(url.as_str(), "https://api.openbd.jp/v1/get");
    }

    #[test]
    fn endpoint_url_keeps_base_path_prefix() {
        let url = endpoint_url("http://127.0.0.1:8080/mock", "v1/get").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/mock/v1/get");
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        let err = endpoint_url("not a url", "v1/get").unwrap_err();
        assert!(
            matches!(err, LookupError::InvalidBaseUrl { .. }),
            "expected InvalidBaseUrl, got: {err:?}"
        );
    }
}
