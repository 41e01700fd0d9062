//! Shared HTTP plumbing for the customers and orders backend.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};

use super::ServiceError;
use crate::config::BackendConfig;

/// JSON client for the storefront backend API.
///
/// Requests carry no timeout and are never retried.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, ServiceError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.api_token {
            let auth_value = format!("Bearer {}", token.expose_secret());
            let mut value = HeaderValue::from_str(&auth_value)
                .map_err(|e| ServiceError::Config(format!("Invalid API token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// Absolute URL for an API path such as `customers`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST `body` as JSON and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-2xx status, or an
    /// undecodable body.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(path, body).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }

    /// POST `body` as JSON, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx status.
    pub async fn post_json_empty<B>(&self, path: &str, body: &B) -> Result<(), ServiceError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(path, body).await.map(|_| ())
    }

    async fn send<B>(&self, path: &str, body: &B) -> Result<reqwest::Response, ServiceError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST to backend");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}
