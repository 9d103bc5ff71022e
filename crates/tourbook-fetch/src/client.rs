use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::collection::Collection;
use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use crate::source::CatalogueSource;

/// Base URL of the public tour API.
pub const DEFAULT_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Tour API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("tourbook/0.1.0 (https://github.com/oxur/tourbook)")
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `api_base_url` and `request_timeout_secs`
    /// settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url_for(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection.endpoint())
    }
}

#[async_trait]
impl CatalogueSource for ApiClient {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch_raw(&self, collection: Collection) -> FetchResult<Vec<u8>> {
        let url = self.url_for(collection);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                collection,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                collection,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Http {
            collection,
            message: e.to_string(),
        })?;

        Ok(body.to_vec())
    }
}
