//! HTTP client for the default catalog and the live proximity query.

mod origin;
mod overpass;

use std::time::Duration;

use dinefind_core::{AppConfig, Coordinates};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::SourceError;
use crate::retry::retry_with_backoff;
use crate::types::{CatalogRecord, CatalogResponse, OverpassElement, OverpassResponse};

pub use overpass::{build_proximity_query, RESTAURANT_AMENITY};

/// HTTP client for both listing sources.
///
/// Maps 429, 404, and other non-2xx responses to typed errors. Transient
/// failures are retried with exponential backoff up to `max_retries`
/// additional attempts; `0` sends each request exactly once.
pub struct DiscoveryClient {
    client: Client,
    catalog_url: Url,
    overpass_url: Url,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl DiscoveryClient {
    /// # Errors
    ///
    /// - [`SourceError::InvalidEndpoint`] if either endpoint is not a valid
    ///   absolute URL.
    /// - [`SourceError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        catalog_url: &str,
        overpass_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            catalog_url: parse_endpoint(catalog_url)?,
            overpass_url: parse_endpoint(overpass_url)?,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// Same as [`DiscoveryClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        Self::new(
            &config.catalog_url,
            &config.overpass_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    /// Fetches the default, location-agnostic catalog.
    ///
    /// # Errors
    ///
    /// - [`SourceError::RateLimited`]: HTTP 429 after all retries.
    /// - [`SourceError::NotFound`]: HTTP 404 (not retried).
    /// - [`SourceError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`SourceError::Http`]: network or TLS failure after all retries.
    /// - [`SourceError::Deserialize`]: body is not a catalog response.
    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogRecord>, SourceError> {
        let response: CatalogResponse = self
            .send_json(&self.catalog_url, "default catalog", |client, url| {
                client
                    .get(url)
                    .header(reqwest::header::ACCEPT, "application/json")
            })
            .await?;
        tracing::debug!(count = response.recipes.len(), "fetched default catalog");
        Ok(response.recipes)
    }

    /// Queries points of interest of type `amenity` within `radius_m` metres
    /// of `center`.
    ///
    /// # Errors
    ///
    /// Same error classes as [`DiscoveryClient::fetch_catalog`].
    pub async fn fetch_nearby(
        &self,
        center: Coordinates,
        radius_m: u32,
        amenity: &str,
    ) -> Result<Vec<OverpassElement>, SourceError> {
        let query = build_proximity_query(center, radius_m, amenity);
        let response: OverpassResponse = self
            .send_json(&self.overpass_url, "proximity query", move |client, url| {
                client
                    .post(url)
                    .header(reqwest::header::CONTENT_TYPE, "text/plain")
                    .body(query.clone())
            })
            .await?;
        tracing::debug!(
            count = response.elements.len(),
            latitude = center.latitude,
            longitude = center.longitude,
            radius_m,
            "fetched proximity query"
        );
        Ok(response.elements)
    }

    /// Sends the request produced by `build`, retrying transient failures,
    /// and decodes a JSON body of type `T`.
    async fn send_json<T, B>(&self, url: &Url, context: &str, build: B) -> Result<T, SourceError>
    where
        T: DeserializeOwned,
        B: Fn(&Client, Url) -> RequestBuilder,
    {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let request = build(&self.client, url.clone());
            let url = url.to_string();
            async move {
                let response = request.send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);

                    return Err(SourceError::RateLimited {
                        domain: origin::extract_domain(&url),
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(SourceError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(SourceError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<T>(&body).map_err(|e| SourceError::Deserialize {
                    context: format!("{context} from {url}"),
                    source: e,
                })
            }
        })
        .await
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, SourceError> {
    let url = Url::parse(raw).map_err(|e| SourceError::InvalidEndpoint {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(SourceError::InvalidEndpoint {
            url: raw.to_owned(),
            reason: "expected an absolute http(s) URL".to_owned(),
        });
    }
    Ok(url)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
