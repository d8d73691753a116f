//! Upstream catalog client
//!
//! Fetches raw XML from the catalog API. Parsing and normalization happen in
//! the service, so this layer only deals with transport concerns.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{CatalogError, Result};

/// User-Agent sent with every upstream request
pub const USER_AGENT: &str = concat!("boardgame-catalog/", env!("CARGO_PKG_VERSION"));

/// Upstream catalog API
#[async_trait]
pub trait CatalogUpstream: Send + Sync {
    /// Free-text search restricted to the board game category; returns the raw XML body
    async fn search(&self, query: &str) -> Result<String>;

    /// Item lookup with statistics enabled; returns the raw XML body
    async fn thing(&self, id: &str) -> Result<String>;
}

// == HTTP Upstream ==
/// reqwest-backed client for the BoardGameGeek XML API 2.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpUpstream {
    /// Creates a client against `base_url` with a per-request timeout.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        api_token: Option<String>,
    ) -> Result<Self> {
        let base_url: String = base_url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.catalog_base_url.clone(),
            Duration::from_secs(config.upstream_timeout),
            config.catalog_api_token.clone(),
        )
    }

    async fn get_xml(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        info!("Calling catalog upstream: {} {:?}", url, params);

        let mut request = self.client.get(&url).query(params);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Upstream(format!(
                "{} responded with status {}",
                endpoint, status
            )));
        }

        let body = response.text().await?;
        debug!("Catalog upstream {} returned {} bytes", endpoint, body.len());
        Ok(body)
    }
}

#[async_trait]
impl CatalogUpstream for HttpUpstream {
    async fn search(&self, query: &str) -> Result<String> {
        self.get_xml("search", &[("query", query), ("type", "boardgame")])
            .await
    }

    async fn thing(&self, id: &str) -> Result<String> {
        self.get_xml("thing", &[("id", id), ("stats", "1")]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn upstream_for(server: &MockServer) -> HttpUpstream {
        HttpUpstream::new(server.uri(), Duration::from_secs(5), None).unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_query_and_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("query", "ticket to ride"))
            .and(query_param("type", "boardgame"))
            .respond_with(ResponseTemplate::new(200).set_body_string(fixtures::SEARCH_SINGLE))
            .expect(1)
            .mount(&server)
            .await;

        let body = upstream_for(&server).search("ticket to ride").await.unwrap();
        assert!(body.contains("Carcassonne"));
    }

    #[tokio::test]
    async fn test_thing_requests_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(query_param("id", "13"))
            .and(query_param("stats", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(fixtures::THING_CATAN))
            .expect(1)
            .mount(&server)
            .await;

        let body = upstream_for(&server).thing("13").await.unwrap();
        assert!(body.contains("averageweight"));
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(header("Authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_string(fixtures::THING_SPARSE))
            .expect(1)
            .mount(&server)
            .await;

        let upstream =
            HttpUpstream::new(server.uri(), Duration::from_secs(5), Some("s3cret".to_string()))
                .unwrap();
        assert!(upstream.thing("4242").await.is_ok());
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string(fixtures::ERROR_DOCUMENT))
            .mount(&server)
            .await;

        let result = upstream_for(&server).search("catan").await;
        assert!(matches!(result, Err(CatalogError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_timeout_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(fixtures::SEARCH_EMPTY)
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let upstream = HttpUpstream::new(server.uri(), Duration::from_millis(50), None).unwrap();
        let result = upstream.search("catan").await;
        assert!(matches!(result, Err(CatalogError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_upstream_error() {
        // Nothing listens on the loopback discard port
        let upstream =
            HttpUpstream::new("http://127.0.0.1:9", Duration::from_secs(1), None).unwrap();
        let result = upstream.thing("13").await;
        assert!(matches!(result, Err(CatalogError::Upstream(_))));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let upstream =
            HttpUpstream::new("https://example.test/xmlapi2/", Duration::from_secs(1), None)
                .unwrap();
        assert_eq!(upstream.base_url, "https://example.test/xmlapi2");
    }
}
