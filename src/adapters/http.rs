use crate::domain::ports::{ConfigProvider, PageSource};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Page 1 is the base URL untouched; later pages get `<param>=<page>` appended.
pub fn page_url(base_url: &str, page: u32, page_param: &str) -> Result<String> {
    if page <= 1 {
        return Ok(base_url.to_string());
    }

    let mut url = Url::parse(base_url).map_err(|e| EtlError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;
    url.query_pairs_mut()
        .append_pair(page_param, &page.to_string());

    Ok(url.to_string())
}

#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
    base_url: String,
    page_param: String,
}

impl HttpPageFetcher {
    pub fn new(
        base_url: impl Into<String>,
        page_param: impl Into<String>,
        timeout: Duration,
        user_agent: Option<&str>,
    ) -> Result<Self> {
        let mut builder = Client::builder().timeout(timeout);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent.to_string());
        }

        let client = builder.build().map_err(|e| EtlError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            page_param: page_param.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            config.page_param(),
            config.request_timeout(),
            config.user_agent(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PageSource for HttpPageFetcher {
    async fn fetch_page(&self, page: u32) -> Result<String> {
        let url = page_url(&self.base_url, page, &self.page_param)?;
        tracing::debug!(page, url = %url, "Fetching listing page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| EtlError::FetchError {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(page, status = %status, "Listing page returned a non-success status");
        }

        // text() takes the response by value, so the connection is released
        // whether or not the body read succeeds.
        let body = response.text().await.map_err(|source| {
            if source.is_timeout() {
                EtlError::FetchError {
                    url: url.clone(),
                    source,
                }
            } else {
                EtlError::ParseError {
                    url: url.clone(),
                    message: format!("failed to read response body: {}", source),
                }
            }
        })?;

        tracing::debug!(page, bytes = body.len(), "Received listing page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_first_page_uses_base_url_unchanged() {
        let url = page_url("https://kolesa.kz/cars/chevrolet/camaro/", 1, "page").unwrap();
        assert_eq!(url, "https://kolesa.kz/cars/chevrolet/camaro/");
    }

    #[test]
    fn test_later_pages_append_page_param() {
        let url = page_url("https://kolesa.kz/cars/chevrolet/camaro/", 2, "page").unwrap();
        assert_eq!(url, "https://kolesa.kz/cars/chevrolet/camaro/?page=2");

        let url = page_url("https://example.com/search?make=chevrolet", 7, "p").unwrap();
        assert_eq!(url, "https://example.com/search?make=chevrolet&p=7");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = page_url("not a url", 2, "page").unwrap_err();
        assert!(matches!(err, EtlError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/cars/").query_param("page", "3");
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body("<html><body>page three</body></html>");
        });

        let fetcher =
            HttpPageFetcher::new(server.url("/cars/"), "page", Duration::from_secs(5), None)
                .unwrap();
        let body = fetcher.fetch_page(3).await.unwrap();

        page_mock.assert();
        assert!(body.contains("page three"));
    }

    #[tokio::test]
    async fn test_fetch_page_sends_user_agent() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/cars/")
                .header("user-agent", "listing-etl-test");
            then.status(200).body("<html></html>");
        });

        let fetcher = HttpPageFetcher::new(
            server.url("/cars/"),
            "page",
            Duration::from_secs(5),
            Some("listing-etl-test"),
        )
        .unwrap();
        fetcher.fetch_page(1).await.unwrap();

        page_mock.assert();
    }

    #[tokio::test]
    async fn test_non_success_status_still_returns_body() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/cars/");
            then.status(404).body("<html><body>not found</body></html>");
        });

        let fetcher =
            HttpPageFetcher::new(server.url("/cars/"), "page", Duration::from_secs(5), None)
                .unwrap();
        let body = fetcher.fetch_page(1).await.unwrap();

        page_mock.assert();
        assert!(body.contains("not found"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let fetcher = HttpPageFetcher::new(
            "http://127.0.0.1:1/cars/",
            "page",
            Duration::from_secs(2),
            None,
        )
        .unwrap();

        let err = fetcher.fetch_page(1).await.unwrap_err();
        assert!(matches!(err, EtlError::FetchError { .. }));
        assert!(!err.is_recoverable());
    }
}
