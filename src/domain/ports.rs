use crate::domain::model::{CardSelectors, Entry};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// Replaces whatever is already stored at `path`.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Source of raw listing HTML, one call per 1-based page number.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn card_selectors(&self) -> CardSelectors;
    fn page_param(&self) -> &str;
    fn sheet_name(&self) -> &str;
    fn max_pages(&self) -> Option<u32>;
    fn user_agent(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Entry>>;
    async fn transform(&self, entries: Vec<Entry>) -> Result<Vec<Entry>>;
    async fn load(&self, entries: Vec<Entry>) -> Result<String>;
}
