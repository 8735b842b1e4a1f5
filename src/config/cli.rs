use crate::core::ConfigProvider;
use crate::domain::model::{
    CardSelectors, DEFAULT_BASE_URL, DEFAULT_CARD_SELECTOR, DEFAULT_DESCRIPTION_SELECTOR,
    DEFAULT_OUTPUT_PATH, DEFAULT_PAGE_PARAM, DEFAULT_PRICE_SELECTOR,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SHEET_NAME,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "listing-etl")]
#[command(about = "Scrape listing prices and years, sorted by price, into a spreadsheet")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, help = "Per-request timeout in seconds")]
    pub request_timeout: u64,

    #[arg(long, help = "Stop after this many pages even if results continue")]
    pub max_pages: Option<u32>,

    #[arg(long, default_value = DEFAULT_PAGE_PARAM)]
    pub page_param: String,

    #[arg(long, default_value = DEFAULT_CARD_SELECTOR)]
    pub card_selector: String,

    #[arg(long, default_value = DEFAULT_PRICE_SELECTOR)]
    pub price_selector: String,

    #[arg(long, default_value = DEFAULT_DESCRIPTION_SELECTOR)]
    pub description_selector: String,

    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    pub sheet_name: String,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    fn card_selectors(&self) -> CardSelectors {
        CardSelectors {
            card: self.card_selector.clone(),
            price: self.price_selector.clone(),
            description: self.description_selector.clone(),
        }
    }

    fn page_param(&self) -> &str {
        &self.page_param
    }

    fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        super::validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_camaro_listings() {
        let config = CliConfig::parse_from(["listing-etl"]);

        assert_eq!(config.base_url(), "https://kolesa.kz/cars/chevrolet/camaro/");
        assert_eq!(config.output_path(), "prices_sorted.xlsx");
        assert_eq!(config.sheet_name(), "Prices");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.card_selectors(), CardSelectors::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::parse_from([
            "listing-etl",
            "--base-url",
            "http://localhost:8080/cars/",
            "--output-path",
            "/tmp/out.xlsx",
            "--request-timeout",
            "5",
            "--max-pages",
            "3",
            "--verbose",
        ]);

        assert_eq!(config.base_url(), "http://localhost:8080/cars/");
        assert_eq!(config.output_path(), "/tmp/out.xlsx");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.max_pages(), Some(3));
        assert!(config.verbose);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_timeout = CliConfig::parse_from(["listing-etl", "--request-timeout", "0"]);
        assert!(zero_timeout.validate().is_err());

        let bad_url = CliConfig::parse_from(["listing-etl", "--base-url", "kolesa.kz"]);
        assert!(bad_url.validate().is_err());

        let zero_pages = CliConfig::parse_from(["listing-etl", "--max-pages", "0"]);
        assert!(zero_pages.validate().is_err());
    }
}
