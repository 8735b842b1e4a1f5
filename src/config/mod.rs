#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_sheet_name, validate_url,
};

pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;

/// Checks shared by every configuration source.
pub(crate) fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_url("base_url", config.base_url())?;
    validate_path("output_path", config.output_path())?;
    validate_range(
        "request_timeout",
        config.request_timeout().as_secs(),
        1,
        MAX_REQUEST_TIMEOUT_SECS,
    )?;
    validate_non_empty_string("page_param", config.page_param())?;
    validate_sheet_name("sheet_name", config.sheet_name())?;

    let selectors = config.card_selectors();
    validate_non_empty_string("card_selector", &selectors.card)?;
    validate_non_empty_string("price_selector", &selectors.price)?;
    validate_non_empty_string("description_selector", &selectors.description)?;

    if let Some(max_pages) = config.max_pages() {
        validate_range("max_pages", max_pages, 1, u32::MAX)?;
    }

    Ok(())
}
