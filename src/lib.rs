pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::adapters::{
    html::CardExtractor, http::HttpPageFetcher, storage::LocalStorage, xlsx::SpreadsheetExporter,
};
pub use crate::core::{etl::EtlEngine, pipeline::ListingPipeline};
pub use crate::domain::model::{CardSelectors, Entry, PageExtraction};
pub use crate::utils::error::{EtlError, Result};
