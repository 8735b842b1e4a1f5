use crate::adapters::html::CardExtractor;
use crate::adapters::http::HttpPageFetcher;
use crate::adapters::xlsx::{sort_by_price, SpreadsheetExporter};
use crate::core::pagination::Paginator;
use crate::core::{ConfigProvider, Entry, PageSource, Pipeline, Storage};
use crate::utils::error::{EtlError, Result};

pub struct ListingPipeline<S: Storage, P: PageSource> {
    pub(crate) storage: S,
    pub(crate) source: P,
    pub(crate) extractor: CardExtractor,
    pub(crate) exporter: SpreadsheetExporter,
    pub(crate) max_pages: Option<u32>,
}

impl<S: Storage, P: PageSource> ListingPipeline<S, P> {
    pub fn new<C: ConfigProvider>(storage: S, source: P, config: &C) -> Result<Self> {
        Ok(Self {
            storage,
            source,
            extractor: CardExtractor::new(&config.card_selectors())?,
            exporter: SpreadsheetExporter::new(config.sheet_name(), config.output_path()),
            max_pages: config.max_pages(),
        })
    }
}

impl<S: Storage> ListingPipeline<S, HttpPageFetcher> {
    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Result<Self> {
        let fetcher = HttpPageFetcher::from_config(config)?;
        Self::new(storage, fetcher, config)
    }
}

#[async_trait::async_trait]
impl<S: Storage, P: PageSource> Pipeline for ListingPipeline<S, P> {
    async fn extract(&self) -> Result<Vec<Entry>> {
        let mut paginator = Paginator::new(self.max_pages);

        while let Some(page) = paginator.next_page() {
            let body = self.source.fetch_page(page).await?;
            let extraction = self.extractor.extract(&body);

            tracing::info!(
                page,
                entries = extraction.len(),
                skipped = extraction.skipped,
                "Processed listing page"
            );
            paginator.record_page(extraction);
        }

        if paginator.skipped() > 0 {
            tracing::warn!("Skipped {} cards with unreadable price or year", paginator.skipped());
        }
        tracing::debug!(
            pages = paginator.pages_processed(),
            entries = paginator.entries().len(),
            "Pagination finished"
        );

        Ok(paginator.into_entries())
    }

    async fn transform(&self, entries: Vec<Entry>) -> Result<Vec<Entry>> {
        Ok(sort_by_price(entries))
    }

    async fn load(&self, entries: Vec<Entry>) -> Result<String> {
        let output_path = self.exporter.output_path().to_string();
        let workbook = self.exporter.render(&entries)?;

        tracing::debug!(
            "Writing workbook ({} bytes, {} rows) to {}",
            workbook.len(),
            entries.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, &workbook)
            .await
            .map_err(|e| EtlError::ExportError {
                path: output_path.clone(),
                message: e.to_string(),
            })?;

        Ok(output_path)
    }
}
