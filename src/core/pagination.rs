use crate::domain::model::{Entry, PageExtraction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationState {
    Active { page: u32 },
    Done,
}

/// Accumulates entries page by page and decides when to stop.
///
/// A page that yields zero entries ends the run. `max_pages`, when set, also
/// ends it once that many pages have been processed.
#[derive(Debug)]
pub struct Paginator {
    state: PaginationState,
    entries: Vec<Entry>,
    pages_processed: u32,
    skipped: usize,
    max_pages: Option<u32>,
}

impl Paginator {
    pub fn new(max_pages: Option<u32>) -> Self {
        let state = match max_pages {
            Some(0) => PaginationState::Done,
            _ => PaginationState::Active { page: 1 },
        };

        Self {
            state,
            entries: Vec::new(),
            pages_processed: 0,
            skipped: 0,
            max_pages,
        }
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn next_page(&self) -> Option<u32> {
        match self.state {
            PaginationState::Active { page } => Some(page),
            PaginationState::Done => None,
        }
    }

    pub fn record_page(&mut self, extraction: PageExtraction) -> PaginationState {
        let PaginationState::Active { page } = self.state else {
            return self.state;
        };

        self.pages_processed += 1;
        self.skipped += extraction.skipped;

        if extraction.is_empty() {
            tracing::info!(page, "Page yielded no entries, end of results");
            self.state = PaginationState::Done;
            return self.state;
        }

        self.entries.extend(extraction.entries);

        self.state = match self.max_pages {
            Some(max) if self.pages_processed >= max => {
                tracing::info!(page, max_pages = max, "Reached page limit");
                PaginationState::Done
            }
            _ => PaginationState::Active { page: page + 1 },
        };
        self.state
    }

    pub fn pages_processed(&self) -> u32 {
        self.pages_processed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
