use serde::{Deserialize, Serialize};

/// One listing card reduced to the two exported fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub price: u64,
    pub year: String,
}

impl Entry {
    pub fn new(price: u64, year: impl Into<String>) -> Self {
        Self {
            price,
            year: year.into(),
        }
    }
}

/// Entries pulled from one page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtraction {
    pub entries: Vec<Entry>,
    /// Cards dropped because price or year could not be read.
    pub skipped: usize,
}

impl PageExtraction {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSelectors {
    pub card: String,
    pub price: String,
    pub description: String,
}

impl Default for CardSelectors {
    fn default() -> Self {
        Self {
            card: DEFAULT_CARD_SELECTOR.to_string(),
            price: DEFAULT_PRICE_SELECTOR.to_string(),
            description: DEFAULT_DESCRIPTION_SELECTOR.to_string(),
        }
    }
}

pub const DEFAULT_BASE_URL: &str = "https://kolesa.kz/cars/chevrolet/camaro/";
pub const DEFAULT_OUTPUT_PATH: &str = "prices_sorted.xlsx";
pub const DEFAULT_SHEET_NAME: &str = "Prices";
pub const DEFAULT_PAGE_PARAM: &str = "page";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CARD_SELECTOR: &str = ".a-card";
pub const DEFAULT_PRICE_SELECTOR: &str = ".a-card__price";
pub const DEFAULT_DESCRIPTION_SELECTOR: &str = ".a-card__description";
