use crate::domain::model::{CardSelectors, Entry, PageExtraction};
use crate::utils::error::{EtlError, Result};
use scraper::{ElementRef, Html, Selector};

const YEAR_LEN: usize = 4;

// `â‚¸` is how `₸` shows up when the page is decoded as Latin-1.
const PRICE_NOISE: [&str; 7] = ["&nbsp;", "â‚¸", "₸", "$", "€", "£", "₽"];

/// Reduces card price text such as `"12 345 ₸"` to its integer value.
pub fn normalize_price(text: &str) -> Result<u64> {
    let trimmed = text.trim();

    let mut cleaned = trimmed.to_string();
    for noise in PRICE_NOISE {
        cleaned = cleaned.replace(noise, "");
    }
    // char::is_whitespace covers U+00A0 and U+202F as well.
    let digits: String = cleaned
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    digits.parse::<u64>().map_err(|_| EtlError::ConversionError {
        text: trimmed.to_string(),
    })
}

/// First four characters of the trimmed description.
pub fn extract_year(text: &str) -> Result<String> {
    let trimmed = text.trim();
    let year: String = trimmed.chars().take(YEAR_LEN).collect();

    if year.chars().count() < YEAR_LEN {
        return Err(EtlError::ExtractionError {
            text: trimmed.to_string(),
        });
    }
    Ok(year)
}

fn compile(field: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| EtlError::ConfigError {
        message: format!("invalid {} selector {:?}: {}", field, css, e),
    })
}

/// Text of every match under `card`, concatenated in document order.
fn text_of(card: ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector).flat_map(|el| el.text()).collect()
}

#[derive(Debug, Clone)]
pub struct CardExtractor {
    card: Selector,
    price: Selector,
    description: Selector,
}

impl CardExtractor {
    pub fn new(selectors: &CardSelectors) -> Result<Self> {
        Ok(Self {
            card: compile("card", &selectors.card)?,
            price: compile("price", &selectors.price)?,
            description: compile("description", &selectors.description)?,
        })
    }

    pub fn extract(&self, html: &str) -> PageExtraction {
        let document = Html::parse_document(html);
        let mut extraction = PageExtraction::default();

        for (index, card) in document.select(&self.card).enumerate() {
            match self.extract_card(card) {
                Ok(entry) => extraction.entries.push(entry),
                Err(e) => {
                    tracing::warn!(card = index, "Skipping card: {}", e);
                    extraction.skipped += 1;
                }
            }
        }

        extraction
    }

    fn extract_card(&self, card: ElementRef<'_>) -> Result<Entry> {
        let price = normalize_price(&text_of(card, &self.price))?;
        let year = extract_year(&text_of(card, &self.description))?;
        Ok(Entry { price, year })
    }
}
