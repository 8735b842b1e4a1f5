use crate::domain::model::Entry;
use crate::utils::error::{EtlError, Result};
use rust_xlsxwriter::{RowNum, Workbook};

/// Stable ascending sort; equal prices keep their page order.
pub fn sort_by_price(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by_key(|entry| entry.price);
    entries
}

/// Renders entries as a single-sheet workbook: numeric price in column A,
/// text year in column B, no header row.
#[derive(Debug, Clone)]
pub struct SpreadsheetExporter {
    sheet_name: String,
    output_path: String,
}

impl SpreadsheetExporter {
    pub fn new(sheet_name: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            output_path: output_path.into(),
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// The whole file is built in memory so a failure never leaves a partial
    /// workbook on disk.
    pub fn render(&self, entries: &[Entry]) -> Result<Vec<u8>> {
        let sheet_error = |source| EtlError::SheetCreationError {
            sheet: self.sheet_name.clone(),
            source,
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name).map_err(sheet_error)?;

        for (index, entry) in entries.iter().enumerate() {
            let row = RowNum::try_from(index).unwrap_or(RowNum::MAX);
            worksheet
                .write_number(row, 0, entry.price as f64)
                .map_err(sheet_error)?;
            worksheet
                .write_string(row, 1, entry.year.as_str())
                .map_err(sheet_error)?;
        }

        tracing::debug!(rows = entries.len(), sheet = %self.sheet_name, "Rendered workbook");

        workbook
            .save_to_buffer()
            .map_err(|e| EtlError::ExportError {
                path: self.output_path.clone(),
                message: format!("failed to serialize workbook: {}", e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_ascending_by_price() {
        let sorted = sort_by_price(vec![
            Entry::new(9_000_000, "2015"),
            Entry::new(7_000_000, "2018"),
            Entry::new(8_200_000, "2016"),
        ]);

        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(sorted[0], Entry::new(7_000_000, "2018"));
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let entries = vec![
            Entry::new(5, "2012"),
            Entry::new(3, "2010"),
            Entry::new(5, "2011"),
            Entry::new(3, "2019"),
        ];

        let sorted = sort_by_price(entries);
        assert_eq!(
            sorted,
            vec![
                Entry::new(3, "2010"),
                Entry::new(3, "2019"),
                Entry::new(5, "2012"),
                Entry::new(5, "2011"),
            ]
        );
        assert_eq!(sort_by_price(sorted.clone()), sorted);
    }

    #[test]
    fn test_render_produces_xlsx_archive() {
        let exporter = SpreadsheetExporter::new("Prices", "prices_sorted.xlsx");
        let bytes = exporter
            .render(&[Entry::new(7_000_000, "2018"), Entry::new(9_000_000, "2015")])
            .unwrap();

        // xlsx files are zip archives
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_render_empty_sequence() {
        let bytes = SpreadsheetExporter::new("Prices", "prices_sorted.xlsx").render(&[]).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_invalid_sheet_name_is_sheet_creation_error() {
        let err = SpreadsheetExporter::new("Prices[2024]", "prices_sorted.xlsx")
            .render(&[Entry::new(1, "2000")])
            .unwrap_err();
        assert!(matches!(err, EtlError::SheetCreationError { .. }));
    }
}
