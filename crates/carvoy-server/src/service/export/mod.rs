//! Tabular export rendering (CSV and XLSX).
//!
//! Exports are plain tabular documents built from repository listings; the
//! handlers stream them back as attachment downloads.

use rust_xlsxwriter::{Format, Workbook};

use crate::service::{Result, ServiceError};

/// Output format of an export download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Excel workbook.
    Xlsx,
}

impl ExportFormat {
    /// MIME type of the rendered document.
    pub const fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// File extension of the rendered document.
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// A simple tabular document: a header row plus data rows.
#[derive(Debug, Clone)]
pub struct TableDocument {
    /// Sheet/file name (without extension).
    pub title: String,
    /// Column headers.
    pub headers: Vec<String>,
    /// Data rows; each row must have `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl TableDocument {
    /// Creates a new document.
    pub fn new(
        title: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            headers,
            rows,
        }
    }

    /// Suggested download filename for the given format.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.title, format.extension())
    }

    /// Renders the document in the requested format.
    pub fn render(&self, format: ExportFormat) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Csv => self.to_csv(),
            ExportFormat::Xlsx => self.to_xlsx(),
        }
    }

    /// Renders the document as CSV bytes.
    fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(&self.headers)
            .map_err(|e| ServiceError::export(format!("failed to write CSV header: {}", e)))?;

        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| ServiceError::export(format!("failed to write CSV row: {}", e)))?;
        }

        writer
            .into_inner()
            .map_err(|e| ServiceError::export(format!("failed to flush CSV output: {}", e)))
    }

    /// Renders the document as an XLSX workbook.
    fn to_xlsx(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold();

        for (col, header) in self.headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, header, &header_format)
                .map_err(|e| ServiceError::export(format!("failed to write header: {}", e)))?;
        }

        for (row_idx, row) in self.rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                worksheet
                    .write_string((row_idx + 1) as u32, col as u16, cell)
                    .map_err(|e| ServiceError::export(format!("failed to write cell: {}", e)))?;
            }
        }

        workbook
            .save_to_buffer()
            .map_err(|e| ServiceError::export(format!("failed to save workbook: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> TableDocument {
        TableDocument::new(
            "transactions",
            vec!["id".to_string(), "amount".to_string()],
            vec![
                vec!["1".to_string(), "250.00".to_string()],
                vec!["2".to_string(), "-90.50".to_string()],
            ],
        )
    }

    #[test]
    fn csv_contains_headers_and_rows() {
        let bytes = document().render(ExportFormat::Csv).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("id,amount\n"));
        assert!(text.contains("1,250.00"));
        assert!(text.contains("2,-90.50"));
    }

    #[test]
    fn xlsx_is_a_zip_container() {
        let bytes = document().render(ExportFormat::Xlsx).unwrap();
        // XLSX files are ZIP archives.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn file_names_carry_the_extension() {
        let doc = document();
        assert_eq!(doc.file_name(ExportFormat::Csv), "transactions.csv");
        assert_eq!(doc.file_name(ExportFormat::Xlsx), "transactions.xlsx");
    }
}
