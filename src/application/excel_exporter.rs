//! Excel serialization of issue records.
//!
//! Produces a workbook with a single worksheet: one header row (`title`,
//! `body`) and one data row carrying the record's values.

use rust_xlsxwriter::{Format, Workbook};

use crate::application::export_service::RecordWriter;
use crate::domain::{ExportSettings, IssueRecord, Result};

/// Column headers, in worksheet order.
const HEADERS: [&str; 2] = ["title", "body"];

/// Excel format writer.
pub struct ExcelExporter {
    sheet_name: String,
    bold_header: bool,
}

impl ExcelExporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            bold_header: true,
        }
    }

    /// Build a writer from the configured export settings.
    #[must_use]
    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self {
            sheet_name: settings.sheet_name.clone(),
            bold_header: settings.bold_header,
        }
    }

    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    #[must_use]
    pub const fn with_bold_header(mut self, bold: bool) -> Self {
        self.bold_header = bold;
        self
    }

    fn create_workbook(&self, record: &IssueRecord) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet().set_name(&self.sheet_name)?;

        let header_format = if self.bold_header {
            Some(Format::new().set_bold())
        } else {
            None
        };

        for (col, header) in HEADERS.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let col = col as u16;
            if let Some(ref format) = header_format {
                worksheet.write_string_with_format(0, col, *header, format)?;
            } else {
                worksheet.write_string(0, col, *header)?;
            }
        }

        worksheet.write_string(1, 0, &record.title)?;
        worksheet.write_string(1, 1, &record.body)?;

        worksheet.set_column_width(0, 30)?;
        worksheet.set_column_width(1, 60)?;

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}

impl RecordWriter for ExcelExporter {
    fn render(&self, record: &IssueRecord) -> Result<Vec<u8>> {
        self.create_workbook(record)
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}

impl Default for ExcelExporter {
    fn default() -> Self {
        Self::new()
    }
}
