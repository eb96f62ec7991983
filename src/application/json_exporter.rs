//! JSON serialization of issue records.

use crate::application::export_service::RecordWriter;
use crate::domain::{AppError, IssueRecord, Result};

/// JSON format writer.
pub struct JsonExporter {
    pretty_print: bool,
}

impl JsonExporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty_print: true }
    }

    #[must_use]
    pub const fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

impl RecordWriter for JsonExporter {
    fn render(&self, record: &IssueRecord) -> Result<Vec<u8>> {
        let bytes = if self.pretty_print {
            serde_json::to_vec_pretty(record)
        } else {
            serde_json::to_vec(record)
        }
        .map_err(AppError::json)?;

        Ok(bytes)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_render_round_trips() {
        let record = IssueRecord::new("Bug Report/Crash", "it crashed on startup");
        let bytes = JsonExporter::new().render(&record).unwrap();

        let parsed: IssueRecord = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.title, "Bug_Report_Crash");
        assert_eq!(parsed.body, "it crashed on startup");
    }

    #[test]
    fn test_json_render_is_two_field_object() {
        let record = IssueRecord::new("t", "b");
        let bytes = JsonExporter::new().render(&record).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["title"], "t");
        assert_eq!(object["body"], "b");
    }

    #[test]
    fn test_pretty_print_toggle() {
        let record = IssueRecord::new("title", "body");

        let pretty = JsonExporter::new().render(&record).unwrap();
        let compact = JsonExporter::new()
            .with_pretty_print(false)
            .render(&record)
            .unwrap();

        assert!(pretty.contains(&b'\n'));
        assert!(!compact.contains(&b'\n'));
    }

    #[test]
    fn test_non_ascii_body_passes_through() {
        let record = IssueRecord::new("t", "日本語の本文 ✓");
        let bytes = JsonExporter::new().render(&record).unwrap();
        let json = String::from_utf8(bytes).unwrap();
        assert!(json.contains("日本語の本文 ✓"));
    }
}
