//! Application layer - use cases and orchestration.
//!
//! This layer contains the export pipeline: format writers, the
//! export service, and display formatting for read-back commands.

pub mod excel_exporter;
pub mod export_service;
pub mod formatter;
pub mod json_exporter;

pub use excel_exporter::ExcelExporter;
pub use export_service::{
    export_record, export_record_with_stem, ExportOptions, ExportOutcome, FormatSelection,
    RecordWriter,
};
pub use formatter::{
    format_list_summary, format_record_json, format_record_markdown, format_records_table,
    OutputFormat,
};
pub use json_exporter::JsonExporter;
