//! Export orchestration.
//!
//! Takes a built [`IssueRecord`] and persists it through one writer per
//! selected output format, all under a single timestamped file stem.

use std::fs;
use std::path::PathBuf;

use crate::application::{ExcelExporter, JsonExporter};
use crate::domain::{AppError, ExportSettings, IssueRecord, Result};

/// A writer that turns a record into the bytes of one output format.
pub trait RecordWriter {
    /// Serialize the record.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    fn render(&self, record: &IssueRecord) -> Result<Vec<u8>>;

    /// File extension for this format, without the dot.
    fn extension(&self) -> &'static str;
}

/// Which output files to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatSelection {
    /// JSON document only.
    Json,
    /// Spreadsheet only.
    Excel,
    /// Both outputs.
    #[default]
    Both,
}

impl std::str::FromStr for FormatSelection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "excel" | "xlsx" => Ok(Self::Excel),
            "both" => Ok(Self::Both),
            _ => Err(format!("Unknown format: {s}. Use: json, excel, both")),
        }
    }
}

/// Options for a single export run.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Directory the files are written into (created if missing).
    pub output_dir: PathBuf,
    /// Which output files to produce.
    pub formats: FormatSelection,
    /// Serialization settings.
    pub settings: ExportSettings,
}

/// Result of a single export run.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// File stem shared by all written files.
    pub stem: String,
    /// Paths written, in write order.
    pub written: Vec<PathBuf>,
}

/// Export a record under its current-UTC-date stem.
///
/// # Errors
/// Returns error if the output directory cannot be created or a file
/// cannot be serialized or written.
pub fn export_record(record: &IssueRecord, options: &ExportOptions) -> Result<ExportOutcome> {
    export_record_with_stem(record, &record.file_stem(), options)
}

/// Export a record under an explicit stem.
///
/// Existing files with the same stem are overwritten.
///
/// # Errors
/// Returns error if the output directory cannot be created or a file
/// cannot be serialized or written.
pub fn export_record_with_stem(
    record: &IssueRecord,
    stem: &str,
    options: &ExportOptions,
) -> Result<ExportOutcome> {
    fs::create_dir_all(&options.output_dir).map_err(|e| {
        AppError::io(
            format!(
                "Failed to create directory {}",
                options.output_dir.display()
            ),
            e,
        )
    })?;

    let mut written = Vec::new();

    for writer in writers_for(options) {
        let bytes = writer.render(record)?;
        let path = options
            .output_dir
            .join(format!("{stem}.{}", writer.extension()));

        fs::write(&path, bytes)
            .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;

        tracing::info!(path = %path.display(), "Record written");
        written.push(path);
    }

    Ok(ExportOutcome {
        stem: stem.to_string(),
        written,
    })
}

fn writers_for(options: &ExportOptions) -> Vec<Box<dyn RecordWriter>> {
    let json = || {
        Box::new(JsonExporter::new().with_pretty_print(options.settings.pretty_json))
            as Box<dyn RecordWriter>
    };
    let excel =
        || Box::new(ExcelExporter::from_settings(&options.settings)) as Box<dyn RecordWriter>;

    match options.formats {
        FormatSelection::Json => vec![json()],
        FormatSelection::Excel => vec![excel()],
        FormatSelection::Both => vec![json(), excel()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn options_for(dir: &std::path::Path) -> ExportOptions {
        ExportOptions {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_export_writes_both_files() {
        let dir = tempdir().unwrap();
        let record = IssueRecord::new("Bug Report/Crash", "it broke");

        let outcome =
            export_record_with_stem(&record, "2024-03-09_Bug_Report_Crash", &options_for(dir.path()))
                .unwrap();

        assert_eq!(outcome.written.len(), 2);
        assert!(dir.path().join("2024-03-09_Bug_Report_Crash.json").exists());
        assert!(dir.path().join("2024-03-09_Bug_Report_Crash.xlsx").exists());
    }

    #[test]
    fn test_export_json_only() {
        let dir = tempdir().unwrap();
        let record = IssueRecord::new("t", "b");
        let options = ExportOptions {
            formats: FormatSelection::Json,
            ..options_for(dir.path())
        };

        let outcome = export_record_with_stem(&record, "stem", &options).unwrap();

        assert_eq!(outcome.written.len(), 1);
        assert!(dir.path().join("stem.json").exists());
        assert!(!dir.path().join("stem.xlsx").exists());
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data");
        let record = IssueRecord::new("t", "b");

        export_record_with_stem(&record, "stem", &options_for(&nested)).unwrap();

        assert!(nested.join("stem.json").exists());
    }

    #[test]
    fn test_export_overwrites_existing_stem() {
        let dir = tempdir().unwrap();
        let options = ExportOptions {
            formats: FormatSelection::Json,
            ..options_for(dir.path())
        };

        let first = IssueRecord::new("t", "first body");
        export_record_with_stem(&first, "stem", &options).unwrap();

        let second = IssueRecord::new("t", "second body");
        export_record_with_stem(&second, "stem", &options).unwrap();

        let content = std::fs::read_to_string(dir.path().join("stem.json")).unwrap();
        let parsed: IssueRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.body, "second body");
    }

    #[test]
    fn test_export_record_uses_dated_stem() {
        let dir = tempdir().unwrap();
        let record = IssueRecord::new("Daily Report", "");
        let options = ExportOptions {
            formats: FormatSelection::Json,
            ..options_for(dir.path())
        };

        let outcome = export_record(&record, &options).unwrap();
        assert!(outcome.stem.ends_with("_Daily_Report"));
        // stem starts with YYYY-MM-DD
        assert_eq!(outcome.stem.as_bytes()[4], b'-');
        assert_eq!(outcome.stem.as_bytes()[7], b'-');
    }

    #[test]
    fn test_format_selection_from_str() {
        assert!(matches!("json".parse(), Ok(FormatSelection::Json)));
        assert!(matches!("excel".parse(), Ok(FormatSelection::Excel)));
        assert!(matches!("xlsx".parse(), Ok(FormatSelection::Excel)));
        assert!(matches!("both".parse(), Ok(FormatSelection::Both)));
        assert!("csv".parse::<FormatSelection>().is_err());
    }
}
