//! Output directory resolution and record read-back.
//!
//! Exported records live as `{date}_{title}.json` / `.xlsx` pairs in one
//! flat directory; the JSON side is the one read back for `list` and `show`.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError, IssueRecord, Result};

/// A record read back from the output directory.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    /// File stem (`{date}_{title}`).
    pub stem: String,
    /// Path of the JSON file.
    pub path: PathBuf,
    /// The parsed record.
    pub record: IssueRecord,
}

/// Resolve the output directory: CLI flag wins over configuration.
#[must_use]
pub fn resolve_output_dir(cli_dir: Option<&Path>, config: &AppConfig) -> PathBuf {
    cli_dir.map_or_else(|| config.output.dir.clone(), Path::to_path_buf)
}

/// List all records stored in the output directory, newest stem first.
///
/// Files that are not JSON are ignored; JSON files that do not parse as a
/// record are skipped with a warning.
///
/// # Errors
/// Returns error if the directory cannot be read.
pub fn list_stored_records(dir: &Path) -> Result<Vec<StoredRecord>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| AppError::io(format!("Failed to read directory {}", dir.display()), e))?;

    let mut records = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| AppError::io("Failed to read directory entry", e))?;
        let path = entry.path();

        if path.extension().and_then(OsStr::to_str) != Some("json") {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
            continue;
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::io(format!("Failed to read {}", path.display()), e))?;

        match serde_json::from_str::<IssueRecord>(&content) {
            Ok(record) => records.push(StoredRecord {
                stem: stem.to_string(),
                path,
                record,
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unparseable record");
            }
        }
    }

    // Date-prefixed stems sort chronologically
    records.sort_by(|a, b| b.stem.cmp(&a.stem));

    Ok(records)
}

/// Find a stored record by stem (full or partial match).
///
/// # Errors
/// Returns error if the directory cannot be read or no record matches.
pub fn find_stored_record(dir: &Path, query: &str) -> Result<StoredRecord> {
    let records = list_stored_records(dir)?;

    records
        .into_iter()
        .find(|r| r.stem == query || r.stem.contains(query))
        .ok_or_else(|| AppError::InvalidData {
            message: format!("Record not found: {query}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_record(dir: &Path, stem: &str, title: &str, body: &str) {
        let record = IssueRecord::new(title, body);
        let json = serde_json::to_string_pretty(&record).unwrap();
        fs::write(dir.join(format!("{stem}.json")), json).unwrap();
    }

    #[test]
    fn test_missing_directory_yields_empty_list() {
        let dir = tempdir().unwrap();
        let records = list_stored_records(&dir.path().join("nope")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_lists_newest_first() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "2024-03-08_Old", "Old", "");
        write_record(dir.path(), "2024-03-09_New", "New", "");

        let records = list_stored_records(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].stem, "2024-03-09_New");
        assert_eq!(records[1].stem, "2024-03-08_Old");
    }

    #[test]
    fn test_ignores_non_json_files() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "2024-03-09_Report", "Report", "body");
        fs::write(dir.path().join("2024-03-09_Report.xlsx"), b"PK").unwrap();

        let records = list_stored_records(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record.body, "body");
    }

    #[test]
    fn test_skips_unparseable_json() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "2024-03-09_Good", "Good", "");
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let records = list_stored_records(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stem, "2024-03-09_Good");
    }

    #[test]
    fn test_find_by_partial_stem() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "2024-03-09_Bug_Report", "Bug Report", "");

        let found = find_stored_record(dir.path(), "Bug_Report").unwrap();
        assert_eq!(found.stem, "2024-03-09_Bug_Report");

        let missing = find_stored_record(dir.path(), "nothing");
        assert!(matches!(missing, Err(AppError::InvalidData { .. })));
    }

    #[test]
    fn test_resolve_output_dir_prefers_cli_flag() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_output_dir(None, &config),
            PathBuf::from("data")
        );
        assert_eq!(
            resolve_output_dir(Some(Path::new("elsewhere")), &config),
            PathBuf::from("elsewhere")
        );
    }
}
