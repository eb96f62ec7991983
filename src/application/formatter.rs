//! Output formatting for stored records.
//!
//! Supports multiple display formats: Markdown, JSON, and table view.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::IssueRecord;
use crate::infrastructure::StoredRecord;

/// Display format options for read-back commands.
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// JSON format for programmatic use.
    Json,
    /// Compact table listing.
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown format: {s}. Use: markdown, json, table")),
        }
    }
}

/// Formats a stored record as Markdown.
pub fn format_record_markdown(stored: &StoredRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", stored.record.title));
    out.push_str(&format!("**File:** {}\n\n", stored.path.display()));
    out.push_str("---\n\n");

    if stored.record.has_body() {
        out.push_str(&stored.record.body);
        out.push('\n');
    } else {
        out.push_str("*(empty body)*\n");
    }

    out
}

/// Formats a record as JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_record_json(record: &IssueRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Formats a table listing of stored records.
pub fn format_records_table(records: &[StoredRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Stem", "Title", "Preview"]);

    for stored in records {
        table.add_row(vec![
            &stored.stem,
            &stored.record.title,
            &truncate(stored.record.preview(), 40),
        ]);
    }

    table.to_string()
}

/// Formats a one-line summary for the list footer.
pub fn format_list_summary(count: usize, dir: &std::path::Path) -> String {
    format!(
        "{} {} record(s) in {}",
        "📁".bold(),
        count.to_string().cyan(),
        dir.display()
    )
}

/// Truncates a string to max length with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
