//! Domain models for issue report data.
//!
//! An [`IssueRecord`] is the single entity this tool deals with: the
//! `{title, body}` pair handed over by the CI trigger.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Title used when the trigger provides none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// A single issue report captured from the environment.
///
/// The stored title is always filesystem-safe: spaces and forward slashes
/// are replaced with underscores at construction time, so the same string
/// appears in the serialized record and in the derived filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Sanitized issue title.
    pub title: String,
    /// Raw issue body.
    pub body: String,
}

impl IssueRecord {
    /// Build a record from raw trigger input, sanitizing the title.
    #[must_use]
    pub fn new(title: impl AsRef<str>, body: impl Into<String>) -> Self {
        Self {
            title: sanitize_title(title.as_ref()),
            body: body.into(),
        }
    }

    /// File stem for a given capture date: `{YYYY-MM-DD}_{title}`.
    #[must_use]
    pub fn file_stem_for(&self, date: NaiveDate) -> String {
        format!("{}_{}", date.format("%Y-%m-%d"), self.title)
    }

    /// File stem using the current UTC date.
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.file_stem_for(Utc::now().date_naive())
    }

    /// Get the first body line as a preview.
    #[must_use]
    pub fn preview(&self) -> &str {
        self.body.lines().next().unwrap_or("")
    }

    /// Whether the body carries any content.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

/// Replace characters that would break the output path.
///
/// Spaces become underscores for readability, forward slashes because they
/// would otherwise introduce path separators into the filename.
#[must_use]
pub fn sanitize_title(raw: &str) -> String {
    raw.replace([' ', '/'], "_")
}
