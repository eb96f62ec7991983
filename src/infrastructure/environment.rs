//! Environment variable intake.
//!
//! The CI trigger hands the issue over as two plain environment strings;
//! this adapter turns them into a domain record.

use crate::domain::{IssueRecord, DEFAULT_TITLE};

/// Variable carrying the issue title.
pub const ISSUE_TITLE_VAR: &str = "ISSUE_TITLE";

/// Variable carrying the issue body.
pub const ISSUE_BODY_VAR: &str = "ISSUE_BODY";

/// Build the record from CLI overrides and the process environment.
///
/// Explicit overrides win over the environment; an unset title falls back
/// to `Untitled`, an unset body to the empty string.
#[must_use]
pub fn resolve_issue_input(
    title_override: Option<String>,
    body_override: Option<String>,
) -> IssueRecord {
    resolve_with(title_override, body_override, |name| {
        std::env::var(name).ok()
    })
}

fn resolve_with<F>(
    title_override: Option<String>,
    body_override: Option<String>,
    lookup: F,
) -> IssueRecord
where
    F: Fn(&str) -> Option<String>,
{
    let title = title_override
        .or_else(|| lookup(ISSUE_TITLE_VAR))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let body = body_override
        .or_else(|| lookup(ISSUE_BODY_VAR))
        .unwrap_or_default();

    IssueRecord::new(title, body)
}
