//! Time and date token extraction for task notes.
//!
//! Daily-wage task rows embed the worked time range inside the free-text
//! note, as `⏰ 08:00 - 17:00` optionally followed by a parenthesized date
//! range. This module pulls those tokens out for editing and puts them back
//! without ever duplicating them.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches the clock token: `⏰ HH:MM - HH:MM`, tolerating one-digit hours,
/// optional seconds and the en-dash separator.
static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"⏰\s*(\d{1,2}:\d{2})(?::\d{2})?\s*[-–]\s*(\d{1,2}:\d{2})(?::\d{2})?")
        .expect("valid time-token regex")
});

/// Matches the parenthesized date-range token, accepting `-`, `–` or `→`
/// between the dates.
static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*\d{4}-\d{2}-\d{2}\s*[-–→]\s*\d{4}-\d{2}-\d{2}\s*\)")
        .expect("valid date-token regex")
});

/// The decomposition of a note into its embedded tokens and remaining body.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{extract, reinsert};
///
/// let parts = extract("⏰ 8:00 - 17:00 (2024-06-10 - 2024-06-10) site survey");
/// assert_eq!(parts.start_time.as_deref(), Some("08:00"));
/// assert_eq!(parts.body, "site survey");
/// assert_eq!(
///     reinsert(&parts),
///     "⏰ 08:00 - 17:00 (2024-06-10 - 2024-06-10) site survey"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteParts {
    /// Start of the embedded time range, normalized to `HH:MM`.
    pub start_time: Option<String>,
    /// End of the embedded time range, normalized to `HH:MM`.
    pub end_time: Option<String>,
    /// The date-range token verbatim, for re-insertion unparsed.
    pub date_token: Option<String>,
    /// The note text with all tokens stripped.
    pub body: String,
}

/// Splits a note into its embedded time range, date-range token and body.
///
/// The first time token wins when legacy rows carry duplicates; every
/// occurrence is stripped from the body either way, so a later
/// [`reinsert`] cannot emit two tokens. Whitespace in the body is
/// normalized to single spaces.
pub fn extract(note: &str) -> NoteParts {
    let (start_time, end_time) = match TIME_TOKEN.captures(note) {
        Some(caps) => (
            Some(normalize_time(&caps[1])),
            Some(normalize_time(&caps[2])),
        ),
        None => (None, None),
    };
    let date_token = DATE_TOKEN.find(note).map(|m| m.as_str().to_string());

    NoteParts {
        start_time,
        end_time,
        date_token,
        body: strip_tokens(note),
    }
}

/// Reassembles a note from its parts: `⏰ {start} - {end} {date} {body}`.
///
/// Empty segments are omitted; the date token is only emitted alongside a
/// complete time range, matching the format the assignment flow writes. Any
/// stray tokens inside `body` are scrubbed first, so the output carries at
/// most one time token and the extract/reinsert cycle is idempotent.
pub fn reinsert(parts: &NoteParts) -> String {
    let body = strip_tokens(&parts.body);

    let mut segments: Vec<String> = Vec::new();
    if let (Some(start), Some(end)) = (&parts.start_time, &parts.end_time) {
        segments.push(format!("⏰ {} - {}", start, end));
        if let Some(date_token) = &parts.date_token {
            segments.push(date_token.clone());
        }
    }
    if !body.is_empty() {
        segments.push(body);
    }
    segments.join(" ")
}

/// Removes every time and date token and collapses leftover whitespace.
fn strip_tokens(note: &str) -> String {
    let without_time = TIME_TOKEN.replace_all(note, " ");
    let without_date = DATE_TOKEN.replace_all(&without_time, " ");
    without_date.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Zero-pads the hour of an `H:MM`/`HH:MM` capture.
fn normalize_time(time: &str) -> String {
    match time.split_once(':') {
        Some((hour, minute)) => match hour.parse::<u32>() {
            Ok(hour) => format!("{:02}:{}", hour, minute),
            Err(_) => time.to_string(),
        },
        None => time.to_string(),
    }
}
