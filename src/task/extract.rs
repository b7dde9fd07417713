//! Natural-language extraction of task fields.
//!
//! Splits a raw task description into a title, an optional description, and
//! an optional absolute deadline. Deadline detection runs an ordered list of
//! regex patterns; the first pattern that matches anywhere in the text wins
//! and later patterns are never tried. Anything that fails to resolve to a
//! real timestamp is silently treated as "no deadline".

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Timelike, Weekday};
use regex::Regex;

/// Structured fields derived from a raw task description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTask {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Local>>,
}

/// Deadline patterns in precedence order. Intentionally without word
/// boundaries: "Standby mode" does match the `by` preposition.
const DEADLINE_PATTERNS: [&str; 6] = [
    r"(?i)(by|due|deadline|until)\s+(.+?)(?:\s+|$)",
    r"(?i)(tomorrow|today|next week|next month)",
    r"(\d{1,2}/\d{1,2}/\d{4})",
    r"(\d{1,2}/\d{1,2})",
    r"(?i)(in\s+\d+\s+days?)",
    r"(?i)(monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
];

/// Extract title, description, and deadline from `raw`.
pub fn extract(raw: &str) -> ParsedTask {
    extract_at(raw, Local::now())
}

/// Like [`extract`], but relative to an explicit `now` so deadline
/// resolution is deterministic under test.
pub fn extract_at(raw: &str, now: DateTime<Local>) -> ParsedTask {
    let mut deadline = None;
    let mut fragment = String::new();

    for pattern in DEADLINE_PATTERNS {
        let re = Regex::new(pattern).unwrap();
        if let Some(m) = re.find(raw) {
            // The whole match is the fragment, trailing whitespace included
            // for the preposition form.
            fragment = m.as_str().to_string();
            deadline = resolve_deadline(&fragment, now);
            break;
        }
    }

    // Strip the first occurrence of the matched fragment, keeping the rest
    // of the text for the title/description split.
    let text = if fragment.is_empty() {
        raw.to_string()
    } else {
        raw.replacen(&fragment, "", 1).trim().to_string()
    };

    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut title = lines
        .first()
        .map(|l| l.trim().to_string())
        .unwrap_or_default();
    let mut description = None;

    if lines.len() > 1 {
        description = non_empty(lines[1..].join("\n").trim());
    } else if let Some(idx) = text.find('.') {
        // Single line with sentence-terminating period: first sentence is
        // the title, the remainder becomes the description.
        title = text[..idx].trim().to_string();
        description = non_empty(text[idx + 1..].trim());
    }

    if title.is_empty() {
        title = text.trim().to_string();
    }

    ParsedTask {
        title,
        description,
        deadline,
    }
}

/// Resolve a matched fragment to an absolute timestamp. Checks run on the
/// lowercased fragment in a fixed order; any failure yields `None`.
fn resolve_deadline(fragment: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let lower = fragment.to_lowercase();

    if lower.contains("tomorrow") {
        Some(now + Duration::days(1))
    } else if lower.contains("today") {
        now.with_hour(23).and_then(|d| d.with_minute(59))
    } else if lower.contains("next week") {
        Some(now + Duration::days(7))
    } else if lower.contains("next month") {
        // Fixed 30-day offset, not calendar-month arithmetic.
        Some(now + Duration::days(30))
    } else if lower.contains("in") && lower.contains("day") {
        let days: i64 = Regex::new(r"\d+")
            .unwrap()
            .find(&lower)?
            .as_str()
            .parse()
            .ok()?;
        Some(now + Duration::days(days))
    } else {
        parse_loose_date(lower.trim(), now)
    }
}

/// Best-effort calendar parse of a whole fragment: `M/D/YYYY`, `M/D`
/// (current year), or a bare weekday name (next occurrence, today counts).
/// Fragments that still carry a preposition ("by friday") parse as nothing.
fn parse_loose_date(text: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    if let Some(date) = parse_slash_date(text, now.year()) {
        return at_midnight(date);
    }

    if let Ok(weekday) = text.parse::<Weekday>() {
        let today = now.date_naive();
        let ahead =
            (weekday.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
        return at_midnight(today + Duration::days(i64::from(ahead)));
    }

    None
}

/// Parse `M/D` or `M/D/YYYY` into a date, defaulting the year.
fn parse_slash_date(text: &str, default_year: i32) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split('/').collect();
    let (month, day, year) = match parts.as_slice() {
        [m, d] => (m.parse::<u32>().ok()?, d.parse::<u32>().ok()?, default_year),
        [m, d, y] => (
            m.parse::<u32>().ok()?,
            d.parse::<u32>().ok()?,
            y.parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn at_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    date.and_hms_opt(0, 0, 0)?.and_local_timezone(Local).single()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
