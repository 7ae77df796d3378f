// src/resolve/fields.rs

//! Interpretation of the free-form `<start>` and `<length>` task fields.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Date literal token: `YYYY-MM-DD` or `YYYY/MM/DD`.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}[-/]\d{2}[-/]\d{2}").expect("date literal regex is valid")
});

/// Interpreted form of a task's `<start>` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartSpec {
    /// The field contains a date literal; always resolvable immediately.
    Date(NaiveDate),
    /// `after <id>`: start at the referenced task's end.
    ///
    /// `None` when the `after` keyword has no reference id; such a record can
    /// never resolve through the graph and takes the forced fallback.
    After(Option<String>),
    /// Unrecognized format; resolves immediately to the caller-supplied
    /// reference date.
    Fallback,
}

impl StartSpec {
    /// Classify a raw start field.
    ///
    /// A date literal anywhere in the field wins over the `after` keyword.
    pub fn classify(raw: &str) -> Self {
        if let Some(date) = extract_date(raw) {
            return StartSpec::Date(date);
        }

        let s = raw.trim();
        if s.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("after")) {
            let mut parts = s.split_whitespace();
            let _keyword = parts.next();
            return StartSpec::After(
                parts.next().map(|id| id.trim_matches(',').to_string()),
            );
        }

        StartSpec::Fallback
    }
}

/// Find the first date literal in a field, normalizing `/` to `-`.
///
/// Tokens that look like dates but name an invalid calendar day (e.g.
/// `2024-13-99`) are treated as no match.
pub fn extract_date(field: &str) -> Option<NaiveDate> {
    let token = DATE_RE.find(field)?.as_str().replace('/', "-");
    NaiveDate::parse_from_str(&token, "%Y-%m-%d").ok()
}

/// Parse a `<length>` field into a day count, given the task's resolved start.
///
/// - trailing `d`: integer days
/// - trailing `w`: integer weeks, times seven
/// - embedded date literal: treated as the end date
/// - otherwise a bare integer
///
/// Unparseable values default to 1 and the result is floored to 1, so every
/// task occupies at least one day.
pub fn parse_length(raw: &str, start: NaiveDate) -> i64 {
    let lr = raw.trim();

    let days = if let Some(num) = lr.strip_suffix('d') {
        num.trim().parse::<i64>().unwrap_or(1)
    } else if let Some(num) = lr.strip_suffix('w') {
        num.trim().parse::<i64>().map(|w| w * 7).unwrap_or(1)
    } else if let Some(end) = extract_date(lr) {
        end.signed_duration_since(start).num_days()
    } else {
        lr.parse::<i64>().unwrap_or(1)
    };

    days.max(1)
}
