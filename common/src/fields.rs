//! Field-level parsers for raw API values.
//!
//! Each parser degrades to `None` (or the raw input) instead of failing, so a
//! single malformed listing never breaks a report.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns a non-empty string value, or `None` for anything else.
pub fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Reformats an ISO-8601 timestamp as `YYYY-MM-DD HH:MM <tz>`.
///
/// A trailing `Z` is read as UTC. Zero offsets print as `UTC`, other offsets
/// as `UTC+HH:MM`, and naive timestamps carry no zone label. Input that does
/// not parse is returned unchanged.
pub fn format_deadline(raw: &str) -> String {
    let trimmed = raw.trim();
    let normalized = match trimmed.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return format!("{} {}", dt.format("%Y-%m-%d %H:%M"), offset_label(dt.offset()));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, format) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return format!("{} 00:00", date.format("%Y-%m-%d"));
    }

    raw.to_string()
}

fn offset_label(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "UTC".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, abs % 3600 / 60)
}

/// Deadline field: absent, empty or non-string values stay absent.
pub fn deadline(value: Option<&Value>) -> Option<String> {
    text(value).map(|raw| format_deadline(&raw))
}

/// Parses a distance given either as a JSON number or as a string such as
/// `"12.3 km"`. Anything else, including non-finite numbers, yields `None`.
pub fn parse_distance(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|d| d.is_finite()),
        Value::String(s) => parse_distance_str(s),
        _ => None,
    }
}

fn parse_distance_str(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().to_lowercase();
    let re = Regex::new(r"^(.*?)\s*km$").ok()?;

    let amount = match re.captures(&cleaned) {
        Some(cap) => cap.get(1).map_or("", |m| m.as_str()),
        None => cleaned.as_str(),
    };

    amount.trim().parse::<f64>().ok().filter(|d| d.is_finite())
}
