//! Shared job model for the Jobindex report tools.
//!
//! Raw API listings are turned into [`JobRecord`]s here. Normalization never
//! fails: malformed fields become absent values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub mod fields;
mod page;

pub use page::PageResponse;

/// Headline used when a listing has no usable title.
pub const NO_TITLE: &str = "(no title)";

/// One normalized job listing. Read-only once built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JobRecord {
    headline: String,
    company: Option<String>,
    area: Option<String>,
    apply_deadline: Option<String>,
    apply_url: Option<String>,
    distance_km: Option<f64>,
}

impl JobRecord {
    /// Builds a record from one raw object of the API `results` list.
    pub fn from_api_payload(payload: &Value) -> Self {
        let headline = payload
            .get("headline")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(NO_TITLE)
            .to_string();

        let company = fields::text(payload.get("company").and_then(|c| c.get("name")));

        let apply_url = fields::text(payload.get("apply_url"))
            .or_else(|| fields::text(payload.get("url")));

        let raw_distance = payload.get("distance");
        let distance_km = fields::parse_distance(raw_distance);
        if let (None, Some(raw)) = (distance_km, raw_distance.filter(|v| !v.is_null())) {
            debug!(headline = %headline, distance = %raw, "dropping unparsable distance");
        }

        Self {
            company,
            area: fields::text(payload.get("area")),
            apply_deadline: fields::deadline(payload.get("apply_deadline")),
            apply_url,
            distance_km,
            headline,
        }
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    /// Deadline as `YYYY-MM-DD HH:MM <tz>`, or the raw value if it did not parse.
    pub fn apply_deadline(&self) -> Option<&str> {
        self.apply_deadline.as_deref()
    }

    pub fn apply_url(&self) -> Option<&str> {
        self.apply_url.as_deref()
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }
}

/// Normalizes every listing on a page, keeping API order.
pub fn normalize(page: &PageResponse) -> Vec<JobRecord> {
    page.results().iter().map(JobRecord::from_api_payload).collect()
}
