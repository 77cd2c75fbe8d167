use chrono::{DateTime, Utc};
use jobindex_common::JobRecord;

use super::{fetched_line, REPORT_TITLE};

pub(super) fn render(jobs: &[JobRecord], generated_at: DateTime<Utc>) -> String {
    let mut md = vec![
        format!("# {REPORT_TITLE}"),
        String::new(),
        format!("{}.", fetched_line(jobs.len(), generated_at)),
    ];

    if jobs.is_empty() {
        md.push(String::new());
        md.push("_No job postings found._".to_string());
    }

    for job in jobs {
        md.push(String::new());
        md.push(format!("## {}", inline(job.headline())));
        md.push(String::new());
        if let Some(company) = job.company() {
            md.push(format!("- **Company:** {}", inline(company)));
        }
        if let Some(area) = job.area() {
            md.push(format!("- **Area:** {}", inline(area)));
        }
        if let Some(distance) = job.distance_km() {
            md.push(format!("- **Distance:** {distance:.1} km"));
        }
        if let Some(deadline) = job.apply_deadline() {
            md.push(format!("- **Deadline:** {}", inline(deadline)));
        }
        if let Some(url) = job.apply_url() {
            md.push(format!("- [Apply here](<{}>)", link_destination(url)));
        }
    }

    md.push(String::new());
    md.join("\n")
}

/// Collapses all whitespace, newlines included, so text stays on one line.
fn inline(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Percent-encodes what would end or split a `<...>` link destination.
fn link_destination(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.trim().chars() {
        match c {
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            ' ' => out.push_str("%20"),
            '\r' | '\n' => {}
            c => out.push(c),
        }
    }
    out
}
