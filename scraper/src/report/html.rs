use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use jobindex_common::JobRecord;

use super::{fetched_line, REPORT_TITLE};

pub(super) fn render(jobs: &[JobRecord], generated_at: DateTime<Utc>) -> String {
    let mut html = vec![
        "<!DOCTYPE html>".to_string(),
        format!("<html lang=\"en\"><head><meta charset=\"UTF-8\"><title>{REPORT_TITLE}</title></head><body>"),
        format!("<h1>{REPORT_TITLE}</h1>"),
        format!("<p>{}</p>", fetched_line(jobs.len(), generated_at)),
    ];

    if jobs.is_empty() {
        html.push("<p>No job postings found.</p>".to_string());
    }

    for job in jobs {
        html.push("<hr>".to_string());
        html.push(format!("<h2>{}</h2>", encode_text(job.headline())));
        if let Some(company) = job.company() {
            html.push(format!("<p><strong>Company:</strong> {}</p>", encode_text(company)));
        }
        if let Some(area) = job.area() {
            html.push(format!("<p><strong>Area:</strong> {}</p>", encode_text(area)));
        }
        if let Some(distance) = job.distance_km() {
            html.push(format!("<p><strong>Distance:</strong> {distance:.1} km</p>"));
        }
        if let Some(deadline) = job.apply_deadline() {
            html.push(format!("<p><strong>Deadline:</strong> {}</p>", encode_text(deadline)));
        }
        if let Some(url) = job.apply_url() {
            html.push(format!(
                "<p><a href=\"{}\">Apply here</a></p>",
                encode_double_quoted_attribute(url)
            ));
        }
    }

    html.push("</body></html>".to_string());
    html.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{generated_at, sample_jobs};

    #[test]
    fn test_html_report_fields_and_escaping() {
        let html = render(&sample_jobs(), generated_at());

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<p>Fetched 2 jobs at 2024-05-02 08:30 UTC</p>"));
        assert!(html.contains("<h2>Rust Developer</h2>"));
        assert!(html.contains("<p><strong>Company:</strong> Acme &amp; Sons</p>"));
        assert!(html.contains("<p><strong>Distance:</strong> 12.3 km</p>"));
        assert!(html.contains("<p><strong>Deadline:</strong> 2024-05-01 10:00 UTC</p>"));
        assert!(html.contains("<a href=\"https://acme.example/apply?id=1&amp;src=ji\">Apply here</a>"));
        assert_eq!(html.matches("<hr>").count(), 2);
        assert_eq!(html.matches("Company:").count(), 1);
    }

    #[test]
    fn test_html_report_empty() {
        let html = render(&[], generated_at());
        assert!(html.contains("Fetched 0 jobs"));
        assert!(html.contains("No job postings found."));
        assert!(!html.contains("<hr>"));
    }
}
