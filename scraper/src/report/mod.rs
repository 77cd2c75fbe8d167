//! Report renderers for a fetched list of jobs.
//!
//! Every format shows the same fields and omits absent ones.

use chrono::{DateTime, Utc};
use jobindex_common::JobRecord;

use crate::error::Result;

mod html;
mod markdown;
mod text;

pub const REPORT_TITLE: &str = "Jobindex Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Console summary
    #[default]
    Text,
    /// Standalone HTML document
    Html,
    /// Markdown document
    Markdown,
    /// Pretty-printed JSON array
    Json,
}

impl ReportFormat {
    /// Conventional file name when writing this format to disk.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportFormat::Text => "jobs.txt",
            ReportFormat::Html => "index.html",
            ReportFormat::Markdown => "jobs.md",
            ReportFormat::Json => "jobs.json",
        }
    }
}

pub fn render(format: ReportFormat, jobs: &[JobRecord], generated_at: DateTime<Utc>) -> Result<String> {
    let rendered = match format {
        ReportFormat::Text => text::render(jobs),
        ReportFormat::Html => html::render(jobs, generated_at),
        ReportFormat::Markdown => markdown::render(jobs, generated_at),
        ReportFormat::Json => serde_json::to_string_pretty(jobs)?,
    };
    Ok(rendered)
}

fn fetched_line(count: usize, generated_at: DateTime<Utc>) -> String {
    format!(
        "Fetched {} jobs at {}",
        count,
        generated_at.format("%Y-%m-%d %H:%M UTC")
    )
}
