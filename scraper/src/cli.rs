use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{ScraperConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_USER_AGENT};
use crate::fetch::HttpFetcher;
use crate::paginate::fetch_all;
use crate::report::{self, ReportFormat};

#[derive(Parser, Debug)]
#[command(name = "jobindex", version)]
#[command(about = "Fetch every page of a Jobindex job search and render a report")]
pub struct Args {
    /// Job-search API URL. Its `page` parameter is rewritten for each page.
    #[arg(env = "JOBINDEX_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Write the report to this file (or into this directory) instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "JOBINDEX_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, env = "JOBINDEX_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn config(&self) -> ScraperConfig {
        ScraperConfig {
            base_url: self.url.clone(),
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Runs one report. Expects logging to be installed by the caller.
pub fn dispatch(args: Args) -> Result<()> {
    let config = args.config();
    let fetcher = HttpFetcher::new(&config)?;
    let jobs = fetch_all(&fetcher, &config.base_url)
        .with_context(|| format!("fetching job listings from {}", config.base_url))?;

    let rendered = report::render(args.format, &jobs, Utc::now())?;

    match args.output.as_deref() {
        Some(path) => {
            let written = write_report(path, args.format, &rendered)?;
            info!("💾 Saved {} jobs to {}", jobs.len(), written.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}

/// Installs the stderr subscriber. `level` overrides `RUST_LOG`.
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))
}

/// Writes `contents` to `path`, creating parent directories as needed.
///
/// An existing directory receives the format's default file name. Returns
/// the path actually written.
pub fn write_report(path: &Path, format: ReportFormat, contents: &str) -> crate::Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(format.default_file_name())
    } else {
        path.to_path_buf()
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
            info!("📁 Created {}", parent.display());
        }
    }

    fs::write(&target, contents)?;
    Ok(target)
}
