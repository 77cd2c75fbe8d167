//! Jobindex job-search scraper.
//!
//! Fetches every page of a job search from the Jobindex JSON API, normalizes
//! the listings and renders them as a report.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod paginate;
pub mod query;
pub mod report;

pub use config::ScraperConfig;
pub use error::{Error, FetchError, Result};
pub use fetch::{HttpFetcher, PageSource};
pub use paginate::fetch_all;
pub use query::set_query_param;
