use std::time::Duration;

/// Jobindex job search around Skovvej 67, 9510 Arden: 40 km radius, jobs
/// from the last day, best match first.
pub const DEFAULT_URL: &str = "https://www.jobindex.dk/api/jobsearch/v3/?address=Skovvej+67%2C+9510+Arden\
&jobage=1&latitude=56.776759306331&longitude=9.859810066344&radius=40\
&sort=score&page=1&include_html=1&include_skyscraper=1";

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScraperConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
