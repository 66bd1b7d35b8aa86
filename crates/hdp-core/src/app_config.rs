/// Site the extractor talks to when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://www.zillow.com";

pub const DEFAULT_USER_AGENT: &str = "hdp/0.1 (listing-extractor)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scheme and host every detail and fragment URL is resolved against.
    pub base_url: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "info".to_string(),
        }
    }
}
