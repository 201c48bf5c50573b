use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Default catalog endpoint (`GET`).
    pub catalog_url: String,
    /// Live proximity query endpoint (`POST`).
    pub overpass_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after a transient failure. `0` disables retries.
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub search_radius_m: u32,
    pub page_size: usize,
    /// Seed for synthesized ratings and prep times; `None` draws from the OS.
    pub rng_seed: Option<u64>,
}
