use log::LevelFilter;
use rand::seq::IndexedRandom;

/// Public host serving both the API and the booking pages
pub const BASE_URL: &str = "https://www.recreation.gov";

/// Desktop browser User-Agents, one is picked per process
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:120.0) Gecko/20100101 Firefox/120.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36 Edg/119.0.0.0",
];

/// Configuration handed to [`crate::RecGovClient`] at construction
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host every endpoint path is appended to
    pub base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Verbosity of the run; at `Debug` or above raw payloads are dumped
    pub log_level: LevelFilter,
}

impl ClientConfig {
    /// Create a configuration for the public API with a randomly chosen User-Agent
    pub fn new(log_level: LevelFilter) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: random_user_agent().to_string(),
            log_level,
        }
    }

    /// Point the client at another host (used against mock servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether full JSON payloads should be written to the debug log
    pub fn dumps_payloads(&self) -> bool {
        self.log_level >= LevelFilter::Debug
    }
}

/// Pick one of [`USER_AGENTS`] at random
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
