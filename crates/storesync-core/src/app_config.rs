use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Per-call timeouts for each remote request the WooCommerce client makes.
///
/// Every call is bounded independently; there is no shared deadline across
/// the steps of a diagnostic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeouts {
    /// `GET {root}` reachability probe.
    pub probe: Duration,
    /// `GET {root}/wp-json/` discovery document.
    pub discovery: Duration,
    /// `GET .../products?per_page=1` credential check.
    pub credentials: Duration,
    /// Best-effort `GET .../system_status` version lookup.
    pub system_status: Duration,
    /// `GET .../products` listing page.
    pub fetch: Duration,
    /// `PUT .../products/{id}`.
    pub update: Duration,
}

impl Default for RequestTimeouts {
    fn default() -> Self {
        Self {
            probe: Duration::from_secs(10),
            discovery: Duration::from_secs(10),
            credentials: Duration::from_secs(15),
            system_status: Duration::from_secs(10),
            fetch: Duration::from_secs(30),
            update: Duration::from_secs(20),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Keys accepted by the dispatcher's auth gate. Empty disables the gate
    /// (development only).
    pub api_keys: Vec<String>,
    pub user_agent: String,
    pub rate_limit_per_minute: usize,
    pub timeouts: RequestTimeouts,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "api_keys",
                &format_args!("[{} redacted]", self.api_keys.len()),
            )
            .field("user_agent", &self.user_agent)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}
