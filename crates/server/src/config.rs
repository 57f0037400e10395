//! Server configuration

/// Upstream feed queried once at startup.
const DEFAULT_DATA_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Server configuration loaded from environment variables
pub struct Config {
    pub bind_address: String,
    pub data_url: String,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            data_url: std::env::var("DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| vec!["*".to_string()]),
            rate_limit_rps: std::env::var("RATE_LIMIT_RPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
        }
    }
}
