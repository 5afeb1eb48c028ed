//! Configuration module for the sitecap backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Default persistence endpoint used when a submit request names none
    pub submit_url: Option<String>,
    /// Timeout for the outbound submission request
    pub submit_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("SITECAP_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid SITECAP_BIND_ADDR format");

        let log_level = env::var("SITECAP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let submit_url = env::var("SITECAP_SUBMIT_URL").ok();

        let submit_timeout = env::var("SITECAP_SUBMIT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(10));

        Self {
            bind_addr,
            log_level,
            submit_url,
            submit_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("SITECAP_BIND_ADDR");
        env::remove_var("SITECAP_LOG_LEVEL");
        env::remove_var("SITECAP_SUBMIT_URL");
        env::remove_var("SITECAP_SUBMIT_TIMEOUT_SECS");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.submit_url.is_none());
        assert_eq!(config.submit_timeout, Duration::from_secs(10));
    }
}
