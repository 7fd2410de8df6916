use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`; missing or unparseable values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").and_then(|v| v.parse().ok()).unwrap_or(defaults.host),
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(defaults.port),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            request_timeout: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("LOG_LEVEL", "postboard=debug"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.log_level, "postboard=debug");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn unparseable_values_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("HOST", "localhost"), ("REQUEST_TIMEOUT_SECS", "-1")]);
        assert_eq!(config, Config::default());
    }
}
