//! Configuration loading and constants.
//!
//! Configuration comes from the process environment and is read exactly once
//! at startup. `AppConfig` is the root struct; it is immutable afterwards and
//! handed to the router and the server explicitly.

use std::net::IpAddr;
use std::str::FromStr;

use const_format::formatcp;

use crate::version::VersionLabel;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_VERSION: &str = "VERSION";
pub const ENV_HOST: &str = "HOST";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

// =============================================================================
// Defaults
// =============================================================================

/// Listening port when PORT is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Version label when VERSION is unset
pub const DEFAULT_VERSION: &str = "blue";

/// Bind address when HOST is unset (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME"));

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

// =============================================================================
// HTTP
// =============================================================================

/// Both routes report live process state and must not be stored by upstream caches
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Deployment label shown on the page and reported by the health check
    pub version: VersionLabel,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

/// Log output format: human-readable text (default) or structured JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl LogFormat {
    /// Pick the log format before anything else is loaded.
    ///
    /// An explicit CLI choice wins and skips LOG_FORMAT entirely.
    pub fn resolve<F>(cli: Option<LogFormat>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = cli {
            return Ok(format);
        }
        lookup(ENV_LOG_FORMAT)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string())
            .parse()
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match get(ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let host_raw = get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_raw))?;

        let version = get(ENV_VERSION).map(VersionLabel::new).unwrap_or_default();

        Ok(Self {
            http: HttpServerConfig { host, port },
            version,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),
    #[error("Invalid HOST value {0:?}: expected an IP address")]
    InvalidHost(String),
    #[error("Invalid LOG_FORMAT value {0:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.host.to_string(), "0.0.0.0");
        assert_eq!(config.version.as_str(), "blue");
    }

    #[test]
    fn test_reads_port_and_version() {
        let config = load(&[("PORT", "8080"), ("VERSION", "green")]).unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.version.as_str(), "green");
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = load(&[("PORT", ""), ("VERSION", ""), ("HOST", "")]).unwrap();
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.version.as_str(), DEFAULT_VERSION);
        assert_eq!(config.http.host.to_string(), DEFAULT_HOST);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(matches!(
            load(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            load(&[("PORT", "70000")]),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        assert!(matches!(
            load(&[("HOST", "not-an-ip")]),
            Err(ConfigError::InvalidHost(_))
        ));
    }

    fn log_format_env(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key| (key == ENV_LOG_FORMAT).then(|| value.to_string())
    }

    #[test]
    fn test_log_format_from_env() {
        assert_eq!(LogFormat::resolve(None, |_| None).unwrap(), LogFormat::Text);
        assert_eq!(LogFormat::resolve(None, log_format_env("")).unwrap(), LogFormat::Text);
        assert_eq!(LogFormat::resolve(None, log_format_env("JSON")).unwrap(), LogFormat::Json);
        assert!(matches!(
            LogFormat::resolve(None, log_format_env("yaml")),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }

    #[test]
    fn test_cli_log_format_overrides_bad_env() {
        assert_eq!(
            LogFormat::resolve(Some(LogFormat::Json), log_format_env("yaml")).unwrap(),
            LogFormat::Json
        );
    }

    #[test]
    fn test_bad_log_format_does_not_block_app_config() {
        let config = load(&[("LOG_FORMAT", "yaml"), ("VERSION", "green")]).unwrap();
        assert_eq!(config.version.as_str(), "green");
    }

    #[test]
    fn test_default_log_filter_targets_this_crate() {
        assert_eq!(DEFAULT_LOG_FILTER, "bluegreen=info,tower_http=info");
    }
}
