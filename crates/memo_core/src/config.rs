//! Application configuration.
//!
//! # Responsibility
//! - Hold the remote endpoint, fallback policy and request timeout.
//! - Load overrides from `MEMOAPP_*` environment variables.
//!
//! # Invariants
//! - Defaults reproduce the original demo behavior (fixture fallback on).
//! - Invalid values are rejected, never silently replaced by defaults.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://challenge-server.tracks.run/memoapp";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_BASE: &str = "MEMOAPP_API_BASE";
pub const ENV_FALLBACK: &str = "MEMOAPP_FALLBACK";
pub const ENV_TIMEOUT_SECS: &str = "MEMOAPP_TIMEOUT_SECS";

/// How remote failures are turned into local state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Substitute fixture data and synthesized records on failure.
    #[default]
    Demo,
    /// Never invent data; failures leave empty or local-only state.
    Strict,
}

impl FallbackPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Strict => "strict",
        }
    }

    pub fn uses_fixtures(self) -> bool {
        matches!(self, Self::Demo)
    }
}

impl FromStr for FallbackPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "demo" | "offline" => Ok(Self::Demo),
            "strict" => Ok(Self::Strict),
            other => Err(ConfigError::InvalidFallbackPolicy(other.to_string())),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyApiBase,
    InvalidApiBase(String),
    InvalidFallbackPolicy(String),
    InvalidTimeout(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyApiBase => write!(f, "api base must not be empty"),
            Self::InvalidApiBase(value) => {
                write!(f, "api base must start with http:// or https://, got `{value}`")
            }
            Self::InvalidFallbackPolicy(value) => {
                write!(f, "unsupported fallback policy `{value}`; expected demo|strict")
            }
            Self::InvalidTimeout(value) => {
                write!(f, "timeout must be a positive number of seconds, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Runtime configuration for one client process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub fallback_policy: FallbackPolicy,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            fallback_policy: FallbackPolicy::Demo,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Loads config from process environment over defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads config from an arbitrary key lookup over defaults.
    ///
    /// # Errors
    /// - Returns an error for a blank or non-http base address.
    /// - Returns an error for an unknown policy or non-positive timeout.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_base) = lookup(ENV_API_BASE) {
            config.api_base = normalize_api_base(&api_base)?;
        }
        if let Some(policy) = lookup(ENV_FALLBACK) {
            config.fallback_policy = policy.parse()?;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = parse_timeout(&timeout)?;
        }

        Ok(config)
    }
}

fn normalize_api_base(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyApiBase);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidApiBase(trimmed.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(value.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, FallbackPolicy, DEFAULT_API_BASE};
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("defaults load");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.fallback_policy, FallbackPolicy::Demo);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_are_normalized() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MEMOAPP_API_BASE", " http://127.0.0.1:9000/api/ "),
            ("MEMOAPP_FALLBACK", "STRICT"),
            ("MEMOAPP_TIMEOUT_SECS", "3"),
        ]))
        .expect("overrides load");
        assert_eq!(config.api_base, "http://127.0.0.1:9000/api");
        assert_eq!(config.fallback_policy, FallbackPolicy::Strict);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[("MEMOAPP_API_BASE", "  ")])),
            Err(ConfigError::EmptyApiBase)
        );
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("MEMOAPP_API_BASE", "ftp://x")])),
            Err(ConfigError::InvalidApiBase(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("MEMOAPP_FALLBACK", "maybe")])),
            Err(ConfigError::InvalidFallbackPolicy(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("MEMOAPP_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }
}
