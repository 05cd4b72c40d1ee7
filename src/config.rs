//! Runtime configuration
//!
//! Read from environment variables; empty or missing values use defaults.

/// Fallback user id when neither the profile nor the caller supplies one
pub const DEFAULT_FALLBACK_USER_ID: &str = "local-user";

/// Default tracing directive for the binaries
pub const DEFAULT_LOG_DIRECTIVE: &str = "fittrack=info";

pub const ENV_FALLBACK_USER_ID: &str = "FITTRACK_FALLBACK_USER_ID";
pub const ENV_LOG: &str = "FITTRACK_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fallback_user_id: String,
    pub log_directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_user_id: DEFAULT_FALLBACK_USER_ID.to_string(),
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl Config {
    /// Build configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            fallback_user_id: non_empty(ENV_FALLBACK_USER_ID)
                .unwrap_or(defaults.fallback_user_id),
            log_directive: non_empty(ENV_LOG).unwrap_or(defaults.log_directive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.fallback_user_id, "local-user");
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FALLBACK_USER_ID, "   "),
            (ENV_LOG, ""),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FALLBACK_USER_ID, "device-42"),
            (ENV_LOG, "fittrack=debug"),
        ]));
        assert_eq!(config.fallback_user_id, "device-42");
        assert_eq!(config.log_directive, "fittrack=debug");
    }
}
