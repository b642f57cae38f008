use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no `.env` at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub store_backend: StoreBackend,
    pub store_path: PathBuf,
    /// Simulated latency of the canned suggestion backend.
    pub suggestion_delay: Duration,
    /// Enables the model-backed suggester when set.
    pub anthropic_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store_backend = match var("RESUME_STORE").as_deref().map(str::trim) {
            None | Some("file") => StoreBackend::File,
            Some("memory") => StoreBackend::Memory,
            Some(other) => bail!("RESUME_STORE must be 'file' or 'memory', got '{other}'"),
        };

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            store_backend,
            store_path: var("RESUME_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/resume.json")),
            suggestion_delay: Duration::from_millis(
                var("SUGGESTION_DELAY_MS")
                    .unwrap_or_else(|| "1500".to_string())
                    .parse::<u64>()
                    .context("SUGGESTION_DELAY_MS must be a whole number of milliseconds")?,
            ),
            anthropic_api_key: var("ANTHROPIC_API_KEY"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.store_backend, StoreBackend::File);
        assert_eq!(config.store_path, PathBuf::from("data/resume.json"));
        assert_eq!(config.suggestion_delay, Duration::from_millis(1500));
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("RESUME_STORE", "memory"),
            ("RESUME_STORE_PATH", "/tmp/r.json"),
            ("SUGGESTION_DELAY_MS", "0"),
            ("ANTHROPIC_API_KEY", "sk-test"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.store_path, PathBuf::from("/tmp/r.json"));
        assert_eq!(config.suggestion_delay, Duration::ZERO);
        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = config_from(&[("ANTHROPIC_API_KEY", "  ")]).unwrap();
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("SUGGESTION_DELAY_MS", "-1")]).is_err());
        assert!(config_from(&[("RESUME_STORE", "redis")]).is_err());
    }
}
