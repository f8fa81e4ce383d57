use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// `STORAGE_PATH` value selecting a store without durable backing
pub const IN_MEMORY_STORAGE: &str = ":memory:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// `None` keeps the document in process memory only
    pub storage_path: Option<PathBuf>,
    pub seed_on_empty: bool,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage_path = lookup("STORAGE_PATH").unwrap_or_else(|| "data/storage.json".to_string());

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            storage_path: (storage_path != IN_MEMORY_STORAGE).then(|| PathBuf::from(storage_path)),
            seed_on_empty: lookup("SEED_ON_EMPTY")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("SEED_ON_EMPTY must be true or false")?
                .unwrap_or(false),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value {:?}", other),
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

        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.storage_path, Some(PathBuf::from("data/storage.json")));
        assert!(!config.seed_on_empty);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_in_memory_storage_and_flags() {
        let config = config_from(&[
            ("STORAGE_PATH", ":memory:"),
            ("SEED_ON_EMPTY", "true"),
            ("LOG_FORMAT", "json"),
            ("SERVER_PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.storage_path, None);
        assert!(config.seed_on_empty);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(config_from(&[("SERVER_PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("SEED_ON_EMPTY", "maybe")]).is_err());
    }
}
