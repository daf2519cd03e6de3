use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides `api_base`
pub const API_BASE_ENV: &str = "ENGLISH_HUB_API_BASE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL, without the `/api` prefix
    pub api_base: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: default_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".english-hub"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_dir() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("logs"))
    }

    /// Read the config file, if there is one and it parses
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Load the config, writing the defaults on first run, then apply
    /// environment overrides.
    pub fn load_or_init() -> Config {
        let mut config = match Self::load() {
            Some(config) => config,
            None => {
                let config = Config::default();
                if let Err(e) = config.save() {
                    eprintln!("Could not write default config: {}", e);
                }
                config
            }
        };

        if let Ok(api_base) = env::var(API_BASE_ENV) {
            if !api_base.trim().is_empty() {
                config.api_base = api_base;
            }
        }
        config.api_base = normalize_base(&config.api_base);
        config
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api_base, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_optional_keys_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"api_base":"http://hub.local"}"#).unwrap();
        assert_eq!(config.api_base, "http://hub.local");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base(" http://hub.local:8000/ "), "http://hub.local:8000");
        assert_eq!(normalize_base("http://hub.local"), "http://hub.local");
    }
}
