use crate::constants::DEFAULT_BACKEND_URL;
use crate::errors::{ObrolanError, ObrolanResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> ObrolanResult<()> {
    let config_path = get_config_path()?;

    let mut config = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| ObrolanError::config_error(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str::<Config>(&config_str)
            .map_err(|e| ObrolanError::config_error(format!("Failed to parse config: {}", e)))?
    } else {
        let config = Config::default();

        fs::create_dir_all(config_path.parent().unwrap_or(&config_path)).map_err(|e| {
            ObrolanError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| ObrolanError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| ObrolanError::config_error(format!("Failed to write config file: {}", e)))?;

        config
    };

    // Env var wins over the config file.
    if let Ok(url) = env::var("OBROLAN_BACKEND_URL") {
        config.backend_url = url;
    }

    validate_config(&config)?;
    *CONFIG.write().unwrap() = config;

    Ok(())
}

fn get_config_path() -> ObrolanResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ObrolanError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("obrolan").join("config.json"))
}

fn validate_config(config: &Config) -> ObrolanResult<()> {
    if config.backend_url.is_empty() {
        return Err(ObrolanError::config_error("Backend URL is required"));
    }

    if !config.backend_url.starts_with("http://") && !config.backend_url.starts_with("https://") {
        return Err(ObrolanError::config_error(
            "Backend URL must start with http:// or https://",
        ));
    }

    if config.log_level.is_empty() {
        return Err(ObrolanError::config_error("Log level is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_backend_url() {
        let mut config = Config::default();
        config.backend_url = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_backend_url_without_scheme() {
        let mut config = Config::default();
        config.backend_url = "localhost:5000".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(parsed.log_level, "info");
    }
}
