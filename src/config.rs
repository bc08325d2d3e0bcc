/// Configuration Module
///
/// Resolves the connection string and UI defaults. Precedence for the
/// database url: the DATABASE_URL environment variable, then the TOML
/// config file, then a local `library.db` fallback. A missing or broken
/// configuration never stops the shell from starting; the connection
/// provider surfaces the consequences per operation.
use crate::core::{BookdeskError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Connection string used when neither the environment nor a config
/// file provides one.
pub const DEFAULT_DATABASE_URL: &str = "library.db";

/// Environment variable that overrides the configured database url.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub database: Option<DatabaseConfig>,
    pub ui: Option<UiConfig>,
}

/// Database-related configuration.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

/// UI-related configuration.
#[derive(Debug, Deserialize)]
pub struct UiConfig {
    /// Default state of preview mode at session start
    pub preview: Option<bool>,
}

/// The resolved settings the application runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    pub preview: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            url: DEFAULT_DATABASE_URL.to_string(),
            preview: false,
        }
    }
}

/// Loads configuration from a TOML file at the given path.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(&path)
        .map_err(|e| BookdeskError::Config(format!("cannot read config file: {e}")))?;
    toml::from_str(&content).map_err(|e| BookdeskError::Config(format!("invalid config: {e}")))
}

/// Per-user default config location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bookdesk").join("config.toml"))
}

/// Resolves settings from an optional explicit config path, the
/// per-user config file, and the environment.
///
/// # Errors
///
/// Returns `BookdeskError::Config` only when an explicitly named config
/// file cannot be read or parsed. A missing default config file is not
/// an error.
pub fn resolve(explicit_path: Option<&Path>) -> Result<Settings> {
    let config = match explicit_path {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_config(&path)?,
            _ => Config::default(),
        },
    };
    Ok(apply(config, std::env::var(DATABASE_URL_VAR).ok()))
}

/// Applies the environment override on top of parsed configuration.
fn apply(config: Config, env_url: Option<String>) -> Settings {
    let file_url = config.database.and_then(|d| d.url);
    let preview = config.ui.and_then(|u| u.preview).unwrap_or(false);
    Settings {
        url: env_url
            .or(file_url)
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
[database]
url = "/var/lib/bookdesk/library.db"

[ui]
preview = true
"#;

    #[test]
    fn test_parse_sample_config() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).expect("Failed to parse sample config");
        assert_eq!(
            config.database.unwrap().url.unwrap(),
            "/var/lib/bookdesk/library.db"
        );
        assert!(config.ui.unwrap().preview.unwrap());
    }

    #[test]
    fn test_env_overrides_file() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        let settings = apply(config, Some("/tmp/other.db".to_string()));
        assert_eq!(settings.url, "/tmp/other.db");
        assert!(settings.preview);
    }

    #[test]
    fn test_defaults_when_nothing_is_configured() {
        let settings = apply(Config::default(), None);
        assert_eq!(settings.url, DEFAULT_DATABASE_URL);
        assert!(!settings.preview);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/bookdesk/config.toml");
        assert!(matches!(result, Err(BookdeskError::Config(_))));
    }

    #[test]
    fn test_load_config_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, SAMPLE_CONFIG).unwrap();
        let config = load_config(&path).unwrap();
        assert!(config.ui.unwrap().preview.unwrap());
    }
}
