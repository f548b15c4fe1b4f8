//! Application configuration.
//!
//! Read once at startup from an optional JSON file; every field has a
//! default so an empty object (or no file at all) is a valid configuration.
//!
//! ```json
//! {
//!   "default_language": "hi",
//!   "strict_locales": false,
//!   "sync_delay_ms": 2000,
//!   "online": true,
//!   "locale_path": "locales.json"
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{Catalog, I18nError, Language};
use crate::sync::DEFAULT_SYNC_DELAY;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Locale error: {0}")]
    Locale(#[from] I18nError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language a new session starts in
    pub default_language: Language,
    /// Reject locale tables that are not key-complete
    pub strict_locales: bool,
    /// Simulated sync delay
    pub sync_delay_ms: u64,
    /// Initial connectivity of the simulated sync backend
    pub online: bool,
    /// JSON locale document replacing the built-in tables
    pub locale_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            strict_locales: false,
            sync_delay_ms: DEFAULT_SYNC_DELAY.as_millis() as u64,
            online: true,
            locale_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    pub fn sync_delay(&self) -> Duration {
        Duration::from_millis(self.sync_delay_ms)
    }

    /// Build the locale catalog this configuration describes.
    ///
    /// With `strict_locales` set, a catalog whose tables do not share the
    /// same key set is rejected; otherwise missing keys fall back at lookup.
    pub fn build_catalog(&self) -> ConfigResult<Catalog> {
        let catalog = match &self.locale_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };

        let report = catalog.coverage();
        if !report.is_complete() {
            if self.strict_locales {
                catalog.validate_complete()?;
            }
            for locale in report.locales.iter().filter(|l| !l.missing_keys.is_empty()) {
                tracing::warn!(
                    language = locale.language.code(),
                    missing = locale.missing_keys.len(),
                    "Locale table incomplete; missing keys fall back to the key"
                );
            }
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_language, Language::Hi);
        assert_eq!(config.sync_delay(), DEFAULT_SYNC_DELAY);
        assert!(config.online);
    }

    #[test]
    fn test_partial_config() {
        let config =
            AppConfig::from_json_str(r#"{"default_language": "en", "sync_delay_ms": 0}"#).unwrap();
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.sync_delay(), Duration::ZERO);
        assert!(!config.strict_locales);
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = AppConfig::from_json_str(r#"{"default_language": "pa"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"strict_locales": true}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.strict_locales);
    }

    #[test]
    fn test_build_catalog_from_locale_file() {
        let dir = TempDir::new().unwrap();
        let locales = dir.path().join("locales.json");
        fs::write(
            &locales,
            r#"{"en": {"home.title": "Nabha Health"}, "hi": {}}"#,
        )
        .unwrap();

        let lenient = AppConfig {
            locale_path: Some(locales.clone()),
            ..AppConfig::default()
        };
        let catalog = lenient.build_catalog().unwrap();
        assert_eq!(catalog.resolve(Language::Hi, "home.title"), "home.title");

        let strict = AppConfig {
            locale_path: Some(locales),
            strict_locales: true,
            ..AppConfig::default()
        };
        assert!(matches!(
            strict.build_catalog(),
            Err(ConfigError::Locale(I18nError::IncompleteLocale { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = AppConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
