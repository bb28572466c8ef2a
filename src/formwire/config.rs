use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

const CONFIG_FILENAME: &str = "formwire.json";
const DEFAULT_TITLE: &str = "Dynamically generated form";
const DEFAULT_ACTION: &str = "/form";
const DEFAULT_SUBMIT_LABEL: &str = "Submit";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The fixed parts of a rendered document around the field controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Page title
    #[serde(default = "default_title")]
    pub title: String,

    /// Path the form posts to
    #[serde(default = "default_action")]
    pub action: String,

    /// Caption of the final submit control
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_action() -> String {
    DEFAULT_ACTION.to_string()
}

fn default_submit_label() -> String {
    DEFAULT_SUBMIT_LABEL.to_string()
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            action: default_action(),
            submit_label: default_submit_label(),
        }
    }
}

/// Configuration for the formwire binary, stored in `formwire.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormwireConfig {
    #[serde(default)]
    pub document: DocumentOptions,
}

impl FormwireConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FormwireConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<(), ConfigError> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let options = DocumentOptions::default();
        assert_eq!(options.title, "Dynamically generated form");
        assert_eq!(options.action, "/form");
        assert_eq!(options.submit_label, "Submit");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = FormwireConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, FormwireConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = FormwireConfig::default();
        config.document.action = "/signup".to_string();
        config.save(&dir).unwrap();

        let loaded = FormwireConfig::load(&dir).unwrap();
        assert_eq!(loaded.document.action, "/signup");
        assert_eq!(loaded.document.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: FormwireConfig =
            serde_json::from_str(r#"{"document": {"title": "Sign up"}}"#).unwrap();
        assert_eq!(config.document.title, "Sign up");
        assert_eq!(config.document.action, "/form");
        assert_eq!(config.document.submit_label, "Submit");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        let err = FormwireConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }
}
