//! Completion configuration
//!
//! Loaded from YAML or JSON (by extension); every field has a default so a
//! partial file is fine.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompletionConfig {
    /// Hostname offered as the universal `scp` target
    pub home_hostname: String,
    /// Offer NUKE.exe to `run`/`rm` even when it is not installed
    pub offer_nuke: bool,
    /// Drop repeated candidates, keeping the first occurrence
    pub dedupe: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            home_hostname: "home".to_string(),
            offer_nuke: true,
            dedupe: true,
        }
    }
}

impl CompletionConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from disk; `.json` files are JSON, anything else YAML
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = CompletionConfig::from_yaml("offer_nuke: false\n").unwrap();
        assert!(!config.offer_nuke);
        assert!(config.dedupe);
        assert_eq!(config.home_hostname, "home");
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = CompletionConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[tokio::test]
    async fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("completion.json");
        std::fs::write(&path, r#"{"home_hostname":"base"}"#).unwrap();
        let config = CompletionConfig::load(&path).await.unwrap();
        assert_eq!(config.home_hostname, "base");

        let err = CompletionConfig::load(dir.path().join("absent.yaml")).await.unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
