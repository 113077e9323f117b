use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Layering for the highlight rectangles relative to the viewed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    #[serde(default = "LayerConfig::default_above")]
    pub above_content: i32,
    #[serde(default = "LayerConfig::default_below")]
    pub below_content: i32,
}

impl LayerConfig {
    fn default_above() -> i32 {
        20
    }

    fn default_below() -> i32 {
        10
    }
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            above_content: Self::default_above(),
            below_content: Self::default_below(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub content_path: PathBuf,
    #[serde(default)]
    pub layers: LayerConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded content path
        config.content_path = Self::expand_path(&config.content_path).unwrap_or(config.content_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/overmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/overmark/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            content_path: PathBuf::from("/tmp/sample.txt"),
            layers: LayerConfig {
                above_content: 30,
                below_content: 5,
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.content_path, deserialized.content_path);
        assert_eq!(original.layers, deserialized.layers);
    }

    #[test]
    fn test_layers_default_when_omitted() {
        let config_content = r#"
content_path = "/tmp/sample.txt"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.layers, LayerConfig::default());
        assert_eq!(config.layers.above_content, 20);
        assert_eq!(config.layers.below_content, 10);
    }

    #[test]
    fn test_partial_layers_fill_in_defaults() {
        let config_content = r#"
content_path = "/tmp/sample.txt"

[layers]
above_content = 99
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.layers.above_content, 99);
        assert_eq!(config.layers.below_content, 10);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/docs/sample.txt");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("docs/sample.txt"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("OVERMARK_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$OVERMARK_TEST_VAR/sample.txt");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/sample.txt"));

        unsafe {
            env::remove_var("OVERMARK_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            content_path: PathBuf::from("/tmp/sample.txt"),
            layers: LayerConfig::default(),
        };

        // Test saving
        test_config.save_to_path(&config_file).unwrap();

        // Test loading
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.content_path, test_config.content_path);
        assert_eq!(loaded_config.layers, test_config.layers);
    }

    #[test]
    fn test_config_with_tilde_in_toml() {
        let config_content = r#"
content_path = "~/docs/sample.txt"
"#;

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, config_content).unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        let expanded_path = config.content_path.to_string_lossy();
        assert!(!expanded_path.starts_with('~'));
        assert!(expanded_path.contains("docs/sample.txt"));
    }
}
