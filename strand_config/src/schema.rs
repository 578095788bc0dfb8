use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use strand_core::DEFAULT_MAX_VALUE_LENGTH;

const CONFIG_TEMPLATE: &str = r#"{
  "storage": {
    "path": "strand.db"
  },
  "service": {
    "max_value_length": 1000
  }
}"#;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "StorageConfig::default_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl StorageConfig {
    fn default_path() -> String {
        "strand.db".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "ServiceConfig::default_max_value_length")]
    pub max_value_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_value_length: Self::default_max_value_length(),
        }
    }
}

impl ServiceConfig {
    const fn default_max_value_length() -> usize {
        DEFAULT_MAX_VALUE_LENGTH
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("strand");

        let config_path = config_dir.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'strand init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("strand");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Location of the SQLite database file.
    ///
    /// Relative paths resolve against the `~/strand` config directory so the
    /// default layout keeps the database next to `config.json`.
    pub fn database_path(&self) -> anyhow::Result<PathBuf> {
        let path = PathBuf::from(&self.storage.path);
        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(Self::ensure_config_dir()?.join(path))
        }
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file if you want a custom database location");
        println!("   2. Run 'strand add <value>' to analyze and store a string");
        println!("   3. Run 'strand query \"<phrase>\"' to search in natural language");
        println!();
        println!("🔧 Configuration options:");
        println!("   - storage.path: SQLite database file (relative paths live under ~/strand)");
        println!("   - service.max_value_length: Longest string the service accepts");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn defaults_apply_to_empty_document() {
        let config: Config = serde_json::from_str("{}").expect("empty document should parse");

        assert_eq!(config.storage.path, "strand.db");
        assert_eq!(config.service.max_value_length, DEFAULT_MAX_VALUE_LENGTH);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn template_matches_defaults() {
        let config: Config = serde_json::from_str(CONFIG_TEMPLATE).expect("template should parse");
        let defaults = Config::default();

        assert_eq!(config.storage.path, defaults.storage.path);
        assert_eq!(
            config.service.max_value_length,
            defaults.service.max_value_length
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn partial_section_keeps_remaining_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"storage": {"path": "/tmp/custom.db"}}"#)
                .expect("partial document should parse");

        assert_eq!(config.storage.path, "/tmp/custom.db");
        assert_eq!(config.service.max_value_length, DEFAULT_MAX_VALUE_LENGTH);
    }
}
