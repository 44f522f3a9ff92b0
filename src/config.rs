use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_FILE: &str = "products.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            file: None,
            format: Format::default(),
        }
    }
}

impl Config {
    /// A missing config file is not an error; defaults apply.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(content).with_context(|| "Failed to parse config")?;

        if config.version != "v1" {
            anyhow::bail!("Unsupported config version: {}", config.version);
        }

        Ok(config)
    }

    /// The `--file` override wins over the configured location.
    pub fn catalog_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        match override_path {
            Some(path) => Ok(path.to_path_buf()),
            None => crate::resolver::resolve_path(
                self.file.as_deref().unwrap_or(DEFAULT_CATALOG_FILE),
            ),
        }
    }
}
