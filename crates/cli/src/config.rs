use anyhow::{Context, Result};
use component_extract::ExtractorConfig;
use component_graph::{InstallSettings, MatchStrategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "component-deps.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractSection,
    pub matcher: MatcherSection,
    pub install: InstallSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSection {
    pub max_warnings: usize,
    pub warning_chars: usize,
}

impl Default for ExtractSection {
    fn default() -> Self {
        let defaults = ExtractorConfig::default();
        Self {
            max_warnings: defaults.max_warnings,
            warning_chars: defaults.warning_chars,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSection {
    pub strategy: MatchStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallSection {
    pub library: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet_url: Option<String>,
}

impl Default for InstallSection {
    fn default() -> Self {
        let defaults = InstallSettings::default();
        Self {
            library: defaults.library,
            stylesheet_url: defaults.stylesheet_url,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load an explicit config file, else `./component-deps.toml` when present,
    /// else defaults. Returns the path that was read, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok((Self::default(), None));
                }
                fallback
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok((config, Some(path)))
    }

    pub const fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            max_warnings: self.extract.max_warnings,
            warning_chars: self.extract.warning_chars,
        }
    }

    pub fn install_settings(&self) -> InstallSettings {
        InstallSettings {
            library: self.install.library.clone(),
            stylesheet_url: self.install.stylesheet_url.clone(),
        }
    }
}
