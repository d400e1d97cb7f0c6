/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use anyhow::{Context, Result};
use bibcite_processor::{RenderFormat, Style};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub styles: StylesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StylesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            format: default_format(),
        }
    }
}

fn default_style() -> String {
    "apa".to_string()
}

fn default_format() -> String {
    "html".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn load_from_project() -> Result<Option<Self>> {
        let config_paths = [Path::new("bibcite.toml"), Path::new(".bibcite.toml")];

        for path in &config_paths {
            if path.exists() {
                return Ok(Some(Self::load(path)?));
            }
        }

        Ok(None)
    }

    pub fn style(&self) -> Result<Style> {
        Ok(self.render.style.parse()?)
    }

    pub fn format(&self) -> Result<RenderFormat> {
        Ok(self.render.format.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.style().unwrap(), Style::Apa);
        assert_eq!(config.format().unwrap(), RenderFormat::Html);
        assert!(config.styles.catalog.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [render]
            style = "chicago-author-date"

            [styles]
            catalog = "styles.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.style().unwrap(), Style::Chicago);
        assert_eq!(config.render.format, "html");
        assert_eq!(config.styles.catalog, Some(PathBuf::from("styles.json")));
    }

    #[test]
    fn test_unknown_names_are_errors() {
        let config: Config = toml::from_str("[render]\nstyle = \"vancouver\"\nformat = \"rtf\"").unwrap();
        assert!(config.style().is_err());
        assert!(config.format().is_err());
    }
}
