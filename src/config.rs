use crate::pipeline::renderer::Style;
use crate::pipeline::Options;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casefmt.toml";

/// Effective settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub style: Style,
    pub strict: bool,
    /// Treat every input line as a JSON value instead of plain text
    pub json_input: bool,
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            strict: false,
            json_input: false,
            color: default_color(),
        }
    }
}

/// One layer of settings: a config file or the command line.
///
/// `None` leaves the value from earlier layers alone, so a later layer can
/// set a field back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub style: Option<Style>,
    pub strict: Option<bool>,
    pub json_input: Option<bool>,
    pub color: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: &ConfigLayer) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = Self::local_config_path();
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading local config");
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        Ok(config.merge(overrides.clone()))
    }

    /// A single config file on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    /// Write this configuration as TOML, refusing to replace an existing file
    pub fn write_new(&self, path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Apply a later layer; every field it sets wins
    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(style) = layer.style {
            self.style = style;
        }
        if let Some(strict) = layer.strict {
            self.strict = strict;
        }
        if let Some(json_input) = layer.json_input {
            self.json_input = json_input;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    pub fn options(&self) -> Options {
        Options {
            strict: self.strict,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casefmt").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }
}
