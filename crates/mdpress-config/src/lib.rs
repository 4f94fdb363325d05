//! Configuration management for mdpress.
//!
//! Parses `mdpress.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. A missing config
//! file is not an error; defaults mirror the conventional site layout
//! (`content/`, `template.html`, `public/`, `static/`).
//!
//! CLI settings can be applied during load via [`CliSettings`]; they
//! override whatever the file provides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdpress.toml";

/// Error returned when configuration loading fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML.
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the content source directory.
    pub content_dir: Option<PathBuf>,
    /// Override the template path.
    pub template_path: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the static asset directory.
    pub static_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site layout configuration.
    pub site: SiteSection,
    /// Path to the config file (set after loading from a file).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site layout configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Directory holding markdown content.
    pub content_dir: PathBuf,
    /// HTML template file with `{{ Title }}` and `{{ Content }}` tokens.
    pub template_path: PathBuf,
    /// Directory the generated site is written to.
    pub output_dir: PathBuf,
    /// Directory holding static assets copied into the output.
    pub static_dir: PathBuf,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl SiteSection {
    /// Resolve relative paths against the config file's directory.
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.content_dir,
            &mut self.template_path,
            &mut self.output_dir,
            &mut self.static_dir,
        ] {
            if path.is_relative() {
                *path = base.join(path.as_path());
            }
        }
    }
}

impl Config {
    /// Load configuration with optional explicit path and CLI overrides.
    ///
    /// With no explicit path, `mdpress.toml` is searched for upward from the
    /// current directory; if none is found, defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing config file cannot be read or
    /// parsed.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => match discover_config_file() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        Ok(config)
    }

    /// Load and parse a config file, resolving its relative paths.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(dir) = path.parent() {
            config.site.resolve_relative_to(dir);
        }
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply non-None CLI overrides on top of the loaded values.
    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(dir) = &cli.content_dir {
            self.site.content_dir.clone_from(dir);
        }
        if let Some(path) = &cli.template_path {
            self.site.template_path.clone_from(path);
        }
        if let Some(dir) = &cli.output_dir {
            self.site.output_dir.clone_from(dir);
        }
        if let Some(dir) = &cli.static_dir {
            self.site.static_dir.clone_from(dir);
        }
    }
}

/// Search for `mdpress.toml` in the current directory and its ancestors.
fn discover_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
