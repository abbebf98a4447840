//! Configuration loading from djunused.toml.
//!
//! The manifest stands in for the web framework's own settings: it lists the
//! installed applications, the template engine backends with their search
//! directories, and the project root.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{DjunusedError, DjunusedResult, IoResultExt};

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "djunused.toml";

/// Main configuration structure for djunused.toml.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ProjectConfig {
    /// Project root. Defaults to the manifest directory.
    pub base_dir: Option<String>,
    /// Installed applications, in registry order.
    #[serde(default)]
    pub apps: Vec<AppConfig>,
    /// Template engine backends, in configuration order.
    #[serde(default)]
    pub templates: Vec<TemplateBackendConfig>,
    /// Source file scanning overrides.
    pub scan: Option<ScanConfig>,
}

/// One installed application.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub path: String,
}

/// One template engine backend.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct TemplateBackendConfig {
    /// Backend identifier, informational only.
    pub backend: Option<String>,
    /// Template search directories.
    #[serde(default)]
    pub dirs: Vec<String>,
}

/// Source file collection overrides.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScanConfig {
    /// Extensions (without the dot) of files scanned for references.
    pub source_extensions: Option<Vec<String>>,
    /// Directory path substrings excluded from source collection.
    pub exclude: Option<Vec<String>>,
}

impl ProjectConfig {
    /// Parses a manifest from a string. `origin` is only used for error context.
    pub fn from_toml_str(content: &str, origin: &Path) -> DjunusedResult<Self> {
        toml::from_str(content)
            .map_err(|e| DjunusedError::config(origin, format!("Invalid {}: {}", MANIFEST_FILE, e)))
    }
}

/// Loads configuration from djunused.toml if it exists.
pub fn load_config(root: &Path) -> DjunusedResult<Option<ProjectConfig>> {
    let path = root.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    let cfg = ProjectConfig::from_toml_str(&content, &path)?;
    Ok(Some(cfg))
}
