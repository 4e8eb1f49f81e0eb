//! CLI configuration management.
//!
//! Supports loading configuration from environment variables, a config
//! file, and CLI arguments with proper precedence.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use pdg_table_core::{CppLayout, Dialect};
use serde::{Deserialize, Serialize};

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON particle catalog to read.
    pub catalog: PathBuf,

    /// Default destination of the text table.
    pub text_output: PathBuf,

    /// Default destination of the C++ table.
    pub cpp_output: PathBuf,

    /// Header included at the top of the C++ table.
    pub helper_header: String,

    /// Namespaces wrapping the C++ table, outermost first.
    pub namespaces: Vec<String>,

    /// Name of the generated C++ container.
    pub container: String,
}

impl Default for Config {
    fn default() -> Self {
        let layout = CppLayout::default();

        Self {
            catalog: PathBuf::from("particles.json"),
            text_output: PathBuf::from(Dialect::Text.default_file_name()),
            cpp_output: PathBuf::from(Dialect::Cpp.default_file_name()),
            helper_header: layout.helper_header,
            namespaces: layout.namespaces,
            container: layout.container,
        }
    }
}

impl Config {
    /// Load the effective configuration: the config file, then environment
    /// variables on top.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::load_file()?;
        config.apply_env();
        Ok(config)
    }

    /// Load only what is stored in the config file, or defaults if absent.
    pub fn load_file() -> Result<Self> {
        match Self::config_file_path() {
            Some(config_path) if config_path.exists() => {
                let contents = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read config from {}", config_path.display())
                })?;
                serde_json::from_str(&contents).with_context(|| "Failed to parse config file")
            }
            _ => Ok(Self::default()),
        }
    }

    /// Override fields from `PDG_*` environment variables.
    pub fn apply_env(&mut self) {
        if let Ok(catalog) = std::env::var("PDG_CATALOG") {
            self.catalog = PathBuf::from(catalog);
        }
        if let Ok(output) = std::env::var("PDG_TEXT_OUTPUT") {
            self.text_output = PathBuf::from(output);
        }
        if let Ok(output) = std::env::var("PDG_CPP_OUTPUT") {
            self.cpp_output = PathBuf::from(output);
        }
        if let Ok(header) = std::env::var("PDG_HELPER_HEADER") {
            self.helper_header = header;
        }
        if let Ok(namespaces) = std::env::var("PDG_NAMESPACES") {
            self.namespaces = parse_namespaces(&namespaces);
        }
        if let Ok(container) = std::env::var("PDG_CONTAINER") {
            self.container = container;
        }
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents)
                .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "pdg-table", "pdg-table")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Default destination for a dialect.
    pub fn output_for(&self, dialect: Dialect) -> PathBuf {
        match dialect {
            Dialect::Text => self.text_output.clone(),
            Dialect::Cpp => self.cpp_output.clone(),
        }
    }

    /// C++ layout described by this configuration.
    pub fn layout(&self) -> CppLayout {
        CppLayout {
            helper_header: self.helper_header.clone(),
            namespaces: self.namespaces.clone(),
            container: self.container.clone(),
        }
    }
}

/// Split a `::`-separated namespace path, dropping empty segments.
pub fn parse_namespaces(value: &str) -> Vec<String> {
    value
        .split("::")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
