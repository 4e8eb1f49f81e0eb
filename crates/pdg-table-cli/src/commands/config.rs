//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::{parse_namespaces, Config};

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("PDG Table Configuration");
    println!("{:-<40}", "");

    println!("Catalog:        {}", config.catalog.display());
    println!("Text Output:    {}", config.text_output.display());
    println!("C++ Output:     {}", config.cpp_output.display());
    println!("Helper Header:  {}", config.helper_header);
    println!("Namespaces:     {}", config.namespaces.join("::"));
    println!("Container:      {}", config.container);

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "catalog" => config.catalog = PathBuf::from(value),
        "text-output" => config.text_output = PathBuf::from(value),
        "cpp-output" => config.cpp_output = PathBuf::from(value),
        "helper-header" | "header" => config.helper_header = value.to_string(),
        "namespaces" | "namespace" => config.namespaces = parse_namespaces(value),
        "container" => {
            if value.trim().is_empty() {
                anyhow::bail!("Container name cannot be empty");
            }
            config.container = value.to_string();
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}. Valid keys: catalog, text-output, cpp-output, helper-header, namespaces, container",
                key
            );
        }
    }

    config.save()?;
    println!("Set {} to: {}", key, value);
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "catalog" => config.catalog.display().to_string(),
        "text-output" => config.text_output.display().to_string(),
        "cpp-output" => config.cpp_output.display().to_string(),
        "helper-header" | "header" => config.helper_header.clone(),
        "namespaces" | "namespace" => config.namespaces.join("::"),
        "container" => config.container.clone(),
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
