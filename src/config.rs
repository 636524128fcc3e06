// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Layers, lowest priority first: built-in defaults, the config file,
//! `WDIGRAPH_*` environment variables. Command line flags are applied on top
//! by the binary.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WDIGRAPH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Graph document the commands operate on
    pub graph_file: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Colored terminal output
    pub color: bool,
    /// Pretty-print `--json` output
    pub pretty: bool,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "hyperpolymath", "wdigraph")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph_file: project_dirs()
                .map(|d| d.data_dir().join("graph.json"))
                .unwrap_or_else(|| {
                    std::env::current_dir()
                        .unwrap_or_else(|_| PathBuf::from("."))
                        .join(".wdigraph")
                        .join("graph.json")
                }),
            log_level: "info".to_string(),
            color: true,
            pretty: true,
        }
    }
}

impl Config {
    /// Look up a single setting by key, rendered as text
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "graph_file" => Some(self.graph_file.display().to_string()),
            "log_level" => Some(self.log_level.clone()),
            "color" => Some(self.color.to_string()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }
}

/// Default config file location (`config.toml` in the user config dir)
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration
///
/// An explicit `path` must exist; the default location is optional.
///
/// # Errors
///
/// Fails if an explicit file is missing or any source is malformed.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let mut builder = config::Config::builder()
        .set_default("graph_file", defaults.graph_file.display().to_string())?
        .set_default("log_level", defaults.log_level)?
        .set_default("color", defaults.color)?
        .set_default("pretty", defaults.pretty)?;

    builder = match path {
        Some(p) => builder.add_source(config::File::from(p).required(true)),
        None => match default_config_path() {
            Some(p) => builder.add_source(config::File::from(p.as_path()).required(false)),
            None => builder,
        },
    };

    builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}
