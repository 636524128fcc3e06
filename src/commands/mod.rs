// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod component;
pub mod config;
pub mod edge;
pub mod export;
pub mod info;
pub mod init;
pub mod node;
pub mod path;
pub mod transpose;

use crate::graph::DiGraph;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::info;

/// How command results are printed
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Emit machine-readable JSON instead of text
    pub json: bool,
    /// Use ANSI colors in text output
    pub color: bool,
    /// Indent JSON output
    pub pretty: bool,
}

impl Output {
    /// Style a heading
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Style a node id
    #[must_use]
    pub fn node(&self, id: impl std::fmt::Display) -> String {
        if self.color {
            id.cyan().to_string()
        } else {
            id.to_string()
        }
    }

    /// Print a JSON value on stdout
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized.
    pub fn print_json(&self, value: &serde_json::Value) -> Result<()> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{text}");
        Ok(())
    }
}

/// Load the graph file, or start empty if it does not exist yet
///
/// # Errors
///
/// Fails if the file exists but cannot be read or parsed.
pub fn load_graph(path: &Path) -> Result<DiGraph> {
    if path.exists() {
        DiGraph::load(path)
    } else {
        info!("No graph at {}, starting empty", path.display());
        Ok(DiGraph::new())
    }
}
