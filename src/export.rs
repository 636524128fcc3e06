// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph export formats

use crate::graph::DiGraph;
use anyhow::Result;
use std::fmt::Write;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// The persisted JSON document
    Json,
}

impl ExportFormat {
    /// Parse format from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Some(Self::Dot),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get file extension for format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }

    /// Render `graph` in this format
    ///
    /// # Errors
    ///
    /// Fails only if JSON serialization fails.
    pub fn render(&self, graph: &DiGraph) -> Result<String> {
        match self {
            Self::Dot => Ok(to_dot(graph)),
            Self::Json => graph.to_json(),
        }
    }
}

/// Export to DOT format for Graphviz
///
/// Positioned nodes get a pinned `pos` attribute so `neato -n` keeps the
/// stored layout.
#[must_use]
pub fn to_dot(graph: &DiGraph) -> String {
    let mut dot = String::from("digraph G {\n");
    dot.push_str("  node [shape=circle];\n\n");

    for node in graph.nodes() {
        match node.position() {
            Some(p) => {
                let _ = writeln!(dot, "  {} [pos=\"{},{}!\"];", node.id(), p.x, p.y);
            }
            None => {
                let _ = writeln!(dot, "  {};", node.id());
            }
        }
    }

    dot.push('\n');

    for (src, dest, w) in graph.edges() {
        let _ = writeln!(dot, "  {src} -> {dest} [label=\"{w}\"];");
    }

    dot.push_str("}\n");
    dot
}
