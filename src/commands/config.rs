// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - shows the effective configuration

use super::Output;
use crate::config::Config;
use anyhow::Result;

/// Run the config command
pub fn run(config: &Config, key: Option<&str>, out: Output) -> Result<()> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| anyhow::anyhow!("Unknown config key: {}. Valid: graph_file, log_level, color, pretty", k))?;
            println!("{value}");
        }
        None if out.json => out.print_json(&serde_json::to_value(config)?)?,
        None => {
            for k in ["graph_file", "log_level", "color", "pretty"] {
                if let Some(v) = config.get(k) {
                    println!("{} = {}", out.heading(k), v);
                }
            }
        }
    }
    Ok(())
}
