// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! wdigraph CLI - directed weighted graphs from the command line

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wdigraph::commands::{self, Output};
use wdigraph::config;

#[derive(Parser)]
#[command(name = "wdigraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "WDIGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Graph file override
    #[arg(short, long, env = "WDIGRAPH_GRAPH")]
    graph: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty graph file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show vertex and edge counts with the adjacency summary
    Info,

    /// Manage nodes
    Node {
        /// Action: add, remove, list
        action: String,

        /// Node id
        #[arg(allow_negative_numbers = true)]
        id: Option<i64>,

        /// Position as x,y or x,y,z
        #[arg(long)]
        pos: Option<String>,
    },

    /// Manage edges
    Edge {
        /// Action: add, remove, list
        action: String,

        /// Source node id
        #[arg(allow_negative_numbers = true)]
        src: Option<i64>,

        /// Destination node id
        #[arg(allow_negative_numbers = true)]
        dest: Option<i64>,

        /// Edge weight (must be > 0)
        #[arg(allow_negative_numbers = true)]
        weight: Option<f64>,
    },

    /// Find the shortest weighted path between two nodes
    Path {
        /// Source node id
        #[arg(allow_negative_numbers = true)]
        src: i64,

        /// Destination node id
        #[arg(allow_negative_numbers = true)]
        dest: i64,
    },

    /// Show the strongly connected component of a node
    Component {
        /// Node id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// List all strongly connected components
    Components,

    /// Reverse every edge
    Transpose {
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export graph to various formats
    Export {
        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        /// Configuration key (omit to show all)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = config::load(cli.config.as_deref())?;
    if let Some(graph) = cli.graph.clone() {
        config.graph_file = graph;
    }
    if cli.no_color {
        config.color = false;
    }

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let graph_file = config.graph_file.clone();
    let out = Output {
        json: cli.json,
        color: config.color,
        pretty: config.pretty,
    };

    // Execute command
    match cli.command {
        Commands::Init { force } => commands::init::run(&graph_file, force),
        Commands::Info => commands::info::run(&graph_file, out),
        Commands::Node { action, id, pos } => {
            commands::node::run(&graph_file, &action, id, pos, out)
        }
        Commands::Edge { action, src, dest, weight } => {
            commands::edge::run(&graph_file, &action, src, dest, weight, out)
        }
        Commands::Path { src, dest } => commands::path::run(&graph_file, src, dest, out),
        Commands::Component { id } => commands::component::run_one(&graph_file, id, out),
        Commands::Components => commands::component::run_all(&graph_file, out),
        Commands::Transpose { output } => commands::transpose::run(&graph_file, output),
        Commands::Export { format, output } => {
            commands::export::run(&graph_file, &format, output)
        }
        Commands::Config { key } => commands::config::run(&config, key.as_deref(), out),
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
