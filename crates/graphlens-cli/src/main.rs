// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use graphlens_algo::{Analyzer, report};
use graphlens_common::{AnalyzerConfig, GraphStore, NodeId, read_edge_list};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod demo;

#[derive(Parser)]
#[command(name = "graphlens")]
#[command(about = "Weighted directed graph analysis", long_about = None)]
struct Cli {
    /// Skip resident memory sampling
    #[arg(long, global = true)]
    no_memory: bool,
    /// Do not publish analysis metrics
    #[arg(long, global = true)]
    no_metrics: bool,
    /// Warn when a single analysis runs longer than this many milliseconds
    #[arg(long, global = true, default_value_t = 100)]
    slow_ms: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every analysis on an edge list file
    Analyze {
        /// Edge list: `from to [weight]` per line, a lone id adds an isolated node
        file: PathBuf,
        /// Start node for shortest path, source for max flow
        #[arg(long, default_value_t = 0)]
        start: NodeId,
        /// End node for shortest path, sink for max flow
        #[arg(long)]
        end: NodeId,
    },
    /// Print the node registry and adjacency lists
    Structure { file: PathBuf },
    /// Cheapest path between two nodes
    Path {
        file: PathBuf,
        start: NodeId,
        end: NodeId,
    },
    /// Directed-reachability communities, isolated and self-loop nodes
    Components { file: PathBuf },
    /// Maximum flow with its augmenting paths
    Flow {
        file: PathBuf,
        source: NodeId,
        sink: NodeId,
    },
    /// Kruskal spanning forest
    Forest { file: PathBuf },
    /// Analyze the built-in demo graph
    Demo {
        #[arg(long, default_value_t = 0)]
        start: NodeId,
        #[arg(long, default_value_t = 3)]
        end: NodeId,
    },
}

impl Cli {
    fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            sample_memory: !self.no_memory,
            record_metrics: !self.no_metrics,
            slow_operation_threshold: Duration::from_millis(self.slow_ms),
        }
    }
}

fn load_graph(path: &Path) -> Result<GraphStore> {
    let graph = read_edge_list(path)
        .with_context(|| format!("Failed to load edge list {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        node_bound = graph.node_bound(),
        "Loaded graph"
    );
    if graph.node_bound() > graph.node_count().saturating_mul(16).max(1024) {
        tracing::warn!(
            nodes = graph.node_count(),
            node_bound = graph.node_bound(),
            "Sparse node ids: analyses allocate state for every id below the bound"
        );
    }
    Ok(graph)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();
    let config = cli.analyzer_config();

    let command = cli.command.unwrap_or(Commands::Demo { start: 0, end: 3 });

    match command {
        Commands::Analyze { file, start, end } => {
            let graph = load_graph(&file)?;
            let mut analyzer = Analyzer::with_config(&graph, config);
            println!("{}", "Graph Analysis".bold());
            print!("{}", analyzer.full_analysis(start, end)?);
        }
        Commands::Structure { file } => {
            let graph = load_graph(&file)?;
            print!("{}", report::graph_structure(&graph));
        }
        Commands::Path { file, start, end } => {
            let graph = load_graph(&file)?;
            let mut analyzer = Analyzer::with_config(&graph, config);
            let result = analyzer.shortest_path(start, end)?;
            print!("{}", report::shortest_path(&result));
            print!("\n{}", report::performance(analyzer.telemetry()));
        }
        Commands::Components { file } => {
            let graph = load_graph(&file)?;
            let mut analyzer = Analyzer::with_config(&graph, config);
            let result = analyzer.components()?;
            print!("{}", report::components(&graph, &result));
            print!("\n{}", report::performance(analyzer.telemetry()));
        }
        Commands::Flow { file, source, sink } => {
            let graph = load_graph(&file)?;
            let mut analyzer = Analyzer::with_config(&graph, config);
            let result = analyzer.max_flow(source, sink)?;
            print!("{}", report::max_flow(&result));
            print!("\n{}", report::performance(analyzer.telemetry()));
        }
        Commands::Forest { file } => {
            let graph = load_graph(&file)?;
            let mut analyzer = Analyzer::with_config(&graph, config);
            let result = analyzer.spanning_forest()?;
            print!("{}", report::spanning_forest(&result));
            print!("\n{}", report::performance(analyzer.telemetry()));
        }
        Commands::Demo { start, end } => {
            println!(
                "{} main component, isolated node, isolated pair and self-loop",
                "Demo graph:".cyan()
            );
            let graph = demo::reference_graph();
            let mut analyzer = Analyzer::with_config(&graph, config);
            print!("{}", analyzer.full_analysis(start, end)?);
        }
    }

    Ok(())
}
