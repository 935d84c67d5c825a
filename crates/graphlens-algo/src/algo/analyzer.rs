// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Query surface over a borrowed graph.

use crate::algo::algorithms::{
    Algorithm, ComponentsResult, DijkstraConfig, DijkstraResult, FordFulkerson,
    FordFulkersonConfig, FordFulkersonResult, MinimumSpanningForest, MstConfig, MstResult,
    ReachabilityComponents, ReachabilityConfig, ShortestPath,
};
use crate::algo::report;
use crate::algo::telemetry::{Measured, Telemetry, TelemetryRegistry, measure};
use graphlens_common::{AnalyzerConfig, GraphError, GraphStore, NodeId, Result};
use tracing::{debug, instrument, warn};

/// Runs analyses against one graph and keeps the latest telemetry per operation.
///
/// The graph is borrowed for the analyzer's lifetime, so it cannot be mutated
/// while queries are in flight.
pub struct Analyzer<'g> {
    graph: &'g GraphStore,
    config: AnalyzerConfig,
    telemetry: TelemetryRegistry,
}

impl<'g> Analyzer<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self::with_config(graph, AnalyzerConfig::default())
    }

    pub fn with_config(graph: &'g GraphStore, config: AnalyzerConfig) -> Self {
        Self {
            graph,
            config,
            telemetry: TelemetryRegistry::new(),
        }
    }

    pub fn graph(&self) -> &'g GraphStore {
        self.graph
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Latest telemetry per operation name.
    pub fn telemetry(&self) -> &TelemetryRegistry {
        &self.telemetry
    }

    pub fn into_telemetry(self) -> TelemetryRegistry {
        self.telemetry
    }

    /// Run any [`Algorithm`] under measurement.
    ///
    /// Telemetry is recorded under [`Algorithm::name`] whether or not the run
    /// succeeds.
    #[instrument(skip(self, config), fields(algorithm = A::name()))]
    pub fn run<A: Algorithm>(&mut self, config: A::Config) -> Result<A::Result> {
        let graph = self.graph;
        let Measured { value, telemetry } =
            measure(self.config.sample_memory, |probe| A::run(graph, config, probe));

        self.observe(A::name(), &telemetry, value.is_ok());
        self.telemetry.record(A::name(), telemetry);
        value
    }

    /// Cheapest path from `start` to `end`.
    pub fn shortest_path(&mut self, start: NodeId, end: NodeId) -> Result<DijkstraResult> {
        self.run::<ShortestPath>(DijkstraConfig {
            source: start,
            target: end,
        })
    }

    /// Directed-reachability components followed by isolated singletons.
    pub fn components(&mut self) -> Result<ComponentsResult> {
        self.run::<ReachabilityComponents>(ReachabilityConfig::default())
    }

    /// Maximum flow from `source` to `sink` with its augmenting paths.
    pub fn max_flow(&mut self, source: NodeId, sink: NodeId) -> Result<FordFulkersonResult> {
        self.run::<FordFulkerson>(FordFulkersonConfig { source, sink })
    }

    /// Kruskal spanning forest over every directed edge.
    pub fn spanning_forest(&mut self) -> Result<MstResult> {
        self.run::<MinimumSpanningForest>(MstConfig::default())
    }

    /// Numbered summary of every analysis, ending with the telemetry listing.
    ///
    /// `start` and `end` double as max-flow source and sink, so they must differ.
    /// Any failing analysis fails the whole summary.
    pub fn full_analysis(&mut self, start: NodeId, end: NodeId) -> Result<String> {
        if start == end {
            return Err(GraphError::InvalidArgument {
                arg: "end".to_string(),
                message: format!(
                    "full analysis needs distinct start and end nodes, got {} for both",
                    start
                ),
            });
        }

        let graph = self.graph;
        let path = self.shortest_path(start, end)?;
        let components = self.components()?;
        let flow = self.max_flow(start, end)?;
        let forest = self.spanning_forest()?;

        let mut out = String::from("--- Graph Analysis Summary ---\n\n");
        out.push_str(&format!("1. {}\n", report::graph_structure(graph)));
        out.push_str(&format!("2. {}\n", report::shortest_path(&path)));
        out.push_str(&format!("3. {}\n", report::components(graph, &components)));
        out.push_str(&format!("4. {}\n", report::max_flow(&flow)));
        out.push_str(&format!("5. {}\n", report::spanning_forest(&forest)));
        out.push_str(&format!("6. {}\n", report::performance(&self.telemetry)));
        Ok(out)
    }

    fn observe(&self, name: &'static str, telemetry: &Telemetry, succeeded: bool) {
        debug!(
            algorithm = name,
            succeeded,
            elapsed_us = telemetry.elapsed.as_micros() as u64,
            units = telemetry.units_processed,
            memory_delta = telemetry.memory_delta,
            "Analysis finished"
        );

        if telemetry.elapsed > self.config.slow_operation_threshold {
            warn!(
                algorithm = name,
                duration_ms = telemetry.elapsed.as_millis() as u64,
                node_bound = self.graph.node_bound(),
                edges = self.graph.edge_count(),
                "Slow analysis detected"
            );
        }

        if self.config.record_metrics {
            metrics::histogram!("graphlens_algo_duration_seconds", "algorithm" => name)
                .record(telemetry.elapsed.as_secs_f64());
            metrics::counter!("graphlens_algo_units_processed_total", "algorithm" => name)
                .increment(telemetry.units_processed);
            if !succeeded {
                metrics::counter!("graphlens_algo_errors_total", "algorithm" => name).increment(1);
            }
        }
    }
}
