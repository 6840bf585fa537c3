//! Handlers for `serve`, `analyze`, and `graph`.

use crate::cli::AnalyzeArgs;
use cyclesense_advisor::{Advisor, Analysis, UserObservation};
use cyclesense_api::Server;
use cyclesense_core::{Config, Result};
use cyclesense_graph::{FactGraph, GraphStats};
use std::fmt::Write as _;

/// Run the API server until shutdown.
pub async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    Server::from_config(&config)?.run().await
}

impl From<&AnalyzeArgs> for UserObservation {
    fn from(args: &AnalyzeArgs) -> Self {
        UserObservation {
            phase: args.phase.clone(),
            pain_level: args.pain_level,
            flow_intensity: args.flow_intensity.clone(),
            mood: args.mood.clone(),
            sleep_hours: args.sleep_hours,
            fatigue: args.fatigue.as_str().into(),
            headaches: args.headaches.as_str().into(),
            bloating: args.bloating.as_str().into(),
            day_in_cycle: args.day_in_cycle,
            age: args.age,
            contraception_type: args.contraception_type.clone(),
        }
    }
}

/// Analyze one observation from the command line.
pub fn cmd_analyze(args: &AnalyzeArgs) -> Result<()> {
    let analysis = Advisor::load().analyze(&UserObservation::from(args))?;
    println!("{}", render_analysis(&analysis, args.json)?);
    Ok(())
}

fn render_analysis(analysis: &Analysis, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(analysis)
            .map_err(|e| cyclesense_core::Error::analysis(e.to_string()))
    } else {
        Ok(analysis.advice.clone())
    }
}

/// Print node and edge counts for the fact graph.
pub fn cmd_graph() -> Result<()> {
    print!("{}", render_stats(&FactGraph::build().stats()));
    Ok(())
}

fn render_stats(stats: &GraphStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Nodes: {} ({} untyped)", stats.node_count, stats.untyped_nodes);
    for (category, count) in &stats.by_category {
        let _ = writeln!(out, "  {:<16} {count}", category.name());
    }
    let _ = writeln!(out, "Edges: {}", stats.edge_count);
    for (relationship, count) in &stats.by_relationship {
        let _ = writeln!(out, "  {:<22} {count}", relationship.name());
    }
    out
}
