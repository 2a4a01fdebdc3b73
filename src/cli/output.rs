//! Output formatting utilities for CLI.

use arbor::gp::{Evolution, Fitness, GenerationStats, Termination, Tree};
use serde::Serialize;
use std::fmt::Write as _;

/// JSON-serializable evolution report.
#[derive(Debug, Serialize)]
pub(super) struct JsonReport<'a> {
    /// Random seed used.
    pub(super) seed: u64,
    /// How the run ended.
    pub(super) termination: Termination,
    /// Fitness of the best tree.
    pub(super) fitness: Fitness,
    /// Best tree in compact form.
    pub(super) formula: String,
    /// Best tree as nested nodes.
    pub(super) tree: &'a Tree,
    /// Per-generation statistics.
    pub(super) history: &'a [GenerationStats],
}

impl<'a> JsonReport<'a> {
    /// Create from an evolution result.
    pub(super) fn new(seed: u64, evolution: &'a Evolution) -> Self {
        Self {
            seed,
            termination: evolution.termination,
            fitness: evolution.fitness,
            formula: evolution.best.to_string(),
            tree: &evolution.best,
            history: &evolution.history,
        }
    }
}

/// Format an evolution result as human-readable text.
pub(super) fn format_text(seed: u64, evolution: &Evolution) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Evolution Result (seed: {seed})");
    match evolution.termination {
        Termination::Solved { generation } => {
            let _ = writeln!(output, "  Solved in generation {generation}");
        }
        Termination::Exhausted => {
            let _ = writeln!(
                output,
                "  Stopped after {} generations",
                evolution.history.len()
            );
        }
    }
    let _ = writeln!(output, "  Best fitness: {}", evolution.fitness);
    let _ = writeln!(output, "  Formula: {}", evolution.best);
    let _ = writeln!(output, "  Nodes: {}, depth: {}", evolution.best.node_count(), evolution.best.depth());
    output.push('\n');
    let _ = write!(output, "{}", evolution.best.display());

    output
}

/// Render an evolution result in the requested format.
pub(super) fn render(
    format: super::OutputFormat,
    seed: u64,
    evolution: &Evolution,
) -> Result<String, serde_json::Error> {
    match format {
        super::OutputFormat::Text => Ok(format_text(seed, evolution)),
        super::OutputFormat::Json => serde_json::to_string_pretty(&JsonReport::new(seed, evolution)),
    }
}
