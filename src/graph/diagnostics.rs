// src/graph/diagnostics.rs

//! Read-only checks over a step list.
//!
//! None of these change what gets rendered. They exist so that bad backend
//! data shows up in the logs and in `--dry-run` instead of silently looking
//! odd on screen.

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::graph::step::{Step, StepId};

/// A declared dependency whose target step is not in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrphanDependency {
    pub step: StepId,
    pub depends_on: StepId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDiagnostics {
    pub orphan_dependencies: Vec<OrphanDependency>,
    /// Ids that occur on more than one step, each reported once.
    pub duplicate_step_ids: Vec<StepId>,
    /// `(depends_on, step)` pairs declared more than once on the same step.
    pub duplicate_dependencies: Vec<(StepId, StepId)>,
    /// Some step on a cycle of declared dependencies, if there is one.
    pub cycle_through: Option<StepId>,
}

impl GraphDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.orphan_dependencies.is_empty()
            && self.duplicate_step_ids.is_empty()
            && self.duplicate_dependencies.is_empty()
            && self.cycle_through.is_none()
    }

    /// Emit one `warn!` per finding.
    pub fn log(&self) {
        for orphan in &self.orphan_dependencies {
            warn!(
                step = orphan.step,
                depends_on = orphan.depends_on,
                "dependency references a step that is not in the list"
            );
        }
        for id in &self.duplicate_step_ids {
            warn!(step = id, "step id appears more than once");
        }
        for (depends_on, step) in &self.duplicate_dependencies {
            warn!(step, depends_on, "dependency declared more than once");
        }
        if let Some(id) = self.cycle_through {
            warn!(step = id, "declared dependencies form a cycle");
        }
    }
}

/// Inspect steps for orphans, duplicates and dependency cycles.
pub fn inspect(steps: &[Step]) -> GraphDiagnostics {
    let mut diagnostics = GraphDiagnostics::default();

    let mut seen: HashSet<StepId> = HashSet::new();
    let mut reported: HashSet<StepId> = HashSet::new();
    for step in steps {
        if !seen.insert(step.id) && reported.insert(step.id) {
            diagnostics.duplicate_step_ids.push(step.id);
        }
    }

    // Edge direction: dependency -> dependent.
    let mut graph: DiGraphMap<StepId, ()> = DiGraphMap::new();
    for step in steps {
        graph.add_node(step.id);
    }

    for step in steps {
        let mut declared: HashSet<StepId> = HashSet::new();
        for dep in &step.dependencies {
            if !seen.contains(&dep.depends_on) {
                diagnostics.orphan_dependencies.push(OrphanDependency {
                    step: step.id,
                    depends_on: dep.depends_on,
                });
                continue;
            }
            if !declared.insert(dep.depends_on) {
                diagnostics
                    .duplicate_dependencies
                    .push((dep.depends_on, step.id));
                continue;
            }
            graph.add_edge(dep.depends_on, step.id, ());
        }
    }

    if let Err(cycle) = toposort(&graph, None) {
        diagnostics.cycle_through = Some(cycle.node_id());
    }

    diagnostics
}
