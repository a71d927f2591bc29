// src/graph/resolver.rs

//! Edge resolution: declared dependencies, else a sequential fallback edge.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::graph::step::{Step, StepId};
use crate::types::DependencyKind;

/// Directed edge `source -> target` ("target depends on source").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: StepId,
    pub target: StepId,
    pub kind: DependencyKind,
}

/// Compute incoming edges for every step.
///
/// `sorted` must already be in ascending `order` (see
/// [`sort_by_order`](crate::graph::step::sort_by_order)). Edges are emitted
/// grouped by target in that order, and within a target in declaration
/// order.
///
/// - The first step never has incoming edges, declared or not.
/// - Dependencies on unknown ids are dropped.
/// - A step with at least one resolved dependency gets exactly those edges.
/// - Any other step gets one `Sequential` edge from its predecessor in
///   `sorted`.
pub fn resolve_edges(sorted: &[Step]) -> Vec<Edge> {
    let known: HashSet<StepId> = sorted.iter().map(|s| s.id).collect();
    let mut edges = Vec::with_capacity(sorted.len());

    for (index, step) in sorted.iter().enumerate() {
        if index == 0 {
            if !step.dependencies.is_empty() {
                debug!(
                    step = step.id,
                    declared = step.dependencies.len(),
                    "ignoring dependencies declared on the first step"
                );
            }
            continue;
        }

        let before = edges.len();

        for dep in step.dependencies.iter() {
            if known.contains(&dep.depends_on) {
                edges.push(Edge {
                    source: dep.depends_on,
                    target: step.id,
                    kind: DependencyKind::from_declared(&dep.dependency_type),
                });
            } else {
                debug!(
                    step = step.id,
                    depends_on = dep.depends_on,
                    "dropping dependency on unknown step"
                );
            }
        }

        if edges.len() == before {
            let previous = &sorted[index - 1];
            trace!(step = step.id, previous = previous.id, "adding sequential fallback edge");
            edges.push(Edge {
                source: previous.id,
                target: step.id,
                kind: DependencyKind::Sequential,
            });
        }
    }

    edges
}
