// src/render/assembler.rs

use std::collections::HashMap;

use tracing::debug;

use crate::config::LayoutSection;
use crate::graph::{Edge, Placement, Step, StepId};
use crate::render::model::{NodeLabel, NodeStyle, RenderEdge, RenderGraph, RenderNode, StatusPill};
use crate::style::{
    Palette, icon_for_status, label_for_status, style_for_dependency_kind, style_for_status,
};

/// Status shown on execution steps that arrived without one.
const MISSING_STATUS: &str = "pending";

/// Deterministic edge id for the `occurrence`-th edge between a pair.
///
/// The first edge between two steps is `e{source}-{target}`; repeats (a step
/// declaring the same dependency twice) get a `-{n}` suffix so the ids stay
/// unique and stable across recomputations.
pub fn edge_id(source: StepId, target: StepId, occurrence: usize) -> String {
    if occurrence == 0 {
        format!("e{source}-{target}")
    } else {
        format!("e{source}-{target}-{occurrence}")
    }
}

/// Combine sorted steps, their placements and resolved edges.
///
/// `placements` must come from the same sorted slice, one per step.
pub fn assemble(
    sorted: &[Step],
    placements: &[Placement],
    edges: &[Edge],
    palette: &Palette,
    layout: &LayoutSection,
) -> RenderGraph {
    let nodes: Vec<RenderNode> = sorted
        .iter()
        .zip(placements.iter())
        .map(|(step, placement)| build_node(step, placement, palette, layout))
        .collect();

    let mut occurrences: HashMap<(StepId, StepId), usize> = HashMap::new();
    let edges: Vec<RenderEdge> = edges
        .iter()
        .map(|edge| {
            let seen = occurrences.entry((edge.source, edge.target)).or_insert(0);
            let id = edge_id(edge.source, edge.target, *seen);
            *seen += 1;
            build_edge(edge, id)
        })
        .collect();

    debug!(nodes = nodes.len(), edges = edges.len(), "assembled render graph");

    RenderGraph { nodes, edges }
}

fn build_node(step: &Step, placement: &Placement, palette: &Palette, layout: &LayoutSection) -> RenderNode {
    let colors = style_for_status(step.status());

    let status = if step.is_execution() {
        let status = step.status().unwrap_or(MISSING_STATUS);
        Some(StatusPill {
            status: status.to_string(),
            text: label_for_status(status),
            icon: icon_for_status(Some(status)),
        })
    } else {
        None
    };

    RenderNode {
        id: step.id.to_string(),
        position: placement.position,
        label: NodeLabel {
            name: step.name.clone(),
            task_type: step.task_type.clone(),
            task_type_color: palette.task_type_color(&step.task_type).to_string(),
            order: step.order,
            timeout: step.timeout_minutes.map(|m| format!("{m} min")),
            status,
        },
        style: NodeStyle {
            fill: colors.fill,
            border: colors.border,
            text_color: colors.text_color,
            width: layout.node_width,
            height: layout.node_height,
        },
    }
}

fn build_edge(edge: &Edge, id: String) -> RenderEdge {
    let style = style_for_dependency_kind(edge.kind);
    let label = if edge.kind.is_fallback() {
        None
    } else {
        Some(edge.kind.as_str().to_string())
    };

    RenderEdge {
        id,
        source: edge.source.to_string(),
        target: edge.target.to_string(),
        kind: edge.kind,
        style,
        animated: style.animated,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GridLayout, StepKind, resolve_edges};
    use crate::style::NEUTRAL_STATUS_STYLE;
    use crate::types::DependencyKind;

    fn step(id: StepId, order: i64, kind: StepKind) -> Step {
        Step {
            id,
            name: format!("Step {id}"),
            task_type: "validation".to_string(),
            order,
            timeout_minutes: None,
            kind,
            dependencies: Vec::new(),
        }
    }

    fn render(steps: &[Step]) -> RenderGraph {
        let layout = LayoutSection::default();
        let placements = GridLayout::from_config(&layout).allocate(steps);
        let edges = resolve_edges(steps);
        assemble(steps, &placements, &edges, &Palette::default(), &layout)
    }

    #[test]
    fn edge_ids_are_stable_and_unique() {
        assert_eq!(edge_id(1, 2, 0), "e1-2");
        assert_eq!(edge_id(1, 2, 1), "e1-2-1");

        let edges = vec![
            Edge { source: 1, target: 2, kind: DependencyKind::Soft },
            Edge { source: 1, target: 2, kind: DependencyKind::Soft },
        ];
        let steps = vec![step(1, 1, StepKind::Template), step(2, 2, StepKind::Template)];
        let layout = LayoutSection::default();
        let placements = GridLayout::default().allocate(&steps);
        let graph = assemble(&steps, &placements, &edges, &Palette::default(), &layout);
        let ids: Vec<_> = graph.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1-2", "e1-2-1"]);
    }

    #[test]
    fn template_nodes_have_no_status_pill() {
        let graph = render(&[step(1, 1, StepKind::Template)]);
        let node = &graph.nodes[0];
        assert!(node.label.status.is_none());
        assert_eq!(node.style.fill, NEUTRAL_STATUS_STYLE.fill);
        assert_eq!(node.label.task_type_color, "#8b5cf6");
    }

    #[test]
    fn execution_nodes_show_status() {
        let mut s = step(1, 1, StepKind::Execution { status: Some("completed".into()) });
        s.timeout_minutes = Some(45);
        let graph = render(&[s, step(2, 2, StepKind::Execution { status: None })]);

        let done = graph.node("1").unwrap();
        let pill = done.label.status.as_ref().unwrap();
        assert_eq!(pill.text, "Completed");
        assert_eq!(pill.icon, "check-circle");
        assert_eq!(done.label.timeout.as_deref(), Some("45 min"));
        assert_eq!(done.style.fill, "#dcfce7");

        let missing = graph.node("2").unwrap();
        assert_eq!(missing.label.status.as_ref().unwrap().status, "pending");
        assert_eq!(missing.style.fill, NEUTRAL_STATUS_STYLE.fill);
        assert_eq!(missing.style.width, 250);
    }

    #[test]
    fn fallback_edges_are_unlabelled() {
        let graph = render(&[step(1, 1, StepKind::Template), step(2, 2, StepKind::Template)]);
        let edge = &graph.edges[0];
        assert_eq!(edge.kind, DependencyKind::Sequential);
        assert!(edge.label.is_none());
        assert!(!edge.animated);
    }
}
