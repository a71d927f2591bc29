// src/render/model.rs

//! Output handed to the drawing surface.
//!
//! The shape is the same in template and execution mode; only the optional
//! status pill differs.

use serde::Serialize;

use crate::graph::Position;
use crate::style::EdgeStyle;
use crate::types::DependencyKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderGraph {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl RenderGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges pointing at `target`.
    pub fn incoming(&self, target: &str) -> impl Iterator<Item = &RenderEdge> {
        self.edges.iter().filter(move |e| e.target == target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub position: Position,
    pub label: NodeLabel,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLabel {
    pub name: String,
    pub task_type: String,
    pub task_type_color: String,
    pub order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Only present for execution steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusPill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPill {
    pub status: String,
    pub text: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub fill: &'static str,
    pub border: &'static str,
    pub text_color: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: DependencyKind,
    pub style: EdgeStyle,
    pub animated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
