// src/graph/step.rs

//! Normalized step model shared by every stage after input.

use tracing::debug;

use crate::input::{ExecutionStep, StepSource, TemplateStep};

/// Identifier of a step within one rendering pass.
pub type StepId = i64;

/// Which shape a step came from.
///
/// Set once during normalization; later stages match on it instead of
/// checking whether a status happens to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    Template,
    Execution { status: Option<String> },
}

/// "This step depends on `depends_on`."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub depends_on: StepId,
    /// Raw backend value; folded into a kind by the resolver.
    pub dependency_type: String,
}

/// A node of the workflow graph, independent of its source shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub name: String,
    pub task_type: String,
    pub order: i64,
    pub timeout_minutes: Option<i64>,
    pub kind: StepKind,
    pub dependencies: Vec<Dependency>,
}

impl Step {
    /// Execution status, `None` for templates and for tasks without one.
    pub fn status(&self) -> Option<&str> {
        match &self.kind {
            StepKind::Template => None,
            StepKind::Execution { status } => status.as_deref(),
        }
    }

    pub fn is_execution(&self) -> bool {
        matches!(self.kind, StepKind::Execution { .. })
    }
}

impl From<&TemplateStep> for Step {
    fn from(t: &TemplateStep) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            task_type: t.task_type.clone(),
            order: t.order,
            timeout_minutes: t.timeout_minutes,
            kind: StepKind::Template,
            dependencies: t
                .dependencies
                .iter()
                .map(|d| Dependency {
                    depends_on: d.depends_on_template_id,
                    dependency_type: d.dependency_type.clone(),
                })
                .collect(),
        }
    }
}

impl From<&ExecutionStep> for Step {
    fn from(e: &ExecutionStep) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            task_type: e.task_type.clone(),
            order: e.order,
            timeout_minutes: e.timeout_minutes,
            kind: StepKind::Execution {
                status: e.status.clone(),
            },
            dependencies: e
                .dependencies
                .iter()
                .map(|d| Dependency {
                    depends_on: d.depends_on_task_id,
                    dependency_type: d.dependency_type.clone(),
                })
                .collect(),
        }
    }
}

/// Convert a step list into normalized steps, preserving input order.
pub fn normalize(source: &StepSource) -> Vec<Step> {
    let steps: Vec<Step> = match source {
        StepSource::Template(steps) => steps.iter().map(Step::from).collect(),
        StepSource::Execution(steps) => steps.iter().map(Step::from).collect(),
    };
    debug!(mode = %source.mode(), steps = steps.len(), "normalized steps");
    steps
}

/// Stable sort by `order`; equal orders keep their input position.
pub fn sort_by_order(mut steps: Vec<Step>) -> Vec<Step> {
    steps.sort_by_key(|s| s.order);
    steps
}
