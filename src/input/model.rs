// src/input/model.rs

//! Wire shapes of the two step lists the backend hands us.

use serde::{Deserialize, Serialize};

use crate::types::ViewMode;

/// Design-time workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateStep {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub task_type: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_minutes: Option<i64>,
    #[serde(default)]
    pub dependencies: Vec<TemplateDependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDependency {
    pub depends_on_template_id: i64,
    #[serde(default)]
    pub dependency_type: String,
}

/// Run-time task instance of a workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub task_type: String,
    #[serde(default)]
    pub order: i64,
    /// Open string; unknown values get neutral styling downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_minutes: Option<i64>,
    #[serde(default)]
    pub dependencies: Vec<ExecutionDependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionDependency {
    pub depends_on_task_id: i64,
    #[serde(default)]
    pub dependency_type: String,
}

/// A step list tagged with the shape it holds.
///
/// The two variants are never mixed; the tag is fixed when the list is read,
/// so nothing downstream has to probe for a `status` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSource {
    Template(Vec<TemplateStep>),
    Execution(Vec<ExecutionStep>),
}

impl StepSource {
    pub fn mode(&self) -> ViewMode {
        match self {
            StepSource::Template(_) => ViewMode::Template,
            StepSource::Execution(_) => ViewMode::Execution,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            StepSource::Template(steps) => steps.len(),
            StepSource::Execution(steps) => steps.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty list for the given mode.
    pub fn empty(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Template => StepSource::Template(Vec::new()),
            ViewMode::Execution => StepSource::Execution(Vec::new()),
        }
    }
}
