#![allow(dead_code)]

use stepgraph::config::{ConfigFile, RawConfigFile};
use stepgraph::input::{
    ExecutionDependency, ExecutionStep, StepSource, TemplateDependency, TemplateStep,
};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn columns(mut self, columns: u32) -> Self {
        self.config.layout.columns = columns;
        self
    }

    pub fn spacing(mut self, h_spacing: u32, v_spacing: u32) -> Self {
        self.config.layout.h_spacing = h_spacing;
        self.config.layout.v_spacing = v_spacing;
        self
    }

    pub fn margin(mut self, margin: u32) -> Self {
        self.config.layout.margin = margin;
        self
    }

    pub fn task_type_color(mut self, task_type: &str, color: &str) -> Self {
        self.config
            .palette
            .task_types
            .insert(task_type.to_string(), color.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TemplateStep`.
pub struct TemplateStepBuilder {
    step: TemplateStep,
}

impl TemplateStepBuilder {
    /// Step `id` with `order == id` and a generated name.
    pub fn new(id: i64) -> Self {
        Self {
            step: TemplateStep {
                id,
                name: format!("Step {id}"),
                task_type: "creation".to_string(),
                order: id,
                timeout_minutes: None,
                dependencies: vec![],
            },
        }
    }

    pub fn order(mut self, order: i64) -> Self {
        self.step.order = order;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.step.name = name.to_string();
        self
    }

    pub fn task_type(mut self, task_type: &str) -> Self {
        self.step.task_type = task_type.to_string();
        self
    }

    pub fn timeout(mut self, minutes: i64) -> Self {
        self.step.timeout_minutes = Some(minutes);
        self
    }

    pub fn after(mut self, id: i64, dependency_type: &str) -> Self {
        self.step.dependencies.push(TemplateDependency {
            depends_on_template_id: id,
            dependency_type: dependency_type.to_string(),
        });
        self
    }

    pub fn build(self) -> TemplateStep {
        self.step
    }
}

/// Builder for `ExecutionStep`.
pub struct ExecutionStepBuilder {
    step: ExecutionStep,
}

impl ExecutionStepBuilder {
    /// Task `id` with `order == id`, status `pending`.
    pub fn new(id: i64) -> Self {
        Self {
            step: ExecutionStep {
                id,
                name: format!("Task {id}"),
                task_type: "creation".to_string(),
                order: id,
                status: Some("pending".to_string()),
                timeout_minutes: None,
                dependencies: vec![],
            },
        }
    }

    pub fn order(mut self, order: i64) -> Self {
        self.step.order = order;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.step.status = Some(status.to_string());
        self
    }

    pub fn no_status(mut self) -> Self {
        self.step.status = None;
        self
    }

    pub fn task_type(mut self, task_type: &str) -> Self {
        self.step.task_type = task_type.to_string();
        self
    }

    pub fn timeout(mut self, minutes: i64) -> Self {
        self.step.timeout_minutes = Some(minutes);
        self
    }

    pub fn after(mut self, id: i64, dependency_type: &str) -> Self {
        self.step.dependencies.push(ExecutionDependency {
            depends_on_task_id: id,
            dependency_type: dependency_type.to_string(),
        });
        self
    }

    pub fn build(self) -> ExecutionStep {
        self.step
    }
}

pub fn templates(steps: Vec<TemplateStepBuilder>) -> StepSource {
    StepSource::Template(steps.into_iter().map(|b| b.build()).collect())
}

pub fn executions(steps: Vec<ExecutionStepBuilder>) -> StepSource {
    StepSource::Execution(steps.into_iter().map(|b| b.build()).collect())
}
