// src/input/mod.rs

//! Step lists as delivered by the backend, and helpers to read them.

pub mod loader;
pub mod model;

pub use loader::{load_steps, parse_steps};
pub use model::{
    ExecutionDependency, ExecutionStep, StepSource, TemplateDependency, TemplateStep,
};
