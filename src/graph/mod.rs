// src/graph/mod.rs

//! Workflow step graph construction.
//!
//! - [`step`] normalizes the two input shapes into one [`Step`] record.
//! - [`resolver`] turns declared dependencies into edges, with a sequential
//!   fallback between order-adjacent steps.
//! - [`layout`] places steps on a wrapped grid by sorted position.
//! - [`diagnostics`] reports data problems without affecting output.

pub mod diagnostics;
pub mod layout;
pub mod resolver;
pub mod step;

pub use diagnostics::{GraphDiagnostics, OrphanDependency, inspect};
pub use layout::{GridCell, GridLayout, Placement, Position};
pub use resolver::{Edge, resolve_edges};
pub use step::{Dependency, Step, StepId, StepKind, normalize, sort_by_order};
