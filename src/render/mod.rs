// src/render/mod.rs

//! Assembly of the node/edge lists consumed by the drawing surface.

pub mod assembler;
pub mod model;

pub use assembler::{assemble, edge_id};
pub use model::{NodeLabel, NodeStyle, RenderEdge, RenderGraph, RenderNode, StatusPill};
