// src/engine/mod.rs

//! Render engine for stepgraph.
//!
//! - [`core`] holds the synchronous, memoizing pipeline
//!   ([`StepGraphEngine`]).
//! - [`source`] abstracts where step lists come from.
//! - [`runtime`] is the async refresh loop that re-fetches the source on an
//!   interval and publishes changed graphs until it is stopped.

pub mod core;
pub mod runtime;
pub mod source;

pub use self::core::{CacheKey, Rendered, StepGraphEngine, build_render_graph, diagnose};
pub use runtime::{RefreshHandle, spawn_refresh_loop};
pub use source::{FileStepSource, StepSourceProvider};
