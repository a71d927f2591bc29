// src/engine/core.rs

//! Pure, memoizing render core.
//!
//! [`StepGraphEngine`] runs the whole pipeline (normalize, sort, resolve,
//! place, style, assemble) synchronously and keeps the last result keyed by
//! a [`CacheKey`]. Rendering the same content in the same mode again returns
//! the cached graph; any change to either recomputes from scratch.
//!
//! No Tokio, channels or IO in here; the refresh loop in
//! [`runtime`](crate::engine::runtime) is the async shell around it.

use std::sync::Arc;

use blake3::Hasher;
use tracing::debug;

use crate::config::{ConfigFile, LayoutSection};
use crate::graph::{GraphDiagnostics, GridLayout, inspect, normalize, resolve_edges, sort_by_order};
use crate::input::StepSource;
use crate::render::{RenderGraph, assemble};
use crate::style::Palette;
use crate::types::ViewMode;

/// Identity of one pipeline input: content hash plus mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    content: [u8; 32],
    mode: ViewMode,
}

impl CacheKey {
    pub fn for_source(source: &StepSource) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(source.mode().as_str().as_bytes());

        match source {
            StepSource::Template(steps) => {
                for step in steps {
                    hash_common(
                        &mut hasher,
                        step.id,
                        &step.name,
                        &step.task_type,
                        step.order,
                        step.timeout_minutes,
                    );
                    hash_len(&mut hasher, step.dependencies.len());
                    for dep in &step.dependencies {
                        hasher.update(&dep.depends_on_template_id.to_le_bytes());
                        hash_str(&mut hasher, &dep.dependency_type);
                    }
                }
            }
            StepSource::Execution(steps) => {
                for step in steps {
                    hash_common(
                        &mut hasher,
                        step.id,
                        &step.name,
                        &step.task_type,
                        step.order,
                        step.timeout_minutes,
                    );
                    match &step.status {
                        Some(status) => {
                            hasher.update(&[1]);
                            hash_str(&mut hasher, status);
                        }
                        None => {
                            hasher.update(&[0]);
                        }
                    }
                    hash_len(&mut hasher, step.dependencies.len());
                    for dep in &step.dependencies {
                        hasher.update(&dep.depends_on_task_id.to_le_bytes());
                        hash_str(&mut hasher, &dep.dependency_type);
                    }
                }
            }
        }

        Self {
            content: *hasher.finalize().as_bytes(),
            mode: source.mode(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }
}

fn hash_common(
    hasher: &mut Hasher,
    id: i64,
    name: &str,
    task_type: &str,
    order: i64,
    timeout_minutes: Option<i64>,
) {
    hasher.update(&id.to_le_bytes());
    hash_str(hasher, name);
    hash_str(hasher, task_type);
    hasher.update(&order.to_le_bytes());
    match timeout_minutes {
        Some(m) => {
            hasher.update(&[1]);
            hasher.update(&m.to_le_bytes());
        }
        None => {
            hasher.update(&[0]);
        }
    }
}

// Length-prefixed so adjacent strings cannot run into each other.
fn hash_str(hasher: &mut Hasher, s: &str) {
    hash_len(hasher, s.len());
    hasher.update(s.as_bytes());
}

fn hash_len(hasher: &mut Hasher, len: usize) {
    hasher.update(&(len as u64).to_le_bytes());
}

/// Result of [`StepGraphEngine::render`].
#[derive(Debug, Clone)]
pub struct Rendered {
    pub graph: Arc<RenderGraph>,
    /// `false` when the graph came from the cache.
    pub recomputed: bool,
}

#[derive(Debug)]
struct CachedGraph {
    key: CacheKey,
    graph: Arc<RenderGraph>,
}

/// Layout + palette settings and a single-entry render cache.
#[derive(Debug)]
pub struct StepGraphEngine {
    layout: LayoutSection,
    grid: GridLayout,
    palette: Palette,
    cache: Option<CachedGraph>,
}

impl StepGraphEngine {
    pub fn new(config: &ConfigFile) -> Self {
        Self {
            layout: config.layout,
            grid: GridLayout::from_config(&config.layout),
            palette: Palette::from_config(&config.palette),
            cache: None,
        }
    }

    /// Render `source`, reusing the previous graph if its key is unchanged.
    pub fn render(&mut self, source: &StepSource) -> Rendered {
        let key = CacheKey::for_source(source);

        if let Some(cached) = &self.cache {
            if cached.key == key {
                debug!(mode = %key.mode(), "render cache hit");
                return Rendered {
                    graph: Arc::clone(&cached.graph),
                    recomputed: false,
                };
            }
        }

        debug!(mode = %key.mode(), steps = source.len(), "recomputing render graph");
        let graph = Arc::new(build_render_graph(
            source,
            &self.grid,
            &self.palette,
            &self.layout,
        ));
        self.cache = Some(CachedGraph {
            key,
            graph: Arc::clone(&graph),
        });

        Rendered {
            graph,
            recomputed: true,
        }
    }

    /// Key of the cached graph, if any.
    pub fn last_key(&self) -> Option<CacheKey> {
        self.cache.as_ref().map(|c| c.key)
    }

    /// Drop the cached graph so the next render recomputes.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}

/// One uncached pass of the full pipeline.
///
/// Never fails: empty input gives an empty graph, bad references and unknown
/// enum strings degrade to dropped edges and neutral styling.
pub fn build_render_graph(
    source: &StepSource,
    grid: &GridLayout,
    palette: &Palette,
    layout: &LayoutSection,
) -> RenderGraph {
    if source.is_empty() {
        return RenderGraph::default();
    }

    let sorted = sort_by_order(normalize(source));

    let diagnostics = inspect(&sorted);
    if !diagnostics.is_clean() {
        diagnostics.log();
    }

    let edges = resolve_edges(&sorted);
    let placements = grid.allocate(&sorted);

    assemble(&sorted, &placements, &edges, palette, layout)
}

/// Diagnostics for `source` without rendering it.
pub fn diagnose(source: &StepSource) -> GraphDiagnostics {
    inspect(&normalize(source))
}
