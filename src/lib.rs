// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod input;
pub mod logging;
pub mod render;
pub mod style;
pub mod types;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_or_default};
use crate::engine::{FileStepSource, StepGraphEngine, diagnose, spawn_refresh_loop};
use crate::errors::StepgraphError;
use crate::graph::{normalize, resolve_edges, sort_by_order};
use crate::input::{StepSource, load_steps};
use crate::render::RenderGraph;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - step input loading
/// - the render engine
/// - (optional) the refresh loop and Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref().map(Path::new))?;

    if args.dry_run {
        let source = load_steps(&args.input, args.mode)?;
        print_dry_run(&cfg, &source);
        return Ok(());
    }

    let engine = StepGraphEngine::new(&cfg);

    if !args.watch {
        return render_once(engine, &args);
    }

    let interval_secs = args.interval_secs.unwrap_or(cfg.refresh.interval_secs);
    if interval_secs == 0 {
        return Err(StepgraphError::ConfigError(
            "--interval-secs must be >= 1 (got 0)".to_string(),
        )
        .into());
    }

    watch(engine, &args, Duration::from_secs(interval_secs)).await
}

fn render_once(mut engine: StepGraphEngine, args: &CliArgs) -> Result<()> {
    let source = load_steps(&args.input, args.mode)?;
    let rendered = engine.render(&source);
    info!(
        nodes = rendered.graph.nodes.len(),
        edges = rendered.graph.edges.len(),
        "rendered step graph"
    );
    println!("{}", to_json(&rendered.graph, args.pretty)?);
    Ok(())
}

/// Print one compact JSON line per changed graph until Ctrl-C.
async fn watch(engine: StepGraphEngine, args: &CliArgs, interval: Duration) -> Result<()> {
    let (graph_tx, mut graph_rx) = mpsc::channel::<Arc<RenderGraph>>(8);
    let provider = FileStepSource::new(&args.input, args.mode);
    let handle = spawn_refresh_loop(provider, engine, interval, graph_tx);

    info!(input = %args.input, mode = %args.mode, "watching step input");

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("failed to listen for Ctrl+C: {e}");
                }
                info!("shutdown requested; stopping refresh loop");
                break;
            }
            graph = graph_rx.recv() => {
                match graph {
                    Some(graph) => println!("{}", to_json(&graph, false)?),
                    None => {
                        debug!("refresh loop closed its channel");
                        break;
                    }
                }
            }
        }
    }

    drop(graph_rx);
    handle.stop().await;
    Ok(())
}

fn to_json(graph: &RenderGraph, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(graph)
    } else {
        serde_json::to_string(graph)
    };
    Ok(json?)
}

/// Simple dry-run output: print steps in sorted order, edges and diagnostics.
fn print_dry_run(cfg: &ConfigFile, source: &StepSource) {
    println!("stepgraph dry-run");
    println!("  mode = {}", source.mode());
    println!(
        "  layout.columns = {}, spacing = {}x{}, margin = {}",
        cfg.layout.columns, cfg.layout.h_spacing, cfg.layout.v_spacing, cfg.layout.margin
    );
    println!();

    let sorted = sort_by_order(normalize(source));
    println!("steps ({}):", sorted.len());
    for step in sorted.iter() {
        println!("  - [{}] {} (id {})", step.order, step.name, step.id);
        println!("      task_type: {}", step.task_type);
        if let Some(status) = step.status() {
            println!("      status: {status}");
        }
        if let Some(timeout) = step.timeout_minutes {
            println!("      timeout: {timeout} min");
        }
    }
    println!();

    let edges = resolve_edges(&sorted);
    println!("edges ({}):", edges.len());
    for edge in edges.iter() {
        println!("  - {} -> {} ({})", edge.source, edge.target, edge.kind);
    }

    let diagnostics = diagnose(source);
    if !diagnostics.is_clean() {
        println!();
        println!("diagnostics:");
        for orphan in diagnostics.orphan_dependencies.iter() {
            println!(
                "  - step {} depends on unknown step {}",
                orphan.step, orphan.depends_on
            );
        }
        for id in diagnostics.duplicate_step_ids.iter() {
            println!("  - step id {id} appears more than once");
        }
        for (depends_on, step) in diagnostics.duplicate_dependencies.iter() {
            println!("  - step {step} declares its dependency on {depends_on} more than once");
        }
        if let Some(id) = diagnostics.cycle_through {
            println!("  - declared dependencies form a cycle through step {id}");
        }
    }

    debug!("dry-run complete (no output graph)");
}
