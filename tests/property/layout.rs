use std::collections::HashSet;

use proptest::prelude::*;
use stepgraph::config::ConfigFile;
use stepgraph::engine::{StepGraphEngine, build_render_graph};
use stepgraph::graph::{GridCell, GridLayout};
use stepgraph::input::{ExecutionStep, StepSource};
use stepgraph::style::Palette;

const STATUSES: [&str; 8] = [
    "pending", "ready", "in_progress", "completed", "failed", "cancelled", "paused", "",
];

fn execution_list_strategy(max_steps: usize) -> impl Strategy<Value = StepSource> {
    proptest::collection::vec((-5i64..5, 0usize..STATUSES.len()), 0..=max_steps).prop_map(|raw| {
        StepSource::Execution(
            raw.into_iter()
                .enumerate()
                .map(|(i, (order, status))| ExecutionStep {
                    id: i as i64 + 1,
                    name: format!("task_{i}"),
                    task_type: "dispatch".to_string(),
                    order,
                    status: Some(STATUSES[status].to_string()),
                    timeout_minutes: None,
                    dependencies: vec![],
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn test_cells_follow_row_major_order(columns in 1u32..6, count in 0usize..40) {
        let grid = GridLayout::new(columns, 300, 180, 50);
        let mut seen = HashSet::new();

        for k in 0..count {
            let cell = grid.cell(k);
            prop_assert_eq!(cell.column as usize, k % columns as usize);
            prop_assert_eq!(cell.row as usize, k / columns as usize);
            prop_assert!(seen.insert(cell), "cell {:?} used twice", cell);
        }
    }

    #[test]
    fn test_rendered_nodes_never_overlap(source in execution_list_strategy(25)) {
        let cfg = ConfigFile::default();
        let mut engine = StepGraphEngine::new(&cfg);
        let graph = engine.render(&source).graph;

        let w = f64::from(cfg.layout.node_width);
        let h = f64::from(cfg.layout.node_height);
        for (i, a) in graph.nodes.iter().enumerate() {
            for b in graph.nodes.iter().skip(i + 1) {
                let apart_x = (a.position.x - b.position.x).abs() >= w;
                let apart_y = (a.position.y - b.position.y).abs() >= h;
                prop_assert!(apart_x || apart_y, "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_pipeline_is_deterministic(source in execution_list_strategy(25)) {
        let cfg = ConfigFile::default();
        let grid = GridLayout::from_config(&cfg.layout);
        let palette = Palette::from_config(&cfg.palette);

        let first = build_render_graph(&source, &grid, &palette, &cfg.layout);
        let second = build_render_graph(&source, &grid, &palette, &cfg.layout);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_default_grid_matches_three_columns() {
    let grid = GridLayout::default();
    assert_eq!(grid.cell(2), GridCell { column: 2, row: 0 });
    assert_eq!(grid.cell(3), GridCell { column: 0, row: 1 });
}
