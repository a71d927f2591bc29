use std::collections::HashSet;

use proptest::prelude::*;
use stepgraph::graph::{Step, normalize, resolve_edges, sort_by_order};
use stepgraph::input::{StepSource, TemplateDependency, TemplateStep};
use stepgraph::types::DependencyKind;

const KINDS: [&str; 5] = ["blocking", "soft", "parallel", "weird", ""];

// Strategy for template lists with unique ids 0..n, small random orders
// (plenty of ties) and dependencies that may point past the end of the list
// (orphans).
fn template_list_strategy(max_steps: usize) -> impl Strategy<Value = StepSource> {
    (0..=max_steps).prop_flat_map(|num_steps| {
        let step_strat = (
            0i64..4,
            proptest::collection::vec((0i64..(num_steps as i64 + 3), 0usize..KINDS.len()), 0..3),
        );
        proptest::collection::vec(step_strat, num_steps).prop_map(|raw| {
            let steps = raw
                .into_iter()
                .enumerate()
                .map(|(i, (order, deps))| TemplateStep {
                    id: i as i64,
                    name: format!("step_{i}"),
                    task_type: "creation".to_string(),
                    order,
                    timeout_minutes: None,
                    dependencies: deps
                        .into_iter()
                        .map(|(on, kind)| TemplateDependency {
                            depends_on_template_id: on,
                            dependency_type: KINDS[kind].to_string(),
                        })
                        .collect(),
                })
                .collect();
            StepSource::Template(steps)
        })
    })
}

fn resolvable_count(step: &Step, known: &HashSet<i64>) -> usize {
    step.dependencies
        .iter()
        .filter(|d| known.contains(&d.depends_on))
        .count()
}

proptest! {
    #[test]
    fn test_first_step_has_no_incoming_edges(source in template_list_strategy(12)) {
        let sorted = sort_by_order(normalize(&source));
        let edges = resolve_edges(&sorted);

        if let Some(first) = sorted.first() {
            prop_assert!(edges.iter().all(|e| e.target != first.id));
        } else {
            prop_assert!(edges.is_empty());
        }
    }

    #[test]
    fn test_fallback_edge_only_without_resolvable_dependencies(source in template_list_strategy(12)) {
        let sorted = sort_by_order(normalize(&source));
        let known: HashSet<i64> = sorted.iter().map(|s| s.id).collect();
        let edges = resolve_edges(&sorted);

        for (index, step) in sorted.iter().enumerate().skip(1) {
            let incoming: Vec<_> = edges.iter().filter(|e| e.target == step.id).collect();
            let fallback: Vec<_> = incoming.iter().filter(|e| e.kind == DependencyKind::Sequential).collect();
            let resolvable = resolvable_count(step, &known);

            if resolvable > 0 {
                prop_assert!(fallback.is_empty(), "step {} has deps and a fallback edge", step.id);
                prop_assert_eq!(incoming.len(), resolvable);
            } else {
                prop_assert_eq!(incoming.len(), 1);
                prop_assert_eq!(fallback.len(), 1);
                prop_assert_eq!(fallback[0].source, sorted[index - 1].id);
            }
        }
    }

    #[test]
    fn test_every_edge_endpoint_is_a_known_step(source in template_list_strategy(12)) {
        let sorted = sort_by_order(normalize(&source));
        let known: HashSet<i64> = sorted.iter().map(|s| s.id).collect();

        for edge in resolve_edges(&sorted) {
            prop_assert!(known.contains(&edge.source));
            prop_assert!(known.contains(&edge.target));
        }
    }

    #[test]
    fn test_sort_is_stable(source in template_list_strategy(12)) {
        let sorted = sort_by_order(normalize(&source));
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].order <= pair[1].order);
            if pair[0].order == pair[1].order {
                // ids equal input position here
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
