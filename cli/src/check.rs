//! Self-check: verifies graph invariants on the loaded corpus.

use std::collections::HashSet;

use wordgraph_core::{nodes_at_hops, shortest_path, Edge};

use crate::output::Report;
use crate::state::GraphState;

/// Deepest hop layer inspected by the layering check.
const MAX_CHECK_HOPS: u32 = 4;

/// Run every check. `start` and `target` select the pair used for the
/// determinism check and the origin of the layering check.
pub fn self_check(state: &GraphState, start: &str, target: &str) -> Vec<Report> {
    vec![
        check("every bigram endpoint is a graph node", endpoints_are_nodes(state)),
        check(
            "bigram total matches adjacent token pairs",
            bigram_total_matches(state),
        ),
        check("edge weight x count = 100 for every edge", weights_consistent(state)),
        check("self path has cost 0 for every node", self_paths_trivial(state)),
        check(
            &format!("hop layers from '{}' are disjoint", start),
            hop_layers_disjoint(state, start),
        ),
        check(
            &format!("shortest path '{}' -> '{}' is deterministic", start, target),
            path_deterministic(state, start, target),
        ),
    ]
}

fn check(label: &str, ok: bool) -> Report {
    if !ok {
        log::warn!("self-check failed: {}", label);
    }
    Report::Check {
        label: label.to_string(),
        ok,
    }
}

/// Number of failed checks.
pub fn issue_count(reports: &[Report]) -> usize {
    reports
        .iter()
        .filter(|r| matches!(r, Report::Check { ok: false, .. }))
        .count()
}

fn endpoints_are_nodes(state: &GraphState) -> bool {
    state
        .bigrams
        .iter()
        .all(|(from, to, _)| state.graph.contains(from) && state.graph.contains(to))
}

fn bigram_total_matches(state: &GraphState) -> bool {
    let expected: u64 = state
        .corpus
        .sentences()
        .iter()
        .map(|s| s.len().saturating_sub(1) as u64)
        .sum();
    let counted: u64 = state.bigrams.iter().map(|(_, _, c)| u64::from(c)).sum();
    expected == counted
}

fn weights_consistent(state: &GraphState) -> bool {
    state.graph.nodes().all(|word| {
        state
            .graph
            .edges(word)
            .all(|e| (e.weight * f64::from(e.count) - Edge::WEIGHT_SCALE).abs() < 1e-9)
    })
}

fn self_paths_trivial(state: &GraphState) -> bool {
    state.graph.nodes().all(|word| {
        matches!(
            shortest_path(&state.graph, word, word),
            Ok(ref p) if p.cost == 0.0 && p.path.len() == 1 && p.path[0] == word
        )
    })
}

fn hop_layers_disjoint(state: &GraphState, start: &str) -> bool {
    let mut seen: HashSet<String> = HashSet::new();
    for hops in 0..=MAX_CHECK_HOPS {
        for word in nodes_at_hops(&state.graph, start, hops).words {
            if !seen.insert(word) {
                return false;
            }
        }
    }
    true
}

fn path_deterministic(state: &GraphState, start: &str, target: &str) -> bool {
    let first = shortest_path(&state.graph, start, target);
    let second = shortest_path(&state.graph, start, target);
    match (first, second) {
        (Ok(a), Ok(b)) => a.path == b.path && a.cost.to_bits() == b.cost.to_bits(),
        (Err(a), Err(b)) => a == b,
        _ => false,
    }
}
