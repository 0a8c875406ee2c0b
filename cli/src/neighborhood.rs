use wordgraph_core::nodes_at_hops;

use crate::output::Report;
use crate::state::GraphState;

/// Words at exactly `hops` edges from `from`.
pub fn hops_report(state: &GraphState, from: &str, hops: u32) -> Report {
    let result = nodes_at_hops(&state.graph, from, hops);
    log::debug!(
        "nodes_at_hops '{}' {}: {} found, {} visited",
        from,
        hops,
        result.words.len(),
        result.nodes_visited
    );
    Report::WordsAtHops {
        from: from.to_string(),
        hops,
        count: result.words.len(),
        words: result.words,
    }
}
