use wordgraph_core::shortest_path;

use crate::output::Report;
use crate::state::GraphState;

/// Shortest path report. Unknown or unreachable words produce a "not found"
/// report rather than an error.
pub fn path_report(state: &GraphState, from: &str, to: &str) -> Report {
    match shortest_path(&state.graph, from, to) {
        Ok(result) => Report::ShortestPath {
            from: from.to_string(),
            to: to.to_string(),
            found: true,
            cost: Some(result.cost),
            hops: Some(result.hops()),
            path: result.path,
        },
        Err(e) => {
            log::debug!("no path: {}", e);
            Report::ShortestPath {
                from: from.to_string(),
                to: to.to_string(),
                found: false,
                cost: None,
                hops: None,
                path: Vec::new(),
            }
        }
    }
}
