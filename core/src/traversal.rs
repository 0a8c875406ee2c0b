use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use ordered_float::OrderedFloat;

use crate::error::QueryError;
use crate::graph::{NodeId, WordGraph};

/// Absolute tolerance for distance comparisons.
pub const EPSILON: f64 = 1e-12;

/// A weighted path between two words.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Sum of edge weights along the path.
    pub cost: f64,
    /// Words from source to destination, both inclusive.
    pub path: Vec<String>,
}

impl PathResult {
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Words found at an exact hop distance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HopResult {
    /// Ascending.
    pub words: Vec<String>,
    /// Nodes discovered by the BFS, start included.
    pub nodes_visited: usize,
}

/// Priority queue entry. Ordering is reversed so the max-heap pops the
/// smallest distance first, and among equal distances the smallest word
/// (node ids follow word order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    dist: OrderedFloat<f64>,
    node: NodeId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Weighted shortest path from `src` to `dst` (Dijkstra with lazy deletion).
///
/// `src == dst` short-circuits to a zero-cost single-word path without
/// touching the graph. Otherwise fails with [`QueryError::UnknownNode`] when
/// either word is missing and [`QueryError::Unreachable`] when no directed
/// path exists.
///
/// Ties are resolved by expansion order: among equal tentative distances the
/// lexicographically smaller word is expanded first, and a relaxation only
/// replaces a predecessor when it improves the distance by more than
/// [`EPSILON`]. The first edge to reach the minimum keeps it.
///
/// Complexity: O((V + E) log V).
pub fn shortest_path(graph: &WordGraph, src: &str, dst: &str) -> Result<PathResult, QueryError> {
    if src == dst {
        return Ok(PathResult {
            cost: 0.0,
            path: vec![src.to_string()],
        });
    }

    let start = graph
        .resolve(src)
        .ok_or_else(|| QueryError::UnknownNode(src.to_string()))?;
    let target = graph
        .resolve(dst)
        .ok_or_else(|| QueryError::UnknownNode(dst.to_string()))?;

    // Absent from `dist` means +inf.
    let mut dist: HashMap<NodeId, f64> = HashMap::new();
    let mut prev: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap: BinaryHeap<Candidate> = BinaryHeap::new();

    dist.insert(start, 0.0);
    heap.push(Candidate {
        dist: OrderedFloat(0.0),
        node: start,
    });

    let mut expanded = 0usize;
    let mut stale = 0usize;

    while let Some(Candidate { dist: d, node }) = heap.pop() {
        let d = d.into_inner();
        let best = dist.get(&node).copied().unwrap_or(f64::INFINITY);
        if d > best + EPSILON {
            stale += 1;
            continue;
        }
        if node == target {
            break;
        }
        expanded += 1;

        for edge in graph.neighbors(node) {
            let candidate = d + edge.weight();
            let known = dist.get(&edge.target).copied().unwrap_or(f64::INFINITY);
            // Unknown distances are +inf, so the first path to a node always wins.
            if candidate < known - EPSILON {
                dist.insert(edge.target, candidate);
                prev.insert(edge.target, node);
                heap.push(Candidate {
                    dist: OrderedFloat(candidate),
                    node: edge.target,
                });
            }
        }
    }

    log::debug!(
        "shortest_path {} -> {}: expanded {}, skipped {} stale",
        src,
        dst,
        expanded,
        stale
    );

    let cost = match dist.get(&target) {
        Some(&cost) => cost,
        None => {
            return Err(QueryError::Unreachable {
                from: src.to_string(),
                to: dst.to_string(),
            })
        }
    };

    Ok(PathResult {
        cost,
        path: reconstruct_path(graph, &prev, target),
    })
}

/// Walk predecessor links from `target` back to the source, then reverse.
fn reconstruct_path(graph: &WordGraph, prev: &HashMap<NodeId, NodeId>, target: NodeId) -> Vec<String> {
    let mut ids = vec![target];
    let mut current = target;
    // The source is never relaxed (weights are positive), so it has no entry.
    while let Some(&parent) = prev.get(&current) {
        ids.push(parent);
        current = parent;
    }

    ids.iter().rev().map(|&id| graph.word(id).to_string()).collect()
}

/// Words whose shortest hop distance from `src` is exactly `hops`.
///
/// BFS records each node's depth on first discovery and never overwrites
/// it, so no word can appear at two different hop counts. Nodes already at
/// depth `hops` are not expanded. Unknown `src` gives an empty result;
/// `hops == 0` gives `[src]`.
///
/// Complexity: O(V + E).
pub fn nodes_at_hops(graph: &WordGraph, src: &str, hops: u32) -> HopResult {
    let Some(start) = graph.resolve(src) else {
        return HopResult::default();
    };

    let mut depth: HashMap<NodeId, u32> = HashMap::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    depth.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, d)) = queue.pop_front() {
        if d >= hops {
            continue;
        }

        for edge in graph.neighbors(current) {
            if let Entry::Vacant(slot) = depth.entry(edge.target) {
                slot.insert(d + 1);
                queue.push_back((edge.target, d + 1));
            }
        }
    }

    let mut layer: Vec<NodeId> = depth
        .iter()
        .filter(|(_, &d)| d == hops)
        .map(|(&id, _)| id)
        .collect();
    layer.sort_unstable();

    HopResult {
        words: layer.into_iter().map(|id| graph.word(id).to_string()).collect(),
        nodes_visited: depth.len(),
    }
}
