use std::collections::HashMap;

use crate::bigram::BigramCounts;

/// Dense node identifier.
///
/// Ids are assigned in ascending lexicographic order of the word, so
/// `a < b` on ids holds exactly when it holds on the words they name.
pub type NodeId = u32;

/// A directed edge in the adjacency list.
///
/// Only the count is stored; the weight is always derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub count: u32,
}

impl Edge {
    /// Numerator of the count → weight conversion.
    pub const WEIGHT_SCALE: f64 = 100.0;

    /// Traversal cost: `100.0 / count`. Frequent bigrams are cheap.
    pub fn weight(&self) -> f64 {
        Self::WEIGHT_SCALE / f64::from(self.count)
    }
}

/// Read-only view of an outgoing edge, keyed by word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView<'a> {
    pub to: &'a str,
    pub count: u32,
    pub weight: f64,
}

/// Directed word graph built from bigram counts.
///
/// Every word that appears as either end of a bigram is a node, including
/// words with no outgoing edges. Adjacency lists are sorted ascending by
/// destination word. The graph has no mutators; build it once with
/// [`WordGraph::from_bigrams`] and share it by reference.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    words: Vec<String>,
    index: HashMap<String, NodeId>,
    outgoing: Vec<Vec<Edge>>,
}

impl WordGraph {
    /// Build the graph from a bigram count table. O(E log E).
    pub fn from_bigrams(bigrams: &BigramCounts) -> Self {
        let mut vocab: Vec<&str> = bigrams
            .iter()
            .flat_map(|(from, to, _)| [from, to])
            .collect();
        vocab.sort_unstable();
        vocab.dedup();

        let words: Vec<String> = vocab.into_iter().map(str::to_string).collect();
        let index: HashMap<String, NodeId> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as NodeId))
            .collect();

        let mut outgoing: Vec<Vec<Edge>> = vec![Vec::new(); words.len()];
        for (from, to, count) in bigrams.iter() {
            let from_id = index[from];
            let to_id = index[to];
            outgoing[from_id as usize].push(Edge {
                target: to_id,
                count,
            });
        }

        // Id order is word order, so this sorts each list by destination word.
        for edges in &mut outgoing {
            edges.sort_unstable_by_key(|e| e.target);
        }

        let graph = Self {
            words,
            index,
            outgoing,
        };
        log::debug!(
            "built word graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Look up the id of a word.
    pub fn resolve(&self, word: &str) -> Option<NodeId> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The word behind an id handed out by this graph.
    pub fn word(&self, id: NodeId) -> &str {
        &self.words[id as usize]
    }

    /// All words, ascending.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Outgoing edges of a node, ascending by destination word.
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.outgoing
            .get(id as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Outgoing edges of a word as (destination, count, weight), ascending by
    /// destination. Empty for unknown words.
    pub fn edges(&self, word: &str) -> impl Iterator<Item = EdgeView<'_>> {
        let edges = self.resolve(word).map(|id| self.neighbors(id)).unwrap_or(&[]);
        edges.iter().map(move |e| EdgeView {
            to: self.word(e.target),
            count: e.count,
            weight: e.weight(),
        })
    }

    pub fn out_degree(&self, word: &str) -> usize {
        self.resolve(word)
            .map(|id| self.neighbors(id).len())
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let text: usize = self.words.iter().map(|w| w.len()).sum();
        // Word text is held twice: once in `words`, once as an index key.
        let words_mem = self.words.len() * size_of::<String>() + text;
        let index_mem = self.index.len() * (size_of::<String>() + size_of::<NodeId>() + 16) + text;
        let edges_mem: usize = self
            .outgoing
            .iter()
            .map(|v| size_of::<Vec<Edge>>() + v.capacity() * size_of::<Edge>())
            .sum();

        words_mem + index_mem + edges_mem
    }
}
