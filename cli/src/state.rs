use std::path::{Path, PathBuf};
use std::time::Instant;

use wordgraph_core::{BigramCounts, WordGraph};

use crate::corpus::Corpus;
use crate::error::Result;

/// Everything built from one corpus load.
///
/// Built once and passed by reference to every task; the graph is never
/// mutated after construction.
pub struct GraphState {
    pub corpus: Corpus,
    /// Kept after graph construction for the co-occurrence report.
    pub bigrams: BigramCounts,
    pub graph: WordGraph,
    pub source: Option<PathBuf>,
    pub load_time_ms: f64,
    pub build_time_ms: f64,
}

impl GraphState {
    /// Load a corpus file and build the bigram table and graph from it.
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let corpus = Corpus::load(path)?;
        let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        log::info!("Load corpus finished in {:.0} ms", load_time_ms);

        let mut state = Self::build(corpus);
        state.source = Some(path.to_path_buf());
        state.load_time_ms = load_time_ms;
        Ok(state)
    }

    /// Build from an already tokenized corpus.
    pub fn build(corpus: Corpus) -> Self {
        let start = Instant::now();
        let bigrams = BigramCounts::from_sentences(corpus.sentences());
        let graph = WordGraph::from_bigrams(&bigrams);
        let build_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        log::info!(
            "Build graph finished in {:.0} ms ({} nodes, {} edges)",
            build_time_ms,
            graph.node_count(),
            graph.edge_count()
        );

        Self {
            corpus,
            bigrams,
            graph,
            source: None,
            load_time_ms: 0.0,
            build_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_corpus() {
        let state = GraphState::build(Corpus::from_lines(["a b c", "a b", "d"]));
        assert_eq!(state.bigrams.get("a", "b"), 2);
        assert_eq!(state.graph.node_count(), 3);
        assert!(!state.graph.contains("d"));
        assert!(state.corpus.contains("d"));
        assert!(state.source.is_none());
    }
}
