use crate::output::Report;
use crate::state::GraphState;

/// Corpus and graph summary.
pub fn status_report(state: &GraphState) -> Report {
    Report::Status {
        source: state.source.as_ref().map(|p| p.display().to_string()),
        sentences: state.corpus.sentences().len(),
        tokens: state.corpus.token_count(),
        vocabulary: state.corpus.vocab().len(),
        nodes: state.graph.node_count(),
        edges: state.graph.edge_count(),
        memory_bytes: state.graph.memory_usage(),
        load_time_ms: state.load_time_ms,
        build_time_ms: state.build_time_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    #[test]
    fn test_status_counts() {
        let state = GraphState::build(Corpus::from_lines(["a b c", "d"]));
        match status_report(&state) {
            Report::Status {
                source,
                sentences,
                tokens,
                vocabulary,
                nodes,
                edges,
                ..
            } => {
                assert!(source.is_none());
                assert_eq!((sentences, tokens, vocabulary), (2, 4, 4));
                assert_eq!((nodes, edges), (3, 2));
            }
            other => panic!("unexpected report {:?}", other),
        }
    }
}
