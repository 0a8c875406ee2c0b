use crate::graph::{Edge, WordGraph};

/// A greedily generated word sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub words: Vec<String>,
    /// False when generation stopped at a word with no outgoing edges
    /// before reaching the requested length.
    pub complete: bool,
}

/// Follow the most frequent bigram from `start` until `len` words are produced.
///
/// At each step the outgoing edge with the highest count is taken; ties go to
/// the smallest destination word. `len` below 1 is treated as 1. A start word
/// that is not in the graph yields just itself.
pub fn generate_sentence(graph: &WordGraph, start: &str, len: usize) -> Generated {
    let len = len.max(1);
    let mut words = vec![start.to_string()];
    let mut current = graph.resolve(start);

    while words.len() < len {
        let next = current.and_then(|id| {
            // Adjacency is sorted by destination; keep the first maximum.
            graph
                .neighbors(id)
                .iter()
                .fold(None, |best: Option<&Edge>, e| match best {
                    Some(b) if b.count >= e.count => Some(b),
                    _ => Some(e),
                })
        });

        match next {
            Some(edge) => {
                words.push(graph.word(edge.target).to_string());
                current = Some(edge.target);
            }
            None => {
                return Generated {
                    words,
                    complete: false,
                }
            }
        }
    }

    Generated {
        words,
        complete: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigram::BigramCounts;

    fn graph(entries: &[(&str, &str, u32)]) -> WordGraph {
        WordGraph::from_bigrams(&BigramCounts::from_counts(entries.iter().copied()))
    }

    #[test]
    fn test_follows_highest_count() {
        let g = graph(&[("tim", "ate", 1), ("tim", "had", 3), ("had", "bread", 2), ("had", "a", 1)]);
        let s = generate_sentence(&g, "tim", 3);
        assert!(s.complete);
        assert_eq!(s.words, vec!["tim", "had", "bread"]);
    }

    #[test]
    fn test_tie_goes_to_smaller_word() {
        let g = graph(&[("a", "zebra", 2), ("a", "mango", 2), ("a", "kiwi", 1)]);
        let s = generate_sentence(&g, "a", 2);
        assert_eq!(s.words, vec!["a", "mango"]);
    }

    #[test]
    fn test_stops_at_dead_end() {
        let g = graph(&[("a", "b", 1)]);
        let s = generate_sentence(&g, "a", 5);
        assert!(!s.complete);
        assert_eq!(s.words, vec!["a", "b"]);
    }

    #[test]
    fn test_unknown_start() {
        let g = graph(&[("a", "b", 1)]);
        let s = generate_sentence(&g, "q", 3);
        assert!(!s.complete);
        assert_eq!(s.words, vec!["q"]);
    }

    #[test]
    fn test_length_clamped_to_one() {
        let g = graph(&[("a", "b", 1)]);
        let s = generate_sentence(&g, "a", 0);
        assert!(s.complete);
        assert_eq!(s.words, vec!["a"]);
    }

    #[test]
    fn test_cycles_repeat() {
        let g = graph(&[("a", "b", 2), ("b", "a", 2)]);
        let s = generate_sentence(&g, "a", 5);
        assert_eq!(s.words, vec!["a", "b", "a", "b", "a"]);
    }
}
