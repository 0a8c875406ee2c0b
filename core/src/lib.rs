//! wordgraph-core: Word co-occurrence graph engine.
//!
//! Counts ordered bigrams within sentences, builds a directed word graph
//! whose edge weights are `100.0 / count`, and answers two deterministic
//! queries: weighted shortest path between two words, and the words at an
//! exact hop distance.
//!
//! The crate does no I/O and no tokenization. Callers hand it normalized
//! sentences and pass the built [`WordGraph`] into every query.

mod bigram;
mod error;
mod frequency;
mod generate;
mod graph;
mod traversal;

pub use bigram::{Bigram, BigramCounts, BigramTier};
pub use error::{check_hop_count, QueryError};
pub use frequency::{WordFrequency, WordTier};
pub use generate::{generate_sentence, Generated};
pub use graph::{Edge, EdgeView, NodeId, WordGraph};
pub use traversal::{nodes_at_hops, shortest_path, HopResult, PathResult, EPSILON};
