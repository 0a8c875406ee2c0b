//! wordgraph-cli: command-line driver around wordgraph-core.
//!
//! Loads a text corpus, builds the bigram table and word graph once, then
//! runs the selected tasks against it: word frequency and bigram reports,
//! shortest path and exact-hop queries, and greedy sentence generation.

pub mod check;
pub mod corpus;
pub mod error;
pub mod neighborhood;
pub mod output;
pub mod path;
pub mod rank;
pub mod report;
pub mod settings;
pub mod state;
pub mod status;
pub mod tasks;

pub use error::{CliError, Result};
