use wordgraph_core::{BigramCounts, WordFrequency};

use crate::output::Report;

/// Top `k` word frequency tiers, highest count first. Stops early when the
/// corpus has fewer tiers.
pub fn word_tiers(freq: &WordFrequency, k: usize) -> Vec<Report> {
    freq.tiers()
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(i, tier)| Report::WordTier {
            rank: i + 1,
            count: tier.count,
            words: tier.words,
        })
        .collect()
}

/// The `k`-th bigram frequency tier. Out-of-range ranks report zero pairs.
pub fn bigram_rank(bigrams: &BigramCounts, k: usize) -> Report {
    match bigrams.rank(k) {
        Some(tier) => Report::BigramTier {
            rank: k,
            count: tier.count,
            pairs: tier.pairs.iter().map(ToString::to_string).collect(),
        },
        None => Report::BigramTier {
            rank: k,
            count: 0,
            pairs: Vec::new(),
        },
    }
}
