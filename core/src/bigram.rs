use std::collections::HashMap;
use std::fmt;

/// An ordered pair of adjacent words within one sentence.
///
/// Direction matters: `(u, v)` and `(v, u)` are distinct bigrams.
/// Pairs order by `from`, then `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bigram {
    pub from: String,
    pub to: String,
}

impl Bigram {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// A group of bigrams sharing the same occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigramTier {
    pub count: u32,
    /// Sorted by (from, to).
    pub pairs: Vec<Bigram>,
}

/// Occurrence counts of ordered bigrams across a corpus.
///
/// Every stored count is at least 1; absent pairs are implicitly 0.
#[derive(Debug, Clone, Default)]
pub struct BigramCounts {
    counts: HashMap<Bigram, u32>,
}

impl BigramCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count adjacent pairs within each sentence. Pairs never span a sentence
    /// boundary, and sentences shorter than two tokens contribute nothing.
    pub fn from_sentences<S>(sentences: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<[String]>,
    {
        let mut counts: HashMap<Bigram, u32> = HashMap::new();
        let mut sentence_count = 0usize;

        for sentence in sentences {
            sentence_count += 1;
            for pair in sentence.as_ref().windows(2) {
                let total = counts
                    .entry(Bigram::new(pair[0].as_str(), pair[1].as_str()))
                    .or_insert(0);
                *total = total.saturating_add(1);
            }
        }

        log::debug!(
            "counted {} distinct bigrams over {} sentences",
            counts.len(),
            sentence_count
        );
        Self { counts }
    }

    /// Build from explicit (from, to, count) triples. Zero counts are skipped,
    /// repeated pairs accumulate and saturate at `u32::MAX`.
    pub fn from_counts<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, u32)>,
        S: Into<String>,
    {
        let mut counts: HashMap<Bigram, u32> = HashMap::new();
        for (from, to, count) in entries {
            if count == 0 {
                continue;
            }
            let total = counts.entry(Bigram::new(from, to)).or_insert(0);
            *total = total.saturating_add(count);
        }
        Self { counts }
    }

    /// Occurrence count of `from → to`, 0 when never observed.
    pub fn get(&self, from: &str, to: &str) -> u32 {
        // HashMap<Bigram, _> can't be probed with borrowed halves, so build the key.
        self.counts
            .get(&Bigram::new(from, to))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Unordered (from, to, count) triples.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.counts
            .iter()
            .map(|(b, &c)| (b.from.as_str(), b.to.as_str(), c))
    }

    /// (from, to, count) triples ordered by (from, to).
    pub fn sorted(&self) -> Vec<(&str, &str, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        entries
    }

    /// Group bigrams into tiers by count, highest count first.
    pub fn rank_tiers(&self) -> Vec<BigramTier> {
        let mut buckets: HashMap<u32, Vec<Bigram>> = HashMap::new();
        for (bigram, &count) in &self.counts {
            buckets.entry(count).or_default().push(bigram.clone());
        }

        let mut tiers: Vec<BigramTier> = buckets
            .into_iter()
            .map(|(count, mut pairs)| {
                pairs.sort_unstable();
                BigramTier { count, pairs }
            })
            .collect();
        tiers.sort_unstable_by(|a, b| b.count.cmp(&a.count));
        tiers
    }

    /// The `k`-th frequency tier (1-based). None when `k` is 0 or past the last tier.
    pub fn rank(&self, k: usize) -> Option<BigramTier> {
        if k == 0 {
            return None;
        }
        self.rank_tiers().into_iter().nth(k - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(lines: &[&str]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|l| l.split_whitespace().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_counts_adjacent_pairs() {
        let bc = BigramCounts::from_sentences(sentences(&["a b c", "a b"]));
        assert_eq!(bc.len(), 2);
        assert_eq!(bc.get("a", "b"), 2);
        assert_eq!(bc.get("b", "c"), 1);
        assert_eq!(bc.get("a", "c"), 0);
    }

    #[test]
    fn test_direction_matters() {
        let bc = BigramCounts::from_sentences(sentences(&["a b", "b a"]));
        assert_eq!(bc.get("a", "b"), 1);
        assert_eq!(bc.get("b", "a"), 1);
    }

    #[test]
    fn test_no_pairs_across_sentences() {
        let bc = BigramCounts::from_sentences(sentences(&["a b", "c d"]));
        assert_eq!(bc.get("b", "c"), 0);
        assert_eq!(bc.len(), 2);
    }

    #[test]
    fn test_short_sentences_contribute_nothing() {
        let bc = BigramCounts::from_sentences(sentences(&["a", "", "b"]));
        assert!(bc.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let bc = BigramCounts::from_sentences(Vec::<Vec<String>>::new());
        assert!(bc.is_empty());
        assert!(bc.rank_tiers().is_empty());
    }

    #[test]
    fn test_repeated_word_pair() {
        let bc = BigramCounts::from_sentences(sentences(&["the the the"]));
        assert_eq!(bc.get("the", "the"), 2);
    }

    #[test]
    fn test_from_counts_skips_zero() {
        let bc = BigramCounts::from_counts(vec![("a", "b", 0), ("a", "c", 2), ("a", "c", 1)]);
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.get("a", "c"), 3);
    }

    #[test]
    fn test_from_counts_saturates() {
        let bc = BigramCounts::from_counts(vec![("a", "b", u32::MAX), ("a", "b", 1)]);
        assert_eq!(bc.get("a", "b"), u32::MAX);
        assert_eq!(bc.rank(1).map(|t| t.count), Some(u32::MAX));
    }

    #[test]
    fn test_sorted_order() {
        let bc = BigramCounts::from_counts(vec![("b", "a", 1), ("a", "c", 1), ("a", "b", 4)]);
        let sorted = bc.sorted();
        assert_eq!(sorted, vec![("a", "b", 4), ("a", "c", 1), ("b", "a", 1)]);
    }

    #[test]
    fn test_rank_tiers() {
        let bc = BigramCounts::from_counts(vec![
            ("x", "y", 3),
            ("b", "c", 1),
            ("a", "z", 1),
            ("m", "n", 3),
            ("p", "q", 2),
        ]);
        let tiers = bc.rank_tiers();
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].count, 3);
        assert_eq!(tiers[0].pairs, vec![Bigram::new("m", "n"), Bigram::new("x", "y")]);
        assert_eq!(tiers[2].count, 1);
        assert_eq!(tiers[2].pairs, vec![Bigram::new("a", "z"), Bigram::new("b", "c")]);
    }

    #[test]
    fn test_rank_out_of_range() {
        let bc = BigramCounts::from_counts(vec![("a", "b", 1)]);
        assert!(bc.rank(0).is_none());
        assert!(bc.rank(2).is_none());
        assert_eq!(bc.rank(1).map(|t| t.count), Some(1));
    }

    #[test]
    fn test_display_pair() {
        assert_eq!(Bigram::new("desert", "power").to_string(), "desert power");
    }
}
