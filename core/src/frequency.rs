use std::collections::HashMap;

/// Words sharing one occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTier {
    pub count: u32,
    /// Ascending.
    pub words: Vec<String>,
}

/// Occurrence count of every word in a corpus.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    counts: HashMap<String, u32>,
}

impl WordFrequency {
    pub fn from_sentences<S>(sentences: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<[String]>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for sentence in sentences {
            for word in sentence.as_ref() {
                *counts.entry(word.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Unordered (word, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// (word, count) pairs ascending by word.
    pub fn sorted_words(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Frequency tiers, highest count first.
    pub fn tiers(&self) -> Vec<WordTier> {
        let mut buckets: HashMap<u32, Vec<String>> = HashMap::new();
        for (word, &count) in &self.counts {
            buckets.entry(count).or_default().push(word.clone());
        }

        let mut tiers: Vec<WordTier> = buckets
            .into_iter()
            .map(|(count, mut words)| {
                words.sort_unstable();
                WordTier { count, words }
            })
            .collect();
        tiers.sort_unstable_by(|a, b| b.count.cmp(&a.count));
        tiers
    }

    /// The `k`-th tier (1-based).
    pub fn tier(&self, k: usize) -> Option<WordTier> {
        if k == 0 {
            return None;
        }
        self.tiers().into_iter().nth(k - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(lines: &[&str]) -> WordFrequency {
        let sentences: Vec<Vec<String>> = lines
            .iter()
            .map(|l| l.split_whitespace().map(String::from).collect())
            .collect();
        WordFrequency::from_sentences(&sentences)
    }

    #[test]
    fn test_counts_across_sentences() {
        let f = freq(&["the spice", "the worm", "spice"]);
        assert_eq!(f.get("the"), 2);
        assert_eq!(f.get("spice"), 2);
        assert_eq!(f.get("worm"), 1);
        assert_eq!(f.get("sand"), 0);
        assert_eq!(f.len(), 3);
        assert_eq!(f.total(), 5);
    }

    #[test]
    fn test_single_word_sentences_count() {
        let f = freq(&["paul", "paul"]);
        assert_eq!(f.get("paul"), 2);
    }

    #[test]
    fn test_tiers() {
        let f = freq(&["c b a", "b a", "a d"]);
        let tiers = f.tiers();
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0], WordTier { count: 3, words: vec!["a".into()] });
        assert_eq!(tiers[1], WordTier { count: 2, words: vec!["b".into()] });
        assert_eq!(tiers[2].words, vec!["c".to_string(), "d".to_string()]);
        assert_eq!(f.tier(3), Some(tiers[2].clone()));
        assert!(f.tier(0).is_none());
        assert!(f.tier(4).is_none());
    }

    #[test]
    fn test_sorted_words() {
        let f = freq(&["zeta alpha", "mu alpha"]);
        assert_eq!(f.sorted_words(), vec![("alpha", 2), ("mu", 1), ("zeta", 1)]);
    }

    #[test]
    fn test_empty() {
        let f = freq(&[]);
        assert!(f.is_empty());
        assert!(f.tiers().is_empty());
    }
}
