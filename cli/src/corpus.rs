use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CliError, Result};

/// Lowercase a line and split it into `a`–`z` tokens.
///
/// Any character outside `a`–`z` after lowercasing acts as a separator.
pub fn clean_to_tokens(line: &str) -> Vec<String> {
    let cleaned: String = line
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_ascii_lowercase() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Tokenized sentences, one per non-blank input line.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<Vec<String>>,
    vocab: BTreeSet<String>,
}

impl Corpus {
    /// Read and tokenize a text file. O(total characters).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::MissingInput(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|e| CliError::io(path, e))?;
        let reader = BufReader::new(file);

        let mut corpus = Self::default();
        for line in reader.lines() {
            let line = line.map_err(|e| CliError::io(path, e))?;
            corpus.push_line(&line);
        }

        log::debug!(
            "loaded {}: {} sentences, {} distinct words",
            path.display(),
            corpus.sentences.len(),
            corpus.vocab.len()
        );
        Ok(corpus)
    }

    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut corpus = Self::default();
        for line in lines {
            corpus.push_line(line);
        }
        corpus
    }

    fn push_line(&mut self, line: &str) {
        let tokens = clean_to_tokens(line);
        if tokens.is_empty() {
            return;
        }
        self.vocab.extend(tokens.iter().cloned());
        self.sentences.push(tokens);
    }

    pub fn sentences(&self) -> &[Vec<String>] {
        &self.sentences
    }

    /// Distinct words, ascending.
    pub fn vocab(&self) -> &BTreeSet<String> {
        &self.vocab
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vocab.contains(word)
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}
