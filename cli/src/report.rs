//! CSV report files. Each file is written to a temp file in the target
//! directory and renamed into place.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use wordgraph_core::{BigramCounts, WordFrequency};

use crate::error::{CliError, Result};

pub const WORD_FREQUENCY_CSV: &str = "word_frequency.csv";
pub const SORTED_WORDS_CSV: &str = "sorted_words.csv";
pub const BIGRAM_FREQUENCY_CSV: &str = "bigram_frequency.csv";

/// `word,count` rows, highest count first, ties by word.
pub fn write_word_frequency(out_dir: &Path, freq: &WordFrequency) -> Result<PathBuf> {
    let rows = freq.tiers().into_iter().flat_map(|tier| {
        let count = tier.count;
        tier.words
            .into_iter()
            .map(move |w| format!("{},{}", w, count))
    });
    write_rows(&out_dir.join(WORD_FREQUENCY_CSV), rows)
}

/// `word,count` rows ordered by word.
pub fn write_sorted_words(out_dir: &Path, freq: &WordFrequency) -> Result<PathBuf> {
    let rows = freq
        .sorted_words()
        .into_iter()
        .map(|(w, c)| format!("{},{}", w, c));
    write_rows(&out_dir.join(SORTED_WORDS_CSV), rows)
}

/// `from,to,count` rows ordered by (from, to). No header.
pub fn write_bigrams(out_dir: &Path, bigrams: &BigramCounts) -> Result<PathBuf> {
    let rows = bigrams
        .sorted()
        .into_iter()
        .map(|(from, to, c)| format!("{},{},{}", from, to, c));
    write_rows(&out_dir.join(BIGRAM_FREQUENCY_CSV), rows)
}

fn write_rows(path: &Path, rows: impl Iterator<Item = String>) -> Result<PathBuf> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;

    let temp_file = NamedTempFile::new_in(parent).map_err(|e| CliError::io(parent, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        for row in rows {
            writeln!(writer, "{}", row).map_err(|e| CliError::io(path, e))?;
        }
        writer.flush().map_err(|e| CliError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| CliError::io(path, e.error))?;
    log::debug!("wrote {}", path.display());
    Ok(path.to_path_buf())
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
    fn test_bigram_csv() {
        let dir = tempfile::tempdir().unwrap();
        let bc = BigramCounts::from_sentences(sentences(&["b a", "a b", "a b"]));
        let path = write_bigrams(dir.path(), &bc).unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text, "a,b,2\nb,a,1\n");
    }

    #[test]
    fn test_word_csvs() {
        let dir = tempfile::tempdir().unwrap();
        let freq = WordFrequency::from_sentences(sentences(&["b a c", "c"]));

        let by_count = fs::read_to_string(write_word_frequency(dir.path(), &freq).unwrap()).unwrap();
        assert_eq!(by_count, "c,2\na,1\nb,1\n");

        let by_word = fs::read_to_string(write_sorted_words(dir.path(), &freq).unwrap()).unwrap();
        assert_eq!(by_word, "a,1\nb,1\nc,2\n");
    }

    #[test]
    fn test_creates_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports").join("run1");
        let bc = BigramCounts::from_counts(vec![("x", "y", 1)]);
        let path = write_bigrams(&nested, &bc).unwrap();
        assert!(path.is_file());
        assert_eq!(path, nested.join(BIGRAM_FREQUENCY_CSV));
    }

    #[test]
    fn test_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(BIGRAM_FREQUENCY_CSV), "stale\n").unwrap();
        let bc = BigramCounts::from_counts(vec![("x", "y", 3)]);
        let path = write_bigrams(dir.path(), &bc).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "x,y,3\n");
    }
}
