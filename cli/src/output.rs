//! Task results and how they are printed: human-readable text by default,
//! one JSON object per line with `--json`.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Status {
        source: Option<String>,
        sentences: usize,
        tokens: usize,
        vocabulary: usize,
        nodes: usize,
        edges: usize,
        memory_bytes: usize,
        load_time_ms: f64,
        build_time_ms: f64,
    },
    WordTier {
        rank: usize,
        count: u32,
        words: Vec<String>,
    },
    BigramTier {
        rank: usize,
        count: u32,
        pairs: Vec<String>,
    },
    ShortestPath {
        from: String,
        to: String,
        found: bool,
        cost: Option<f64>,
        hops: Option<usize>,
        path: Vec<String>,
    },
    WordsAtHops {
        from: String,
        hops: u32,
        count: usize,
        words: Vec<String>,
    },
    Sentence {
        complete: bool,
        words: Vec<String>,
    },
    Check {
        label: String,
        ok: bool,
    },
}

impl Report {
    pub fn render(&self) -> String {
        match self {
            Report::Status {
                source,
                sentences,
                tokens,
                vocabulary,
                nodes,
                edges,
                memory_bytes,
                ..
            } => format!(
                "Corpus {}: {} sentences, {} tokens, {} distinct words\nGraph: {} nodes, {} edges, ~{:.1} KB",
                source.as_deref().unwrap_or("<memory>"),
                sentences,
                tokens,
                vocabulary,
                nodes,
                edges,
                *memory_bytes as f64 / 1024.0
            ),
            Report::WordTier { rank, count, words } => format!(
                "Word Rank {}: {} word(s) with {} occurrence(s).\nWords include: {}",
                rank,
                words.len(),
                count,
                list(words)
            ),
            Report::BigramTier { rank, count, pairs } => format!(
                "Bigram Rank {}: {} pair(s) with {} occurrence(s).\nPairs include: {}",
                rank,
                pairs.len(),
                count,
                list(pairs)
            ),
            Report::ShortestPath {
                from,
                to,
                found: true,
                cost,
                hops,
                path,
            } => format!(
                "Shortest Path between '{}' and '{}' has total cost {:.6}, with {} hops.\nPath: {}",
                from,
                to,
                cost.unwrap_or(0.0),
                hops.unwrap_or(0),
                list(path)
            ),
            Report::ShortestPath { from, to, .. } => {
                format!("Shortest Path between '{}' and '{}' does not exist.", from, to)
            }
            Report::WordsAtHops {
                from,
                hops,
                count,
                words,
            } => format!(
                "Total number of nodes with {} hop(s) from '{}': {}\nWords: {}",
                hops,
                from,
                count,
                list(words)
            ),
            Report::Sentence { complete, words } => format!(
                "{} sentence with {} words is: {}",
                if *complete { "Complete" } else { "Incomplete" },
                words.len(),
                list(words)
            ),
            Report::Check { label, ok: true } => format!("[OK]   {}", label),
            Report::Check { label, ok: false } => format!("[WARN] {} – not satisfied", label),
        }
    }
}

/// `[a, b, c]`
pub fn list<S: AsRef<str>>(items: &[S]) -> String {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("[{}]", joined.join(", "))
}

/// Writes reports to a sink in text or JSON-lines form.
pub struct Reporter<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn emit(&mut self, report: &Report) -> Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, report)?;
            writeln!(self.out)?;
        } else {
            writeln!(self.out, "{}", report.render())?;
        }
        Ok(())
    }

    /// Section banner. Text mode only.
    pub fn banner(&mut self, title: &str) -> Result<()> {
        if !self.json {
            writeln!(self.out, "\n================ {} ================", title)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
