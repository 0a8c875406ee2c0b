//! Run settings: built-in defaults, optionally overlaid by a JSON config
//! file, then by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use wordgraph_core::check_hop_count;

use crate::error::{CliError, Result};

/// Which part of the pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Everything below, in order.
    All,
    /// Word frequency CSVs and top tiers.
    Wf,
    /// Bigram co-occurrence CSV and rank tier.
    Co,
    /// Shortest path and exact-hop queries.
    Graph,
    /// Greedy sentence generation.
    Gen,
}

impl Task {
    /// Whether running `self` includes `step`.
    pub fn includes(self, step: Task) -> bool {
        self == Task::All || self == step
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Input text file, one sentence per line.
    pub input: PathBuf,
    /// Directory for CSV reports.
    pub out_dir: PathBuf,
    pub task: Task,
    /// Number of frequency tiers to print (wf), or the bigram rank to show (co).
    pub tier: usize,
    /// Start word for graph queries and generation.
    pub start: String,
    /// Target word for the shortest path query.
    pub target: String,
    /// Exact hop distance for the neighbor query. Signed so negative input
    /// can be reported instead of rejected by the parser.
    pub hops: i64,
    /// Generated sentence length.
    pub len: usize,
    /// Run invariant checks after the tasks.
    pub check: bool,
    /// Emit results as JSON lines instead of text.
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Resources/book.txt"),
            out_dir: PathBuf::from("OutputFiles"),
            task: Task::All,
            tier: 3,
            start: "paul".to_string(),
            target: "arrakis".to_string(),
            hops: 1,
            len: 6,
            check: false,
            json: false,
        }
    }
}

/// Command-line overrides. Every field left unset keeps the config/default value.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Input text file
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Output directory for CSV reports
    #[arg(short, long = "out")]
    pub out_dir: Option<PathBuf>,
    /// Task to run
    #[arg(short, long, value_enum)]
    pub task: Option<Task>,
    /// Frequency tiers to print
    #[arg(short = 'k', long)]
    pub tier: Option<usize>,
    /// Start word for graph queries and generation
    #[arg(long)]
    pub start: Option<String>,
    /// Target word for the shortest path
    #[arg(long)]
    pub target: Option<String>,
    /// Exact hop distance for the neighbor query
    #[arg(long, allow_negative_numbers = true)]
    pub hops: Option<i64>,
    /// Generated sentence length
    #[arg(long)]
    pub len: Option<usize>,
    /// Run invariant checks after the tasks
    #[arg(long)]
    pub check: bool,
    /// Emit JSON lines instead of text
    #[arg(long)]
    pub json: bool,
}

impl Settings {
    /// Read settings from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then `config` if given, then `overrides`. Validates the result.
    pub fn resolve(config: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut settings = match config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply(overrides);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply(&mut self, o: &Overrides) {
        if let Some(v) = &o.input {
            self.input = v.clone();
        }
        if let Some(v) = &o.out_dir {
            self.out_dir = v.clone();
        }
        if let Some(v) = o.task {
            self.task = v;
        }
        if let Some(v) = o.tier {
            self.tier = v;
        }
        if let Some(v) = &o.start {
            self.start = v.clone();
        }
        if let Some(v) = &o.target {
            self.target = v.clone();
        }
        if let Some(v) = o.hops {
            self.hops = v;
        }
        if let Some(v) = o.len {
            self.len = v;
        }
        self.check |= o.check;
        self.json |= o.json;
    }

    /// Clamp tier and length to at least 1 and lowercase the query words to
    /// match the tokenizer. The hop count is checked by [`Settings::hop_count`]
    /// when the hop query runs, so a bad value only fails that query.
    pub fn validate(&mut self) -> Result<()> {
        self.tier = self.tier.max(1);
        self.len = self.len.max(1);
        self.start = self.start.to_lowercase();
        self.target = self.target.to_lowercase();
        Ok(())
    }

    /// The hop count, or [`QueryError::InvalidHopCount`] when negative.
    ///
    /// [`QueryError::InvalidHopCount`]: wordgraph_core::QueryError::InvalidHopCount
    pub fn hop_count(&self) -> Result<u32> {
        Ok(check_hop_count(self.hops)?)
    }
}
