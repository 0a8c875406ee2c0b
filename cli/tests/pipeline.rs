use std::fs;
use std::io::Write;

use wordgraph_cli::check::{issue_count, self_check};
use wordgraph_cli::output::Reporter;
use wordgraph_cli::settings::{Overrides, Settings, Task};
use wordgraph_cli::state::GraphState;
use wordgraph_cli::tasks::run_selected;

const BOOK: &str = "\
Paul Atreides left Caladan for Arrakis.
The desert power of Arrakis is the spice.
Paul Atreides faced the gom jabbar.
The spice must flow.
Paul walked the desert.

The desert power grew.
";

#[test]
fn full_pipeline_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let book = dir.path().join("book.txt");
    let mut file = fs::File::create(&book).expect("create book");
    file.write_all(BOOK.as_bytes()).expect("write book");
    drop(file);

    let out_dir = dir.path().join("out");
    let overrides = Overrides {
        input: Some(book.clone()),
        out_dir: Some(out_dir.clone()),
        start: Some("Paul".into()),
        target: Some("Arrakis".into()),
        hops: Some(2),
        json: true,
        ..Default::default()
    };
    let settings = Settings::resolve(None, &overrides).expect("settings");
    assert_eq!(settings.task, Task::All);

    let state = GraphState::load(&settings.input).expect("load");
    assert_eq!(state.corpus.sentences().len(), 6);

    let mut out = Reporter::new(Vec::new(), settings.json);
    assert_eq!(run_selected(&state, &settings, &mut out), 0);

    let text = String::from_utf8(out.into_inner()).expect("utf8");
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();

    let path = lines
        .iter()
        .find(|v| v["kind"] == "shortest_path")
        .expect("path report");
    assert_eq!(path["found"], true);
    assert_eq!(path["path"][0], "paul");
    let words = path["path"].as_array().expect("path array");
    assert_eq!(words.last().and_then(|w| w.as_str()), Some("arrakis"));
    assert_eq!(path["hops"].as_u64(), Some(words.len() as u64 - 1));

    let hops = lines
        .iter()
        .find(|v| v["kind"] == "words_at_hops")
        .expect("hops report");
    assert_eq!(hops["hops"], 2);

    let sentence = lines
        .iter()
        .find(|v| v["kind"] == "sentence")
        .expect("sentence report");
    assert_eq!(sentence["words"][0], "paul");

    let bigrams = fs::read_to_string(out_dir.join("bigram_frequency.csv")).expect("bigram csv");
    assert!(bigrams.lines().any(|l| l == "desert,power,2"));
    assert!(bigrams.lines().any(|l| l == "paul,atreides,2"));
    assert!(bigrams.lines().any(|l| l == "gom,jabbar,1"));

    let reports = self_check(&state, &settings.start, &settings.target);
    assert_eq!(issue_count(&reports), 0);
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = GraphState::load(&dir.path().join("absent.txt"));
    assert!(result.is_err());
}
