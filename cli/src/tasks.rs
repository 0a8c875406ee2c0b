use std::io::Write;
use std::time::Instant;

use wordgraph_core::{generate_sentence, WordFrequency};

use crate::error::Result;
use crate::neighborhood::hops_report;
use crate::output::{Report, Reporter};
use crate::path::path_report;
use crate::rank::{bigram_rank, word_tiers};
use crate::report;
use crate::settings::{Settings, Task};
use crate::state::GraphState;

/// Run every task selected by `settings.task`, in order.
///
/// A failing task is logged and does not stop the others. Returns the number
/// of tasks that failed.
pub fn run_selected<W: Write>(
    state: &GraphState,
    settings: &Settings,
    out: &mut Reporter<W>,
) -> usize {
    let steps: [(Task, &str, TaskFn<W>); 4] = [
        (Task::Wf, "Task 1 – Word Frequency", run_word_frequency),
        (Task::Co, "Task 2 – Co-occurrence", run_cooccurrence),
        (Task::Graph, "Task 3 – Word Graph", run_word_graph),
        (Task::Gen, "Task 4 – Generator", run_generator),
    ];

    let mut failures = 0;
    for (task, title, f) in steps {
        if !settings.task.includes(task) {
            continue;
        }
        if !run(title, out, |out| f(state, settings, out)) {
            failures += 1;
        }
    }
    failures
}

type TaskFn<W> = fn(&GraphState, &Settings, &mut Reporter<W>) -> Result<()>;

/// Run one titled step with timing. Returns false if it failed.
pub fn run<W: Write>(
    title: &str,
    out: &mut Reporter<W>,
    f: impl FnOnce(&mut Reporter<W>) -> Result<()>,
) -> bool {
    let t = Instant::now();
    if let Err(e) = out.banner(title) {
        log::warn!("could not write banner: {}", e);
    }
    let result = f(out);
    if let Err(ref e) = result {
        log::error!("ERROR in {}: {}", title, e);
    }
    log::info!(
        "{} finished in {:.0} ms",
        title,
        t.elapsed().as_secs_f64() * 1000.0
    );
    result.is_ok()
}

pub fn run_word_frequency<W: Write>(
    state: &GraphState,
    settings: &Settings,
    out: &mut Reporter<W>,
) -> Result<()> {
    let t = Instant::now();
    let freq = WordFrequency::from_sentences(state.corpus.sentences());
    log::info!(
        "Build word counts finished in {:.0} ms",
        t.elapsed().as_secs_f64() * 1000.0
    );

    for written in [
        report::write_word_frequency(&settings.out_dir, &freq),
        report::write_sorted_words(&settings.out_dir, &freq),
    ] {
        if let Err(e) = written {
            log::warn!("writing word-frequency CSV failed: {}", e);
        }
    }

    for tier in word_tiers(&freq, settings.tier) {
        out.emit(&tier)?;
    }
    Ok(())
}

pub fn run_cooccurrence<W: Write>(
    state: &GraphState,
    settings: &Settings,
    out: &mut Reporter<W>,
) -> Result<()> {
    if let Err(e) = report::write_bigrams(&settings.out_dir, &state.bigrams) {
        log::warn!("writing bigram CSV failed: {}", e);
    }
    out.emit(&bigram_rank(&state.bigrams, settings.tier))
}

pub fn run_word_graph<W: Write>(
    state: &GraphState,
    settings: &Settings,
    out: &mut Reporter<W>,
) -> Result<()> {
    let (a, b) = (settings.start.as_str(), settings.target.as_str());

    if !state.corpus.contains(a) {
        log::warn!("start word '{}' not found in corpus.", a);
        return Ok(());
    }
    if !state.corpus.contains(b) {
        log::warn!("target word '{}' not found in corpus.", b);
        return Ok(());
    }

    out.emit(&path_report(state, a, b))?;
    out.emit(&hops_report(state, a, settings.hop_count()?))
}

pub fn run_generator<W: Write>(
    state: &GraphState,
    settings: &Settings,
    out: &mut Reporter<W>,
) -> Result<()> {
    let sentence = generate_sentence(&state.graph, &settings.start, settings.len);
    out.emit(&Report::Sentence {
        complete: sentence.complete,
        words: sentence.words,
    })
}
