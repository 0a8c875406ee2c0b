use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wordgraph_cli::check::{issue_count, self_check};
use wordgraph_cli::output::Reporter;
use wordgraph_cli::settings::{Overrides, Settings};
use wordgraph_cli::state::GraphState;
use wordgraph_cli::status::status_report;
use wordgraph_cli::tasks;

#[derive(Parser, Debug)]
#[command(name = "wordgraph")]
#[command(about = "Build a word co-occurrence graph from a text and query it")]
#[command(version)]
struct Cli {
    /// JSON settings file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.config.as_deref(), &cli.overrides)
        .context("invalid settings")?;
    log::debug!("settings: {:?}", settings);

    fs::create_dir_all(&settings.out_dir)
        .with_context(|| format!("cannot create output directory {}", settings.out_dir.display()))?;

    let state = GraphState::load(&settings.input).context("failed to load corpus")?;

    let stdout = io::stdout();
    let mut out = Reporter::new(stdout.lock(), settings.json);
    out.emit(&status_report(&state))?;

    let failures = tasks::run_selected(&state, &settings, &mut out);
    if failures > 0 {
        log::warn!("{} task(s) failed", failures);
    }

    if settings.check {
        tasks::run("Self-check", &mut out, |out| {
            let reports = self_check(&state, &settings.start, &settings.target);
            for r in &reports {
                out.emit(r)?;
            }
            match issue_count(&reports) {
                0 => log::info!("Self-check OK"),
                n => log::warn!("Self-check found {} issue(s)", n),
            }
            Ok(())
        });
    }

    Ok(())
}
