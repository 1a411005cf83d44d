//! Command-line probe for `notegenius_core`.
//!
//! # Responsibility
//! - Summarize or measure a `.txt` file through the same dashboard flow the
//!   UI uses (import, save, request summary, apply outcome).
//! - Keep output plain text for quick local checks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use notegenius_core::{
    analyze, core_version, import_text_file, init_logging_from_config, CoreConfig, FixedDelay,
    NoteDraft, NoteStats, RandomDelay, Session,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "notegenius", version, about = "Heuristic note summaries")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute log directory; overrides the config file
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the generated summary of a .txt file
    Summarize {
        file: PathBuf,

        /// Wait the configured "analyzing" delay before generating
        #[arg(long)]
        simulate_delay: bool,
    },
    /// Print word count, reading time and summary bracket of a .txt file
    Stats { file: PathBuf },
    /// Print the core version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    init_logging_from_config(&config)
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;

    match cli.command {
        Command::Summarize {
            file,
            simulate_delay,
        } => summarize(&file, simulate_delay, &config),
        Command::Stats { file } => stats(&file),
        Command::Version => {
            println!("notegenius_core version={}", core_version());
            Ok(())
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<CoreConfig> {
    let mut config = match &cli.config {
        Some(path) => CoreConfig::load(path)
            .with_context(|| format!("failed to load config `{}`", path.display()))?,
        None => CoreConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    Ok(config)
}

fn summarize(file: &Path, simulate_delay: bool, config: &CoreConfig) -> Result<()> {
    let imported = import_text_file(file)?;
    let mut draft = NoteDraft::default();
    draft.apply_import(imported);

    let mut session = Session::signed_out();
    let dashboard = session.login("", "cli");
    dashboard.save_draft(&draft)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build tokio runtime")?;
    let note = runtime.block_on(async {
        let job = if simulate_delay {
            dashboard.request_summary(&mut RandomDelay::from_config(&config.summary_delay))?
        } else {
            dashboard.request_summary(&mut FixedDelay::zero())?
        };
        info!(
            "event=cli_summarize module=cli status=pending delay_ms={}",
            job.delay().as_millis()
        );
        Ok::<_, anyhow::Error>(dashboard.finish_summary(job).await?)
    })?;

    let note = note.context("summary job finished without a summary")?;
    if let Some(summary) = note.summary {
        println!("{summary}");
    }
    Ok(())
}

fn stats(file: &Path) -> Result<()> {
    let imported = import_text_file(file)?;
    let stats = NoteStats::from_content(&imported.content);
    let analysis = analyze(&imported.content);

    println!("title: {}", imported.title_hint);
    println!("words: {}", stats.word_count);
    println!("reading_minutes: {}", stats.reading_minutes);
    println!("bracket: {}", analysis.bracket.as_str());
    println!("keywords: {}", analysis.key_words.join(", "));
    Ok(())
}
