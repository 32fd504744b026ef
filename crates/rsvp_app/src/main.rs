//! Terminal RSVP reader: plays a text file back one word at a time, with
//! the recognition point aligned to a fixed column. Optionally routes the
//! text through the OpenRouter pipeline first.

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::LevelFilter;
use rsvp_core::{split_word, StaticSource, SwapPolicy, WordSource};
use rsvp_engine::{
    ContentProcessor, OpenRouterClient, ReaderSession, RonSettingsStore, SettingsStore,
};
use rsvp_logging::{rsvp_error, rsvp_info, rsvp_warn};

const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";
/// Column the ORP focus character is pinned to.
const FOCUS_COLUMN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProcessMode {
    Original,
    Extract,
    Summarize,
}

#[derive(Debug)]
struct CliArgs {
    path: PathBuf,
    wpm: Option<u32>,
    max_chars: Option<usize>,
    mode: ProcessMode,
    selection: Option<String>,
}

fn usage() -> String {
    "usage: rsvp <file> [--wpm N] [--max-chars N] [--extract | --summarize] [--select TEXT]"
        .to_string()
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut path = None;
    let mut wpm = None;
    let mut max_chars = None;
    let mut mode = ProcessMode::Original;
    let mut selection = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--wpm" => {
                let value = iter.next().ok_or_else(usage)?;
                wpm = Some(value.parse().map_err(|_| usage())?);
            }
            "--max-chars" => {
                let value = iter.next().ok_or_else(usage)?;
                max_chars = Some(value.parse().map_err(|_| usage())?);
            }
            "--extract" => mode = ProcessMode::Extract,
            "--summarize" => mode = ProcessMode::Summarize,
            "--select" => {
                selection = Some(iter.next().ok_or_else(usage)?.clone());
            }
            other if path.is_none() && !other.starts_with("--") => {
                path = Some(PathBuf::from(other));
            }
            _ => return Err(usage()),
        }
    }

    Ok(CliArgs {
        path: path.ok_or_else(usage)?,
        wpm,
        max_chars,
        mode,
        selection,
    })
}

fn settings_path() -> PathBuf {
    let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push("rsvp-reader");
    dir.join("settings.ron")
}

fn render_word(word: &str, progress: f64) {
    let parts = split_word(word);
    let pad = FOCUS_COLUMN.saturating_sub(parts.before.chars().count());
    print!(
        "\r{:pad$}{}{}{}{:<24}{:>5.1}%",
        "", parts.before, parts.focus, parts.after, "", progress
    );
    let _ = io::stdout().flush();
}

/// Runs the optional extract/summarize pass. A failure is reported and the
/// session keeps playing the original words.
async fn process_content(
    session: &mut ReaderSession,
    mode: ProcessMode,
    page_text: &str,
) -> Result<(), Box<dyn Error>> {
    let api_key = env::var("OPENROUTER_API_KEY")
        .map_err(|_| "OPENROUTER_API_KEY must be set for --extract/--summarize")?;
    let model = env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let provider = env::var("OPENROUTER_PROVIDER").ok();

    let client = Arc::new(OpenRouterClient::new(api_key)?);
    let mut processor = ContentProcessor::new(client, model.as_str(), provider, page_text);

    rsvp_info!("requesting {:?} rendition from {}", mode, model);
    let result = match mode {
        ProcessMode::Extract => processor.extract_content().await,
        ProcessMode::Summarize => processor.summarize_content().await,
        ProcessMode::Original => return Ok(()),
    };

    match result {
        Ok(words) => session.set_words(words, SwapPolicy::Resume),
        Err(err) => {
            rsvp_warn!(
                "processing failed ({}); reading the original text instead",
                processor.error().unwrap_or(&err.to_string())
            );
        }
    }
    Ok(())
}

async fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let page_text = fs::read_to_string(&args.path)
        .map_err(|err| format!("cannot read {}: {err}", args.path.display()))?;

    let mut source = StaticSource::new(page_text.clone());
    if let Some(selection) = &args.selection {
        source = source.with_selection(selection.clone());
    }
    let raw_words = source
        .selection_words()
        .unwrap_or_else(|| source.page_words());

    let store: Arc<dyn SettingsStore> = Arc::new(RonSettingsStore::new(settings_path()));
    let (mut session, mut ticks) = ReaderSession::start(raw_words, store).await;

    if let Some(wpm) = args.wpm {
        session.set_wpm(wpm).await;
    }
    if let Some(max_chars) = args.max_chars {
        session.set_max_chars(max_chars).await;
    }

    if args.mode != ProcessMode::Original {
        process_content(&mut session, args.mode, &page_text).await?;
    }

    let view = session.view();
    rsvp_info!(
        "reading {} words at {} wpm",
        view.word_count,
        view.wpm
    );

    loop {
        let view = session.view();
        render_word(&view.current_word, view.progress);
        if view.is_paused {
            break;
        }
        if ticks.recv().await.is_none() {
            break;
        }
        session.tick();
        if session.view().is_paused {
            // Terminal wrap: the whole text has been shown.
            break;
        }
    }
    println!();

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    rsvp_logging::initialize_terminal(LevelFilter::Info);

    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(parsed).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            rsvp_error!("{err}");
            ExitCode::FAILURE
        }
    }
}
