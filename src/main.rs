use std::path::{Path, PathBuf};

use anyhow::Context;
use character_extract::titles::TitleCategory;
use character_extract::{
    CharacterCandidate, ExtractOptions, Stage, config, decompose, extract_characters_from_text,
    fallback, input, retain_min_mentions,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "character_extract",
    about = "Find the characters named in a manuscript"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Extract character candidates from a text → JSON on stdout
    Extract {
        /// Text file to analyse ("-" or omitted for stdin)
        input: Option<PathBuf>,
        /// JSON options record, e.g. {"frequencyAnalysis": false}
        #[arg(long)]
        options: Option<PathBuf>,
        /// Switch a stage off, e.g. --disable frequency-analysis (repeatable)
        #[arg(long = "disable", value_name = "STAGE")]
        disabled: Vec<Stage>,
        /// Drop candidates mentioned fewer times than this
        #[arg(long, default_value_t = 1)]
        min_mentions: usize,
        /// Use the reduced fallback engine
        #[arg(long)]
        fallback: bool,
    },
    /// Split names into title / first / last
    Split {
        /// Names to split, e.g. "Captain John Smith"
        #[arg(required = true)]
        names: Vec<String>,
        /// Ignore titles and use the plain first/last parse
        #[arg(long)]
        no_titles: bool,
    },
    /// Print the title taxonomy
    Titles,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Extract {
            input,
            options,
            disabled,
            min_mentions,
            fallback,
        }) => run_extract(
            input.as_deref(),
            options.as_deref(),
            &disabled,
            min_mentions,
            fallback,
        ),
        Some(Command::Split { names, no_titles }) => run_split(&names, !no_titles),
        Some(Command::Titles) => {
            run_titles();
            Ok(())
        }
        // Default: extract from stdin with every stage on
        None => run_extract(None, None, &[], 1, false),
    }
}

fn print_json<T: serde::Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data).context("JSON serialization failed")?;
    println!("{json}");
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  EXTRACT MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_extract(
    input_path: Option<&Path>,
    options_path: Option<&Path>,
    disabled: &[Stage],
    min_mentions: usize,
    use_fallback: bool,
) -> anyhow::Result<()> {
    let options = match options_path {
        Some(path) => config::load_options(path)?,
        None => ExtractOptions::default(),
    };
    let options = config::disable_stages(options, disabled);

    let text = input::read_text(input_path)?;
    info!(chars = text.chars().count(), fallback = use_fallback, "extracting");

    let candidates = if use_fallback {
        fallback::extract_characters(&text, &options)
    } else {
        extract_characters_from_text(&text, &options)
    };
    let found = candidates.len();
    let candidates = retain_min_mentions(candidates, min_mentions);

    print_summary(&options, found, &candidates, min_mentions);
    print_json(&candidates)
}

fn print_summary(
    options: &ExtractOptions,
    found: usize,
    candidates: &[CharacterCandidate],
    min_mentions: usize,
) {
    let off: Vec<&str> = Stage::ALL
        .iter()
        .filter(|s| !options.is_enabled(**s))
        .map(Stage::as_str)
        .collect();
    if !off.is_empty() {
        eprintln!("Disabled stages: {}", off.join(", "));
    }

    eprintln!(
        "Found {} candidates, {} with at least {} mention(s)",
        found,
        candidates.len(),
        min_mentions
    );

    eprintln!("\nTop candidates:");
    for c in candidates.iter().take(20) {
        let variants = if c.variants.is_empty() {
            String::new()
        } else {
            format!(" (also: {})", c.variants.join(", "))
        };
        eprintln!("  {} ×{}{}", c.full_name, c.mentions, variants);
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  SPLIT MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_split(names: &[String], title_detection: bool) -> anyhow::Result<()> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SplitResult<'a> {
        full_name: &'a str,
        #[serde(flatten)]
        parts: decompose::NameParts,
    }

    let results: Vec<SplitResult> = names
        .iter()
        .map(|name| SplitResult {
            full_name: name,
            parts: decompose::split_name(name, title_detection),
        })
        .collect();
    print_json(&results)
}

// ═══════════════════════════════════════════════════════════════════════
//  TITLES MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_titles() {
    for category in TitleCategory::LOOKUP_ORDER {
        let binding = if category.binds_first_name() {
            "first name"
        } else {
            "last name"
        };
        println!(
            "{} (single name binds to {}): {}",
            category.as_str(),
            binding,
            category.titles().join(", ")
        );
    }
}
