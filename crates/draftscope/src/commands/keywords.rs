//! Keywords command — keyword usage metrics.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;

use draftscope_core::keywords::analyze_keywords;
use draftscope_core::text::tokenize;

use super::read_input_file;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Draft file to analyze.
    pub file: Utf8PathBuf,

    /// Target keyword phrase.
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Related keyword phrases, comma-separated.
    #[arg(long, value_name = "PHRASES")]
    pub related: Option<String>,
}

/// Report keyword usage for a draft file.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input_file(&args.file, max_input)?;
    let tokens = tokenize(&content);

    let related: Vec<String> = args
        .related
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect();
    let report = analyze_keywords(&tokens, args.keyword.as_deref(), &related);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    if report.target_keyword.is_empty() {
        println!("  {} none supplied", "Target:".cyan());
    } else {
        println!(
            "  {} \"{}\" x{} ({:.2}% density)",
            "Target:".cyan(),
            report.target_keyword,
            report.target_count,
            report.target_density_percent,
        );
    }
    for rc in &report.related_counts {
        println!("  {} \"{}\" x{}", "Related:".cyan(), rc.keyword, rc.count);
    }
    if !report.top_terms.is_empty() {
        println!("  {}", "Top terms:".cyan());
        for term in &report.top_terms {
            println!("    {:>4}  {}", term.count, term.term);
        }
    }

    Ok(())
}
