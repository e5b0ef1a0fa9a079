//! Analyze command — full content analysis.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use draftscope_core::analysis::{ContentInput, run_analysis_with};
use draftscope_core::config::Config;

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Draft file to analyze.
    pub file: Utf8PathBuf,

    /// Target keyword phrase.
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Related keyword phrases, comma-separated.
    #[arg(long, value_name = "PHRASES")]
    pub related: Option<String>,

    /// Meta title to check for length.
    #[arg(long)]
    pub meta_title: Option<String>,

    /// Meta description to check for length.
    #[arg(long)]
    pub meta_description: Option<String>,
}

/// Run the full analysis on a draft file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, keyword = ?args.keyword, "executing analyze command");

    let content = read_input_file(&args.file, max_input)?;
    let input = ContentInput {
        content,
        target_keyword: args.keyword.clone(),
        related_keywords: args.related.clone(),
        meta_title: args.meta_title.clone(),
        meta_description: args.meta_description.clone(),
    };

    let report = run_analysis_with(&input, &config.thresholds())
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — section by section
    println!("{}", args.file.bold());

    let s = &report.stats;
    println!(
        "\n  {} {} words, {} sentences, {} paragraphs (avg {:.1} words/sentence)",
        "Stats:".cyan(),
        s.word_count,
        s.sentence_count,
        s.paragraph_count,
        s.avg_words_per_sentence,
    );

    let r = &report.readability;
    println!(
        "\n  {} Flesch {:.1} ({})",
        "Readability:".cyan(),
        r.flesch_score,
        r.band,
    );

    let h = &report.headings;
    println!(
        "\n  {} {} headings, H1: {}",
        "Headings:".cyan(),
        h.items.len(),
        if h.multiple_h1 {
            "multiple".yellow().to_string()
        } else if h.has_h1 {
            "yes".green().to_string()
        } else {
            "none".red().to_string()
        },
    );
    for heading in &h.items {
        println!(
            "    {}{} {}",
            "  ".repeat(usize::from(heading.level.saturating_sub(1))),
            format!("H{}", heading.level).dimmed(),
            heading.text,
        );
    }

    let k = &report.keywords;
    if !k.target_keyword.is_empty() {
        println!(
            "\n  {} \"{}\" x{} ({:.2}% density)",
            "Keyword:".cyan(),
            k.target_keyword,
            k.target_count,
            k.target_density_percent,
        );
    }
    if !k.related_counts.is_empty() {
        let related: Vec<String> = k
            .related_counts
            .iter()
            .map(|rc| format!("\"{}\" x{}", rc.keyword, rc.count))
            .collect();
        println!("\n  {} {}", "Related:".cyan(), related.join(", "));
    }
    if !k.top_terms.is_empty() {
        let terms: Vec<String> = k
            .top_terms
            .iter()
            .take(5)
            .map(|t| format!("{} ({})", t.term, t.count))
            .collect();
        println!("\n  {} {}", "Top terms:".cyan(), terms.join(", "));
    }

    if report.suggestions.is_empty() {
        println!("\n  {} all checks passed", "Suggestions:".green());
    } else {
        println!("\n  {}", "Suggestions:".yellow());
        for suggestion in &report.suggestions {
            println!("    - {suggestion}");
        }
    }

    // Informational only: keyword placement in the supplied meta fields.
    for (label, field) in [
        ("meta title", args.meta_title.as_deref()),
        ("meta description", args.meta_description.as_deref()),
    ] {
        if let Some(text) = field
            && !k.target_keyword.is_empty()
            && !text.to_lowercase().contains(&k.target_keyword)
        {
            println!(
                "\n  {} consider including \"{}\" in the {label}",
                "Note:".dimmed(),
                k.target_keyword,
            );
        }
    }

    Ok(())
}
