//! Headings command — outline structure check.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;

use draftscope_core::headings::parse_headings;
use draftscope_core::text::tokenize;

use super::read_input_file;

/// Arguments for the `headings` subcommand.
#[derive(Args, Debug)]
pub struct HeadingsArgs {
    /// Draft file to check.
    pub file: Utf8PathBuf,
}

/// Report the heading outline of a draft file.
#[instrument(name = "cmd_headings", skip_all, fields(file = %args.file))]
pub fn cmd_headings(
    args: HeadingsArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input_file(&args.file, max_input)?;
    let report = parse_headings(&tokenize(&content));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    if report.items.is_empty() {
        println!("  no headings found");
        return Ok(());
    }

    for heading in &report.items {
        println!(
            "  {}{} {}",
            "  ".repeat(usize::from(heading.level.saturating_sub(1))),
            format!("H{}", heading.level).dimmed(),
            heading.text,
        );
    }
    if report.multiple_h1 {
        println!("\n  {} more than one H1", "warning:".yellow());
    } else if !report.has_h1 {
        println!("\n  {} no H1 heading", "warning:".yellow());
    }

    Ok(())
}
