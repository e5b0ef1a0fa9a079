//! Readability command — Flesch Reading Ease scoring.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;

use draftscope_core::readability::{Band, score_readability};
use draftscope_core::text::tokenize;

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// Draft file to score.
    pub file: Utf8PathBuf,
}

/// Score readability of a draft file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input_file(&args.file, max_input)?;
    let tokens = tokenize(&content);
    let report = score_readability(&tokens);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let band = match report.band {
        Band::VeryEasy | Band::Easy | Band::FairlyEasy => report.band.to_string().green().to_string(),
        Band::Standard => report.band.to_string().yellow().to_string(),
        _ => report.band.to_string().red().to_string(),
    };
    println!("{}", args.file.bold());
    println!(
        "  Flesch {:.1} ({band}), {} syllables over {} words",
        report.flesch_score,
        report.syllable_count,
        tokens.words.len(),
    );

    Ok(())
}
