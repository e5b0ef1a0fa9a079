//! Analysis orchestration.
//!
//! Validates a [`ContentInput`] once, tokenizes once, fans the tokens
//! out into the four analyzers, runs the suggestion rules over their
//! combined output, and assembles the final [`AnalysisReport`].
//! Identical input always yields an identical report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::headings::{HeadingsReport, parse_headings};
use crate::keywords::{KeywordsReport, analyze_keywords};
use crate::readability::{ReadabilityReport, score_readability};
use crate::stats::{StatsReport, compute_stats};
use crate::suggestions::{RuleContext, Thresholds, evaluate_rules};
use crate::text::tokenize;

/// A draft plus optional SEO metadata, as submitted for analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ContentInput {
    /// The draft text. Must be non-empty after trimming.
    pub content: String,
    /// Target keyword phrase.
    pub target_keyword: Option<String>,
    /// Related keyword phrases, comma-separated as the user typed them.
    pub related_keywords: Option<String>,
    /// Meta title to check for length.
    pub meta_title: Option<String>,
    /// Meta description to check for length.
    pub meta_description: Option<String>,
}

impl ContentInput {
    /// A content-only input with no metadata.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Related keywords split on commas, blanks dropped, order kept.
    fn related_keyword_list(&self) -> Vec<String> {
        self.related_keywords
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|phrase| !phrase.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Complete analysis of one draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Structural statistics.
    pub stats: StatsReport,
    /// Readability scoring.
    pub readability: ReadabilityReport,
    /// Heading structure.
    pub headings: HeadingsReport,
    /// Keyword metrics.
    pub keywords: KeywordsReport,
    /// Improvement suggestions in rule order; empty means all checks passed.
    pub suggestions: Vec<String>,
}

/// Analyze a draft with default thresholds.
pub fn run_analysis(input: &ContentInput) -> AnalysisResult<AnalysisReport> {
    run_analysis_with(input, &Thresholds::default())
}

/// Analyze a draft against explicit suggestion thresholds.
#[tracing::instrument(skip_all, fields(content_len = input.content.len()))]
pub fn run_analysis_with(
    input: &ContentInput,
    thresholds: &Thresholds,
) -> AnalysisResult<AnalysisReport> {
    if input.content.trim().is_empty() {
        return Err(AnalysisError::EmptyContent);
    }

    let tokens = tokenize(&input.content);

    let stats = compute_stats(&tokens);
    let readability = score_readability(&tokens);
    let headings = parse_headings(&tokens);
    let keywords = analyze_keywords(
        &tokens,
        input.target_keyword.as_deref(),
        &input.related_keyword_list(),
    );

    let ctx = RuleContext {
        stats: &stats,
        readability: &readability,
        headings: &headings,
        keywords: &keywords,
        longest_paragraph_words: tokens.longest_paragraph_words(),
        meta_title: input.meta_title.as_deref(),
        meta_description: input.meta_description.as_deref(),
    };
    let suggestions = evaluate_rules(&ctx, thresholds);

    tracing::debug!(
        words = stats.word_count,
        flesch = readability.flesch_score,
        suggestions = suggestions.len(),
        "analysis complete"
    );

    Ok(AnalysisReport {
        stats,
        readability,
        headings,
        keywords,
        suggestions,
    })
}
