//! Heading structure analysis.
//!
//! Parses the heading lines the tokenizer set aside and reports the
//! outline: per-level counts and the H1 flags the suggestion rules
//! interpret.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::{TokenizedContent, heading_marker};

/// A single heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Heading {
    /// Heading level, 1–6.
    pub level: u8,
    /// Heading text with the marker stripped.
    pub text: String,
}

/// Heading structure of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HeadingsReport {
    /// Headings in document order.
    pub items: Vec<Heading>,
    /// Count of headings at each level 1–6. All six keys are present.
    pub counts_by_level: BTreeMap<u8, usize>,
    /// At least one level-1 heading exists.
    pub has_h1: bool,
    /// More than one level-1 heading exists.
    pub multiple_h1: bool,
    /// Level of the first heading in document order, if any.
    pub first_heading_level: Option<u8>,
}

/// Parse heading lines into a structural report.
#[tracing::instrument(skip_all, fields(lines = tokens.heading_lines.len()))]
pub fn parse_headings(tokens: &TokenizedContent) -> HeadingsReport {
    let items: Vec<Heading> = tokens
        .heading_lines
        .iter()
        .filter_map(|line| heading_marker(line))
        .map(|(level, text)| Heading {
            level,
            text: text.to_string(),
        })
        .collect();

    let mut counts_by_level: BTreeMap<u8, usize> = (1..=6).map(|level| (level, 0)).collect();
    for heading in &items {
        *counts_by_level.entry(heading.level).or_insert(0) += 1;
    }

    let h1_count = counts_by_level[&1];

    HeadingsReport {
        first_heading_level: items.first().map(|h| h.level),
        has_h1: h1_count > 0,
        multiple_h1: h1_count > 1,
        counts_by_level,
        items,
    }
}
