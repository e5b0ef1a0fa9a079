//! Keyword usage analysis.
//!
//! Target and related keywords are matched as contiguous phrases over
//! the case-folded word sequence, so punctuation and casing in the
//! draft never affect counts. Matching is greedy, left to right, and
//! non-overlapping.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stats::round2;
use crate::text::{TokenizedContent, extract_folded_words};
use crate::word_lists::STOPWORDS;

/// How many top terms to report.
const TOP_TERMS_CAP: usize = 10;

/// A keyword phrase with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordCount {
    /// The normalized keyword phrase.
    pub keyword: String,
    /// Non-overlapping occurrences in the draft.
    pub count: usize,
}

/// A recurring single-word term with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TermCount {
    /// The case-folded term.
    pub term: String,
    /// Occurrences in the draft.
    pub count: usize,
}

/// Keyword metrics for a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordsReport {
    /// Normalized target keyword; empty when none was supplied.
    pub target_keyword: String,
    /// Non-overlapping occurrences of the target phrase.
    pub target_count: usize,
    /// Share of draft words covered by target matches, in percent.
    pub target_density_percent: f64,
    /// Related keywords in user-supplied order, duplicates merged.
    pub related_counts: Vec<KeywordCount>,
    /// Most frequent non-stopword terms, capped, ties by first occurrence.
    pub top_terms: Vec<TermCount>,
}

/// Analyze keyword usage.
///
/// `related` keeps its supplied order; an exactly repeated phrase
/// collapses into its first entry.
#[tracing::instrument(skip_all, fields(words = tokens.words.len()))]
pub fn analyze_keywords(
    tokens: &TokenizedContent,
    target_keyword: Option<&str>,
    related_keywords: &[String],
) -> KeywordsReport {
    let content = tokens.folded_words();

    let target_words = target_keyword.map(extract_folded_words).unwrap_or_default();
    let target_keyword = target_words.join(" ");
    let target_count = count_phrase(&content, &target_words);

    let target_density_percent = if target_words.is_empty() || content.is_empty() {
        0.0
    } else {
        round2((target_count * target_words.len()) as f64 / content.len() as f64 * 100.0)
    };

    let mut related_counts: Vec<KeywordCount> = Vec::new();
    for phrase in related_keywords {
        let phrase_words = extract_folded_words(phrase);
        if phrase_words.is_empty() {
            continue;
        }
        let normalized = phrase_words.join(" ");
        if related_counts.iter().any(|rc| rc.keyword == normalized) {
            continue;
        }
        related_counts.push(KeywordCount {
            count: count_phrase(&content, &phrase_words),
            keyword: normalized,
        });
    }

    KeywordsReport {
        target_keyword,
        target_count,
        target_density_percent,
        related_counts,
        top_terms: top_terms(&content),
    }
}

/// Count non-overlapping occurrences of `phrase` in `content`.
///
/// Greedy left-to-right scan: a match consumes its words, so `a a a`
/// contains `a a` once, not twice.
pub(crate) fn count_phrase(content: &[String], phrase: &[String]) -> usize {
    if phrase.is_empty() || phrase.len() > content.len() {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while i + phrase.len() <= content.len() {
        if content[i..i + phrase.len()] == *phrase {
            count += 1;
            i += phrase.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Most frequent non-stopword terms, ties broken by first occurrence.
fn top_terms(content: &[String]) -> Vec<TermCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, word) in content.iter().enumerate() {
        if STOPWORDS.contains(word.as_str()) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
        first_seen.entry(word).or_insert(index);
    }

    let mut terms: Vec<(&str, usize)> = counts.into_iter().collect();
    terms.sort_by_key(|&(term, count)| (std::cmp::Reverse(count), first_seen[term]));
    terms
        .into_iter()
        .take(TOP_TERMS_CAP)
        .map(|(term, count)| TermCount {
            term: term.to_string(),
            count,
        })
        .collect()
}
