//! Structural statistics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::TokenizedContent;

/// Word, sentence, and paragraph counts for a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatsReport {
    /// Number of prose words.
    pub word_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of paragraphs.
    pub paragraph_count: usize,
    /// Average words per sentence; 0 when there are no sentences.
    pub avg_words_per_sentence: f64,
}

/// Derive counts and averages from tokenizer output. Always succeeds.
pub fn compute_stats(tokens: &TokenizedContent) -> StatsReport {
    let word_count = tokens.words.len();
    let sentence_count = tokens.sentences.len();
    let avg_words_per_sentence = if sentence_count == 0 {
        0.0
    } else {
        round2(word_count as f64 / sentence_count as f64)
    };

    StatsReport {
        word_count,
        sentence_count,
        paragraph_count: tokens.paragraphs.len(),
        avg_words_per_sentence,
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    #[test]
    fn counts_match_tokenizer() {
        let tokens = tokenize("One two three. Four five.\n\nSix.");
        let stats = compute_stats(&tokens);
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.avg_words_per_sentence, 2.0);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let stats = compute_stats(&tokenize(""));
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.paragraph_count, 0);
        assert_eq!(stats.avg_words_per_sentence, 0.0);
    }

    #[test]
    fn word_count_invariant_to_surrounding_whitespace() {
        let a = compute_stats(&tokenize("Some words here."));
        let b = compute_stats(&tokenize("  \n Some words here. \n\n"));
        assert_eq!(a.word_count, b.word_count);
    }

    #[test]
    fn average_is_rounded() {
        let tokens = tokenize("One two. Three four five.");
        let stats = compute_stats(&tokens);
        assert_eq!(stats.avg_words_per_sentence, 2.5);
    }
}
