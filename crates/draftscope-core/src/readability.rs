//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. Syllables come from a deterministic
//! heuristic: count runs of consecutive vowels (`a e i o u y`) in the
//! lower-cased word, subtract one for a terminal silent `e` when the
//! count stays at least 1, and floor the per-word count at 1.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::TokenizedContent;

/// Qualitative readability band derived from fixed score cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Band {
    /// Score ≥ 90.
    #[serde(rename = "very easy")]
    VeryEasy,
    /// Score ≥ 70.
    #[serde(rename = "easy")]
    Easy,
    /// Score ≥ 60.
    #[serde(rename = "fairly easy")]
    FairlyEasy,
    /// Score ≥ 50.
    #[serde(rename = "standard")]
    Standard,
    /// Score ≥ 30.
    #[serde(rename = "fairly difficult")]
    FairlyDifficult,
    /// Score ≥ 0.
    #[serde(rename = "difficult")]
    Difficult,
    /// Score below 0.
    #[serde(rename = "very difficult")]
    VeryDifficult,
    /// No words or no sentences to score.
    #[serde(rename = "undetermined")]
    Undetermined,
}

impl Band {
    /// Band for a given Flesch score.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 70.0 {
            Self::Easy
        } else if score >= 60.0 {
            Self::FairlyEasy
        } else if score >= 50.0 {
            Self::Standard
        } else if score >= 30.0 {
            Self::FairlyDifficult
        } else if score >= 0.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Human-readable label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::FairlyEasy => "fairly easy",
            Self::Standard => "standard",
            Self::FairlyDifficult => "fairly difficult",
            Self::Difficult => "difficult",
            Self::VeryDifficult => "very difficult",
            Self::Undetermined => "undetermined",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease score, rounded to one decimal.
    pub flesch_score: f64,
    /// Qualitative band for the score.
    pub band: Band,
    /// Total syllables across all words.
    pub syllable_count: usize,
}

/// Score readability of tokenized content.
///
/// Zero words or zero sentences is not an error: the score is defined
/// as 0 with an undetermined band.
#[tracing::instrument(skip_all, fields(words = tokens.words.len()))]
pub fn score_readability(tokens: &TokenizedContent) -> ReadabilityReport {
    let word_count = tokens.words.len();
    let sentence_count = tokens.sentences.len();
    let syllable_count: usize = tokens.words.iter().map(|w| count_syllables(w)).sum();

    if word_count == 0 || sentence_count == 0 {
        return ReadabilityReport {
            flesch_score: 0.0,
            band: Band::Undetermined,
            syllable_count,
        };
    }

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllable_count as f64 / word_count as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let flesch_score = (score * 10.0).round() / 10.0;

    ReadabilityReport {
        flesch_score,
        band: Band::from_score(flesch_score),
        syllable_count,
    }
}

/// Estimate syllables in a single word.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut groups = 0;
    let mut prev_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = is_vowel;
    }

    if word.ends_with('e') && groups > 1 {
        groups -= 1;
    }

    groups.max(1)
}
