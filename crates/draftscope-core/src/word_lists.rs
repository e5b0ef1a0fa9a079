//! Curated word lists for keyword analysis.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Stopwords excluded from top-term frequency analysis: articles,
/// conjunctions, common prepositions, pronouns, and auxiliary verbs.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "nor", "so", "yet", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "up", "down", "about", "into", "over", "under", "through",
        "during", "before", "after", "between", "out", "off", "above", "below", "that", "this",
        "these", "those", "it", "its", "i", "me", "my", "we", "our", "you", "your", "he", "him",
        "his", "she", "her", "they", "them", "their", "is", "are", "was", "were", "be", "been",
        "being", "am", "have", "has", "had", "do", "does", "did", "will", "would", "shall",
        "should", "could", "may", "might", "must", "can", "not", "no", "as", "if", "than", "then",
        "there", "here", "when", "where", "why", "how", "all", "any", "both", "each", "few",
        "more", "most", "other", "some", "such", "only", "own", "same", "too", "very", "just",
        "what", "which", "who", "whom",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_function_words_present() {
        for word in ["the", "and", "of", "is", "would"] {
            assert!(STOPWORDS.contains(word), "missing {word}");
        }
    }

    #[test]
    fn content_words_absent() {
        for word in ["keyword", "seo", "content", "local"] {
            assert!(!STOPWORDS.contains(word), "unexpected {word}");
        }
    }
}
