//! Text segmentation.
//!
//! Splits raw draft text into words, sentences, and paragraphs, and
//! separates heading lines from prose. Every analyzer downstream
//! consumes the [`TokenizedContent`] produced here, so tokenization
//! happens exactly once per analysis.

use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of alphanumerics, with internal apostrophes/hyphens
/// (`don't`, `well-known`) kept as a single word.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Alphabetic}\p{Nd}]+(?:['\-][\p{Alphabetic}\p{Nd}]+)*").expect("valid regex")
});

/// Sentence terminators: a run of `.`, `!`, `?` followed by whitespace
/// or end of text. A period inside `3.14` does not match.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("valid regex"));

/// Tokenized view of a draft.
///
/// Heading lines are excluded from `paragraphs`, `sentences`, and
/// `words`; they are carried through raw for the heading parser.
#[derive(Debug, Clone, Default)]
pub struct TokenizedContent {
    /// Prose words in document order, case preserved.
    pub words: Vec<String>,
    /// Sentences, each as its word list.
    pub sentences: Vec<Vec<String>>,
    /// Paragraphs, each collapsed to a single text block.
    pub paragraphs: Vec<String>,
    /// Raw heading lines, in document order.
    pub heading_lines: Vec<String>,
}

impl TokenizedContent {
    /// All prose words, case-folded for matching.
    pub fn folded_words(&self) -> Vec<String> {
        self.words.iter().map(|w| w.to_lowercase()).collect()
    }

    /// Word count of the longest paragraph; 0 when there are none.
    pub fn longest_paragraph_words(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| extract_words(p).len())
            .max()
            .unwrap_or(0)
    }
}

/// Tokenize raw draft text.
///
/// Smart quotes are normalized first so `keyword’s` and `keyword's`
/// tokenize identically. Lines whose leading `#` run is followed by a
/// space are heading lines; everything else groups into blank-line
/// separated paragraphs.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> TokenizedContent {
    let text = normalize_quotes(text);

    let mut paragraphs = Vec::new();
    let mut heading_lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if heading_marker(line).is_some() {
            heading_lines.push(line.to_string());
            continue;
        }
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    let mut words = Vec::new();
    let mut sentences = Vec::new();
    for paragraph in &paragraphs {
        for segment in SENTENCE_BOUNDARY.split(paragraph) {
            let segment_words = extract_words(segment);
            if !segment_words.is_empty() {
                words.extend(segment_words.iter().cloned());
                sentences.push(segment_words);
            }
        }
    }

    TokenizedContent {
        words,
        sentences,
        paragraphs,
        heading_lines,
    }
}

/// Extract words from a text fragment, case preserved.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract words from a text fragment, case-folded.
pub fn extract_folded_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Parse a heading marker: a run of `#` followed by one space and text.
///
/// Leading whitespace before the marker is allowed. Returns the level
/// (clamped to 6) and the trimmed text after the marker. Runs longer
/// than six still count, at level 6; a `#` run with no following
/// space, or with nothing but whitespace after it, is prose, not a
/// heading.
pub fn heading_marker(line: &str) -> Option<(u8, &str)> {
    let line = line.trim_start();
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?.trim();
    if text.is_empty() {
        return None;
    }
    Some((hashes.min(6) as u8, text))
}

/// Replace common "smart" quotes with their ASCII equivalents.
fn normalize_quotes(text: &str) -> String {
    text.replace('\u{2019}', "'")
        .replace(['\u{201c}', '\u{201d}'], "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let tokens = tokenize("This is a sentence. This is another sentence.");
        assert_eq!(tokens.sentences.len(), 2);
        assert_eq!(tokens.words.len(), 8);
        assert_eq!(tokens.paragraphs.len(), 1);
    }

    #[test]
    fn heading_lines_excluded_from_prose() {
        let tokens = tokenize("# Title\n\nOne short paragraph.");
        assert_eq!(tokens.heading_lines, vec!["# Title"]);
        assert_eq!(tokens.paragraphs.len(), 1);
        assert_eq!(tokens.sentences.len(), 1);
        assert_eq!(tokens.words, vec!["One", "short", "paragraph"]);
    }

    #[test]
    fn hash_without_space_is_prose() {
        let tokens = tokenize("#hashtag content here");
        assert!(tokens.heading_lines.is_empty());
        assert_eq!(tokens.paragraphs.len(), 1);
    }

    #[test]
    fn multiline_paragraphs_collapse() {
        let tokens = tokenize("First line\nsecond line.\n\nNext paragraph.");
        assert_eq!(tokens.paragraphs.len(), 2);
        assert_eq!(tokens.paragraphs[0], "First line second line.");
    }

    #[test]
    fn punctuation_runs_are_not_sentences() {
        let tokens = tokenize("Really?! Yes. ...");
        assert_eq!(tokens.sentences.len(), 2);
    }

    #[test]
    fn trailing_fragment_counts_as_sentence() {
        let tokens = tokenize("A complete sentence. And a trailing fragment");
        assert_eq!(tokens.sentences.len(), 2);
    }

    #[test]
    fn decimal_numbers_not_split() {
        let tokens = tokenize("The price is 3.14 dollars today.");
        assert_eq!(tokens.sentences.len(), 1);
    }

    #[test]
    fn words_keep_apostrophes_and_hyphens() {
        let words = extract_words("It's a well-known fact.");
        assert_eq!(words, vec!["It's", "a", "well-known", "fact"]);
    }

    #[test]
    fn smart_quotes_normalized() {
        let tokens = tokenize("It\u{2019}s fine.");
        assert_eq!(tokens.words, vec!["It's", "fine"]);
    }

    #[test]
    fn heading_marker_levels() {
        assert_eq!(heading_marker("# One"), Some((1, "One")));
        assert_eq!(heading_marker("###### Six"), Some((6, "Six")));
        assert_eq!(heading_marker("######### Nine"), Some((6, "Nine")));
        assert_eq!(heading_marker("#NoSpace"), None);
        assert_eq!(heading_marker("plain text"), None);
    }

    #[test]
    fn indented_heading_still_counts() {
        assert_eq!(heading_marker("  # Indented"), Some((1, "Indented")));
        let tokens = tokenize("  ## Section\n\nBody text.");
        assert_eq!(tokens.heading_lines, vec!["  ## Section"]);
        assert_eq!(tokens.words, vec!["Body", "text"]);
    }

    #[test]
    fn marker_without_text_is_prose() {
        assert_eq!(heading_marker("## "), None);
        assert_eq!(heading_marker("#   "), None);
        let tokens = tokenize("## \n\nBody text.");
        assert!(tokens.heading_lines.is_empty());
    }

    #[test]
    fn longest_paragraph_measured_in_words() {
        let tokens = tokenize("One two three.\n\nOne two.");
        assert_eq!(tokens.longest_paragraph_words(), 3);
        assert_eq!(tokenize("").longest_paragraph_words(), 0);
    }

    #[test]
    fn empty_input() {
        let tokens = tokenize("");
        assert!(tokens.words.is_empty());
        assert!(tokens.sentences.is_empty());
        assert!(tokens.paragraphs.is_empty());
        assert!(tokens.heading_lines.is_empty());
    }

    #[test]
    fn whitespace_only_input() {
        let tokens = tokenize("   \n\n  \t ");
        assert!(tokens.words.is_empty());
        assert!(tokens.paragraphs.is_empty());
    }
}
