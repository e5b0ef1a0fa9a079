//! Suggestion rules.
//!
//! A fixed, ordered table of independent predicates evaluated over the
//! already-computed analysis results. Each rule either appends one
//! message or stays silent; output order equals table order. Rules
//! that depend on optional inputs (keyword, meta fields) skip when the
//! input is absent. Adding a rule is a data change, not control flow.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::headings::HeadingsReport;
use crate::keywords::{KeywordsReport, count_phrase};
use crate::readability::ReadabilityReport;
use crate::stats::StatsReport;
use crate::text::extract_folded_words;

/// Fixed thresholds the rules evaluate against.
///
/// Defaults are the documented contract; tests override individual
/// fields with struct update syntax instead of touching global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum word count before the short-content rule fires.
    pub min_words: usize,
    /// Maximum word count before the long-content rule fires.
    pub max_words: usize,
    /// Maximum average words per sentence.
    pub max_avg_sentence_words: f64,
    /// Minimum Flesch Reading Ease score.
    pub min_flesch: f64,
    /// Word count at which missing H3 subheadings are flagged.
    pub h3_min_words: usize,
    /// Maximum words in a single paragraph.
    pub max_paragraph_words: usize,
    /// Minimum target keyword density, in percent.
    pub min_density_percent: f64,
    /// Maximum target keyword density, in percent.
    pub max_density_percent: f64,
    /// Inclusive character range for the meta title.
    pub meta_title_chars: (usize, usize),
    /// Inclusive character range for the meta description.
    pub meta_description_chars: (usize, usize),
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_words: 300,
            max_words: 2000,
            max_avg_sentence_words: 22.0,
            min_flesch: 50.0,
            h3_min_words: 700,
            max_paragraph_words: 110,
            min_density_percent: 0.5,
            max_density_percent: 3.0,
            meta_title_chars: (50, 60),
            meta_description_chars: (120, 160),
        }
    }
}

/// Everything the rules can see.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Structural statistics.
    pub stats: &'a StatsReport,
    /// Readability scoring.
    pub readability: &'a ReadabilityReport,
    /// Heading structure.
    pub headings: &'a HeadingsReport,
    /// Keyword metrics.
    pub keywords: &'a KeywordsReport,
    /// Word count of the longest paragraph.
    pub longest_paragraph_words: usize,
    /// Meta title, if supplied.
    pub meta_title: Option<&'a str>,
    /// Meta description, if supplied.
    pub meta_description: Option<&'a str>,
}

impl RuleContext<'_> {
    fn has_target(&self) -> bool {
        !self.keywords.target_keyword.is_empty()
    }

    fn target_in_any_heading(&self) -> bool {
        let phrase = extract_folded_words(&self.keywords.target_keyword);
        self.headings.items.iter().any(|heading| {
            let words = extract_folded_words(&heading.text);
            count_phrase(&words, &phrase) > 0
        })
    }
}

/// A named suggestion rule.
struct Rule {
    name: &'static str,
    check: fn(&RuleContext<'_>, &Thresholds) -> Option<String>,
}

/// The fixed rule table. Order here is output order.
const RULES: &[Rule] = &[
    Rule {
        name: "short_content",
        check: |ctx, t| {
            (ctx.stats.word_count < t.min_words).then(|| {
                format!("Content is short; aim for at least {} words.", t.min_words)
            })
        },
    },
    Rule {
        name: "long_content",
        check: |ctx, t| {
            (ctx.stats.word_count > t.max_words).then(|| {
                format!(
                    "Content is very long (over {} words); consider trimming or splitting it up.",
                    t.max_words
                )
            })
        },
    },
    Rule {
        name: "long_sentences",
        check: |ctx, t| {
            (ctx.stats.sentence_count > 0
                && ctx.stats.avg_words_per_sentence > t.max_avg_sentence_words)
                .then(|| "Average sentence length is high; shorten sentences.".to_string())
        },
    },
    Rule {
        name: "difficult_readability",
        check: |ctx, t| {
            (ctx.readability.flesch_score < t.min_flesch).then(|| {
                "Readability is difficult; shorten sentences and simplify words.".to_string()
            })
        },
    },
    Rule {
        name: "missing_h1",
        check: |ctx, _| (!ctx.headings.has_h1).then(|| "Add exactly one H1 heading.".to_string()),
    },
    Rule {
        name: "multiple_h1",
        check: |ctx, _| {
            ctx.headings
                .multiple_h1
                .then(|| "Use only one H1 heading per page.".to_string())
        },
    },
    Rule {
        name: "missing_h2",
        check: |ctx, _| {
            (ctx.headings.counts_by_level[&2] == 0)
                .then(|| "Add H2 subheadings to break the content into sections.".to_string())
        },
    },
    Rule {
        name: "missing_h3",
        check: |ctx, t| {
            (ctx.stats.word_count >= t.h3_min_words && ctx.headings.counts_by_level[&3] == 0)
                .then(|| "Add H3 subheadings for details inside longer sections.".to_string())
        },
    },
    Rule {
        name: "keyword_absent",
        check: |ctx, _| {
            (ctx.has_target() && ctx.keywords.target_count == 0)
                .then(|| "Include the target keyword in the content at least once.".to_string())
        },
    },
    Rule {
        name: "density_low",
        check: |ctx, t| {
            (ctx.has_target() && ctx.keywords.target_density_percent < t.min_density_percent)
                .then(|| "Target keyword density is low.".to_string())
        },
    },
    Rule {
        name: "density_high",
        check: |ctx, t| {
            (ctx.has_target() && ctx.keywords.target_density_percent > t.max_density_percent)
                .then(|| "Target keyword density is too high; avoid stuffing.".to_string())
        },
    },
    Rule {
        name: "meta_title_length",
        check: |ctx, t| {
            let title = ctx.meta_title?;
            let len = title.chars().count();
            let (min, max) = t.meta_title_chars;
            if len < min {
                Some(format!(
                    "Meta title is short ({len} characters); aim for {min}-{max}."
                ))
            } else if len > max {
                Some(format!(
                    "Meta title is long ({len} characters); aim for {min}-{max}."
                ))
            } else {
                None
            }
        },
    },
    Rule {
        name: "meta_description_length",
        check: |ctx, t| {
            let description = ctx.meta_description?;
            let len = description.chars().count();
            let (min, max) = t.meta_description_chars;
            if len < min {
                Some(format!(
                    "Meta description is short ({len} characters); aim for {min}-{max}."
                ))
            } else if len > max {
                Some(format!(
                    "Meta description is long ({len} characters); aim for {min}-{max}."
                ))
            } else {
                None
            }
        },
    },
    Rule {
        name: "keyword_not_in_headings",
        check: |ctx, _| {
            (ctx.has_target() && !ctx.target_in_any_heading())
                .then(|| "Include the target keyword in at least one heading.".to_string())
        },
    },
    Rule {
        name: "long_paragraphs",
        check: |ctx, t| {
            (ctx.longest_paragraph_words > t.max_paragraph_words)
                .then(|| "Break up long paragraphs so the content is easier to scan.".to_string())
        },
    },
];

/// Names of all rules, in evaluation order.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|rule| rule.name).collect()
}

/// Evaluate every rule in order, collecting the messages that fire.
///
/// An empty result means every check passed. Rules never fail; absent
/// optional inputs simply skip the rules that need them.
#[tracing::instrument(skip_all)]
pub fn evaluate_rules(ctx: &RuleContext<'_>, thresholds: &Thresholds) -> Vec<String> {
    RULES
        .iter()
        .filter_map(|rule| (rule.check)(ctx, thresholds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headings::parse_headings;
    use crate::keywords::analyze_keywords;
    use crate::readability::score_readability;
    use crate::stats::compute_stats;
    use crate::text::tokenize;

    struct Fixture {
        stats: StatsReport,
        readability: ReadabilityReport,
        headings: HeadingsReport,
        keywords: KeywordsReport,
        longest_paragraph_words: usize,
    }

    fn fixture(content: &str, target: Option<&str>) -> Fixture {
        let tokens = tokenize(content);
        Fixture {
            stats: compute_stats(&tokens),
            readability: score_readability(&tokens),
            headings: parse_headings(&tokens),
            keywords: analyze_keywords(&tokens, target, &[]),
            longest_paragraph_words: tokens.longest_paragraph_words(),
        }
    }

    fn run(
        fixture: &Fixture,
        meta_title: Option<&str>,
        meta_description: Option<&str>,
        thresholds: &Thresholds,
    ) -> Vec<String> {
        let ctx = RuleContext {
            stats: &fixture.stats,
            readability: &fixture.readability,
            headings: &fixture.headings,
            keywords: &fixture.keywords,
            longest_paragraph_words: fixture.longest_paragraph_words,
            meta_title,
            meta_description,
        };
        evaluate_rules(&ctx, thresholds)
    }

    /// Content crafted to satisfy every rule at default thresholds.
    fn good_content() -> String {
        let mut body = String::from("# A local seo guide\n\n## Why it matters\n\n");
        for i in 0..80 {
            if i % 20 == 0 {
                body.push_str("We use local seo to win new work. ");
            }
            body.push_str("Clear short words help your site grow well. ");
            if i % 10 == 9 {
                body.push_str("\n\n");
            }
        }
        body
    }

    #[test]
    fn good_content_yields_no_suggestions() {
        let fixture = fixture(&good_content(), Some("local seo"));
        let title = "A local seo guide for small shops near you today now!";
        assert_eq!(title.chars().count(), 53);
        let description = "This guide shows small shops how to use local seo to get found, \
                           win more calls, and turn nearby searches into real customers.";
        assert!((120..=160).contains(&description.chars().count()));

        let suggestions = run(
            &fixture,
            Some(title),
            Some(description),
            &Thresholds::default(),
        );
        assert_eq!(suggestions, Vec::<String>::new());
    }

    #[test]
    fn short_content_fires_first() {
        let fixture = fixture("# T\n\n## S\n\nOne short note.", None);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert_eq!(
            suggestions[0],
            "Content is short; aim for at least 300 words."
        );
    }

    #[test]
    fn missing_h1_and_h2() {
        let fixture = fixture("Just a paragraph.", None);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(suggestions.contains(&"Add exactly one H1 heading.".to_string()));
        assert!(
            suggestions
                .contains(&"Add H2 subheadings to break the content into sections.".to_string())
        );
    }

    #[test]
    fn multiple_h1_flagged() {
        let fixture = fixture("# One\n\n# Two\n\nBody text here.", None);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(suggestions.contains(&"Use only one H1 heading per page.".to_string()));
    }

    #[test]
    fn density_rules_skip_without_keyword() {
        let fixture = fixture("Plain words only.", None);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(!suggestions.iter().any(|s| s.contains("density")));
        assert!(!suggestions.iter().any(|s| s.contains("keyword")));
    }

    #[test]
    fn keyword_stuffing_detected() {
        let mut content = String::from("# seo\n\n## seo tips\n\n");
        for _ in 0..50 {
            content.push_str("seo seo is all about seo today. ");
        }
        let fixture = fixture(&content, Some("seo"));
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(
            suggestions
                .contains(&"Target keyword density is too high; avoid stuffing.".to_string())
        );
    }

    #[test]
    fn meta_title_too_long() {
        let fixture = fixture(&good_content(), None);
        let title = "x".repeat(80);
        let suggestions = run(&fixture, Some(&title), None, &Thresholds::default());
        assert_eq!(
            suggestions,
            vec!["Meta title is long (80 characters); aim for 50-60.".to_string()]
        );
    }

    #[test]
    fn meta_title_in_range_is_silent() {
        let fixture = fixture(&good_content(), None);
        let title = "y".repeat(55);
        let suggestions = run(&fixture, Some(&title), None, &Thresholds::default());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn meta_description_too_short() {
        let fixture = fixture(&good_content(), None);
        let suggestions = run(&fixture, None, Some("Too brief."), &Thresholds::default());
        assert_eq!(
            suggestions,
            vec!["Meta description is short (10 characters); aim for 120-160.".to_string()]
        );
    }

    #[test]
    fn keyword_missing_from_headings() {
        let mut content = String::from("# General title\n\n## Another section\n\n");
        for _ in 0..60 {
            content.push_str("We talk about local seo in this post all the time. ");
        }
        let fixture = fixture(&content, Some("local seo"));
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(
            suggestions.contains(&"Include the target keyword in at least one heading.".to_string())
        );
    }

    #[test]
    fn thresholds_are_overridable() {
        let fixture = fixture("# T\n\n## S\n\nFive words are here now.", None);
        let relaxed = Thresholds {
            min_words: 1,
            ..Thresholds::default()
        };
        let suggestions = run(&fixture, None, None, &relaxed);
        assert!(!suggestions.iter().any(|s| s.contains("Content is short")));
    }

    /// A draft with H1 and H2 headings and roughly `words` words of
    /// short-paragraph prose.
    fn draft_without_h3(words: usize) -> String {
        let mut body = String::from("# Guide\n\n## Sections\n\n");
        for i in 0..words / 8 {
            body.push_str("Clear short words help your site grow well. ");
            if i % 10 == 9 {
                body.push_str("\n\n");
            }
        }
        body
    }

    #[test]
    fn h3_suggested_for_long_content_without_h3() {
        let fixture = fixture(&draft_without_h3(720), None);
        assert!(fixture.stats.word_count >= 700);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(
            suggestions
                .contains(&"Add H3 subheadings for details inside longer sections.".to_string())
        );
    }

    #[test]
    fn h3_rule_silent_below_word_floor() {
        let fixture = fixture(&draft_without_h3(400), None);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(!suggestions.iter().any(|s| s.contains("H3")));
    }

    #[test]
    fn h3_rule_silent_when_h3_present() {
        let mut content = draft_without_h3(720);
        content.push_str("\n\n### Details\n\nMore prose here.");
        let fixture = fixture(&content, None);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(!suggestions.iter().any(|s| s.contains("H3")));
    }

    #[test]
    fn long_paragraph_flagged() {
        let mut content = String::from("# Guide\n\n## Sections\n\n");
        for _ in 0..15 {
            content.push_str("Clear short words help your site grow well. ");
        }
        let fixture = fixture(&content, None);
        assert!(fixture.longest_paragraph_words > 110);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(
            suggestions
                .contains(&"Break up long paragraphs so the content is easier to scan.".to_string())
        );
    }

    #[test]
    fn short_paragraphs_not_flagged() {
        let fixture = fixture(&good_content(), None);
        let suggestions = run(&fixture, None, None, &Thresholds::default());
        assert!(!suggestions.iter().any(|s| s.contains("paragraphs")));
    }

    #[test]
    fn rule_order_is_stable() {
        let names = rule_names();
        assert_eq!(names.first(), Some(&"short_content"));
        assert_eq!(names.last(), Some(&"long_paragraphs"));
        assert_eq!(names.len(), 15);
    }
}
