//! Core content analysis engine for draftscope.
//!
//! Turns raw draft text plus optional SEO metadata into a structured,
//! deterministic [`AnalysisReport`]: structural stats, a Flesch
//! Reading Ease score, heading structure, keyword metrics, and an
//! ordered list of improvement suggestions.
//!
//! The engine is a pure, synchronous computation with no shared state;
//! concurrent calls with independent inputs need no locking.
//!
//! # Modules
//!
//! - [`text`] - Tokenization: words, sentences, paragraphs, heading lines
//! - [`stats`] - Structural statistics
//! - [`readability`] - Flesch Reading Ease scoring
//! - [`headings`] - Heading structure analysis
//! - [`keywords`] - Keyword counts, density, and top terms
//! - [`suggestions`] - The ordered suggestion rule table
//! - [`analysis`] - Orchestration and the combined report
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use draftscope_core::analysis::{ContentInput, run_analysis};
//!
//! let input = ContentInput {
//!     target_keyword: Some("local seo".to_string()),
//!     ..ContentInput::from_content("# Local seo basics\n\nShort draft body.")
//! };
//! let report = run_analysis(&input).expect("content is non-empty");
//! assert!(report.headings.has_h1);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod headings;
pub mod keywords;
pub mod readability;
pub mod stats;
pub mod suggestions;
pub mod text;
pub mod word_lists;

pub use analysis::{AnalysisReport, ContentInput, run_analysis, run_analysis_with};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use suggestions::Thresholds;
