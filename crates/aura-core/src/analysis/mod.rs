//! Text analysis heuristic.
//!
//! Sentiment is binary: any positive marker appearing as a substring of the
//! lower-cased text yields [`POSITIVE_SENTIMENT`], anything else
//! [`BASELINE_SENTIMENT`]. Keywords are the first [`MAX_KEYWORDS`] whitespace
//! tokens longer than [`MIN_KEYWORD_CHARS`] characters, kept verbatim
//! (punctuation included) and in input order.

pub mod model;

use model::AnalysisResult;

/// Words whose presence, anywhere in the text, marks it as positive.
pub const POSITIVE_MARKERS: [&str; 5] = ["good", "happy", "love", "excited", "great"];

/// Score reported when a positive marker is present.
pub const POSITIVE_SENTIMENT: f64 = 0.8;

/// Score reported otherwise.
pub const BASELINE_SENTIMENT: f64 = 0.3;

/// Tokens must be strictly longer than this many characters.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Upper bound on returned keywords.
pub const MAX_KEYWORDS: usize = 5;

/// Analyze a piece of text.
///
/// Total over all inputs: empty or whitespace-only text gives the baseline
/// score and no keywords.
pub fn analyze(text: &str) -> AnalysisResult {
    let text = text.to_lowercase();

    AnalysisResult {
        sentiment: score_sentiment(&text),
        keywords: extract_keywords(&text),
    }
}

/// Substring match, not word match: "goodbye" counts as "good".
fn score_sentiment(lowered: &str) -> f64 {
    if POSITIVE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        POSITIVE_SENTIMENT
    } else {
        BASELINE_SENTIMENT
    }
}

/// Unicode whitespace plus the ASCII information separators (U+001C..=U+001F),
/// which many text splitters also treat as breaks.
fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn extract_keywords(lowered: &str) -> Vec<String> {
    lowered
        .split(is_token_separator)
        .filter(|token| !token.is_empty())
        .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
