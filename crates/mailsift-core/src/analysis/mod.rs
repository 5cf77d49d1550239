//! Rule-based message analysis.
//!
//! Everything in this module is keyword and pattern matching over the
//! message text; no model calls, no network. The host decides which parts
//! to run via [`AnalysisOptions`].
//!
//! This module provides:
//! - **Sentiment**: positive/neutral/negative tone with supporting phrases
//! - **Categories**: keyword-rule category suggestion with confidence tiers
//! - **Entities**: email addresses, dates, names, and organizations
//! - **Summary & key points**: first-sentence summary and action items

mod categories;
mod entities;
mod sentiment;

pub use categories::{
    Categorization, categorize, category_confidence, primary_category, suggest_categories,
    work_subcategories,
};
pub use entities::{Entity, EntityKind, extract_entities};
pub use sentiment::{Sentiment, SentimentAnalysis, analyze_sentiment};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::message::MessageContent;

/// Body preview length used when no summary is requested.
const PREVIEW_CHARS: usize = 100;
/// Summary truncation length.
const SUMMARY_CHARS: usize = 150;
/// Key points kept per message.
const MAX_KEY_POINTS: usize = 10;
/// Lower bound on key point length (characters, exclusive).
const KEY_POINT_MIN_CHARS: usize = 10;
/// Upper bound on key point length (characters, exclusive).
const KEY_POINT_MAX_CHARS: usize = 200;

#[allow(clippy::expect_used)] // pattern literals are compile-time constants
static ACTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?:please|need to|have to|should|will|going to|must)\s+([^.!?\n]+)",
        r"(?m)^\s*\d+[.):]\s*([^.!?\n]+)",
        r"(?m)^\s*[-*]\s+([^.!?\n]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid pattern"))
    .collect()
});

/// Options controlling which analyses run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    /// Include sentiment analysis in the result.
    pub include_sentiment: bool,
    /// Extract entities from the message text.
    pub extract_entities: bool,
    /// Generate a first-sentence summary instead of the raw preview.
    pub generate_summary: bool,
}

/// Combined analysis of one message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageAnalysis {
    /// Short summary or preview of the message.
    pub summary: String,
    /// Sentiment verdict, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentAnalysis>,
    /// Extracted entities, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    /// Action items and list entries found in the body.
    pub key_points: Vec<String>,
    /// Suggested categories.
    pub categories: Vec<String>,
}

/// Runs the requested analyses over a message.
#[must_use]
pub fn analyze(content: &MessageContent, options: AnalysisOptions) -> MessageAnalysis {
    MessageAnalysis {
        summary: if options.generate_summary {
            summarize(content)
        } else {
            preview(content)
        },
        sentiment: options.include_sentiment.then(|| analyze_sentiment(content)),
        entities: options.extract_entities.then(|| extract_entities(content)),
        key_points: key_points(&content.body),
        categories: suggest_categories(content),
    }
}

/// First-sentence summary: `"subject: first sentence"`, truncated.
#[must_use]
pub fn summarize(content: &MessageContent) -> String {
    let first_sentence = content.body.split(['.', '!', '?']).next().unwrap_or_default();
    let truncated: String = first_sentence.chars().take(SUMMARY_CHARS).collect();
    let ellipsis = if content.body.chars().count() > SUMMARY_CHARS {
        "..."
    } else {
        ""
    };
    format!("{}: {truncated}{ellipsis}", content.subject)
}

/// Raw preview: subject plus the start of the body.
fn preview(content: &MessageContent) -> String {
    let body: String = content.body.chars().take(PREVIEW_CHARS).collect();
    format!("{}\n{body}...", content.subject)
}

/// Pulls action items out of a message body: imperative phrases, numbered
/// list entries, and bullet points, deduplicated and capped at ten.
#[must_use]
pub fn key_points(body: &str) -> Vec<String> {
    let text = body.to_lowercase();
    let mut points: Vec<String> = Vec::new();

    for pattern in ACTION_PATTERNS.iter() {
        for captures in pattern.captures_iter(&text) {
            let Some(found) = captures.get(1) else {
                continue;
            };
            let point = found.as_str().trim();
            let chars = point.chars().count();
            if chars <= KEY_POINT_MIN_CHARS || chars >= KEY_POINT_MAX_CHARS {
                continue;
            }
            let capitalized = capitalize(point);
            if !points.contains(&capitalized) {
                points.push(capitalized);
            }
        }
    }

    points.truncate(MAX_KEY_POINTS);
    points
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
