//! Keyword-count sentiment analysis.

use serde::Serialize;

use crate::message::MessageContent;

/// Words that signal a positive tone.
const POSITIVE_KEYWORDS: [&str; 11] = [
    "thank", "great", "awesome", "appreciate", "love", "happy", "excellent", "fantastic",
    "wonderful", "excited", "glad",
];

/// Words that signal a negative tone.
const NEGATIVE_KEYWORDS: [&str; 12] = [
    "issue", "problem", "error", "fail", "angry", "frustrated", "disappointed", "concern",
    "worried", "bad", "terrible", "hate",
];

/// Confidence reported for a neutral verdict.
const NEUTRAL_CONFIDENCE: f32 = 0.7;
/// Ceiling for positive/negative confidence.
const MAX_TONE_CONFIDENCE: f32 = 0.8;

/// Overall tone of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive keywords clearly outnumber negative ones.
    Positive,
    /// No clear lean either way.
    #[default]
    Neutral,
    /// Negative keywords clearly outnumber positive ones.
    Negative,
}

impl Sentiment {
    /// String representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Sentiment verdict with the keywords that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentAnalysis {
    /// Overall tone.
    pub sentiment: Sentiment,
    /// Confidence in the verdict, `0.0..=1.0`.
    pub confidence: f32,
    /// Matched sentiment keywords, positive ones first.
    pub key_phrases: Vec<String>,
}

/// Scores the tone of a message by counting sentiment keywords in the
/// subject and body.
///
/// A tone wins only when its keyword count beats the other side by more
/// than one; anything closer is neutral.
#[must_use]
pub fn analyze_sentiment(content: &MessageContent) -> SentimentAnalysis {
    let text = content.normalized_text();
    let positive: Vec<&str> = POSITIVE_KEYWORDS
        .iter()
        .copied()
        .filter(|word| text.contains(*word))
        .collect();
    let negative: Vec<&str> = NEGATIVE_KEYWORDS
        .iter()
        .copied()
        .filter(|word| text.contains(*word))
        .collect();

    let key_phrases = positive
        .iter()
        .chain(negative.iter())
        .map(ToString::to_string)
        .collect();

    let (sentiment, confidence) = if positive.len() > negative.len() + 1 {
        (Sentiment::Positive, tone_confidence(positive.len()))
    } else if negative.len() > positive.len() + 1 {
        (Sentiment::Negative, tone_confidence(negative.len()))
    } else {
        (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
    };

    SentimentAnalysis {
        sentiment,
        confidence,
        key_phrases,
    }
}

#[allow(clippy::cast_precision_loss)]
fn tone_confidence(matches: usize) -> f32 {
    (0.5 + matches as f32 * 0.1).min(MAX_TONE_CONFIDENCE)
}
