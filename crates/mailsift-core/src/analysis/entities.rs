//! Pattern-based entity extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::message::MessageContent;

/// Cap on extracted entities per message.
const MAX_ENTITIES: usize = 20;
/// Cap on extracted person names.
const MAX_NAMES: usize = 10;

#[allow(clippy::expect_used)] // pattern literals are compile-time constants
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("valid pattern"));

#[allow(clippy::expect_used)] // pattern literals are compile-time constants
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b",
        r"\b\d{1,2}[-/]\d{1,2}\b",
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
        r"(?i)\b(?:Mon|Tues|Wednes|Thurs|Fri|Satur|Sun)day,?\s+\w+\s+\d{1,2}\b",
        r"(?i)\bnext week\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid pattern"))
    .collect()
});

#[allow(clippy::expect_used)] // pattern literals are compile-time constants
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b").expect("valid pattern"));

#[allow(clippy::expect_used)] // pattern literals are compile-time constants
static ORG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+\s+(?:Inc|LLC|Corp|Ltd|LLP|Company)\.?").expect("valid pattern")
});

/// What kind of thing an extracted entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A person's name.
    Person,
    /// A date or relative date phrase.
    Date,
    /// An organization name.
    Organization,
    /// An email address.
    Email,
    /// Anything else.
    Other,
}

/// A snippet of message text recognized as an entity.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    /// The matched text.
    pub text: String,
    /// Entity kind.
    pub kind: EntityKind,
    /// Extraction confidence, `0.0..=1.0`.
    pub confidence: f32,
}

impl Entity {
    fn new(text: impl Into<String>, kind: EntityKind, confidence: f32) -> Self {
        Self {
            text: text.into(),
            kind,
            confidence,
        }
    }
}

/// Extracts email addresses, dates, person names, and organization names
/// from a message, capped at twenty entities.
///
/// The sender address is always reported as an email entity at full
/// confidence when present.
#[must_use]
pub fn extract_entities(content: &MessageContent) -> Vec<Entity> {
    let text = format!("{} {}", content.subject, content.body);
    let mut entities = Vec::new();

    for found in EMAIL_PATTERN.find_iter(&text) {
        entities.push(Entity::new(found.as_str(), EntityKind::Email, 0.95));
    }
    if !content.from.is_empty() {
        entities.push(Entity::new(content.from.clone(), EntityKind::Email, 1.0));
    }

    for pattern in DATE_PATTERNS.iter() {
        for found in pattern.find_iter(&text) {
            entities.push(Entity::new(found.as_str(), EntityKind::Date, 0.85));
        }
    }

    for found in NAME_PATTERN.find_iter(&text).take(MAX_NAMES) {
        entities.push(Entity::new(found.as_str(), EntityKind::Person, 0.6));
    }

    for found in ORG_PATTERN.find_iter(&text) {
        entities.push(Entity::new(found.as_str(), EntityKind::Organization, 0.75));
    }

    entities.truncate(MAX_ENTITIES);
    entities
}
