//! Keyword-rule category suggestion.

use serde::Serialize;

use crate::message::MessageContent;

/// Fallback category when nothing matches.
const GENERAL_CATEGORY: &str = "general";

/// Work subcategory suggestions kept per message.
const MAX_SUBCATEGORIES: usize = 3;

/// Keyword table driving category suggestion.
const CATEGORY_RULES: [(&str, &[&str]); 7] = [
    ("work", &["meeting", "project", "report", "deadline", "invoice", "proposal", "contract", "client", "team"]),
    ("personal", &["family", "friend", "personal", "vacation", "birthday", "dinner", "weekend", "home"]),
    ("newsletter", &["newsletter", "update", "news", "digest", "weekly", "monthly", "subscription", "unsubscribe"]),
    ("urgent", &["urgent", "asap", "immediately", "deadline", "important", "priority", "critical", "emergency"]),
    ("finance", &["invoice", "payment", "billing", "receipt", "bank", "account", "statement", "transaction"]),
    ("shopping", &["order", "purchase", "buy", "cart", "shipping", "delivery", "product", "receipt"]),
    ("travel", &["flight", "hotel", "booking", "reservation", "trip", "vacation", "travel", "itinerary"]),
];

/// Categories in priority order for primary classification.
const PRIORITY_ORDER: [&str; 8] = [
    "urgent", "work", "finance", "personal", "newsletter", "shopping", "travel", "general",
];

/// Trimmed keyword lists used for the confidence tiers.
const CONFIDENCE_KEYWORDS: [(&str, &[&str]); 7] = [
    ("work", &["meeting", "project", "report", "deadline", "invoice", "proposal", "contract", "client"]),
    ("personal", &["family", "friend", "personal", "vacation", "birthday"]),
    ("newsletter", &["newsletter", "update", "news", "digest"]),
    ("urgent", &["urgent", "asap", "immediately", "deadline", "important"]),
    ("finance", &["invoice", "payment", "billing", "receipt", "bank"]),
    ("shopping", &["order", "purchase", "buy", "cart", "shipping"]),
    ("travel", &["flight", "hotel", "booking", "reservation", "trip"]),
];

/// Work subcategory keyword table.
const WORK_SUBCATEGORIES: [(&str, &[&str]); 5] = [
    ("meeting", &["schedule", "calendar", "agenda", "invite"]),
    ("project", &["milestone", "deliverable", "task", "assignment"]),
    ("finance", &["invoice", "budget", "quote", "proposal"]),
    ("client", &["communication", "proposal", "contract", "meeting"]),
    ("team", &["update", "collaboration", "review", "standup"]),
];

/// Primary category with confidence and optional work subcategories.
#[derive(Debug, Clone, Serialize)]
pub struct Categorization {
    /// Primary category name.
    pub category: String,
    /// Confidence tier, `0.0..=1.0`.
    pub confidence: f32,
    /// Work subcategory suggestions, present for the `work` category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<String>>,
}

/// Suggests every category with at least one keyword hit, in table order,
/// or `["general"]` when nothing matches.
#[must_use]
pub fn suggest_categories(content: &MessageContent) -> Vec<String> {
    let text = content.normalized_text();
    let matched: Vec<String> = CATEGORY_RULES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(*keyword)))
        .map(|(name, _)| (*name).to_string())
        .collect();
    if matched.is_empty() {
        vec![GENERAL_CATEGORY.to_string()]
    } else {
        matched
    }
}

/// Picks the primary category by fixed priority order, falling back to
/// custom category names mentioned in the text.
#[must_use]
pub fn primary_category(content: &MessageContent, custom_categories: &[String]) -> String {
    let suggested = suggest_categories(content);
    for category in PRIORITY_ORDER {
        if suggested.iter().any(|s| s == category) {
            return category.to_string();
        }
    }

    let text = content.normalized_text();
    for category in custom_categories {
        if text.contains(&category.to_lowercase()) {
            return category.clone();
        }
    }

    GENERAL_CATEGORY.to_string()
}

/// Confidence tier for a category, by how many of its core keywords the
/// message contains.
#[must_use]
pub fn category_confidence(content: &MessageContent, category: &str) -> f32 {
    let text = content.normalized_text();
    let keywords = CONFIDENCE_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(&[] as &[&str], |(_, keywords)| *keywords);
    let matches = keywords
        .iter()
        .filter(|keyword| text.contains(**keyword))
        .count();

    match matches {
        0 => 0.4,
        1 => 0.6,
        2 => 0.75,
        _ => 0.9,
    }
}

/// Suggests work subcategories for a message, capped at three.
#[must_use]
pub fn work_subcategories(content: &MessageContent) -> Vec<String> {
    let text = content.normalized_text();
    WORK_SUBCATEGORIES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(*keyword)))
        .map(|(name, _)| (*name).to_string())
        .take(MAX_SUBCATEGORIES)
        .collect()
}

/// Categorizes a message into its primary category with a confidence tier.
#[must_use]
pub fn categorize(content: &MessageContent, custom_categories: &[String]) -> Categorization {
    let category = primary_category(content, custom_categories);
    let confidence = category_confidence(content, &category);
    let subcategories = (category == "work").then(|| work_subcategories(content));
    Categorization {
        category,
        confidence,
        subcategories,
    }
}
