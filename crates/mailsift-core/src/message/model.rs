//! Classifiable message content.

use serde::{Deserialize, Serialize};

/// The subject, body, and sender address of a message to classify.
///
/// Fields the host cannot supply should be passed as empty strings; every
/// operation over this type is total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent {
    /// Message subject line.
    pub subject: String,
    /// Plain-text message body.
    pub body: String,
    /// Sender address, e.g. `billing@example.com`.
    pub from: String,
}

impl MessageContent {
    /// Creates message content from subject, body, and sender address.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            from: from.into(),
        }
    }

    /// Lower-cased `subject + " " + body`, the text all keyword matching
    /// runs against.
    #[must_use]
    pub fn normalized_text(&self) -> String {
        format!("{} {}", self.subject, self.body).to_lowercase()
    }

    /// Lower-cased domain part of the sender address.
    ///
    /// Takes the run of alphanumeric, `.`, `-`, and `_` characters after
    /// the first `@`, so `"Billing <billing@amazon.de>"` yields
    /// `"amazon.de"`. Returns an empty string if the address has no domain.
    #[must_use]
    pub fn sender_domain(&self) -> String {
        let Some(at) = self.from.find('@') else {
            return String::new();
        };
        self.from[at + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            .collect::<String>()
            .to_lowercase()
    }
}
