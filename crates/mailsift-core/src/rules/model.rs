//! Classification rule model.

use serde::{Deserialize, Serialize};

/// Upper bound for rule priorities.
const MAX_PRIORITY: u8 = 100;

/// One folder's classification signature.
///
/// Keywords, senders, and domains are stored lower-cased and matched as
/// substrings against the message text, sender address, and sender domain
/// respectively. `priority` is a bounded tie-break weight that feeds a
/// small fixed contribution into the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRule {
    /// Folder this rule classifies into (matched case-insensitively).
    pub folder_name: String,
    /// Lower-cased terms looked up in the message text.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Lower-cased sender-address fragments for this folder.
    #[serde(default)]
    pub senders: Vec<String>,
    /// Lower-cased sender-domain fragments for this folder.
    #[serde(default)]
    pub domains: Vec<String>,
    /// Tie-break weight in `0..=100`.
    pub priority: u8,
}

impl FolderRule {
    /// Creates a rule, lower-casing all match terms and clamping the
    /// priority.
    #[must_use]
    pub fn new(
        folder_name: impl Into<String>,
        keywords: &[&str],
        senders: &[&str],
        domains: &[&str],
        priority: u8,
    ) -> Self {
        Self {
            folder_name: folder_name.into(),
            keywords: keywords.iter().map(|s| (*s).to_string()).collect(),
            senders: senders.iter().map(|s| (*s).to_string()).collect(),
            domains: domains.iter().map(|s| (*s).to_string()).collect(),
            priority,
        }
        .normalized()
    }

    /// Returns the rule with all match terms lower-cased and the priority
    /// clamped to `0..=100`.
    ///
    /// Applied on every ingestion path so deserialized rules uphold the
    /// same invariants as constructed ones.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for term in self
            .keywords
            .iter_mut()
            .chain(&mut self.senders)
            .chain(&mut self.domains)
        {
            *term = term.to_lowercase();
        }
        self.priority = self.priority.min(MAX_PRIORITY);
        self
    }

    /// Whether this rule applies to `folder_name` (case-insensitive).
    #[must_use]
    pub fn matches_folder(&self, folder_name: &str) -> bool {
        self.folder_name.to_lowercase() == folder_name.to_lowercase()
    }
}
