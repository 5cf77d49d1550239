//! Active rule set and rule derivation from training data.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::defaults::default_rules;
use super::model::FolderRule;
use crate::Result;
use crate::training::TrainingRecord;

/// Minimum number of training records a folder needs before a rule is
/// derived for it.
const DERIVE_MIN_RECORDS: usize = 3;
/// Fraction of a folder's records a keyword must appear in.
const KEYWORD_RECORD_FRACTION: f64 = 0.3;
/// Fraction of a folder's records a sender domain must appear in.
const DOMAIN_RECORD_FRACTION: f64 = 0.2;
/// Keywords kept per derived rule.
const MAX_DERIVED_KEYWORDS: usize = 10;
/// Terms this short or shorter are skipped during keyword derivation.
const MIN_KEYWORD_CHARS: usize = 4;
/// Priority assigned to derived rules.
const DERIVED_PRIORITY: u8 = 75;

/// Owns the active set of classification rules.
///
/// At most one rule is active per folder name (case-insensitive); later
/// duplicates on any ingestion path are dropped with a warning. Replacing
/// the rule set is a full swap, never a merge.
#[derive(Debug)]
pub struct RuleStore {
    rules: Vec<FolderRule>,
}

impl RuleStore {
    /// Creates a store holding the given rules.
    ///
    /// Rules are normalized on the way in; duplicates of an earlier folder
    /// name are dropped.
    #[must_use]
    pub fn new(rules: Vec<FolderRule>) -> Self {
        let mut store = Self { rules: Vec::new() };
        store.replace(rules);
        store
    }

    /// Creates a store holding the bootstrap rule set.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_rules())
    }

    /// Parses a rule set from a JSON array of rules.
    ///
    /// This is the configuration seam for host-supplied rule sets; absent
    /// one, [`with_defaults`](Self::with_defaults) applies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RuleParse`](crate::Error::RuleParse) if the JSON is
    /// malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<FolderRule> = serde_json::from_str(json)?;
        Ok(Self::new(rules))
    }

    /// Replaces the active rule set with `rules` (full swap, no merge).
    pub fn replace(&mut self, rules: Vec<FolderRule>) {
        self.rules.clear();
        for rule in rules {
            self.insert(rule);
        }
        debug!("Initialized {} folder rules", self.rules.len());
    }

    /// Finds the rule for `folder_name`, matching case-insensitively.
    #[must_use]
    pub fn find(&self, folder_name: &str) -> Option<&FolderRule> {
        self.rules.iter().find(|r| r.matches_folder(folder_name))
    }

    /// The active rules, in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[FolderRule] {
        &self.rules
    }

    /// Number of active rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Derives new rules from training records grouped by folder.
    ///
    /// Every group with at least three records and no existing rule gets a
    /// synthesized rule: the terms and sender domains
    /// recurring across its records, at the fixed derived priority.
    /// Existing rules are never overwritten; groups that yield neither
    /// keywords nor domains are skipped. Empty input is a no-op.
    pub fn derive_from(&mut self, grouped: &[(String, Vec<&TrainingRecord>)]) {
        for (folder, records) in grouped {
            if records.len() < DERIVE_MIN_RECORDS || self.find(folder).is_some() {
                continue;
            }

            let keywords = common_keywords(records);
            let domains = common_domains(records);
            if keywords.is_empty() && domains.is_empty() {
                continue;
            }

            debug!(
                "Derived rule for folder {folder} ({} keywords, {} domains)",
                keywords.len(),
                domains.len()
            );
            self.insert(FolderRule {
                folder_name: folder.clone(),
                keywords,
                senders: Vec::new(),
                domains,
                priority: DERIVED_PRIORITY,
            });
        }
    }

    fn insert(&mut self, rule: FolderRule) {
        if self.find(&rule.folder_name).is_some() {
            warn!("Duplicate rule for folder {} dropped", rule.folder_name);
            return;
        }
        self.rules.push(rule.normalized());
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Terms recurring across a folder's training records.
///
/// A term counts once per record it appears in; terms present in at least
/// `ceil(0.3 × records)` records survive, in first-seen order, capped at
/// ten.
fn common_keywords(records: &[&TrainingRecord]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        let text = record.content.normalized_text();
        let mut seen: HashSet<&str> = HashSet::new();
        for word in text.split_whitespace() {
            if word.chars().count() <= MIN_KEYWORD_CHARS || !seen.insert(word) {
                continue;
            }
            if !counts.contains_key(word) {
                order.push(word.to_string());
            }
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let threshold = record_threshold(records.len(), KEYWORD_RECORD_FRACTION);
    order
        .into_iter()
        .filter(|word| counts.get(word).is_some_and(|count| *count >= threshold))
        .take(MAX_DERIVED_KEYWORDS)
        .collect()
}

/// Sender domains recurring across a folder's training records, in
/// first-seen order, present in at least `ceil(0.2 × records)` records.
fn common_domains(records: &[&TrainingRecord]) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        let domain = record.content.sender_domain();
        if domain.is_empty() {
            continue;
        }
        if !counts.contains_key(&domain) {
            order.push(domain.clone());
        }
        *counts.entry(domain).or_insert(0) += 1;
    }

    let threshold = record_threshold(records.len(), DOMAIN_RECORD_FRACTION);
    order
        .into_iter()
        .filter(|domain| counts.get(domain).is_some_and(|count| *count >= threshold))
        .collect()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn record_threshold(record_count: usize, fraction: f64) -> usize {
    (record_count as f64 * fraction).ceil() as usize
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::MessageContent;

    fn record(subject: &str, body: &str, from: &str, folder: &str) -> TrainingRecord {
        TrainingRecord::new(MessageContent::new(subject, body, from), folder)
    }

    fn grouped(records: &[TrainingRecord]) -> Vec<(String, Vec<&TrainingRecord>)> {
        let mut groups: Vec<(String, Vec<&TrainingRecord>)> = Vec::new();
        for r in records {
            match groups.iter_mut().find(|(folder, _)| *folder == r.folder) {
                Some((_, rs)) => rs.push(r),
                None => groups.push((r.folder.clone(), vec![r])),
            }
        }
        groups
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let store = RuleStore::with_defaults();
        assert!(store.find("finanzen").is_some());
        assert!(store.find("FINANZEN").is_some());
        assert!(store.find("Unknown").is_none());
    }

    #[test]
    fn test_replace_is_a_full_swap() {
        let mut store = RuleStore::with_defaults();
        store.replace(vec![FolderRule::new("Only", &["word"], &[], &[], 50)]);
        assert_eq!(store.len(), 1);
        assert!(store.find("Finanzen").is_none());
    }

    #[test]
    fn test_duplicate_folder_names_are_dropped() {
        let store = RuleStore::new(vec![
            FolderRule::new("Work", &["meeting"], &[], &[], 80),
            FolderRule::new("work", &["other"], &[], &[], 40),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("Work").unwrap().keywords, vec!["meeting"]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"folder_name": "Quotes", "keywords": ["Angebot"], "priority": 65}]"#;
        let store = RuleStore::from_json(json).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("quotes").unwrap().keywords, vec!["angebot"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(RuleStore::from_json("not json").is_err());
    }

    #[test]
    fn test_derivation_needs_three_records() {
        let mut store = RuleStore::with_defaults();
        let records = vec![
            record("Milestone review", "First milestone delivered", "alice@initech.com", "Projects"),
            record("Milestone plan", "Next milestone scheduled", "bob@initech.com", "Projects"),
        ];
        store.derive_from(&grouped(&records));
        assert!(store.find("Projects").is_none());
    }

    #[test]
    fn test_derivation_creates_rule_at_three_records() {
        let mut store = RuleStore::with_defaults();
        let records = vec![
            record("Milestone review", "First milestone delivered", "alice@initech.com", "Projects"),
            record("Milestone plan", "Next milestone scheduled", "bob@initech.com", "Projects"),
            record("Milestone budget", "Budget for the milestone", "carol@initech.com", "Projects"),
        ];
        store.derive_from(&grouped(&records));

        let rule = store.find("Projects").unwrap();
        assert_eq!(rule.priority, 75);
        assert!(rule.keywords.contains(&"milestone".to_string()));
        assert_eq!(rule.domains, vec!["initech.com"]);
        assert!(rule.senders.is_empty());
    }

    #[test]
    fn test_derivation_never_overwrites_existing_rules() {
        let mut store = RuleStore::with_defaults();
        let before = store.find("Finanzen").unwrap().clone();
        let records = vec![
            record("Rechnung eins", "Betrag offen", "a@x.de", "Finanzen"),
            record("Rechnung zwei", "Betrag offen", "b@x.de", "Finanzen"),
            record("Rechnung drei", "Betrag offen", "c@x.de", "Finanzen"),
        ];
        store.derive_from(&grouped(&records));
        assert_eq!(store.find("Finanzen").unwrap(), &before);
    }

    #[test]
    fn test_derived_keywords_respect_record_threshold() {
        // Ten records; "recurring" appears in all of them, the per-record
        // filler words only once each. Threshold is ceil(0.3 * 10) = 3.
        let records: Vec<TrainingRecord> = (0..10)
            .map(|i| {
                record(
                    &format!("recurring filler{i:02}"),
                    &format!("unique{i:02}word here"),
                    &format!("user{i}@each.org"),
                    "Archive",
                )
            })
            .collect();
        let mut store = RuleStore::new(Vec::new());
        store.derive_from(&grouped(&records));

        let rule = store.find("Archive").unwrap();
        assert_eq!(rule.keywords, vec!["recurring"]);
        assert_eq!(rule.domains, vec!["each.org"]);
    }

    #[test]
    fn test_derived_keywords_count_once_per_record() {
        // "budget" repeats three times inside one record and nowhere else;
        // with four records the threshold is ceil(0.3 * 4) = 2, so it must
        // not qualify off in-record repetition alone.
        let records = vec![
            record("Plan", "budget budget budget extra", "a@team.io", "Planning"),
            record("Plan", "other other things", "b@team.io", "Planning"),
            record("Plan", "wholly unrelated", "c@team.io", "Planning"),
            record("Plan", "final words here", "d@team.io", "Planning"),
        ];
        let mut store = RuleStore::new(Vec::new());
        store.derive_from(&grouped(&records));

        let rule = store.find("Planning").unwrap();
        assert!(!rule.keywords.contains(&"budget".to_string()));
        assert_eq!(rule.domains, vec!["team.io"]);
    }

    #[test]
    fn test_derived_keywords_are_capped_at_ten() {
        let body = "alpha1 bravo2 charlie3 delta4 echo5 foxtrot6 golf7 hotel8 india9 juliet10 kilo11 lima12";
        let records = vec![
            record("Re", body, "a@box.net", "Archive"),
            record("Re", body, "b@box.net", "Archive"),
            record("Re", body, "c@box.net", "Archive"),
        ];
        let mut store = RuleStore::new(Vec::new());
        store.derive_from(&grouped(&records));

        let rule = store.find("Archive").unwrap();
        assert_eq!(rule.keywords.len(), 10);
        assert_eq!(rule.keywords[0], "alpha1");
        assert!(!rule.keywords.contains(&"kilo11".to_string()));
    }

    #[test]
    fn test_empty_grouping_is_a_noop() {
        let mut store = RuleStore::with_defaults();
        let before = store.len();
        store.derive_from(&[]);
        assert_eq!(store.len(), before);
    }
}
