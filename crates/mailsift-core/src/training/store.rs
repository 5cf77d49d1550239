//! In-memory store for user corrections.

use tracing::debug;

use super::model::TrainingRecord;
use crate::message::MessageContent;

/// Subject tokens this short or shorter are ignored during similarity
/// matching.
const MIN_TOKEN_CHARS: usize = 3;
/// Shared subject tokens required for a similarity match.
const MIN_SHARED_TOKENS: usize = 2;

/// Accumulates user corrections and answers similarity queries against
/// them.
///
/// At most one record is kept per exact `(from, subject)` pair; a new
/// correction for the same pair replaces the old one. Records live for the
/// process lifetime; durable storage is the host's concern.
#[derive(Debug, Default)]
pub struct TrainingStore {
    records: Vec<TrainingRecord>,
}

impl TrainingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Records a correction, keyed by the exact `(from, subject)` pair.
    ///
    /// Returns `true` when an existing record was replaced.
    pub fn add(&mut self, content: MessageContent, folder: impl Into<String>) -> bool {
        let record = TrainingRecord::new(content, folder);
        let folder = record.folder.clone();
        let replaced = self.upsert(record);
        if replaced {
            debug!("Updated training record for folder {folder}");
        } else {
            debug!("Added training record for folder {folder}");
        }
        replaced
    }

    /// Finds the stored correction most relevant to `content`.
    ///
    /// Tries an exact sender match (case-insensitive) first, then falls
    /// back to subject-word overlap: whitespace tokens longer than three
    /// characters, lower-cased, with at least two of the query's tokens
    /// (counted with multiplicity) present in a stored record's subject.
    /// Both passes scan in insertion order and the first hit wins.
    #[must_use]
    pub fn find_similar(&self, content: &MessageContent) -> Option<&TrainingRecord> {
        let sender = content.from.to_lowercase();
        if let Some(record) = self
            .records
            .iter()
            .find(|r| r.content.from.to_lowercase() == sender)
        {
            return Some(record);
        }

        let tokens = subject_tokens(&content.subject);
        self.records.iter().find(|r| {
            let stored = subject_tokens(&r.content.subject);
            tokens.iter().filter(|t| stored.contains(*t)).count() >= MIN_SHARED_TOKENS
        })
    }

    /// All stored records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Groups stored records by their corrected folder.
    ///
    /// Groups appear in first-seen folder order so downstream rule
    /// derivation is deterministic.
    #[must_use]
    pub fn group_by_folder(&self) -> Vec<(String, Vec<&TrainingRecord>)> {
        let mut groups: Vec<(String, Vec<&TrainingRecord>)> = Vec::new();
        for record in &self.records {
            match groups.iter_mut().find(|(folder, _)| *folder == record.folder) {
                Some((_, records)) => records.push(record),
                None => groups.push((record.folder.clone(), vec![record])),
            }
        }
        groups
    }

    /// Bulk-imports records, e.g. training data exported by another
    /// instance.
    ///
    /// Each record goes through the same upsert path as [`add`](Self::add),
    /// keeping its original timestamp; the `(from, subject)` uniqueness
    /// invariant holds afterwards.
    pub fn import(&mut self, records: Vec<TrainingRecord>) {
        let count = records.len();
        for record in records {
            self.upsert(record);
        }
        debug!("Imported {count} training records");
    }

    /// Record counts per folder.
    #[must_use]
    pub fn stats(&self) -> TrainingStats {
        let mut folder_counts: Vec<(String, usize)> = Vec::new();
        for record in &self.records {
            match folder_counts
                .iter_mut()
                .find(|(folder, _)| *folder == record.folder)
            {
                Some((_, count)) => *count += 1,
                None => folder_counts.push((record.folder.clone(), 1)),
            }
        }
        TrainingStats {
            total_records: self.records.len(),
            folder_counts,
        }
    }

    fn upsert(&mut self, record: TrainingRecord) -> bool {
        if let Some(existing) = self.records.iter_mut().find(|r| {
            r.content.from == record.content.from && r.content.subject == record.content.subject
        }) {
            *existing = record;
            true
        } else {
            self.records.push(record);
            false
        }
    }
}

/// Statistics about stored training data.
#[derive(Debug, Clone, Default)]
pub struct TrainingStats {
    /// Total number of stored corrections.
    pub total_records: usize,
    /// Correction counts per folder, in first-seen order.
    pub folder_counts: Vec<(String, usize)>,
}

fn subject_tokens(subject: &str) -> Vec<String> {
    subject
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn content(subject: &str, from: &str) -> MessageContent {
        MessageContent::new(subject, "body text", from)
    }

    #[test]
    fn test_add_then_replace_same_key() {
        let mut store = TrainingStore::new();

        assert!(!store.add(content("Invoice 42", "billing@shop.de"), "Finanzen"));
        assert!(store.add(content("Invoice 42", "billing@shop.de"), "Arbeit"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].folder, "Arbeit");
    }

    #[test]
    fn test_upsert_key_is_case_sensitive() {
        let mut store = TrainingStore::new();
        store.add(content("Invoice", "billing@shop.de"), "Finanzen");
        store.add(content("Invoice", "Billing@shop.de"), "Finanzen");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_similar_prefers_exact_sender() {
        let mut store = TrainingStore::new();
        store.add(content("Totally different words", "known@corp.com"), "Arbeit");

        let hit = store
            .find_similar(&content("Unrelated subject", "KNOWN@corp.com"))
            .unwrap();
        assert_eq!(hit.folder, "Arbeit");
    }

    #[test]
    fn test_find_similar_subject_overlap_needs_two_tokens() {
        let mut store = TrainingStore::new();
        store.add(content("Quarterly budget review", "a@one.com"), "Finanzen");

        assert!(store
            .find_similar(&content("Annual budget meeting", "b@two.com"))
            .is_none());
        let hit = store
            .find_similar(&content("Next budget review", "b@two.com"))
            .unwrap();
        assert_eq!(hit.folder, "Finanzen");
    }

    #[test]
    fn test_find_similar_skips_short_tokens() {
        let mut store = TrainingStore::new();
        store.add(content("Re: the big day", "a@one.com"), "Privat");

        // "the" and "day" are too short to count as shared tokens.
        assert!(store
            .find_similar(&content("On the day", "b@two.com"))
            .is_none());
    }

    #[test]
    fn test_find_similar_first_match_wins() {
        let mut store = TrainingStore::new();
        store.add(content("Project milestone update", "a@one.com"), "Projects");
        store.add(content("Project milestone recap", "b@two.com"), "Archive");

        let hit = store
            .find_similar(&content("Project milestone notes", "c@three.com"))
            .unwrap();
        assert_eq!(hit.folder, "Projects");
    }

    #[test]
    fn test_group_by_folder_first_seen_order() {
        let mut store = TrainingStore::new();
        store.add(content("a", "a@x.com"), "Work");
        store.add(content("b", "b@x.com"), "Private");
        store.add(content("c", "c@x.com"), "Work");

        let groups = store.group_by_folder();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Work");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Private");
    }

    #[test]
    fn test_import_upserts_and_keeps_timestamps() {
        let mut store = TrainingStore::new();
        store.add(content("Invoice", "billing@shop.de"), "Inbox");

        let imported = TrainingRecord::new(content("Invoice", "billing@shop.de"), "Finanzen");
        let stamp = imported.recorded_at;
        store.import(vec![
            imported,
            TrainingRecord::new(content("Other", "x@y.com"), "Privat"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].folder, "Finanzen");
        assert_eq!(store.records()[0].recorded_at, stamp);
    }

    #[test]
    fn test_stats_counts_per_folder() {
        let mut store = TrainingStore::new();
        store.add(content("a", "a@x.com"), "Work");
        store.add(content("b", "b@x.com"), "Work");
        store.add(content("c", "c@x.com"), "Privat");

        let stats = store.stats();
        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.folder_counts, vec![("Work".to_string(), 2), ("Privat".to_string(), 1)]);
    }
}
