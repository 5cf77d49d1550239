//! Folder classification orchestration.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use super::model::{Alternative, Classification, FeedbackReceipt, FolderScore};
use super::scorer::{MAX_SCORE, score_folder};
use crate::error::{Error, Result};
use crate::message::MessageContent;
use crate::rules::{FolderRule, RuleStore};
use crate::training::{TrainingRecord, TrainingStore};

/// Score added to a candidate confirmed by stored training data.
const TRAINING_BOOST: u32 = 30;
/// Runner-up folders reported alongside the suggestion.
const MAX_ALTERNATIVES: usize = 2;

/// Classifies messages into folders and learns from user corrections.
///
/// Owns the rule and training stores; each sits behind its own lock so
/// concurrent `classify` calls share read access while `record_feedback`
/// takes brief exclusive writes. Locks are held only for the in-memory
/// operation, never across I/O (there is none), and `classify` never
/// holds both at once.
#[derive(Debug)]
pub struct FolderClassifier {
    rules: RwLock<RuleStore>,
    training: RwLock<TrainingStore>,
}

impl FolderClassifier {
    /// Creates a classifier with the bootstrap rule set and no training
    /// data.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stores(RuleStore::with_defaults(), TrainingStore::new())
    }

    /// Creates a classifier over host-supplied stores, e.g. rules loaded
    /// from configuration and training data restored by a persistence
    /// collaborator.
    #[must_use]
    pub fn with_stores(rules: RuleStore, training: TrainingStore) -> Self {
        Self {
            rules: RwLock::new(rules),
            training: RwLock::new(training),
        }
    }

    /// Suggests a folder for a message from the candidate list.
    ///
    /// Scores every candidate, ranks them (stable, so ties keep candidate
    /// order), boosts the folder a stored correction points at, re-ranks,
    /// and returns the top entry plus up to two alternatives. Read-only:
    /// calling this never changes stored state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFolders`] if `folders` is empty.
    pub fn classify(
        &self,
        content: &MessageContent,
        folders: &[String],
    ) -> Result<Classification> {
        if folders.is_empty() {
            return Err(Error::NoFolders);
        }

        let rules = self.rules.read().unwrap_or_else(PoisonError::into_inner);
        let mut scores: Vec<FolderScore> = folders
            .iter()
            .map(|folder| score_folder(&rules, folder, content))
            .collect();
        drop(rules);
        scores.sort_by(|a, b| b.score.cmp(&a.score));

        let training = self.training.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(record) = training.find_similar(content) {
            // The boost targets the entry by its result folder name, so a
            // candidate that collapsed to the Inbox fallback is no longer
            // addressable under its own name.
            if folders.contains(&record.folder) {
                if let Some(entry) = scores.iter_mut().find(|s| s.folder == record.folder) {
                    entry.score = (entry.score + TRAINING_BOOST).min(MAX_SCORE);
                    scores.sort_by(|a, b| b.score.cmp(&a.score));
                }
            }
        }
        drop(training);

        let alternatives: Vec<Alternative> = scores
            .iter()
            .skip(1)
            .take(MAX_ALTERNATIVES)
            .map(|s| Alternative {
                folder: s.folder.clone(),
                confidence: confidence(s.score),
            })
            .collect();
        let best = scores.swap_remove(0);
        debug!("Classified message as {} ({}%)", best.folder, best.score);

        Ok(Classification {
            suggested_folder: best.folder,
            confidence: confidence(best.score),
            reason: best.reason,
            alternatives,
        })
    }

    /// Records a user correction and re-derives rules from the accumulated
    /// training data.
    ///
    /// The correction is upserted by `(from, subject)`; recording the same
    /// message twice replaces the earlier entry. Always succeeds: storage
    /// durability is the host's concern.
    pub fn record_feedback(
        &self,
        content: &MessageContent,
        correct_folder: &str,
    ) -> FeedbackReceipt {
        let mut training = self.training.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = training.add(content.clone(), correct_folder);

        let grouped = training.group_by_folder();
        let mut rules = self.rules.write().unwrap_or_else(PoisonError::into_inner);
        rules.derive_from(&grouped);

        FeedbackReceipt {
            success: true,
            message: if replaced {
                "Training data updated"
            } else {
                "Training data added"
            }
            .to_string(),
        }
    }

    /// Bulk-imports training records and re-derives rules.
    pub fn import_training(&self, records: Vec<TrainingRecord>) {
        let mut training = self.training.write().unwrap_or_else(PoisonError::into_inner);
        training.import(records);

        let grouped = training.group_by_folder();
        let mut rules = self.rules.write().unwrap_or_else(PoisonError::into_inner);
        rules.derive_from(&grouped);
    }

    /// Replaces the active rule set (full swap, no merge).
    pub fn replace_rules(&self, rules: Vec<FolderRule>) {
        self.rules
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(rules);
    }

    /// A snapshot of the active rule set, for export or debugging.
    #[must_use]
    pub fn rules(&self) -> Vec<FolderRule> {
        self.rules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rules()
            .to_vec()
    }

    /// A snapshot of the stored training records, for export or debugging.
    #[must_use]
    pub fn training_records(&self) -> Vec<TrainingRecord> {
        self.training
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records()
            .to_vec()
    }
}

impl Default for FolderClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::cast_precision_loss)]
fn confidence(score: u32) -> f32 {
    score as f32 / MAX_SCORE as f32
}
