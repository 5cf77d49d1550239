//! Classification result models.

use serde::Serialize;

/// Score assigned to one candidate folder.
///
/// Ephemeral; produced fresh for every classification call. When a
/// candidate has no strong signal, the entry names the `"Inbox"` fallback
/// instead of the candidate itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderScore {
    /// Folder this entry suggests.
    pub folder: String,
    /// Raw score in `0..=100`.
    pub score: u32,
    /// Which signals fired, for display.
    pub reason: String,
}

/// A ranked folder suggestion for one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Best-scoring folder.
    pub suggested_folder: String,
    /// Raw score normalized to `0.0..=1.0`. Not a calibrated probability;
    /// the host compares it against its own move threshold.
    pub confidence: f32,
    /// Human-readable justification for the suggestion.
    pub reason: String,
    /// Up to two runner-up folders.
    pub alternatives: Vec<Alternative>,
}

/// A runner-up folder in a classification result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    /// Candidate folder name.
    pub folder: String,
    /// Raw score normalized to `0.0..=1.0`.
    pub confidence: f32,
}

/// Acknowledgement returned after recording user feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackReceipt {
    /// Always `true`; storage failures are the host persistence
    /// collaborator's concern, not this core's.
    pub success: bool,
    /// Whether the correction was added or replaced an earlier one.
    pub message: String,
}
