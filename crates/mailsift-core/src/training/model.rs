//! Training data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::MessageContent;

/// One user correction: a message snapshot and the folder it belongs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Snapshot of the corrected message, immutable once stored.
    pub content: MessageContent,
    /// Folder the user filed the message under.
    pub folder: String,
    /// When the correction was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl TrainingRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(content: MessageContent, folder: impl Into<String>) -> Self {
        Self {
            content,
            folder: folder.into(),
            recorded_at: Utc::now(),
        }
    }
}
