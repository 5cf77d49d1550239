//! # mailsift-core
//!
//! Folder classification engine for the `MailSift` email client.
//!
//! The host hands this crate a message (`subject`, `body`, `from`) plus the
//! candidate folder list and gets back a ranked folder suggestion with a
//! confidence score and a human-readable reason. Explicit user corrections
//! feed an in-memory training store that boosts future classifications and,
//! once a folder has accumulated enough examples, derives a brand-new
//! classification rule for it.
//!
//! This crate provides:
//! - **Folder classification**: multi-signal scoring (keywords, known
//!   senders, known domains, rule priority) with an Inbox fallback
//! - **Learning from corrections**: training boost and rule derivation
//! - **Rule management**: bootstrap defaults, host-supplied rule sets,
//!   JSON loading
//! - **Message analysis**: rule-based sentiment, categories, entities,
//!   summaries, and key points
//!
//! Everything is synchronous and in-memory; persistence and transport are
//! the host's concern. The exported stores serialize with `serde` so a
//! persistence collaborator can save and restore them.
//!
//! ## Quick Start
//!
//! ```
//! use mailsift_core::{FolderClassifier, MessageContent};
//!
//! let classifier = FolderClassifier::new();
//!
//! let message = MessageContent::new(
//!     "Ihre Rechnung",
//!     "Die Zahlung ist fällig.",
//!     "billing@amazon.de",
//! );
//! let folders = vec!["Finanzen".to_string(), "Arbeit".to_string()];
//!
//! let result = classifier.classify(&message, &folders)?;
//! assert_eq!(result.suggested_folder, "Finanzen");
//!
//! // The user disagrees; the correction sharpens future suggestions.
//! classifier.record_feedback(&message, "Arbeit");
//! # Ok::<(), mailsift_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod classify;
mod error;
pub mod message;
pub mod rules;
pub mod training;

pub use analysis::{
    AnalysisOptions, Categorization, Entity, EntityKind, MessageAnalysis, Sentiment,
    SentimentAnalysis, analyze,
};
pub use classify::{
    Alternative, Classification, FeedbackReceipt, FolderClassifier, FolderScore, score_folder,
};
pub use error::{Error, Result};
pub use message::MessageContent;
pub use rules::{FolderRule, RuleStore, default_rules};
pub use training::{TrainingRecord, TrainingStats, TrainingStore};
