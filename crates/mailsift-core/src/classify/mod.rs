//! Folder classification: scoring, ranking, and the feedback loop.
//!
//! This module provides:
//! - **Scoring**: [`score_folder`] rates one candidate folder against a
//!   message using the active rules
//! - **Classification**: [`FolderClassifier`] ranks every candidate,
//!   applies a training boost from stored corrections, and returns the top
//!   suggestion plus up to two alternatives
//! - **Learning**: [`FolderClassifier::record_feedback`] stores a user
//!   correction and re-derives rules from the accumulated training data
//!
//! # Example
//!
//! ```
//! use mailsift_core::{FolderClassifier, MessageContent};
//!
//! let classifier = FolderClassifier::new();
//! let message = MessageContent::new(
//!     "Ihre Rechnung",
//!     "Die Zahlung ist fällig.",
//!     "billing@amazon.de",
//! );
//! let folders = vec!["Finanzen".to_string(), "Arbeit".to_string()];
//!
//! let result = classifier.classify(&message, &folders)?;
//! assert_eq!(result.suggested_folder, "Finanzen");
//! # Ok::<(), mailsift_core::Error>(())
//! ```

mod classifier;
mod model;
mod scorer;

pub use classifier::FolderClassifier;
pub use model::{Alternative, Classification, FeedbackReceipt, FolderScore};
pub use scorer::score_folder;
