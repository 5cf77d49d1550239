//! Training data from user corrections.
//!
//! Every time a user moves a message to a different folder than suggested,
//! the host records the correction here. Stored corrections boost future
//! classifications of similar messages and, once a folder has accumulated
//! enough examples, feed rule derivation
//! (see [`RuleStore::derive_from`](crate::rules::RuleStore::derive_from)).

mod model;
mod store;

pub use model::TrainingRecord;
pub use store::{TrainingStats, TrainingStore};
