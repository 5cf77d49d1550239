//! Classification rules.
//!
//! This module provides:
//! - **`FolderRule`**: one folder's matching signature (keywords, senders,
//!   domains, priority)
//! - **`RuleStore`**: the active rule set, with case-insensitive lookup and
//!   full-replacement initialization
//! - **Rule derivation**: new rules synthesized from accumulated training
//!   records once a folder has enough examples
//!
//! # Example
//!
//! ```
//! use mailsift_core::rules::RuleStore;
//!
//! let store = RuleStore::with_defaults();
//!
//! // Lookup is case-insensitive.
//! let rule = store.find("finanzen").unwrap();
//! assert_eq!(rule.folder_name, "Finanzen");
//! ```

mod defaults;
mod model;
mod store;

pub use defaults::default_rules;
pub use model::FolderRule;
pub use store::RuleStore;
