//! Message content model for classification and analysis.

mod model;

pub use model::MessageContent;
