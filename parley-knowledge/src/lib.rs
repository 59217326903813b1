//! Knowledge base for parley: flat-file loading, append and question matching.

pub mod defaults;
pub mod errors;
pub mod matcher;
pub mod models;
pub mod parser;
pub mod store;

pub use parley_core::config::{KnowledgeFormat, KnowledgeSettings, MatchOptions};

pub use errors::{KnowledgeError, KnowledgeResult};
pub use matcher::{MatchKind, MatchOutcome, best_match, find_answer};
pub use models::{ContentKind, KnowledgeStats, QaPair};
pub use store::{KnowledgeBase, KnowledgeOrigin};
